mod quadric;
mod transform;

pub use quadric::{QuadricMatrix, SINGULAR_EPSILON};
pub use transform::Transform;
