pub mod clock;
pub mod renderer;

pub use clock::*;
pub use renderer::*;
