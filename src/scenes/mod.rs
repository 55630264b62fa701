pub mod beach;

pub use beach::{create_beach_lights, create_beach_quadrics, slot};
