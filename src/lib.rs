pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod light;
pub mod math;
pub mod quadric;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod traits;
pub mod types;

pub use camera::Camera;
pub use config::SceneConfig;
pub use error::{Result, SceneError};
pub use light::Light;
pub use math::{QuadricMatrix, Transform};
pub use quadric::Quadric;
pub use scene::Scene;
