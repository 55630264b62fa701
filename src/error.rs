use std::fmt;

pub type Result<T> = std::result::Result<T, SceneError>;

/// Which fixed-capacity array an index was checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Quadric,
    Light,
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Quadric => write!(f, "quadric"),
            SlotKind::Light => write!(f, "light"),
        }
    }
}

/// Errors raised by the quadric core
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Transform matrix cannot be inverted
    #[error("transform is not invertible (determinant {determinant})")]
    SingularTransform { determinant: f32 },

    /// Slot index outside the fixed scene capacity
    #[error("{kind} slot {index} is out of range (capacity {capacity})")]
    SlotOutOfRange {
        kind: SlotKind,
        index: usize,
        capacity: usize,
    },

    /// Viewport with a zero dimension
    #[error("cannot derive aspect ratio from a {width}x{height} viewport")]
    DegenerateAspect { width: u32, height: u32 },

    /// Directional light with a zero or non-finite direction
    #[error("light direction {direction:?} cannot be normalized")]
    DegenerateDirection { direction: [f32; 3] },

    /// Renderer failed to draw the packed scene
    #[error("renderer failed: {0}")]
    Render(#[from] anyhow::Error),

    /// Configuration file could not be parsed
    #[error("invalid scene configuration: {0}")]
    Config(String),

    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
