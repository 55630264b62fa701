use std::collections::HashSet;

/// Movement keys the camera responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    KeyQ,
    KeyE,
    Space,
    Shift,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::KeyW,
        Button::KeyA,
        Button::KeyS,
        Button::KeyD,
        Button::KeyQ,
        Button::KeyE,
        Button::Space,
        Button::Shift,
    ];
}

/// Input state polled once per frame
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// +1 when `positive` is held, -1 when `negative` is, 0 for neither or both
    fn axis(&self, positive: Button, negative: Button) -> f32 {
        match (self.is_down(positive), self.is_down(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

impl Controller for HashSet<Button> {
    fn is_down(&self, button: Button) -> bool {
        self.contains(&button)
    }
}

impl<const N: usize> Controller for [Button; N] {
    fn is_down(&self, button: Button) -> bool {
        self.contains(&button)
    }
}
