use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Tracks held movement keys from winit window events
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    pressed: HashSet<Button>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from a window event; unrelated events are ignored
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(keycode) = event.physical_key {
                    if let Some(button) = Self::keycode_to_button(keycode) {
                        self.set(button, event.state);
                    }
                }
            }
            // Key releases are not delivered while unfocused
            WindowEvent::Focused(false) => self.release_all(),
            _ => {}
        }
    }

    pub fn set(&mut self, button: Button, state: ElementState) {
        match state {
            ElementState::Pressed => {
                self.pressed.insert(button);
            }
            ElementState::Released => {
                self.pressed.remove(&button);
            }
        }
    }

    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    pub fn pressed(&self) -> &HashSet<Button> {
        &self.pressed
    }

    pub fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::KeyQ => Some(Button::KeyQ),
            KeyCode::KeyE => Some(Button::KeyE),
            KeyCode::Space => Some(Button::Space),
            KeyCode::ShiftLeft | KeyCode::ShiftRight => Some(Button::Shift),
            _ => None,
        }
    }
}

impl Controller for KeyboardState {
    fn is_down(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}
