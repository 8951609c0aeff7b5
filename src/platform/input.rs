//! Keyboard state from winit events

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Held state of the camera movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

/// Input accumulated between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub movement: MovementKeys,
    /// Set once Escape is pressed; the frame loop exits on it
    pub quit_requested: bool,
}

impl InputState {
    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            self.set_key(code, event.state == ElementState::Pressed);
        }
    }

    /// Record a key transition
    pub fn set_key(&mut self, code: KeyCode, pressed: bool) {
        match code {
            KeyCode::KeyW => self.movement.forward = pressed,
            KeyCode::KeyS => self.movement.back = pressed,
            KeyCode::KeyA => self.movement.left = pressed,
            KeyCode::KeyD => self.movement.right = pressed,
            KeyCode::Escape if pressed => self.quit_requested = true,
            _ => {}
        }
    }

    /// Release everything (window lost focus)
    pub fn clear_movement(&mut self) {
        self.movement = MovementKeys::default();
    }
}
