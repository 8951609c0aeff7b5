//! Free-fly camera

use glam::{Mat4, Vec3};

use crate::consts::*;
use crate::platform::MovementKeys;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Unit view direction
    pub front: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            front: Vec3::NEG_Z,
            up: Vec3::Y,
        }
    }
}

impl Camera {
    /// Unit vector to the camera's right
    pub fn right(&self) -> Vec3 {
        self.front.cross(self.up).normalize()
    }

    /// Move by one fixed step per held key. Not scaled by frame time.
    pub fn apply_movement(&mut self, keys: MovementKeys) {
        if keys.forward {
            self.position += CAMERA_SPEED * self.front;
        }
        if keys.back {
            self.position -= CAMERA_SPEED * self.front;
        }
        if keys.left {
            self.position -= self.right() * CAMERA_SPEED;
        }
        if keys.right {
            self.position += self.right() * CAMERA_SPEED;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, width: u32, height: u32) -> Mat4 {
        let aspect = width.max(1) as f32 / height.max(1) as f32;
        Mat4::perspective_rh(CAMERA_FOV_DEG.to_radians(), aspect, CAMERA_NEAR, CAMERA_FAR)
    }

    pub fn view_proj(&self, width: u32, height: u32) -> Mat4 {
        self.projection_matrix(width, height) * self.view_matrix()
    }
}
