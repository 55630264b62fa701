use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::core::controller::{Button, Controller};
use crate::types::CameraUniform;

const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Perspective camera driven by held movement keys
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    aspect_ratio: f32,
    fov: f32,
    near: f32,
    far: f32,
    speed: f32,
    rotation_speed: f32,
}

impl Camera {
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: config.position,
            yaw: config.yaw,
            pitch: config.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            aspect_ratio: 1.0,
            fov: config.fov,
            near: config.near,
            far: config.far,
            speed: config.speed,
            rotation_speed: config.rotation_speed,
        }
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Integrate movement over `dt` seconds.
    ///
    /// Translation is linear in `dt`, so the same wall time moves the camera
    /// the same distance at any frame rate.
    pub fn update(&mut self, dt: f32, controller: &dyn Controller) {
        let fwd = controller.axis(Button::KeyW, Button::KeyS);
        let right_dir = controller.axis(Button::KeyD, Button::KeyA);
        let up_dir = controller.axis(Button::Space, Button::Shift);

        let step = self.speed * dt;
        self.position += self.forward() * fwd * step
            + self.right() * right_dir * step
            + Vec3::Y * up_dir * step;

        self.yaw -= controller.axis(Button::KeyE, Button::KeyQ) * self.rotation_speed * dt;
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Inverse of the view-projection without translation: NDC to ray direction
    pub fn ray_dir_matrix(&self) -> Mat4 {
        let rotation_only = Mat4::look_to_rh(Vec3::ZERO, self.forward(), Vec3::Y);
        (self.projection_matrix() * rotation_only).inverse()
    }

    /// World-space direction of the ray through `ndc` (x, y in [-1, 1])
    pub fn ray_direction(&self, ndc_x: f32, ndc_y: f32) -> Vec3 {
        let h = self.ray_dir_matrix() * glam::Vec4::new(ndc_x, ndc_y, 0.5, 1.0);
        (h.truncate() / h.w).normalize()
    }

    pub fn to_uniform(&self, time: f32) -> CameraUniform {
        CameraUniform {
            ray_dir_matrix: self.ray_dir_matrix().to_cols_array_2d(),
            position: self.position.to_array(),
            time,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}
