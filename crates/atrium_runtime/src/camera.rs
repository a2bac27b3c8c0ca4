//! First-person camera with pointer-lock mouselook

use std::f32::consts::FRAC_PI_2;

use atrium_math::{ndc_to_ray, screen_to_ndc, Ray};
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Perspective and look settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Radians of rotation per pixel of mouse movement
    pub look_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.1,
            far: 1000.0,
            look_sensitivity: 0.002,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(format!("fov_degrees must be in (0, 180), got {}", self.fov_degrees));
        }
        if !(self.near > 0.0 && self.far > self.near && self.far.is_finite()) {
            return Err(format!("need 0 < near < far, got {} / {}", self.near, self.far));
        }
        if !self.look_sensitivity.is_finite() {
            return Err("look_sensitivity must be finite".into());
        }
        Ok(())
    }
}

/// Drawable area in client pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Width over height, 1 for a degenerate viewport
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    /// Client pixels (top-left origin) to normalized device coordinates
    pub fn to_ndc(&self, pixel: Vec2) -> Vec2 {
        screen_to_ndc(pixel, self.size())
    }
}

/// Yaw/pitch camera looking down -Z at rest
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    aspect: f32,
    config: CameraConfig,
}

impl Camera {
    pub fn new(config: CameraConfig, viewport: Viewport) -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            aspect: viewport.aspect(),
            config,
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Unit look direction
    pub fn look_direction(&self) -> Vec3 {
        self.rotation() * Vec3::NEG_Z
    }

    /// Set absolute orientation; pitch is clamped to straight up/down
    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Turn to face a world point
    pub fn look_at(&mut self, target: Vec3) {
        let d = target - self.position;
        if d.length_squared() < 1e-12 {
            return;
        }
        let yaw = (-d.x).atan2(-d.z);
        let pitch = d.y.atan2(Vec2::new(d.x, d.z).length());
        self.set_orientation(yaw, pitch);
    }

    /// Mouse movement in pixels; moving right turns right, moving down looks down
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        let s = self.config.look_sensitivity;
        self.set_orientation(self.yaw - dx * s, self.pitch - dy * s);
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation(), self.position).inverse()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.config.fov_degrees.to_radians(),
            self.aspect,
            self.config.near,
            self.config.far,
        )
    }

    /// World ray from the eye through a normalized device coordinate
    pub fn ray_through_ndc(&self, ndc: Vec2) -> Ray {
        ndc_to_ray(ndc, &self.view_matrix(), &self.projection_matrix())
    }

    /// World ray from the eye through a client pixel
    pub fn ray_through_pixel(&self, pixel: Vec2, viewport: &Viewport) -> Ray {
        self.ray_through_ndc(viewport.to_ndc(pixel))
    }
}
