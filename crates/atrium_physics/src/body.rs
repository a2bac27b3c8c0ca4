//! Kinematic body integration

use atrium_math::consts::{EPSILON, UP};
use glam::Vec3;

use crate::config::MovementConfig;
use crate::input::MoveIntent;

/// Camera-relative horizontal movement axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveBasis {
    /// Look direction flattened onto the XZ plane
    pub forward: Vec3,
    /// `forward × up`
    pub right: Vec3,
}

impl MoveBasis {
    /// Basis facing -Z, the default camera orientation
    pub const DEFAULT: Self = Self {
        forward: Vec3::NEG_Z,
        right: Vec3::X,
    };

    /// Build from a look direction. None when looking straight up or down.
    pub fn from_look(look: Vec3) -> Option<Self> {
        let flat = Vec3::new(look.x, 0.0, look.z);
        if !flat.is_finite() || flat.length_squared() < EPSILON * EPSILON {
            return None;
        }
        let forward = flat.normalize();
        let right = forward.cross(UP).normalize();
        Some(Self { forward, right })
    }
}

impl Default for MoveBasis {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Outcome of one integration step, before collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyStep {
    /// Position at the start of the frame; the rollback target
    pub previous: Vec3,
    /// Unresolved position after integration
    pub candidate: Vec3,
    /// A jump was launched this frame
    pub jumped: bool,
}

/// The player viewpoint as a point with velocity
///
/// Velocity is stored in the movement basis: `x` strafes right, `z` moves
/// forward, `y` is world-up.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Armed by ground contact, consumed by a jump
    pub can_jump: bool,
    config: MovementConfig,
    basis: MoveBasis,
}

impl KinematicBody {
    pub fn new(config: MovementConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            can_jump: false,
            config,
            basis: MoveBasis::DEFAULT,
        }
    }

    /// Place the body at rest. Only used at session start.
    pub fn spawn(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.can_jump = false;
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Basis used by the most recent step
    pub fn basis(&self) -> MoveBasis {
        self.basis
    }

    /// Horizontal speed in the movement plane
    pub fn horizontal_speed(&self) -> f32 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z).length()
    }

    /// Advance velocity and position by `dt` seconds
    ///
    /// Damping is a semi-implicit Euler step, so its strength depends on
    /// frame rate when `dt` is large; with `damping * dt > 1` the lateral
    /// velocity overshoots and flips sign.
    pub fn integrate(&mut self, dt: f32, intent: &mut MoveIntent, look: Vec3) -> BodyStep {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let cfg = &self.config;

        // Gravity
        self.velocity.y -= cfg.gravity * dt;

        // Damping
        self.velocity.x -= self.velocity.x * cfg.damping * dt;
        self.velocity.z -= self.velocity.z * cfg.damping * dt;

        // Input acceleration
        let dir = intent.direction();
        self.velocity.x += dir.x * cfg.move_speed * dt;
        self.velocity.z += dir.y * cfg.move_speed * dt;

        // Jump
        let jumped = intent.take_jump() && self.can_jump;
        if jumped {
            self.velocity.y = cfg.jump_speed;
            self.can_jump = false;
        }

        if let Some(basis) = MoveBasis::from_look(look) {
            self.basis = basis;
        }

        let previous = self.position;
        self.position += self.basis.forward * (self.velocity.z * dt);
        self.position += self.basis.right * (self.velocity.x * dt);
        self.position.y += self.velocity.y * dt;

        BodyStep {
            previous,
            candidate: self.position,
            jumped,
        }
    }
}
