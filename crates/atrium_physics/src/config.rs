//! Movement and collision configuration

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collider::Wall;
use crate::error::{PhysicsError, Result};

/// Kinematic body tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Downward acceleration (units/s²), no terminal velocity
    pub gravity: f32,

    /// Horizontal damping rate (1/s), applied as `v -= v * damping * dt`
    pub damping: f32,

    /// Input acceleration (units/s²); top speed is `move_speed / damping`
    pub move_speed: f32,

    /// Vertical launch speed of a jump (units/s)
    pub jump_speed: f32,

    /// Height of the viewpoint above the ground level
    pub eye_height: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            damping: 10.0,
            move_speed: 25.0,
            jump_speed: 5.0,
            eye_height: 0.6,
        }
    }
}

impl MovementConfig {
    /// Speed the body settles at under constant input
    pub fn equilibrium_speed(&self) -> f32 {
        if self.damping > 0.0 {
            self.move_speed / self.damping
        } else {
            f32::INFINITY
        }
    }

    /// Set gravity
    pub fn with_gravity(mut self, gravity: f32) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set damping rate
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// Reject negative or non-finite constants
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("gravity", self.gravity),
            ("damping", self.damping),
            ("move_speed", self.move_speed),
            ("jump_speed", self.jump_speed),
            ("eye_height", self.eye_height),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PhysicsError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Body volume and static walls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Full size of the box swept around the viewpoint (width, height, depth)
    pub body_size: Vec3,

    /// Static wall volumes
    pub walls: Vec<Wall>,
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self {
            body_size: Vec3::new(0.5, 1.8, 0.5),
            walls: Wall::office_boundary(),
        }
    }
}

impl CollisionConfig {
    /// Set walls
    pub fn with_walls(mut self, walls: Vec<Wall>) -> Self {
        self.walls = walls;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.body_size.is_finite() || self.body_size.cmple(Vec3::ZERO).any() {
            return Err(PhysicsError::InvalidConfig(format!(
                "body_size must be positive, got {:?}",
                self.body_size
            )));
        }
        for (index, wall) in self.walls.iter().enumerate() {
            wall.validate(index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(MovementConfig::default().validate().is_ok());
        assert!(CollisionConfig::default().validate().is_ok());
        assert_eq!(CollisionConfig::default().walls.len(), 4);
    }

    #[test]
    fn test_equilibrium_speed() {
        assert!((MovementConfig::default().equilibrium_speed() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_negative_gravity_rejected() {
        let config = MovementConfig::default().with_gravity(-1.0);
        assert!(matches!(config.validate(), Err(PhysicsError::InvalidConfig(_))));
    }

    #[test]
    fn test_flat_body_rejected() {
        let config = CollisionConfig {
            body_size: Vec3::new(0.5, 0.0, 0.5),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
