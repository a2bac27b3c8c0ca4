//! Ground level and spawn point from level bounds

use atrium_math::Aabb;
use atrium_physics::GroundLevel;
use glam::Vec3;

use crate::error::{LevelError, Result};

/// Half-size of the fallback floor, matching the office walls
const FLAT_HALF_SIZE: f32 = 5.0;

/// Placement data derived from a loaded level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelGeometry {
    /// Bounds after the vertical recentre
    pub bounds: Aabb,
    /// Vertical shift applied to the level model
    pub offset_y: f32,
    /// Floor height the body stands on
    pub ground: GroundLevel,
}

impl LevelGeometry {
    /// Recentre raw model bounds vertically on their own centre
    ///
    /// The model is shifted by `-center.y`, so the ground ends up at
    /// `min.y - center.y`, i.e. minus half the model height.
    pub fn from_bounds(raw: Aabb) -> Result<Self> {
        if raw.is_empty() || !raw.min.is_finite() || !raw.max.is_finite() {
            return Err(LevelError::InvalidBounds(raw));
        }
        let offset_y = -raw.center().y;
        let bounds = raw.translate(Vec3::new(0.0, offset_y, 0.0));
        Ok(Self {
            bounds,
            offset_y,
            ground: GroundLevel(bounds.min.y),
        })
    }

    /// Zero-thickness floor at y = 0, used when no level file is given
    pub fn flat() -> Self {
        let h = FLAT_HALF_SIZE;
        Self {
            bounds: Aabb::new(Vec3::new(-h, 0.0, -h), Vec3::new(h, 0.0, h)),
            offset_y: 0.0,
            ground: GroundLevel(0.0),
        }
    }

    /// Viewpoint spawn at the room centre, standing on the ground
    pub fn spawn_point(&self, eye_height: f32) -> Vec3 {
        Vec3::new(0.0, self.ground.floor_for(eye_height), 0.0)
    }
}
