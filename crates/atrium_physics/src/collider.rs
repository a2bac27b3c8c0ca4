//! Static collision volumes

use atrium_math::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{PhysicsError, Result};

/// World-space height the body may not sink below
///
/// Taken once from the level's bounding box minimum.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GroundLevel(pub f32);

impl GroundLevel {
    /// Lowest allowed viewpoint height for a given eye height
    #[inline]
    pub fn floor_for(&self, eye_height: f32) -> f32 {
        self.0 + eye_height
    }
}

/// Axis-aligned wall volume, static for the session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Wall {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Create from center and full size
    pub fn from_size(center: Vec3, size: Vec3) -> Self {
        Self::new(center, size * 0.5)
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half_extents(self.center, self.half_extents)
    }

    /// Four walls enclosing the 10 × 10 office floor
    pub fn office_boundary() -> Vec<Wall> {
        const THICKNESS: f32 = 0.5;
        const HEIGHT: f32 = 10.0;
        const LENGTH: f32 = 10.0;

        let along_z = Vec3::new(THICKNESS, HEIGHT, LENGTH);
        let along_x = Vec3::new(LENGTH, HEIGHT, THICKNESS);
        let y = HEIGHT / 2.0;

        vec![
            Wall::from_size(Vec3::new(-5.0, y, 0.0), along_z),
            Wall::from_size(Vec3::new(5.0, y, 0.0), along_z),
            Wall::from_size(Vec3::new(0.0, y, -5.0), along_x),
            Wall::from_size(Vec3::new(0.0, y, 5.0), along_x),
        ]
    }

    pub(crate) fn validate(&self, index: usize) -> Result<()> {
        if !self.center.is_finite() || !self.half_extents.is_finite() {
            return Err(PhysicsError::InvalidWall {
                index,
                reason: "non-finite center or extents".into(),
            });
        }
        if self.half_extents.cmplt(Vec3::ZERO).any() {
            return Err(PhysicsError::InvalidWall {
                index,
                reason: format!("negative half extents {:?}", self.half_extents),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_office_boundary_encloses_origin() {
        let walls = Wall::office_boundary();
        let probe = Aabb::from_center_size(Vec3::new(0.0, 0.6, 0.0), Vec3::new(0.5, 1.8, 0.5));
        assert!(walls.iter().all(|w| !w.aabb().intersects(&probe)));

        let west = walls[0].aabb();
        assert_eq!(west.min, Vec3::new(-5.25, 0.0, -5.0));
        assert_eq!(west.max, Vec3::new(-4.75, 10.0, 5.0));
    }

    #[test]
    fn test_negative_extents_rejected() {
        let wall = Wall::new(Vec3::ZERO, Vec3::new(1.0, -1.0, 1.0));
        assert!(matches!(
            wall.validate(3),
            Err(PhysicsError::InvalidWall { index: 3, .. })
        ));
    }
}
