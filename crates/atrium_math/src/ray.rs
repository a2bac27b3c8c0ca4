//! 3D ray for picking

use glam::Vec3;

use crate::consts::EPSILON;

/// 3D ray for intersection testing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin point
    pub origin: Vec3,
    /// Ray direction (normalized, or zero for a degenerate ray)
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with normalized direction
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Create a ray from two points
    #[inline]
    pub fn from_points(start: Vec3, end: Vec3) -> Self {
        Self::new(start, end - start)
    }

    /// Point at distance t along the ray
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Inverse direction (1.0 / component), used by the slab test
    #[inline]
    pub fn inverse_direction(&self) -> Vec3 {
        Vec3::ONE / self.direction
    }

    /// Non-zero direction
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.direction.length_squared() > EPSILON * EPSILON
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::NEG_Z)
    }
}
