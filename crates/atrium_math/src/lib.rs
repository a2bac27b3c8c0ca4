//! # atrium_math - Picking and Collision Math
//!
//! Small geometric layer on top of `glam` shared by the physics and
//! picking crates:
//! - Axis-aligned boxes for walls, body volumes and pickable objects
//! - Rays and slab-method ray/box intersection
//! - Screen → NDC → world ray unprojection for pointer picking

pub mod bounds;
pub mod intersect;
pub mod projection;
pub mod ray;

pub use bounds::*;
pub use intersect::*;
pub use projection::*;
pub use ray::*;

pub use glam::{Mat4, Vec2, Vec3};

/// Common math constants
pub mod consts {
    pub const EPSILON: f32 = 1e-6;
    /// World up axis (Y-up, right-handed)
    pub const UP: glam::Vec3 = glam::Vec3::Y;
}

pub mod prelude {
    pub use crate::bounds::Aabb;
    pub use crate::intersect::{ray_aabb, ray_aabb_within};
    pub use crate::projection::{ndc_to_ray, screen_to_ndc, screen_to_ray};
    pub use crate::ray::Ray;
    pub use glam::{Mat4, Vec2, Vec3};
}
