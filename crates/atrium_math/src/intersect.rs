//! Ray/box intersection

use crate::bounds::Aabb;
use crate::ray::Ray;

/// Ray-AABB intersection using the slab method
///
/// Returns the distance along the ray to the entry point, the exit point
/// when the origin is inside the box, or None on a miss.
pub fn ray_aabb(ray: &Ray, aabb: &Aabb) -> Option<f32> {
    if !ray.is_valid() || aabb.is_empty() {
        return None;
    }

    let inv_dir = ray.inverse_direction();

    let t1 = (aabb.min - ray.origin) * inv_dir;
    let t2 = (aabb.max - ray.origin) * inv_dir;

    let near = t1.min(t2);
    let far = t1.max(t2);

    let tmin = near.max_element();
    let tmax = far.min_element();

    // NaN appears when the ray lies exactly on a slab plane of a flat box
    if tmin.is_nan() || tmax.is_nan() || tmax < 0.0 || tmin > tmax {
        None
    } else {
        Some(if tmin < 0.0 { tmax } else { tmin })
    }
}

/// Ray-AABB intersection limited to `[0, max_distance]`
pub fn ray_aabb_within(ray: &Ray, aabb: &Aabb, max_distance: f32) -> Option<f32> {
    ray_aabb(ray, aabb).filter(|&t| t >= 0.0 && t <= max_distance)
}
