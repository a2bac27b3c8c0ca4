//! Screen-to-ray conversion for pointer picking

use glam::{Mat4, Vec2, Vec3};

use crate::ray::Ray;

/// Convert client pixel coordinates to normalized device coordinates
///
/// `(0, 0)` is the top-left corner; the result has +Y up and spans
/// `[-1, 1]` on both axes. A zero-sized viewport maps to the center.
pub fn screen_to_ndc(screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
    if screen_size.x <= 0.0 || screen_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (screen_pos.x / screen_size.x) * 2.0 - 1.0,
        -(screen_pos.y / screen_size.y) * 2.0 + 1.0,
    )
}

/// Build a world-space ray from the camera eye through an NDC coordinate
///
/// The origin is the camera position recovered from the view matrix, so
/// hit distances are measured from the eye rather than the near plane.
pub fn ndc_to_ray(ndc: Vec2, view: &Mat4, projection: &Mat4) -> Ray {
    let inv_view = view.inverse();
    let inv_view_proj = (*projection * *view).inverse();

    let eye = inv_view.transform_point3(Vec3::ZERO);
    let far = inv_view_proj.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));

    Ray::from_points(eye, far)
}

/// Convert client pixel coordinates to a world-space ray
pub fn screen_to_ray(
    screen_pos: Vec2,
    screen_size: Vec2,
    view: &Mat4,
    projection: &Mat4,
) -> Ray {
    ndc_to_ray(screen_to_ndc(screen_pos, screen_size), view, projection)
}
