//! Ground clamp and wall rollback

use atrium_math::Aabb;
use glam::Vec3;

use crate::body::KinematicBody;
use crate::collider::{GroundLevel, Wall};
use crate::config::CollisionConfig;

/// What the resolver did to a candidate position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolution {
    /// The body was clamped onto the ground this frame
    pub grounded: bool,
    /// The frame's displacement was rolled back
    pub reverted: bool,
    /// Index of the first wall that blocked the move
    pub blocking_wall: Option<usize>,
}

/// Clamps the body to the ground plane and rejects moves into walls
///
/// Wall handling is a discrete per-frame overlap test with full rollback:
/// there is no sliding along walls and no swept test, so a fast enough
/// body can tunnel through thin geometry.
#[derive(Debug, Clone)]
pub struct CollisionResolver {
    ground: GroundLevel,
    eye_height: f32,
    body_size: Vec3,
    walls: Vec<Wall>,
}

impl CollisionResolver {
    pub fn new(ground: GroundLevel, config: &CollisionConfig, eye_height: f32) -> Self {
        Self {
            ground,
            eye_height,
            body_size: config.body_size,
            walls: config.walls.clone(),
        }
    }

    pub fn ground(&self) -> GroundLevel {
        self.ground
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Lowest allowed viewpoint height
    pub fn floor_height(&self) -> f32 {
        self.ground.floor_for(self.eye_height)
    }

    /// Box occupied by the body when its viewpoint is at `position`
    pub fn body_box(&self, position: Vec3) -> Aabb {
        Aabb::from_center_size(position, self.body_size)
    }

    /// First wall overlapping the body box at `position`
    pub fn blocking_wall(&self, position: Vec3) -> Option<usize> {
        let body = self.body_box(position);
        self.walls.iter().position(|w| w.aabb().intersects(&body))
    }

    /// Correct the body's candidate position in place
    ///
    /// `previous` is the position at the start of the frame. A wall hit
    /// restores it exactly; vertical velocity and `can_jump` keep whatever
    /// the ground clamp set.
    pub fn resolve(&self, body: &mut KinematicBody, previous: Vec3) -> Resolution {
        let mut resolution = Resolution::default();

        let floor = self.floor_height();
        if body.position.y < floor {
            body.position.y = floor;
            body.velocity.y = 0.0;
            body.can_jump = true;
            resolution.grounded = true;
        }

        if let Some(index) = self.blocking_wall(body.position) {
            log::trace!("wall {} blocks move to {:?}, reverting", index, body.position);
            body.position = previous;
            resolution.reverted = true;
            resolution.blocking_wall = Some(index);
        }

        resolution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MovementConfig;

    fn resolver() -> CollisionResolver {
        CollisionResolver::new(GroundLevel(-1.0), &CollisionConfig::default(), 0.6)
    }

    #[test]
    fn test_floor_height() {
        assert!((resolver().floor_height() + 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_clamp_arms_jump() {
        let r = resolver();
        let mut body = KinematicBody::new(MovementConfig::default());
        body.position = Vec3::new(0.0, -2.0, 0.0);
        body.velocity.y = -3.0;

        let res = r.resolve(&mut body, Vec3::ZERO);
        assert!(res.grounded);
        assert!(!res.reverted);
        assert_eq!(body.position.y, r.floor_height());
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.can_jump);
    }

    #[test]
    fn test_airborne_keeps_can_jump() {
        let r = resolver();
        let mut body = KinematicBody::new(MovementConfig::default());
        body.position = Vec3::new(0.0, 3.0, 0.0);
        body.can_jump = false;

        let res = r.resolve(&mut body, Vec3::ZERO);
        assert!(!res.grounded);
        assert!(!body.can_jump);
    }

    #[test]
    fn test_wall_hit_reports_index() {
        let r = resolver();
        // East wall spans x in [4.75, 5.25]; body half-width is 0.25
        assert_eq!(r.blocking_wall(Vec3::new(4.6, 1.0, 0.0)), Some(1));
        assert_eq!(r.blocking_wall(Vec3::new(4.4, 1.0, 0.0)), None);
    }
}
