//! Ray queries against the scene graph

use atrium_math::{ray_aabb_within, Ray};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::scene::{NodeId, SceneGraph};

/// Order in which intersections are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitOrder {
    /// Depth-first scene order; the first tagged hit wins even when an
    /// untagged or later node is nearer
    #[default]
    Traversal,
    /// Ascending distance, ties kept in traversal order
    Nearest,
}

/// A single ray/node intersection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneHit {
    pub node: NodeId,
    /// Distance from the ray origin
    pub distance: f32,
    /// World-space hit point
    pub point: Vec3,
}

/// Casts rays through every shaped node, children included
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RayCaster {
    pub order: HitOrder,
    pub max_distance: f32,
}

impl Default for RayCaster {
    fn default() -> Self {
        Self {
            order: HitOrder::default(),
            max_distance: f32::MAX,
        }
    }
}

impl RayCaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set hit ordering
    pub fn with_order(mut self, order: HitOrder) -> Self {
        self.order = order;
        self
    }

    /// Set maximum distance
    pub fn with_max_distance(mut self, distance: f32) -> Self {
        self.max_distance = distance;
        self
    }

    /// All intersections, in this caster's order
    pub fn intersect(&self, ray: &Ray, scene: &SceneGraph) -> Vec<SceneHit> {
        let mut hits: Vec<SceneHit> = scene
            .traverse()
            .filter_map(|node| {
                let bounds = scene.world_bounds(node)?;
                let distance = ray_aabb_within(ray, &bounds, self.max_distance)?;
                Some(SceneHit {
                    node,
                    distance,
                    point: ray.at(distance),
                })
            })
            .collect();

        if self.order == HitOrder::Nearest {
            // sort_by is stable
            hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        }
        hits
    }

    /// First hit whose node carries the interactive tag
    ///
    /// Untagged nodes never occlude.
    pub fn first_interactive(&self, ray: &Ray, scene: &SceneGraph) -> Option<SceneHit> {
        self.intersect(ray, scene)
            .into_iter()
            .find(|hit| scene.get(hit.node).is_some_and(|n| n.is_interactive()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneNode;
    use approx::assert_abs_diff_eq;

    fn row_scene() -> (SceneGraph, NodeId, NodeId) {
        let mut scene = SceneGraph::new();
        let far = scene
            .add(SceneNode::cube("far", Vec3::ONE).at(Vec3::new(0.0, 0.0, -7.5)))
            .unwrap();
        let near = scene
            .add(SceneNode::cube("near", Vec3::ONE).at(Vec3::new(0.0, 0.0, -3.5)))
            .unwrap();
        (scene, far, near)
    }

    #[test]
    fn test_traversal_order_keeps_scene_order() {
        let (scene, far, near) = row_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hits = RayCaster::new().intersect(&ray, &scene);
        assert_eq!(hits.iter().map(|h| h.node).collect::<Vec<_>>(), vec![far, near]);
        assert_abs_diff_eq!(hits[0].distance, 7.0, epsilon = 1e-5);
        assert_abs_diff_eq!(hits[1].distance, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_nearest_order_sorts() {
        let (scene, far, near) = row_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hits = RayCaster::new()
            .with_order(HitOrder::Nearest)
            .intersect(&ray, &scene);
        assert_eq!(hits.iter().map(|h| h.node).collect::<Vec<_>>(), vec![near, far]);
    }

    #[test]
    fn test_max_distance_cuts_hits() {
        let (scene, _, near) = row_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

        let hits = RayCaster::new().with_max_distance(5.0).intersect(&ray, &scene);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].node, near);
    }

    #[test]
    fn test_untagged_nodes_do_not_occlude() {
        let mut scene = SceneGraph::new();
        scene
            .add(SceneNode::cube("pillar", Vec3::ONE).at(Vec3::new(0.0, 0.0, -2.0)))
            .unwrap();
        let desk = scene
            .add(
                SceneNode::cube("desk", Vec3::ONE)
                    .at(Vec3::new(0.0, 0.0, -5.0))
                    .interactive("Tasks"),
            )
            .unwrap();

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = RayCaster::new().first_interactive(&ray, &scene).unwrap();
        assert_eq!(hit.node, desk);
    }
}
