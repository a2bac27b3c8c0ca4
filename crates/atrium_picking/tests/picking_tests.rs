//! Integration tests for atrium_picking
//!
//! Picker determinism, first-match hit policy and camera rays.

use approx::assert_abs_diff_eq;
use atrium_math::{screen_to_ray, Mat4, Vec2};
use atrium_picking::prelude::*;

/// Two tagged boxes on the -Z axis at distances 7 and 3, the nearer one
/// added second
fn far_first_scene() -> (SceneGraph, NodeId, NodeId) {
    let mut scene = SceneGraph::new();
    let at_seven = scene
        .add(
            SceneNode::cube("routine", Vec3::ONE)
                .at(Vec3::new(0.0, 0.0, -7.5))
                .interactive("Routine"),
        )
        .unwrap();
    let at_three = scene
        .add(
            SceneNode::cube("progress", Vec3::ONE)
                .at(Vec3::new(0.0, 0.0, -3.5))
                .interactive("Progress"),
        )
        .unwrap();
    (scene, at_seven, at_three)
}

#[test]
fn test_first_match_not_nearest() {
    let (scene, at_seven, at_three) = far_first_scene();
    let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

    let hits = RayCaster::new().intersect(&ray, &scene);
    assert_eq!(hits.len(), 2);
    assert_abs_diff_eq!(hits[0].distance, 7.0, epsilon = 1e-5);
    assert_abs_diff_eq!(hits[1].distance, 3.0, epsilon = 1e-5);

    let mut picker = PointerPicker::default();
    assert_eq!(picker.hover(&ray, &scene, &mut ()), PickTarget::Hovering(at_seven));
    assert_ne!(picker.target().node(), Some(at_three));
}

#[test]
fn test_nearest_order_picks_nearer_box() {
    let (scene, _, at_three) = far_first_scene();
    let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);

    let mut picker = PointerPicker::with_order(HitOrder::Nearest);
    assert_eq!(picker.hover(&ray, &scene, &mut ()), PickTarget::Hovering(at_three));
}

#[test]
fn test_picker_is_deterministic() {
    let (scene, at_seven, _) = far_first_scene();
    let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
    let mut picker = PointerPicker::default();
    let mut events = PickEventCollector::new();

    for _ in 0..20 {
        assert_eq!(picker.query(&ray, &scene).map(|h| h.node), Some(at_seven));
        picker.hover(&ray, &scene, &mut events);
    }
    assert_eq!(events.enters().count(), 1);

    // Off to the side: nothing interactive under the ray
    let away = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_Z);
    assert_eq!(picker.hover(&away, &scene, &mut events), PickTarget::None);
    assert_eq!(events.leaves().collect::<Vec<_>>(), vec![at_seven]);
}

#[test]
fn test_child_hit_does_not_pick_parent() {
    let mut scene = SceneGraph::new();
    let base = scene
        .add(
            SceneNode::cube("computer", Vec3::new(0.8, 0.6, 0.4))
                .at(Vec3::new(0.0, 0.0, -3.0))
                .interactive("Habits"),
        )
        .unwrap();
    // Stand hangs below the base and carries no tag
    scene
        .add_child(
            base,
            SceneNode::cube("stand", Vec3::new(0.2, 0.3, 0.2)).at(Vec3::new(0.0, -0.45, 0.0)),
        )
        .unwrap();

    let picker = PointerPicker::default();
    let through_base = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
    let through_stand = Ray::new(Vec3::new(0.0, -0.45, 0.0), Vec3::NEG_Z);

    assert_eq!(picker.query(&through_base, &scene).map(|h| h.node), Some(base));
    assert!(picker.query(&through_stand, &scene).is_none());
}

#[test]
fn test_scaled_hover_grows_bounds() {
    let mut scene = SceneGraph::new();
    let desk = scene
        .add(
            SceneNode::cube("desk", Vec3::ONE)
                .at(Vec3::new(0.0, 0.0, -4.0))
                .interactive("Tasks"),
        )
        .unwrap();
    let edge = Ray::new(Vec3::new(0.52, 0.0, 0.0), Vec3::NEG_Z);
    let picker = PointerPicker::default();

    assert!(picker.query(&edge, &scene).is_none());
    scene.get_mut(desk).unwrap().scale = 1.1;
    assert_eq!(picker.query(&edge, &scene).map(|h| h.node), Some(desk));
}

#[test]
fn test_screen_center_ray_hits_desk_ahead() {
    let (scene, at_seven, _) = far_first_scene();
    let view = Mat4::look_to_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
    let proj = Mat4::perspective_rh_gl(60f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);
    let size = Vec2::new(1280.0, 720.0);

    let ray = screen_to_ray(size * 0.5, size, &view, &proj);
    let mut events = PickEventCollector::new();
    let mut picker = PointerPicker::default();
    let section = picker.activate(&ray, &scene, &mut events);

    assert_eq!(section.as_deref(), Some("routine"));
    assert_eq!(events.activations().next(), Some((at_seven, "routine")));

    // Top-left corner looks well away from both boxes
    let corner = screen_to_ray(Vec2::ZERO, size, &view, &proj);
    assert!(picker.activate(&corner, &scene, &mut events).is_none());
}
