//! Session-level tests: loading, hover, click, overlays and pointer lock

use std::cell::RefCell;
use std::rc::Rc;

use approx::assert_abs_diff_eq;
use atrium_runtime::host::{HOVER_SCALE, SCREEN_GLOW_HOVER, SCREEN_GLOW_IDLE};
use atrium_runtime::prelude::*;

const DT: f32 = 1.0 / 60.0;

fn config() -> AtriumConfig {
    let mut config = AtriumConfig::default();
    config.intro.enabled = false;
    config
}

/// Session on the flat built-in level, already running
fn running_session() -> OfficeSession {
    let mut session = OfficeSession::new(config(), LevelLoader::ready(LevelGeometry::flat()));
    session.frame(DT);
    assert_eq!(session.phase(), SessionPhase::Running);
    session
}

fn computer_center(session: &OfficeSession, section: Section) -> Vec3 {
    let id = session.office().computer(section).unwrap();
    session.office().graph().world_transform(id).unwrap().0
}

fn aim_at(session: &mut OfficeSession, target: Vec3) -> Vec2 {
    session.camera_mut().look_at(target);
    session.viewport().center()
}

#[test]
fn test_spawn_on_flat_level() {
    let session = running_session();
    let pos = session.position().unwrap();
    assert_abs_diff_eq!(pos.x, 0.0);
    assert_abs_diff_eq!(pos.y, 0.6, epsilon = 1e-5);
    assert_abs_diff_eq!(pos.z, 0.0);
    assert_eq!(session.camera().position, pos);
}

#[test]
fn test_no_movement_while_loading() {
    let mut session = OfficeSession::new(config(), LevelLoader::ready(LevelGeometry::flat()));
    session.on_key_down("KeyW");
    session.on_mouse_delta(10.0, 0.0);
    assert_eq!(session.phase(), SessionPhase::Loading);
    assert!(session.position().is_none());
    assert!(session.office().computers().is_empty());

    // The first frame publishes the level before any movement runs
    let report = session.frame(DT).unwrap();
    assert_eq!(report.step.previous, Vec3::new(0.0, 0.6, 0.0));
    assert_eq!(session.office().computers().len(), 4);
}

#[test]
fn test_failed_level_leaves_session_dormant() {
    let loader = LevelLoader::spawn("/nonexistent/atrium/level.glb").unwrap();
    let mut session = OfficeSession::new(config(), loader);

    let mut waited = 0;
    while session.phase() == SessionPhase::Loading && waited < 500 {
        session.frame(DT);
        std::thread::sleep(std::time::Duration::from_millis(2));
        waited += 1;
    }
    assert_eq!(session.phase(), SessionPhase::Failed);

    session.on_key_down("KeyW");
    assert!(session.frame(DT).is_none());
    assert!(session.position().is_none());
    assert!(session.office().graph().is_empty());
}

#[test]
fn test_walk_forward_moves_along_look() {
    let mut session = running_session();
    session.on_key_down("KeyW");
    for _ in 0..30 {
        session.frame(DT);
    }
    let pos = session.position().unwrap();
    assert!(pos.z < -0.1, "expected to walk toward -z, got {:?}", pos);
    assert_abs_diff_eq!(pos.x, 0.0, epsilon = 1e-4);

    session.on_key_up("KeyW");
    assert!(!session.intent().is_moving());
}

#[test]
fn test_hover_highlights_and_resets() {
    let mut session = running_session();
    let habits = session.office().computer(Section::Habits).unwrap();
    let screen = session.office().graph().find_child(habits, "screen").unwrap();

    let target = computer_center(&session, Section::Habits);
    let center = aim_at(&mut session, target);
    session.on_pointer_move(center);

    assert_eq!(session.hover_target().node(), Some(habits));
    let node = session.office().graph().get(habits).unwrap();
    assert!(node.highlighted);
    assert_eq!(node.scale, HOVER_SCALE);
    assert_eq!(session.office().graph().get(screen).unwrap().glow, SCREEN_GLOW_HOVER);

    // Look at the empty floor ahead
    let center = aim_at(&mut session, Vec3::new(0.0, 0.0, -4.0));
    session.on_pointer_move(center);

    assert_eq!(session.hover_target(), atrium_picking::PickTarget::None);
    let node = session.office().graph().get(habits).unwrap();
    assert!(!node.highlighted);
    assert_eq!(node.scale, 1.0);
    assert_eq!(session.office().graph().get(screen).unwrap().glow, SCREEN_GLOW_IDLE);
    assert_eq!(session.office_mut().drain_cues(), vec![AudioCue::Hover]);
}

#[test]
fn test_click_opens_section() {
    let opened = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&opened);
    let mut session = OfficeSession::new(config(), LevelLoader::ready(LevelGeometry::flat()))
        .with_opener(move |id: &str| sink.borrow_mut().push(id.to_string()));
    session.frame(DT);

    let target = computer_center(&session, Section::Progress);
    let center = aim_at(&mut session, target);
    session.on_click(center);

    assert_eq!(*opened.borrow(), vec!["progress".to_string()]);
    assert_eq!(session.overlay(), &Overlay::Section("progress".into()));
    assert_eq!(session.overlay().section_info().unwrap().title, "📊 Progress Dashboard");
    assert!(!session.pointer_locked());
    assert!(session.office_mut().drain_cues().contains(&AudioCue::Click));
}

#[test]
fn test_click_on_nothing_locks_pointer() {
    let mut session = running_session();
    let center = aim_at(&mut session, Vec3::new(0.0, 5.0, -4.0));
    session.on_click(center);
    assert!(session.pointer_locked());
    assert_eq!(session.overlay(), &Overlay::None);
}

#[test]
fn test_escape_closes_section_and_relocks() {
    let mut session = running_session();
    let target = computer_center(&session, Section::Tasks);
    let center = aim_at(&mut session, target);
    session.on_click(center);
    assert_eq!(session.overlay(), &Overlay::Section("tasks".into()));

    // Clicking while the dialog is up does not take the pointer
    session.on_click(Vec2::new(5.0, 5.0));
    assert!(!session.pointer_locked());

    session.on_key_down("Escape");
    assert_eq!(session.overlay(), &Overlay::None);
    assert!(session.pointer_locked());
}

#[test]
fn test_physics_runs_behind_dialog() {
    let mut session = running_session();
    let target = computer_center(&session, Section::Tasks);
    let center = aim_at(&mut session, target);
    session.on_click(center);
    assert!(session.overlay().is_visible());

    let before = session.position().unwrap();
    session.on_key_down("KeyS");
    for _ in 0..20 {
        session.frame(DT);
    }
    assert_ne!(session.position().unwrap(), before);
}

#[test]
fn test_mouse_delta_only_when_locked() {
    let mut session = running_session();
    let yaw = session.camera().yaw();
    session.on_mouse_delta(50.0, 0.0);
    assert_eq!(session.camera().yaw(), yaw);

    session.set_pointer_locked(true);
    session.on_mouse_delta(50.0, 20.0);
    assert!(session.camera().yaw() < yaw);
    assert!(session.camera().pitch() < 0.0);
}

#[test]
fn test_intro_gates_pointer_lock_until_finished() {
    let mut cfg = config();
    cfg.intro.enabled = true;
    let mut session = OfficeSession::new(cfg, LevelLoader::ready(LevelGeometry::flat()));
    session.set_name_input("Ada");

    session.frame(DT);
    session.on_click(Vec2::new(10.0, 10.0));
    assert!(!session.pointer_locked());

    let mut presses = 0;
    while session.overlay() == &Overlay::Intro && presses < 20 {
        for _ in 0..300 {
            session.frame(DT);
        }
        session.on_key_down("Enter");
        presses += 1;
    }
    assert_eq!(session.overlay(), &Overlay::None);
    assert!(session.pointer_locked());
    assert_eq!(session.intro().unwrap().player_name(), "Ada");
}

#[test]
fn test_unknown_keys_are_ignored() {
    let mut session = running_session();
    session.on_key_down("MediaPlayPause");
    session.on_key_down("");
    assert!(!session.intent().is_moving());
}

#[test]
fn test_blur_releases_keys() {
    let mut session = running_session();
    session.on_key_down("KeyD");
    assert!(session.intent().is_moving());
    session.on_blur();
    assert!(!session.intent().is_moving());
}
