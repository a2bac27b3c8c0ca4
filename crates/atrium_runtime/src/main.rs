//! Atrium headless runtime
//!
//! Loads the configuration and level, then drives a short scripted walk
//! through the office at 60 Hz: finish the intro, walk forward, jump,
//! turn to the Habits computer and click it.
//!
//! Run with: cargo run -p atrium_runtime -- [config.toml]

use std::path::PathBuf;
use std::process::ExitCode;

use atrium_runtime::prelude::*;

const DT: f32 = 1.0 / 60.0;
const LOAD_TIMEOUT_FRAMES: u32 = 600;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arg = std::env::args().nth(1).map(PathBuf::from);
    let config = match AtriumConfig::load(arg.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    config.log_summary();

    let loader = match &config.level.path {
        Some(path) => match LevelLoader::spawn(path.clone()) {
            Ok(loader) => loader,
            Err(e) => {
                log::error!("Could not start level loader: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => LevelLoader::ready(LevelGeometry::flat()),
    };

    let mut session = OfficeSession::new(config, loader)
        .with_opener(|section: &str| log::info!("Host opens section '{}'", section));

    if !wait_for_level(&mut session) {
        return ExitCode::FAILURE;
    }
    run_script(&mut session);
    ExitCode::SUCCESS
}

fn wait_for_level(session: &mut OfficeSession) -> bool {
    for _ in 0..LOAD_TIMEOUT_FRAMES {
        session.frame(DT);
        match session.phase() {
            SessionPhase::Running => return true,
            SessionPhase::Failed => return false,
            SessionPhase::Loading => std::thread::sleep(std::time::Duration::from_secs_f32(DT)),
        }
    }
    log::error!("Level did not load within {} frames", LOAD_TIMEOUT_FRAMES);
    false
}

fn run_frames(session: &mut OfficeSession, seconds: f32) {
    let frames = (seconds / DT).round() as u32;
    for _ in 0..frames {
        session.frame(DT);
    }
}

fn run_script(session: &mut OfficeSession) {
    // Intro: let each line type out, then press Enter
    session.set_name_input("Visitor");
    while session.overlay() == &Overlay::Intro {
        run_frames(session, 5.0);
        session.on_key_down("Enter");
    }

    session.on_key_down("KeyW");
    run_frames(session, 1.0);
    session.on_key_up("KeyW");
    log::info!("After walking: {:?}", session.position());

    session.on_key_down("Space");
    run_frames(session, 0.25);
    session.on_key_up("Space");
    log::info!("Mid-jump: {:?}", session.position());
    run_frames(session, 2.0);

    let target = session
        .office()
        .computer(Section::Habits)
        .and_then(|id| session.office().graph().world_transform(id))
        .map(|(pos, _)| pos);
    if let Some(target) = target {
        session.camera_mut().look_at(target);
    }

    let center = session.viewport().center();
    session.on_pointer_move(center);
    session.on_click(center);

    if let Some(info) = session.overlay().section_info() {
        log::info!("Dialog: {} - {}", info.title, info.description);
    }
    session.on_key_down("Escape");

    let cues = session.office_mut().drain_cues();
    log::info!("Audio cues: {:?}", cues);
    log::info!(
        "Finished after {} frames at {:?}",
        session.frame_count(),
        session.position()
    );
}
