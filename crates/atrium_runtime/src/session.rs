//! Office session: owns every piece of per-session state and runs frames
//!
//! # Lifecycle
//!
//! ```text
//!  Loading ──(level ok)──► Running
//!     │
//!     └──(level error)──► Failed   (dormant, no retry)
//! ```
//!
//! Movement never runs before the level reports: the first frame after a
//! successful load publishes the ground level, spawns the body and places
//! the computers.

use std::time::Duration;

use atrium_level::{LevelGeometry, LevelLoader};
use atrium_physics::{CollisionResolver, FirstPersonController, FrameReport, MoveIntent};
use atrium_picking::{PickEventCollector, PickTarget, PointerPicker, RayCaster};
use glam::{Vec2, Vec3};

use crate::camera::{Camera, Viewport};
use crate::config::AtriumConfig;
use crate::host::{HoverPresenter, LogOpener, SectionOpener};
use crate::intro::{IntroDialog, IntroStep};
use crate::keys::KeyCode;
use crate::office::OfficeScene;
use crate::section::SectionInfo;

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for the level loader
    Loading,
    /// Level ready; movement and picking active
    Running,
    /// Level failed to load; nothing runs
    Failed,
}

/// Modal overlay currently shown over the scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Intro,
    /// Section dialog, by lower-case id
    Section(String),
}

impl Overlay {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Overlay::None)
    }

    /// Dialog content when a section is open
    pub fn section_info(&self) -> Option<&'static SectionInfo> {
        match self {
            Overlay::Section(id) => Some(SectionInfo::lookup(id)),
            _ => None,
        }
    }
}

/// Per-session context for the office walk
pub struct OfficeSession {
    config: AtriumConfig,
    phase: SessionPhase,
    loader: LevelLoader,
    level: Option<LevelGeometry>,
    controller: Option<FirstPersonController>,
    intent: MoveIntent,
    camera: Camera,
    viewport: Viewport,
    pointer: Vec2,
    pointer_locked: bool,
    picker: PointerPicker,
    events: PickEventCollector,
    office: OfficeScene,
    overlay: Overlay,
    intro: Option<IntroDialog>,
    name_input: String,
    opener: Box<dyn SectionOpener>,
    frame: u64,
}

impl OfficeSession {
    pub fn new(config: AtriumConfig, loader: LevelLoader) -> Self {
        let viewport = Viewport::default();
        let camera = Camera::new(config.camera.clone(), viewport);
        let picker = PointerPicker::new(RayCaster::new().with_order(config.picking.hit_order));
        let (intro, overlay) = if config.intro.enabled {
            (Some(IntroDialog::new(&config.intro)), Overlay::Intro)
        } else {
            (None, Overlay::None)
        };

        log::info!("Session created, waiting for level '{}'", loader.source());
        Self {
            config,
            phase: SessionPhase::Loading,
            loader,
            level: None,
            controller: None,
            intent: MoveIntent::default(),
            camera,
            viewport,
            pointer: viewport.center(),
            pointer_locked: false,
            picker,
            events: PickEventCollector::new(),
            office: OfficeScene::new(),
            overlay,
            intro,
            name_input: String::new(),
            opener: Box::new(LogOpener),
            frame: 0,
        }
    }

    /// Route "open section" requests to an external collaborator
    pub fn with_opener(mut self, opener: impl SectionOpener + 'static) -> Self {
        self.opener = Box::new(opener);
        self
    }

    pub fn config(&self) -> &AtriumConfig {
        &self.config
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn level(&self) -> Option<&LevelGeometry> {
        self.level.as_ref()
    }

    pub fn controller(&self) -> Option<&FirstPersonController> {
        self.controller.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn office(&self) -> &OfficeScene {
        &self.office
    }

    pub fn office_mut(&mut self) -> &mut OfficeScene {
        &mut self.office
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn intro(&self) -> Option<&IntroDialog> {
        self.intro.as_ref()
    }

    pub fn intent(&self) -> &MoveIntent {
        &self.intent
    }

    pub fn hover_target(&self) -> PickTarget {
        self.picker.target()
    }

    pub fn pointer_locked(&self) -> bool {
        self.pointer_locked
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Viewpoint position, None until the level is ready
    pub fn position(&self) -> Option<Vec3> {
        self.controller.as_ref().map(|c| c.position())
    }

    // ------------------------------------------------------------------
    // Frame
    // ------------------------------------------------------------------

    /// Run one frame of `dt` seconds
    ///
    /// Returns the movement report once the level is running.
    pub fn frame(&mut self, dt: f32) -> Option<FrameReport> {
        self.frame += 1;

        if let Some(intro) = self.intro.as_mut() {
            let elapsed = Duration::try_from_secs_f32(dt.max(0.0)).unwrap_or(Duration::ZERO);
            intro.update(elapsed);
        }

        if self.phase == SessionPhase::Loading {
            self.poll_level();
        }
        if self.phase != SessionPhase::Running {
            return None;
        }

        let controller = self.controller.as_mut()?;
        let report = controller.update(dt, &mut self.intent, self.camera.look_direction());
        self.camera.position = report.position;
        Some(report)
    }

    fn poll_level(&mut self) {
        match self.loader.poll() {
            None => {}
            Some(Ok(level)) => self.start(level),
            Some(Err(err)) => {
                log::error!("Failed to load level: {}", err);
                self.phase = SessionPhase::Failed;
            }
        }
    }

    fn start(&mut self, level: LevelGeometry) {
        let eye = self.config.movement.eye_height;
        let resolver = CollisionResolver::new(level.ground, &self.config.collision, eye);
        let mut controller = FirstPersonController::new(self.config.movement.clone(), resolver);
        let spawn = level.spawn_point(eye);
        controller.spawn(spawn);
        self.camera.position = spawn;

        if let Err(err) = self.office.add_walls(&self.config.collision.walls) {
            log::warn!("Skipping wall meshes: {}", err);
        }
        if let Err(err) = self.office.add_computers(level.ground) {
            log::warn!("Skipping computers: {}", err);
        }

        self.controller = Some(controller);
        self.level = Some(level);
        self.phase = SessionPhase::Running;
        log::info!("Game systems enabled, spawned at {:?}", spawn);
    }

    // ------------------------------------------------------------------
    // Keyboard
    // ------------------------------------------------------------------

    /// Key-down by `KeyboardEvent.code`; unknown codes are ignored
    pub fn on_key_down(&mut self, code: &str) {
        let Ok(key) = code.parse::<KeyCode>() else {
            log::trace!("ignoring key {}", code);
            return;
        };

        match key {
            KeyCode::Enter if self.overlay == Overlay::Intro => {
                self.advance_intro();
                return;
            }
            KeyCode::Escape if matches!(self.overlay, Overlay::Section(_)) => {
                self.close_section();
                return;
            }
            _ => {}
        }

        if let Some(action) = self.config.keys.action_for(key) {
            self.intent.press(action);
        }
    }

    pub fn on_key_up(&mut self, code: &str) {
        if let Ok(key) = code.parse::<KeyCode>() {
            if let Some(action) = self.config.keys.action_for(key) {
                self.intent.release(action);
            }
        }
    }

    /// Window lost focus: release every held key
    pub fn on_blur(&mut self) {
        self.intent.clear();
    }

    // ------------------------------------------------------------------
    // Pointer
    // ------------------------------------------------------------------

    /// Pointer moved to client pixel `pos`
    pub fn on_pointer_move(&mut self, pos: Vec2) {
        self.pointer = pos;
        if self.phase != SessionPhase::Running {
            return;
        }
        let ray = self.camera.ray_through_pixel(pos, &self.viewport);
        self.picker.hover(&ray, self.office.graph(), &mut self.events);
        self.flush_pick_events();
    }

    /// Relative mouse motion; turns the camera while pointer lock is held
    pub fn on_mouse_delta(&mut self, dx: f32, dy: f32) {
        if self.pointer_locked {
            self.camera.apply_mouse_delta(dx, dy);
        }
    }

    /// Click at client pixel `pos`
    pub fn on_click(&mut self, pos: Vec2) {
        self.pointer = pos;

        // A visible dialog covers the scene: no lock, no activation
        if self.overlay.is_visible() {
            return;
        }
        self.set_pointer_locked(true);

        if self.phase != SessionPhase::Running {
            return;
        }
        let ray = self.camera.ray_through_pixel(pos, &self.viewport);
        let section = self.picker.activate(&ray, self.office.graph(), &mut self.events);
        self.flush_pick_events();

        if let Some(section) = section {
            self.open_section(section);
        }
    }

    /// Host reports a pointer-lock change (e.g. the user released it)
    pub fn set_pointer_locked(&mut self, locked: bool) {
        if self.pointer_locked != locked {
            log::debug!("Pointer {}", if locked { "locked" } else { "unlocked" });
        }
        self.pointer_locked = locked;
    }

    /// Viewport resized
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        self.camera.set_viewport(self.viewport);
    }

    fn flush_pick_events(&mut self) {
        let mut presenter = HoverPresenter::new(&mut self.office);
        for event in self.events.drain() {
            event.deliver(&mut presenter);
        }
    }

    // ------------------------------------------------------------------
    // Overlays
    // ------------------------------------------------------------------

    /// Current contents of the intro name field
    pub fn set_name_input(&mut self, name: &str) {
        self.name_input = name.to_string();
    }

    /// "Next" on the intro dialog
    pub fn advance_intro(&mut self) -> Option<IntroStep> {
        let intro = self.intro.as_mut()?;
        let step = intro.advance(&self.name_input);
        if step == IntroStep::Finished && self.overlay == Overlay::Intro {
            self.overlay = Overlay::None;
            self.set_pointer_locked(true);
        }
        Some(step)
    }

    /// Show a section dialog and notify the opener
    pub fn open_section(&mut self, section: String) {
        log::info!("Opening section '{}'", section);
        self.opener.open_section(&section);
        self.overlay = Overlay::Section(section);
        self.set_pointer_locked(false);
    }

    /// Close the section dialog and take the pointer back
    pub fn close_section(&mut self) {
        if matches!(self.overlay, Overlay::Section(_)) {
            self.overlay = Overlay::None;
            self.set_pointer_locked(true);
        }
    }
}

impl std::fmt::Debug for OfficeSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfficeSession")
            .field("phase", &self.phase)
            .field("frame", &self.frame)
            .field("overlay", &self.overlay)
            .field("position", &self.position())
            .field("pointer_locked", &self.pointer_locked)
            .finish()
    }
}
