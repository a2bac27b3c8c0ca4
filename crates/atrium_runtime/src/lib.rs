//! Atrium Runtime - Office Session
//!
//! Ties movement, picking and level loading into one session that a host
//! (browser page, window, or the headless `atrium` binary) drives with
//! frames and input events.
//!
//! ```text
//!  host events ──► OfficeSession ──► FirstPersonController (physics)
//!                       │      └───► PointerPicker ──► HoverPresenter ──► SceneHost
//!                       └── LevelLoader (worker thread, polled each frame)
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod host;
pub mod intro;
pub mod keys;
pub mod office;
pub mod section;
pub mod session;

pub mod prelude {
    //! Common imports for hosts
    pub use crate::camera::{Camera, CameraConfig, Viewport};
    pub use crate::config::{AtriumConfig, IntroConfig, LevelConfig, PickingConfig, CONFIG_ENV};
    pub use crate::error::{ConfigError, Result};
    pub use crate::host::{AudioCue, HoverPresenter, LogOpener, SceneHost, SectionOpener};
    pub use crate::intro::{IntroDialog, IntroStep};
    pub use crate::keys::{KeyBindings, KeyCode};
    pub use crate::office::OfficeScene;
    pub use crate::section::{Section, SectionInfo};
    pub use crate::session::{OfficeSession, Overlay, SessionPhase};
    pub use atrium_level::{LevelGeometry, LevelLoader};
    pub use glam::{Vec2, Vec3};
}

pub use prelude::*;
