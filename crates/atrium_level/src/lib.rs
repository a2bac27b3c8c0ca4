//! Atrium Level - Level Geometry
//!
//! Derives the ground level and spawn point from a glTF/GLB model's
//! bounds. Loading runs on a worker thread and reports once through a
//! channel, so the frame loop can keep running while it waits.

pub mod error;
pub mod geometry;
pub mod import;
pub mod loader;

pub use error::{LevelError, Result};
pub use geometry::LevelGeometry;
pub use import::{import_file, import_slice, scene_bounds};
pub use loader::LevelLoader;
