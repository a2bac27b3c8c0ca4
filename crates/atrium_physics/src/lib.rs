//! Atrium Physics - First-Person Movement
//!
//! Kinematic movement for a first-person viewpoint walking a closed room.
//! There is no rigid-body solver: a single body integrates gravity,
//! damping and input acceleration, and a resolver clamps it to the floor
//! and rolls it back when it touches a wall.
//!
//! # Frame flow
//!
//! ```text
//!  MoveIntent ──► KinematicBody::integrate ──► CollisionResolver::resolve
//!   (keys)          (velocity, position)         (ground clamp, wall rollback)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use atrium_physics::prelude::*;
//!
//! let config = MovementConfig::default();
//! let mut controller = FirstPersonController::new(
//!     config.clone(),
//!     CollisionResolver::new(GroundLevel(0.0), &CollisionConfig::default(), config.eye_height),
//! );
//! controller.spawn(Vec3::new(0.0, 0.6, 0.0));
//!
//! let mut intent = MoveIntent::default();
//! intent.press(MoveAction::Forward);
//! controller.update(1.0 / 60.0, &mut intent, camera_look);
//! ```

pub mod body;
pub mod collider;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod resolver;

pub mod prelude {
    //! Common imports for movement
    pub use crate::body::{BodyStep, KinematicBody, MoveBasis};
    pub use crate::collider::{GroundLevel, Wall};
    pub use crate::config::{CollisionConfig, MovementConfig};
    pub use crate::controller::{FirstPersonController, FrameReport};
    pub use crate::error::{PhysicsError, Result};
    pub use crate::input::{MoveAction, MoveIntent};
    pub use crate::resolver::{CollisionResolver, Resolution};
    pub use glam::Vec3;
}

pub use prelude::*;
