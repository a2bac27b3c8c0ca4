//! Atrium Picking - Pointer Picking
//!
//! Casts pointer rays into a small scene graph, tracks the one hovered
//! interactive node and reports enter / leave / activate events to a
//! listener. Presentation (highlight, scale, sound) is the listener's job.
//!
//! # Example
//!
//! ```ignore
//! use atrium_picking::prelude::*;
//!
//! let mut scene = SceneGraph::new();
//! scene.add(SceneNode::cube("desk", Vec3::ONE).at(pos).interactive("Tasks"))?;
//!
//! let mut picker = PointerPicker::default();
//! let mut events = PickEventCollector::new();
//! picker.hover(&ray, &scene, &mut events);
//! if let Some(section) = picker.activate(&ray, &scene, &mut events) {
//!     open_section(&section);
//! }
//! ```

pub mod error;
pub mod events;
pub mod picker;
pub mod raycast;
pub mod scene;

pub mod prelude {
    //! Common imports for picking
    pub use crate::error::{PickError, Result};
    pub use crate::events::{PickEvent, PickEventCollector, PickListener};
    pub use crate::picker::{PickTarget, PointerPicker};
    pub use crate::raycast::{HitOrder, RayCaster, SceneHit};
    pub use crate::scene::{Interactive, NodeId, NodeShape, SceneGraph, SceneNode};
    pub use atrium_math::Ray;
    pub use glam::Vec3;
}

pub use prelude::*;
