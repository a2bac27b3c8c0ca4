//! Hover tracking and click activation

use atrium_math::Ray;

use crate::events::PickListener;
use crate::raycast::{HitOrder, RayCaster, SceneHit};
use crate::scene::{NodeId, SceneGraph};

/// The single hovered interactive node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickTarget {
    #[default]
    None,
    Hovering(NodeId),
}

impl PickTarget {
    pub fn node(self) -> Option<NodeId> {
        match self {
            PickTarget::None => None,
            PickTarget::Hovering(node) => Some(node),
        }
    }
}

/// Pointer picker state machine
///
/// ```text
///          hit a            hit b (b != a)
///  None ──────────► Hovering(a) ──────────► Hovering(b)
///    ▲                  │
///    └──── no hit ──────┘
/// ```
///
/// Every transition out of `Hovering(a)` emits `leave(a)` before any
/// `enter`, so at most one node is ever highlighted.
#[derive(Debug, Clone, Default)]
pub struct PointerPicker {
    caster: RayCaster,
    target: PickTarget,
}

impl PointerPicker {
    pub fn new(caster: RayCaster) -> Self {
        Self {
            caster,
            target: PickTarget::None,
        }
    }

    pub fn with_order(order: HitOrder) -> Self {
        Self::new(RayCaster::new().with_order(order))
    }

    pub fn caster(&self) -> &RayCaster {
        &self.caster
    }

    pub fn target(&self) -> PickTarget {
        self.target
    }

    /// Query without touching hover state
    pub fn query(&self, ray: &Ray, scene: &SceneGraph) -> Option<SceneHit> {
        self.caster.first_interactive(ray, scene)
    }

    /// Update the hover target from a pointer ray
    pub fn hover<L: PickListener + ?Sized>(
        &mut self,
        ray: &Ray,
        scene: &SceneGraph,
        listener: &mut L,
    ) -> PickTarget {
        let next = match self.query(ray, scene) {
            Some(hit) => PickTarget::Hovering(hit.node),
            None => PickTarget::None,
        };

        if next != self.target {
            if let PickTarget::Hovering(old) = self.target {
                log::debug!("hover leave {}", old);
                listener.on_leave(old);
            }
            if let PickTarget::Hovering(new) = next {
                log::debug!("hover enter {}", new);
                listener.on_enter(new);
            }
            self.target = next;
        }
        self.target
    }

    /// Resolve a click
    ///
    /// Runs a fresh query rather than trusting the hover state, and
    /// returns the lower-cased section id of the clicked node.
    pub fn activate<L: PickListener + ?Sized>(
        &mut self,
        ray: &Ray,
        scene: &SceneGraph,
        listener: &mut L,
    ) -> Option<String> {
        let hit = self.query(ray, scene)?;
        let section = scene.get(hit.node)?.interactive.as_ref()?.section.to_lowercase();
        log::debug!("activate {} -> '{}'", hit.node, section);
        listener.on_activate(hit.node, &section);
        Some(section)
    }

    /// Drop the hover target, emitting leave if one was held
    pub fn reset<L: PickListener + ?Sized>(&mut self, listener: &mut L) {
        if let PickTarget::Hovering(old) = std::mem::take(&mut self.target) {
            listener.on_leave(old);
        }
    }
}
