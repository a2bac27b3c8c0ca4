//! Pick events (hover enter/leave, activation)

use crate::scene::NodeId;

/// An event emitted by the pointer picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickEvent {
    /// Pointer ray started hitting the node
    Enter(NodeId),
    /// Pointer ray stopped hitting the node
    Leave(NodeId),
    /// Node was clicked; section id is lower-case
    Activate { node: NodeId, section: String },
}

impl PickEvent {
    pub fn node(&self) -> NodeId {
        match self {
            PickEvent::Enter(node) | PickEvent::Leave(node) => *node,
            PickEvent::Activate { node, .. } => *node,
        }
    }

    /// Replay this event into a listener
    pub fn deliver<L: PickListener + ?Sized>(&self, listener: &mut L) {
        match self {
            PickEvent::Enter(node) => listener.on_enter(*node),
            PickEvent::Leave(node) => listener.on_leave(*node),
            PickEvent::Activate { node, section } => listener.on_activate(*node, section),
        }
    }
}

/// Subscriber for picker events
pub trait PickListener {
    /// Called when a node becomes the hover target
    fn on_enter(&mut self, _node: NodeId) {}

    /// Called when a node stops being the hover target
    fn on_leave(&mut self, _node: NodeId) {}

    /// Called when a click lands on an interactive node
    fn on_activate(&mut self, _node: NodeId, _section: &str) {}
}

/// Listener that ignores everything
impl PickListener for () {}

/// Default listener that collects events into a buffer
#[derive(Debug, Default)]
pub struct PickEventCollector {
    pub events: Vec<PickEvent>,
}

impl PickEventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Take all buffered events
    pub fn drain(&mut self) -> Vec<PickEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn enters(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.events.iter().filter_map(|e| match e {
            PickEvent::Enter(node) => Some(*node),
            _ => None,
        })
    }

    pub fn leaves(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.events.iter().filter_map(|e| match e {
            PickEvent::Leave(node) => Some(*node),
            _ => None,
        })
    }

    pub fn activations(&self) -> impl Iterator<Item = (NodeId, &str)> + '_ {
        self.events.iter().filter_map(|e| match e {
            PickEvent::Activate { node, section } => Some((*node, section.as_str())),
            _ => None,
        })
    }
}

impl PickListener for PickEventCollector {
    fn on_enter(&mut self, node: NodeId) {
        self.events.push(PickEvent::Enter(node));
    }

    fn on_leave(&mut self, node: NodeId) {
        self.events.push(PickEvent::Leave(node));
    }

    fn on_activate(&mut self, node: NodeId, section: &str) {
        self.events.push(PickEvent::Activate {
            node,
            section: section.to_owned(),
        });
    }
}
