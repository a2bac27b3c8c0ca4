//! The office scene: boundary walls and the four section computers

use atrium_physics::{GroundLevel, Wall};
use atrium_picking::{NodeId, PickError, SceneGraph, SceneNode};
use glam::Vec3;

use crate::host::{AudioCue, SceneHost, SCREEN_GLOW_IDLE};
use crate::section::Section;

/// Height of a computer's centre above the ground
pub const COMPUTER_HEIGHT: f32 = 0.8;

const BASE_COLOR: u32 = 0x333333;
const STAND_COLOR: u32 = 0x666666;
const KEYBOARD_COLOR: u32 = 0x222222;
const MOUSE_COLOR: u32 = 0x444444;
const LABEL_COLOR: u32 = 0x000000;
const WALL_COLOR: u32 = 0x888888;

/// Desk placement of each computer, relative to the ground
fn desk_position(section: Section) -> (f32, f32) {
    match section {
        Section::Habits => (-3.0, -2.0),
        Section::Tasks => (3.0, -2.0),
        Section::Progress => (-3.0, 2.0),
        Section::Routine => (3.0, 2.0),
    }
}

/// Scene graph of the office plus queued audio cues
///
/// Acts as the built-in [`SceneHost`]: hover effects are written straight
/// into node state, so a hovered computer's scale also grows its pick
/// bounds.
#[derive(Debug, Default)]
pub struct OfficeScene {
    graph: SceneGraph,
    computers: Vec<(Section, NodeId)>,
    walls: Vec<NodeId>,
    cues: Vec<AudioCue>,
}

impl OfficeScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &SceneGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut SceneGraph {
        &mut self.graph
    }

    /// Section computers in creation order
    pub fn computers(&self) -> &[(Section, NodeId)] {
        &self.computers
    }

    pub fn computer(&self, section: Section) -> Option<NodeId> {
        self.computers
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, id)| *id)
    }

    pub fn wall_nodes(&self) -> &[NodeId] {
        &self.walls
    }

    /// Add wall volumes as untagged boxes
    pub fn add_walls(&mut self, walls: &[Wall]) -> Result<(), PickError> {
        for wall in walls {
            let node = SceneNode::cube("wall", wall.half_extents * 2.0)
                .at(wall.center)
                .with_color(WALL_COLOR);
            let id = self.graph.add(node)?;
            self.walls.push(id);
        }
        Ok(())
    }

    /// Add all four section computers standing on `ground`
    pub fn add_computers(&mut self, ground: GroundLevel) -> Result<(), PickError> {
        for section in Section::ALL {
            let (x, z) = desk_position(section);
            let position = Vec3::new(x, ground.0 + COMPUTER_HEIGHT, z);
            let id = self.add_computer(section, position)?;
            self.computers.push((section, id));
        }
        log::info!("Placed {} computers", self.computers.len());
        Ok(())
    }

    /// A tagged base with untagged screen, stand, keyboard, mouse and label
    fn add_computer(&mut self, section: Section, position: Vec3) -> Result<NodeId, PickError> {
        let base = self.graph.add(
            SceneNode::cube(section.label(), Vec3::new(0.8, 0.6, 0.4))
                .at(position)
                .with_color(BASE_COLOR)
                .interactive(section.label()),
        )?;

        let parts = [
            SceneNode::plane("screen", 0.6, 0.4)
                .at(Vec3::new(0.0, 0.1, 0.21))
                .with_color(section.screen_color())
                .with_glow(SCREEN_GLOW_IDLE),
            SceneNode::cube("stand", Vec3::new(0.2, 0.3, 0.2))
                .at(Vec3::new(0.0, -0.45, 0.0))
                .with_color(STAND_COLOR),
            SceneNode::cube("keyboard", Vec3::new(0.7, 0.05, 0.3))
                .at(Vec3::new(0.0, -0.1, -0.35))
                .with_color(KEYBOARD_COLOR),
            SceneNode::cube("mouse", Vec3::new(0.15, 0.05, 0.25))
                .at(Vec3::new(0.3, -0.1, -0.35))
                .with_color(MOUSE_COLOR),
            SceneNode::plane("label", 0.5, 0.1)
                .at(Vec3::new(0.0, -0.6, 0.0))
                .with_color(LABEL_COLOR),
        ];
        for part in parts {
            self.graph.add_child(base, part)?;
        }
        Ok(base)
    }

    /// Take queued audio cues
    pub fn drain_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.cues)
    }
}

impl SceneHost for OfficeScene {
    fn set_highlight(&mut self, node: NodeId, on: bool) {
        if let Some(n) = self.graph.get_mut(node) {
            n.highlighted = on;
        }
    }

    fn set_scale(&mut self, node: NodeId, scale: f32) {
        if let Some(n) = self.graph.get_mut(node) {
            n.scale = scale;
        }
    }

    fn set_screen_glow(&mut self, node: NodeId, intensity: f32) {
        if let Some(screen) = self.graph.find_child(node, "screen") {
            if let Some(n) = self.graph.get_mut(screen) {
                n.glow = intensity;
            }
        }
    }

    fn play_cue(&mut self, cue: AudioCue) {
        log::debug!("cue {:?}", cue);
        self.cues.push(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn office(ground: f32) -> OfficeScene {
        let mut office = OfficeScene::new();
        office.add_walls(&Wall::office_boundary()).unwrap();
        office.add_computers(GroundLevel(ground)).unwrap();
        office
    }

    #[test]
    fn test_layout() {
        let office = office(-1.0);
        assert_eq!(office.wall_nodes().len(), 4);
        assert_eq!(office.computers().len(), 4);
        // 4 walls + 4 * (base + 5 parts)
        assert_eq!(office.graph().len(), 28);

        let routine = office.computer(Section::Routine).unwrap();
        let (pos, _) = office.graph().world_transform(routine).unwrap();
        assert_abs_diff_eq!(pos.x, 3.0);
        assert_abs_diff_eq!(pos.y, -0.2, epsilon = 1e-6);
        assert_abs_diff_eq!(pos.z, 2.0);
    }

    #[test]
    fn test_only_bases_are_interactive() {
        let office = office(0.0);
        let tagged: Vec<_> = office
            .graph()
            .traverse()
            .filter(|&id| office.graph().get(id).is_some_and(|n| n.is_interactive()))
            .collect();
        let bases: Vec<_> = office.computers().iter().map(|(_, id)| *id).collect();
        assert_eq!(tagged, bases);
    }

    #[test]
    fn test_host_writes_node_state() {
        let mut office = office(0.0);
        let tasks = office.computer(Section::Tasks).unwrap();
        let screen = office.graph().find_child(tasks, "screen").unwrap();

        office.set_highlight(tasks, true);
        office.set_scale(tasks, 1.1);
        office.set_screen_glow(tasks, 0.8);
        office.play_cue(AudioCue::Hover);

        let node = office.graph().get(tasks).unwrap();
        assert!(node.highlighted);
        assert_eq!(node.scale, 1.1);
        assert_eq!(office.graph().get(screen).unwrap().glow, 0.8);
        assert_eq!(office.drain_cues(), vec![AudioCue::Hover]);
        assert!(office.drain_cues().is_empty());
    }

    #[test]
    fn test_unknown_node_is_ignored() {
        let mut office = OfficeScene::new();
        let mut other = SceneGraph::new();
        let foreign = other.add(SceneNode::group("x")).unwrap();
        office.set_highlight(foreign, true);
        office.set_screen_glow(foreign, 0.8);
        assert!(office.graph().is_empty());
    }
}
