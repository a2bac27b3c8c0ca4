//! Minimal scene graph for picking
//!
//! Nodes carry a local translation, a uniform scale and an axis-aligned
//! shape. World placement composes down the parent chain, so scaling a
//! node also grows its children's pick bounds.

use std::fmt;

use atrium_math::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{PickError, Result};

/// Stable handle to a scene node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shape of a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NodeShape {
    /// Transform only; never hit
    Group,
    /// Solid box of the given full size
    Box { size: Vec3 },
    /// Flat rectangle in the local XY plane
    Plane { width: f32, height: f32 },
}

impl NodeShape {
    /// Local half extents, zero depth for planes
    pub fn half_extents(&self) -> Option<Vec3> {
        match *self {
            NodeShape::Group => None,
            NodeShape::Box { size } => Some(size * 0.5),
            NodeShape::Plane { width, height } => Some(Vec3::new(width, height, 0.0) * 0.5),
        }
    }
}

/// Pickable capability: the section a node opens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactive {
    pub section: String,
}

impl Interactive {
    pub fn new(section: impl Into<String>) -> Self {
        Self {
            section: section.into(),
        }
    }
}

/// A node in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub name: String,
    pub shape: NodeShape,
    /// Translation relative to the parent
    pub position: Vec3,
    /// Uniform scale, inherited by children
    pub scale: f32,
    pub interactive: Option<Interactive>,
    /// Emissive highlight toggled by hover
    pub highlighted: bool,
    /// Emissive intensity for screen-like surfaces
    pub glow: f32,
    /// Base colour as 0xRRGGBB
    pub color: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>, shape: NodeShape) -> Self {
        Self {
            name: name.into(),
            shape,
            position: Vec3::ZERO,
            scale: 1.0,
            interactive: None,
            highlighted: false,
            glow: 0.0,
            color: 0xffffff,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, NodeShape::Group)
    }

    pub fn cube(name: impl Into<String>, size: Vec3) -> Self {
        Self::new(name, NodeShape::Box { size })
    }

    pub fn plane(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self::new(name, NodeShape::Plane { width, height })
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    pub fn with_glow(mut self, glow: f32) -> Self {
        self.glow = glow;
        self
    }

    /// Tag the node as pickable for a section
    pub fn interactive(mut self, section: impl Into<String>) -> Self {
        self.interactive = Some(Interactive::new(section));
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive.is_some()
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    fn validate(&self) -> Result<()> {
        let ok = match self.shape {
            NodeShape::Group => true,
            NodeShape::Box { size } => size.is_finite() && size.cmpge(Vec3::ZERO).all(),
            NodeShape::Plane { width, height } => {
                width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0
            }
        };
        if !ok {
            return Err(PickError::InvalidShape {
                name: self.name.clone(),
                reason: format!("{:?}", self.shape),
            });
        }
        if !self.position.is_finite() || !self.scale.is_finite() {
            return Err(PickError::InvalidShape {
                name: self.name.clone(),
                reason: "non-finite transform".into(),
            });
        }
        Ok(())
    }
}

/// Flat node storage with parent/child links
///
/// Nodes are never removed during a session, so ids stay valid.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a top-level node
    pub fn add(&mut self, node: SceneNode) -> Result<NodeId> {
        node.validate()?;
        let id = self.push(node, None);
        self.roots.push(id);
        Ok(id)
    }

    /// Add a node under `parent`
    pub fn add_child(&mut self, parent: NodeId, node: SceneNode) -> Result<NodeId> {
        node.validate()?;
        if parent.index() >= self.nodes.len() {
            return Err(PickError::NodeNotFound(parent));
        }
        let id = self.push(node, Some(parent));
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    fn push(&mut self, mut node: SceneNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        node.parent = parent;
        node.children.clear();
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// First node with the given name, in traversal order
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.traverse().find(|&id| self.nodes[id.index()].name == name)
    }

    /// First direct child of `parent` with the given name
    pub fn find_child(&self, parent: NodeId, name: &str) -> Option<NodeId> {
        self.get(parent)?
            .children
            .iter()
            .copied()
            .find(|&id| self.nodes[id.index()].name == name)
    }

    /// Depth-first pre-order walk, roots in insertion order
    pub fn traverse(&self) -> Traverse<'_> {
        let mut stack: Vec<NodeId> = self.roots.clone();
        stack.reverse();
        Traverse { graph: self, stack }
    }

    /// World translation and accumulated scale of a node
    pub fn world_transform(&self, id: NodeId) -> Option<(Vec3, f32)> {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.get(node_id)?;
            chain.push(node_id);
            current = node.parent;
        }

        let mut position = Vec3::ZERO;
        let mut scale = 1.0;
        for node_id in chain.into_iter().rev() {
            let node = &self.nodes[node_id.index()];
            position += node.position * scale;
            scale *= node.scale;
        }
        Some((position, scale))
    }

    /// World-space pick bounds, None for groups and unknown ids
    pub fn world_bounds(&self, id: NodeId) -> Option<Aabb> {
        let half = self.get(id)?.shape.half_extents()?;
        let (center, scale) = self.world_transform(id)?;
        Some(Aabb::from_center_half_extents(center, half * scale.abs()))
    }

    /// Union of every shaped node's world bounds
    pub fn bounds(&self) -> Aabb {
        self.traverse()
            .filter_map(|id| self.world_bounds(id))
            .fold(Aabb::EMPTY, |acc, b| acc.union(&b))
    }
}

/// Depth-first iterator over node ids
pub struct Traverse<'a> {
    graph: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl Iterator for Traverse<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.graph.get(id) {
            self.stack.extend(node.children.iter().rev().copied());
        }
        Some(id)
    }
}
