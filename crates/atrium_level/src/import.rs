//! glTF/GLB level import
//!
//! Only the default scene's mesh bounds are read, using the accessor
//! min/max that glTF requires on every POSITION attribute, so no vertex
//! buffers or textures are decoded.

use std::path::Path;

use atrium_math::Aabb;
use glam::{Mat4, Vec3};

use crate::error::{LevelError, Result};
use crate::geometry::LevelGeometry;

/// Import a level file (.gltf or .glb)
pub fn import_file(path: impl AsRef<Path>) -> Result<LevelGeometry> {
    let path = path.as_ref();
    let name = path.display().to_string();
    let document = gltf::Gltf::open(path).map_err(|source| LevelError::Import {
        path: name.clone(),
        source,
    })?;
    geometry_from_document(&document, &name)
}

/// Import a level from in-memory bytes (GLB or glTF JSON)
pub fn import_slice(data: &[u8], name: &str) -> Result<LevelGeometry> {
    let document = gltf::Gltf::from_slice(data).map_err(|source| LevelError::Import {
        path: name.to_string(),
        source,
    })?;
    geometry_from_document(&document, name)
}

fn geometry_from_document(document: &gltf::Document, name: &str) -> Result<LevelGeometry> {
    let bounds = scene_bounds(document, name)?;
    let level = LevelGeometry::from_bounds(bounds)?;
    log::info!(
        "Level '{}': bounds {:?}..{:?}, ground {:.3}",
        name,
        level.bounds.min,
        level.bounds.max,
        level.ground.0
    );
    Ok(level)
}

/// World-space bounds of every mesh primitive in the default scene
pub fn scene_bounds(document: &gltf::Document, name: &str) -> Result<Aabb> {
    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| LevelError::NoScene(name.to_string()))?;

    let mut bounds = Aabb::EMPTY;
    for node in scene.nodes() {
        accumulate(&node, Mat4::IDENTITY, &mut bounds);
    }

    if bounds.is_empty() {
        return Err(LevelError::NoGeometry(name.to_string()));
    }
    Ok(bounds)
}

fn accumulate(node: &gltf::Node, parent: Mat4, bounds: &mut Aabb) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            let bb = primitive.bounding_box();
            let local = Aabb::new(Vec3::from(bb.min), Vec3::from(bb.max));
            *bounds = bounds.union(&local.transform(&world));
        }
    }

    for child in node.children() {
        accumulate(&child, world, bounds);
    }
}
