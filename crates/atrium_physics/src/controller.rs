//! Body + resolver pair driven once per frame

use glam::Vec3;

use crate::body::{BodyStep, KinematicBody};
use crate::config::MovementConfig;
use crate::input::MoveIntent;
use crate::resolver::{CollisionResolver, Resolution};

/// What happened during one controller update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub step: BodyStep,
    pub resolution: Resolution,
    /// Final position after resolution
    pub position: Vec3,
}

/// First-person controller: integrates the body, then resolves collisions
#[derive(Debug, Clone)]
pub struct FirstPersonController {
    body: KinematicBody,
    resolver: CollisionResolver,
}

impl FirstPersonController {
    pub fn new(config: MovementConfig, resolver: CollisionResolver) -> Self {
        Self {
            body: KinematicBody::new(config),
            resolver,
        }
    }

    /// Spawn at rest at the given viewpoint position
    pub fn spawn(&mut self, position: Vec3) {
        self.body.spawn(position);
    }

    /// Spawn at the center of the room standing on the ground
    pub fn spawn_on_ground(&mut self, x: f32, z: f32) {
        let y = self.resolver.floor_height();
        self.body.spawn(Vec3::new(x, y, z));
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.body
    }

    pub fn resolver(&self) -> &CollisionResolver {
        &self.resolver
    }

    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    /// Run one frame of movement
    pub fn update(&mut self, dt: f32, intent: &mut MoveIntent, look: Vec3) -> FrameReport {
        let step = self.body.integrate(dt, intent, look);
        let resolution = self.resolver.resolve(&mut self.body, step.previous);
        if step.jumped {
            log::debug!("jump from {:?}", step.previous);
        }
        FrameReport {
            step,
            resolution,
            position: self.body.position,
        }
    }
}
