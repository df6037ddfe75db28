//! Boundary traits for the engine-side collaborators.
//!
//! The decision core never touches the engine directly: the simulation
//! supplies a physics probe for short-range collision queries, an actuator
//! that turns the action triple into motion, and a sensor that ships the
//! observation vector off to whatever learning system is listening.

use crate::infra::{ActionTriple, Vec3};

/// Tag reported for the nearest obstruction along a probe ray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceTag {
    Wall,
    Target,
    Agent,
    Base,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeHit {
    pub tag: SurfaceTag,
    pub distance: f32,
}

/// Directional ray query into the engine's collision world.
pub trait PhysicsProbe {
    /// Nearest hit within `max_range` along `direction` from `origin`, if any.
    fn probe(&self, origin: Vec3, direction: Vec3, max_range: f32) -> Option<ProbeHit>;
}

/// Applies one action triple per tick to the physical agent.
pub trait Actuator {
    fn apply(&mut self, action: &ActionTriple);
}

/// Consumes the flat observation vector once per tick. Consumers rely on
/// positional encoding, so the slice layout is part of the contract.
pub trait VectorSensor {
    fn accept(&mut self, observations: &[f32]);
}
