//! Observation encoder - serializes a WorldSnapshot into the flat feature
//! vector a learned policy consumes.
//!
//! The layout is positional, not named, so field order is part of the
//! contract: [local velocity x, local velocity z, time remaining, heading,
//! agent position (3), home base position (3)], then per target in scan
//! order [position (3), carried, in-base], and finally the frozen flag.

use crate::infra::Vec3;
use crate::state::WorldSnapshot;

/// Scalars per target slot: position (3), carried (1), in-base (1).
const TARGET_FEATURES: usize = 5;
/// Ten leading scalars plus the trailing frozen flag.
const FIXED_FEATURES: usize = 11;

#[derive(Debug, Clone, Default)]
pub struct ObservationEncoder;

impl ObservationEncoder {
    pub fn new() -> Self {
        Self
    }

    /// Vector length for a world with `target_count` targets.
    pub fn obs_size(&self, target_count: usize) -> usize {
        FIXED_FEATURES + TARGET_FEATURES * target_count
    }

    pub fn encode(&self, world: &WorldSnapshot) -> Vec<f32> {
        let mut obs = Vec::with_capacity(self.obs_size(world.targets.len()));

        // Agent velocity in the local frame
        obs.push(world.local_velocity.0);
        obs.push(world.local_velocity.1);

        // Time remaining
        obs.push(world.time_remaining);

        // Agent's current rotation
        obs.push(world.heading);

        // Agent and home base positions
        push_vec3(&mut obs, world.position);
        push_vec3(&mut obs, world.home_base);

        // Per target: position, whether it is carried, whether it is in a base
        for target in &world.targets {
            push_vec3(&mut obs, target.position);
            obs.push(target.carried as f32);
            obs.push(target.in_base as f32);
        }

        // Whether the agent is frozen
        obs.push(if world.frozen { 1.0 } else { 0.0 });

        obs
    }
}

fn push_vec3(obs: &mut Vec<f32>, v: Vec3) {
    obs.extend_from_slice(&[v.x, v.y, v.z]);
}
