//! Short-range wall probes that keep the agent from pinning itself.
//!
//! Runs after tactic dispatch and outranks it. The forward probe is applied
//! first and the backward probe second, so when both report a wall in the
//! same tick the backward result stands.

use tracing::debug;

use crate::infra::{ActionTriple, MoveCommand, PhysicsProbe, SurfaceTag};
use crate::planners::heuristic::policy::PolicyConfig;
use crate::state::WorldSnapshot;

pub fn apply_wall_override(
    world: &WorldSnapshot,
    probe: &dyn PhysicsProbe,
    config: &PolicyConfig,
    actions: &mut ActionTriple,
) {
    if let Some(hit) = probe.probe(world.position, world.forward, config.wall_probe_range)
        && hit.tag == SurfaceTag::Wall
    {
        debug!(distance = hit.distance, "wall ahead, backing off");
        actions.move_cmd = MoveCommand::Backward;
    }
    if let Some(hit) = probe.probe(world.position, -world.forward, config.wall_probe_range)
        && hit.tag == SurfaceTag::Wall
    {
        debug!(distance = hit.distance, "wall behind, pulling forward");
        actions.move_cmd = MoveCommand::Forward;
    }
}
