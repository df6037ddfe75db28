use crate::infra::{ActionTriple, signed_bearing};
use crate::planners::heuristic::policy::PolicyConfig;
use crate::planners::heuristic::steering::approach_fastest;
use crate::planners::heuristic::tactics::ExecuteTactic;
use crate::state::WorldSnapshot;

/// Bring whatever we carry home, reversing if the base is behind us.
pub struct ReturnToBaseTactic;

impl ExecuteTactic for ReturnToBaseTactic {
    fn execute(&self, world: &WorldSnapshot, _config: &PolicyConfig, actions: &mut ActionTriple) {
        let bearing = signed_bearing(world.position, world.forward, world.home_base);
        approach_fastest(bearing, actions);
    }
}
