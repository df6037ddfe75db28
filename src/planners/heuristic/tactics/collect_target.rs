use crate::infra::{ActionTriple, signed_bearing};
use crate::planners::heuristic::policy::PolicyConfig;
use crate::planners::heuristic::steering::approach_fastest;
use crate::planners::heuristic::tactics::ExecuteTactic;
use crate::state::WorldSnapshot;

/// Drive onto a loose target (by index) so the engine picks it up, taking
/// the geometrically faster of the forward/backward approaches.
pub struct CollectTargetTactic(pub usize);

impl ExecuteTactic for CollectTargetTactic {
    fn execute(&self, world: &WorldSnapshot, _config: &PolicyConfig, actions: &mut ActionTriple) {
        let target = &world.targets[self.0];
        let bearing = signed_bearing(world.position, world.forward, target.position);
        approach_fastest(bearing, actions);
    }
}
