use tracing::debug;

use crate::infra::{ActionTriple, signed_bearing};
use crate::planners::heuristic::policy::PolicyConfig;
use crate::planners::heuristic::steering::approach_forward;
use crate::planners::heuristic::tactics::ExecuteTactic;
use crate::state::WorldSnapshot;

/// Chase the opponent carrier head-on and open fire once in laser range.
/// Never reverses: closing speed matters less than keeping the laser axis
/// on the carrier.
pub struct HuntOpponentTactic(pub usize);

impl ExecuteTactic for HuntOpponentTactic {
    fn execute(&self, world: &WorldSnapshot, config: &PolicyConfig, actions: &mut ActionTriple) {
        let target = &world.targets[self.0];
        let bearing = signed_bearing(world.position, world.forward, target.position);
        approach_forward(bearing, actions);

        let range = target.position.distance(&world.position);
        if range <= config.laser_range {
            debug!(range, "carrier in laser range, firing");
            actions.fire = true;
        }
    }
}
