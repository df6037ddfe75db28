use crate::infra::ActionTriple;
use crate::planners::heuristic::policy::PolicyConfig;
use crate::state::WorldSnapshot;

// Tactic modules
pub mod collect_target;
pub mod hunt_opponent;
pub mod return_to_base;

use collect_target::CollectTargetTactic;
use hunt_opponent::HuntOpponentTactic;
use return_to_base::ReturnToBaseTactic;

/// Trait for executing a selected tactic into the tick's action triple.
/// Implementations overwrite only the commands they decide about; seeded
/// defaults survive everywhere else.
pub trait ExecuteTactic {
    fn execute(&self, world: &WorldSnapshot, config: &PolicyConfig, actions: &mut ActionTriple);
}

/// One tick's tactical choice. Target-directed variants carry the index of
/// the chosen target in the snapshot's scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    ReturnToBase,
    HuntOpponent(usize),
    CollectTarget(usize),
}

impl Tactic {
    pub fn execute(&self, world: &WorldSnapshot, config: &PolicyConfig, actions: &mut ActionTriple) {
        match self {
            Tactic::ReturnToBase => ReturnToBaseTactic.execute(world, config, actions),
            Tactic::HuntOpponent(index) => HuntOpponentTactic(*index).execute(world, config, actions),
            Tactic::CollectTarget(index) => {
                CollectTargetTactic(*index).execute(world, config, actions)
            }
        }
    }

    /// Format tactic as a display string for logging
    pub fn to_display_string(&self) -> String {
        match self {
            Tactic::ReturnToBase => "ReturnToBase".to_string(),
            Tactic::HuntOpponent(index) => format!("HuntOpponent({index})"),
            Tactic::CollectTarget(index) => format!("CollectTarget({index})"),
        }
    }
}
