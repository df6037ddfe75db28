//! Rule-based per-tick decision procedure.
//!
//! Each tick the policy seeds the action triple from the previous tick's
//! movement commands (laser always starts off), lets the tactic planner
//! overwrite whichever commands the chosen tactic decides about, applies
//! the wall-avoidance override, and finally persists the movement pair for
//! the next tick. Carrying steering across ticks keeps motion smooth when
//! no rule fires.

use tracing::debug;

use crate::infra::{ActionTriple, MoveCommand, PhysicsProbe, RotateCommand};
use crate::planners::heuristic::avoidance;
use crate::planners::heuristic::planner::TacticPlanner;
use crate::state::WorldSnapshot;

/// Tunables for the rule-based policy, passed at construction.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    /// Maximum range at which the laser can hit the opponent carrier.
    pub laser_range: f32,
    /// Reach of the anti-stick wall probes along the facing axis.
    pub wall_probe_range: f32,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            laser_range: 20.0,
            wall_probe_range: 0.6,
        }
    }
}

/// The previous tick's movement commands, reused as the next tick's
/// defaults. Written once at the end of every decision, never mid-cycle.
/// The laser flag is deliberately not part of this: it is recomputed fresh
/// each tick so the agent cannot get stuck firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyMemory {
    pub move_cmd: MoveCommand,
    pub rotate_cmd: RotateCommand,
}

impl PolicyMemory {
    pub fn new() -> Self {
        Self {
            move_cmd: MoveCommand::Forward,
            rotate_cmd: RotateCommand::None,
        }
    }
}

impl Default for PolicyMemory {
    fn default() -> Self {
        Self::new()
    }
}

/// Deterministic hand-authored policy, one instance per agent.
pub struct HeuristicPolicy {
    config: PolicyConfig,
    planner: TacticPlanner,
    memory: PolicyMemory,
}

impl HeuristicPolicy {
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            config,
            planner: TacticPlanner::new(),
            memory: PolicyMemory::new(),
        }
    }

    /// Run one decision cycle and return the tick's action triple.
    #[tracing::instrument(level = "debug", skip(self, world, probe))]
    pub fn decide(&mut self, world: &WorldSnapshot, probe: &dyn PhysicsProbe) -> ActionTriple {
        let mut actions = ActionTriple {
            move_cmd: self.memory.move_cmd,
            rotate_cmd: self.memory.rotate_cmd,
            fire: false,
        };

        if let Some(tactic) = self.planner.select(world) {
            debug!(tactic = %tactic.to_display_string(), "executing tactic");
            tactic.execute(world, &self.config, &mut actions);
        } else {
            debug!("no tactic applies, keeping previous steering");
        }

        avoidance::apply_wall_override(world, probe, &self.config, &mut actions);

        self.memory.move_cmd = actions.move_cmd;
        self.memory.rotate_cmd = actions.rotate_cmd;
        actions
    }

    pub fn memory(&self) -> PolicyMemory {
        self.memory
    }
}
