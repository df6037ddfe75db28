//! Priority-ordered tactic dispatch.
//!
//! The original four-branch conditional cascade is expressed as an ordered
//! rule list evaluated front to back; the first rule whose trigger holds
//! picks the tick's tactic. No rule matching means the smoothed defaults
//! from the previous tick stand.

use tracing::debug;

use crate::planners::heuristic::tactics::Tactic;
use crate::state::WorldSnapshot;

/// A rule in the priority chain; returns a tactic when its trigger holds.
pub trait SelectTactic {
    fn try_select(&self, world: &WorldSnapshot) -> Option<Tactic>;
}

/// Anything we carry goes home first, before any fighting or collecting.
struct ReturnCarriedTargets;

impl SelectTactic for ReturnCarriedTargets {
    fn try_select(&self, world: &WorldSnapshot) -> Option<Tactic> {
        let carried = world.carried_by_me_count();
        if carried >= 1 {
            debug!(carried, "carrying, returning to base");
            return Some(Tactic::ReturnToBase);
        }
        None
    }
}

/// With empty hands, an opponent walking off with a target is the threat
/// worth chasing down.
struct InterceptOpponentCarrier;

impl SelectTactic for InterceptOpponentCarrier {
    fn try_select(&self, world: &WorldSnapshot) -> Option<Tactic> {
        world.opponent_carried_target().map(|index| {
            debug!(target = index, "opponent carrying, hunting");
            Tactic::HuntOpponent(index)
        })
    }
}

/// Otherwise collect the loose target that is cheapest to bank: the one
/// already closest to our base.
struct CollectNearestToBase;

impl SelectTactic for CollectNearestToBase {
    fn try_select(&self, world: &WorldSnapshot) -> Option<Tactic> {
        world.nearest_uncaptured_target_to_base().map(|index| {
            debug!(target = index, "collecting target nearest to base");
            Tactic::CollectTarget(index)
        })
    }
}

/// Container for the rule chain, created once per agent.
pub struct TacticPlanner {
    rules: Vec<Box<dyn SelectTactic>>,
}

impl TacticPlanner {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(ReturnCarriedTargets),
                Box::new(InterceptOpponentCarrier),
                Box::new(CollectNearestToBase),
            ],
        }
    }

    /// First matching rule wins. `None` means no tactic applies this tick.
    pub fn select(&self, world: &WorldSnapshot) -> Option<Tactic> {
        self.rules.iter().find_map(|rule| rule.try_select(world))
    }
}

impl Default for TacticPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Vec3;
    use crate::state::TargetState;

    fn snapshot(targets: Vec<TargetState>) -> WorldSnapshot {
        WorldSnapshot {
            team: 1,
            position: Vec3::ZERO,
            forward: Vec3::new(0.0, 0.0, 1.0),
            local_velocity: (0.0, 0.0),
            heading: 0.0,
            home_base: Vec3::new(0.0, 0.0, -10.0),
            time_remaining: 90.0,
            frozen: false,
            targets,
        }
    }

    fn carried_at(x: f32, z: f32) -> TargetState {
        TargetState {
            position: Vec3::new(x, 0.0, z),
            carried: 2,
            in_base: 0,
        }
    }

    #[test]
    fn test_carrying_always_beats_hunting_and_collecting() {
        // Own carry, an opponent carrier, and a loose target all present.
        let world = snapshot(vec![
            carried_at(0.3, 0.3),
            carried_at(12.0, 4.0),
            TargetState::new(Vec3::new(0.0, 0.0, 3.0)),
        ]);
        assert_eq!(TacticPlanner::new().select(&world), Some(Tactic::ReturnToBase));
    }

    #[test]
    fn test_hunting_beats_collecting() {
        let world = snapshot(vec![
            TargetState::new(Vec3::new(0.0, 0.0, 3.0)),
            carried_at(12.0, 4.0),
        ]);
        assert_eq!(
            TacticPlanner::new().select(&world),
            Some(Tactic::HuntOpponent(1))
        );
    }

    #[test]
    fn test_collecting_is_the_fallback_tactic() {
        let world = snapshot(vec![
            TargetState::new(Vec3::new(0.0, 0.0, 30.0)),
            TargetState::new(Vec3::new(0.0, 0.0, 3.0)),
        ]);
        assert_eq!(
            TacticPlanner::new().select(&world),
            Some(Tactic::CollectTarget(1))
        );
    }

    #[test]
    fn test_no_tactic_when_nothing_matches() {
        let mut banked = TargetState::new(Vec3::new(0.0, 0.0, -10.0));
        banked.in_base = 1;
        let world = snapshot(vec![banked]);
        assert_eq!(TacticPlanner::new().select(&world), None);
    }

    #[test]
    fn test_no_tactic_on_empty_arena() {
        let world = snapshot(vec![]);
        assert_eq!(TacticPlanner::new().select(&world), None);
    }
}
