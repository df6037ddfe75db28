//! Read-only world model handed to the decision core each tick.

use crate::infra::Vec3;

/// Horizontal radius within which a carried target is attributed to this
/// agent. Carrying is modeled positionally by the engine, so ownership is
/// inferred from proximity rather than an explicit carrier link.
const CARRY_RADIUS: f32 = 1.0;

/// Initial sentinel for the closest-to-base scan. Targets farther than this
/// from the base are never selected, so it doubles as a search cap.
const BASE_SEARCH_CAP: f32 = 200.0;

/// Per-target state as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetState {
    pub position: Vec3,
    /// 0 when uncarried, otherwise the team id of the carrier.
    pub carried: u32,
    /// 0 when loose, otherwise the team id owning the base it rests in.
    pub in_base: u32,
}

impl TargetState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            carried: 0,
            in_base: 0,
        }
    }
}

/// Everything the policy and encoder read in one tick. Owned and mutated by
/// the external simulation; the decision core only reads it. The target list
/// must be populated by the caller and its iteration order is significant:
/// selection ties and the observation layout both follow scan order.
#[derive(Debug, Clone)]
pub struct WorldSnapshot {
    /// This agent's team id.
    pub team: u32,
    pub position: Vec3,
    /// Unit vector along the agent's facing axis, horizontal.
    pub forward: Vec3,
    /// Agent velocity in the agent-local frame: (lateral, forward).
    pub local_velocity: (f32, f32),
    /// Scalar heading about the vertical axis.
    pub heading: f32,
    pub home_base: Vec3,
    pub time_remaining: f32,
    pub frozen: bool,
    pub targets: Vec<TargetState>,
}

impl WorldSnapshot {
    /// Whether `target` sits within the carry-attribution radius of this
    /// agent on both horizontal axes.
    fn within_carry_radius(&self, target: &TargetState) -> bool {
        (target.position.x - self.position.x).abs() < CARRY_RADIUS
            && (target.position.z - self.position.z).abs() < CARRY_RADIUS
    }

    /// Number of targets this agent is carrying right now.
    pub fn carried_by_me_count(&self) -> usize {
        self.targets
            .iter()
            .filter(|target| target.carried != 0 && self.within_carry_radius(target))
            .count()
    }

    /// Index of the first target carried by the opponent, in scan order.
    pub fn opponent_carried_target(&self) -> Option<usize> {
        self.targets
            .iter()
            .position(|target| target.carried != 0 && !self.within_carry_radius(target))
    }

    /// Index of the loose, uncaptured target closest to our home base.
    /// First-encountered wins ties; everything farther than the search cap
    /// yields `None`.
    pub fn nearest_uncaptured_target_to_base(&self) -> Option<usize> {
        let mut best_distance = BASE_SEARCH_CAP;
        let mut best = None;
        for (index, target) in self.targets.iter().enumerate() {
            let to_base = target.position.distance(&self.home_base);
            if to_base < best_distance && target.carried == 0 && target.in_base != self.team {
                best_distance = to_base;
                best = Some(index);
            }
        }
        best
    }
}
