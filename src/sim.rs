//! Scripted kinematic arena for running the agent end to end without the
//! real engine. Implements the collaborator traits with just enough physics
//! for a demo match: fixed-step integration of the action triple, positional
//! target pickup and base deposit, a scripted opponent, and axis-aligned
//! walls for the probe.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::infra::{
    ActionTriple, Actuator, MoveCommand, PhysicsProbe, ProbeHit, RotateCommand, SurfaceTag,
    VectorSensor, Vec3,
};
use crate::state::{TargetState, WorldSnapshot};

const TICK_SECONDS: f32 = 0.02;
const DRIVE_SPEED: f32 = 5.0;
/// Degrees per second.
const TURN_RATE: f32 = 150.0;
const ARENA_HALF_EXTENT: f32 = 25.0;
const BASE_RADIUS: f32 = 2.0;
const PICKUP_RADIUS: f32 = 0.8;
const LASER_RANGE: f32 = 20.0;
const FREEZE_TICKS: u32 = 150;
const OPPONENT_SPEED: f32 = 3.5;

const MY_TEAM: u32 = 1;
const OPPONENT_TEAM: u32 = 2;

#[derive(Debug, Clone, Copy)]
struct SimTarget {
    position: Vec3,
    carried: u32,
    in_base: u32,
}

/// Tally of where the targets ended up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub banked_by_us: usize,
    pub banked_by_opponent: usize,
    pub loose: usize,
}

pub struct DemoArena {
    tick: u32,
    max_ticks: u32,
    position: Vec3,
    velocity: Vec3,
    /// Agent heading in degrees about the vertical axis; 0 faces +z.
    heading: f32,
    home_base: Vec3,
    opponent_base: Vec3,
    opponent: Vec3,
    opponent_frozen: u32,
    opponent_carrying: Option<usize>,
    targets: Vec<SimTarget>,
}

impl DemoArena {
    pub fn new(seed: u64, target_count: usize, max_ticks: u32) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let spread = ARENA_HALF_EXTENT - 5.0;
        let targets = (0..target_count)
            .map(|_| SimTarget {
                position: Vec3::new(
                    rng.random_range(-spread..spread),
                    0.0,
                    rng.random_range(-spread..spread),
                ),
                carried: 0,
                in_base: 0,
            })
            .collect();

        Self {
            tick: 0,
            max_ticks,
            position: Vec3::new(0.0, 0.0, -ARENA_HALF_EXTENT + 3.0),
            velocity: Vec3::ZERO,
            heading: 0.0,
            home_base: Vec3::new(0.0, 0.0, -ARENA_HALF_EXTENT + 1.5),
            opponent_base: Vec3::new(0.0, 0.0, ARENA_HALF_EXTENT - 1.5),
            opponent: Vec3::new(0.0, 0.0, ARENA_HALF_EXTENT - 3.0),
            opponent_frozen: 0,
            opponent_carrying: None,
            targets,
        }
    }

    fn forward(&self) -> Vec3 {
        let radians = self.heading.to_radians();
        Vec3::new(radians.sin(), 0.0, radians.cos())
    }

    fn right(&self) -> Vec3 {
        let radians = (self.heading + 90.0).to_radians();
        Vec3::new(radians.sin(), 0.0, radians.cos())
    }

    /// World state as the engine would report it this tick.
    pub fn snapshot(&self) -> WorldSnapshot {
        let forward = self.forward();
        let right = self.right();
        let lateral = self.velocity.x * right.x + self.velocity.z * right.z;
        let along = self.velocity.x * forward.x + self.velocity.z * forward.z;
        let remaining_ticks = self.max_ticks.saturating_sub(self.tick);

        WorldSnapshot {
            team: MY_TEAM,
            position: self.position,
            forward,
            local_velocity: (lateral, along),
            heading: self.heading,
            home_base: self.home_base,
            time_remaining: remaining_ticks as f32 * TICK_SECONDS,
            frozen: false,
            targets: self
                .targets
                .iter()
                .map(|target| TargetState {
                    position: target.position,
                    carried: target.carried,
                    in_base: target.in_base,
                })
                .collect(),
        }
    }

    /// Advance the arena one fixed step under the given action.
    pub fn step(&mut self, action: &ActionTriple) {
        match action.rotate_cmd {
            RotateCommand::Right => self.heading += TURN_RATE * TICK_SECONDS,
            RotateCommand::Left => self.heading -= TURN_RATE * TICK_SECONDS,
            RotateCommand::None => {}
        }
        if self.heading > 180.0 {
            self.heading -= 360.0;
        } else if self.heading < -180.0 {
            self.heading += 360.0;
        }

        let before = self.position;
        let forward = self.forward();
        match action.move_cmd {
            MoveCommand::Forward => {
                self.advance(forward.scaled(DRIVE_SPEED * TICK_SECONDS));
            }
            MoveCommand::Backward => {
                self.advance((-forward).scaled(DRIVE_SPEED * TICK_SECONDS));
            }
            MoveCommand::None => {}
        }
        self.velocity = (self.position - before).scaled(1.0 / TICK_SECONDS);

        self.resolve_laser(action);
        self.update_carried_targets();
        self.update_opponent();
        self.tick += 1;
    }

    fn advance(&mut self, delta: Vec3) {
        let limit = ARENA_HALF_EXTENT - 0.5;
        self.position.x = (self.position.x + delta.x).clamp(-limit, limit);
        self.position.z = (self.position.z + delta.z).clamp(-limit, limit);
    }

    fn resolve_laser(&mut self, action: &ActionTriple) {
        if !action.fire || self.opponent_frozen > 0 {
            return;
        }
        if self.position.distance(&self.opponent) <= LASER_RANGE {
            debug!(tick = self.tick, "opponent hit, frozen");
            self.opponent_frozen = FREEZE_TICKS;
            if let Some(index) = self.opponent_carrying.take() {
                self.targets[index].carried = 0;
            }
        }
    }

    fn update_carried_targets(&mut self) {
        for index in 0..self.targets.len() {
            let target = self.targets[index];
            if target.carried == 0 && target.in_base != MY_TEAM {
                let near_x = (target.position.x - self.position.x).abs() < PICKUP_RADIUS;
                let near_z = (target.position.z - self.position.z).abs() < PICKUP_RADIUS;
                if near_x && near_z {
                    debug!(tick = self.tick, target = index, "picked up target");
                    self.targets[index].carried = MY_TEAM;
                    self.targets[index].in_base = 0;
                }
            }
        }

        let banking = self.position.horizontal_distance(&self.home_base) <= BASE_RADIUS;
        for (index, target) in self.targets.iter_mut().enumerate() {
            if target.carried == MY_TEAM {
                target.position = self.position;
                if banking {
                    info!(tick = self.tick, target = index, "target banked at home base");
                    target.carried = 0;
                    target.in_base = MY_TEAM;
                    target.position = self.home_base;
                }
            }
        }
    }

    fn update_opponent(&mut self) {
        if self.opponent_frozen > 0 {
            self.opponent_frozen -= 1;
            return;
        }

        let destination = match self.opponent_carrying {
            Some(index) => {
                self.targets[index].position = self.opponent;
                self.opponent_base
            }
            None => {
                let candidate = self
                    .targets
                    .iter()
                    .enumerate()
                    .filter(|(_, target)| target.carried == 0 && target.in_base == 0)
                    .min_by(|(_, a), (_, b)| {
                        let da = a.position.distance(&self.opponent);
                        let db = b.position.distance(&self.opponent);
                        da.total_cmp(&db)
                    })
                    .map(|(index, _)| index);
                match candidate {
                    Some(index) => self.targets[index].position,
                    None => return,
                }
            }
        };

        let delta = destination - self.opponent;
        let span = (delta.x * delta.x + delta.z * delta.z).sqrt();
        let step = OPPONENT_SPEED * TICK_SECONDS;
        if span > step {
            self.opponent.x += delta.x / span * step;
            self.opponent.z += delta.z / span * step;
        } else {
            self.opponent.x = destination.x;
            self.opponent.z = destination.z;
        }

        match self.opponent_carrying {
            Some(index) => {
                if self.opponent.horizontal_distance(&self.opponent_base) <= BASE_RADIUS {
                    debug!(tick = self.tick, target = index, "opponent banked a target");
                    self.targets[index].carried = 0;
                    self.targets[index].in_base = OPPONENT_TEAM;
                    self.targets[index].position = self.opponent_base;
                    self.opponent_carrying = None;
                }
            }
            None => {
                for index in 0..self.targets.len() {
                    let target = self.targets[index];
                    if target.carried == 0
                        && target.in_base == 0
                        && self.opponent.horizontal_distance(&target.position) <= PICKUP_RADIUS
                    {
                        self.targets[index].carried = OPPONENT_TEAM;
                        self.opponent_carrying = Some(index);
                        break;
                    }
                }
            }
        }
    }

    pub fn match_over(&self) -> bool {
        if self.tick >= self.max_ticks {
            return true;
        }
        self.targets.iter().all(|target| target.in_base != 0)
    }

    pub fn report(&self) -> MatchReport {
        let banked_by_us = self
            .targets
            .iter()
            .filter(|target| target.in_base == MY_TEAM)
            .count();
        let banked_by_opponent = self
            .targets
            .iter()
            .filter(|target| target.in_base == OPPONENT_TEAM)
            .count();
        MatchReport {
            banked_by_us,
            banked_by_opponent,
            loose: self.targets.len() - banked_by_us - banked_by_opponent,
        }
    }
}

impl PhysicsProbe for DemoArena {
    fn probe(&self, origin: Vec3, direction: Vec3, max_range: f32) -> Option<ProbeHit> {
        let mut nearest: Option<f32> = None;
        let planes = [
            (direction.x, origin.x, ARENA_HALF_EXTENT),
            (direction.x, origin.x, -ARENA_HALF_EXTENT),
            (direction.z, origin.z, ARENA_HALF_EXTENT),
            (direction.z, origin.z, -ARENA_HALF_EXTENT),
        ];
        for (component, start, bound) in planes {
            if component.abs() < 1e-6 {
                continue;
            }
            let t = (bound - start) / component;
            if t >= 0.0 && t <= max_range && nearest.is_none_or(|best| t < best) {
                nearest = Some(t);
            }
        }
        nearest.map(|distance| ProbeHit {
            tag: SurfaceTag::Wall,
            distance,
        })
    }
}

/// Actuator that records the applied action and traces it; the arena itself
/// integrates the motion in [`DemoArena::step`].
#[derive(Debug, Default)]
pub struct LoggingActuator {
    pub last_action: Option<ActionTriple>,
}

impl Actuator for LoggingActuator {
    fn apply(&mut self, action: &ActionTriple) {
        debug!(?action, "actuator applying action");
        self.last_action = Some(*action);
    }
}

/// Sensor stand-in for the learning system: keeps the latest observation
/// vector so the demo can report its shape.
#[derive(Debug, Default)]
pub struct LoggingSensor {
    pub last_observations: Vec<f32>,
}

impl VectorSensor for LoggingSensor {
    fn accept(&mut self, observations: &[f32]) {
        self.last_observations.clear();
        self.last_observations.extend_from_slice(observations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Agent;
    use crate::planners::heuristic::PolicyConfig;

    #[test]
    fn test_forward_step_moves_along_facing_axis() {
        let mut arena = DemoArena::new(1, 0, 100);
        let start = arena.snapshot().position;
        let mut action = ActionTriple::idle();
        action.move_cmd = MoveCommand::Forward;
        arena.step(&action);
        let after = arena.snapshot();
        assert!(after.position.z > start.z);
        assert!(after.local_velocity.1 > 0.0);
    }

    #[test]
    fn test_probe_reports_wall_only_at_close_range() {
        let arena = DemoArena::new(1, 0, 100);
        let at_wall = Vec3::new(0.0, 0.0, ARENA_HALF_EXTENT - 0.4);
        let facing_wall = Vec3::new(0.0, 0.0, 1.0);
        let hit = arena.probe(at_wall, facing_wall, 0.6).expect("wall in range");
        assert_eq!(hit.tag, SurfaceTag::Wall);
        assert!((hit.distance - 0.4).abs() < 1e-4);
        assert_eq!(arena.probe(Vec3::ZERO, facing_wall, 0.6), None);
    }

    #[test]
    fn test_demo_match_runs_to_completion() {
        let mut arena = DemoArena::new(7, 4, 6000);
        let mut agent = Agent::new(PolicyConfig::default());
        let mut actuator = LoggingActuator::default();
        let mut sensor = LoggingSensor::default();

        while !arena.match_over() {
            let world = arena.snapshot();
            let action = agent.tick(&world, &arena, &mut actuator, &mut sensor);
            arena.step(&action);
        }

        let report = arena.report();
        assert_eq!(report.banked_by_us + report.banked_by_opponent + report.loose, 4);
        assert_eq!(sensor.last_observations.len(), 11 + 5 * 4);

        // The agent never escapes the walls.
        let world = arena.snapshot();
        assert!(world.position.x.abs() <= ARENA_HALF_EXTENT);
        assert!(world.position.z.abs() <= ARENA_HALF_EXTENT);
    }
}
