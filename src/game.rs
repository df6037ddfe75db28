//! Per-tick wiring between the world, the decision core, and the engine
//! collaborators.

use tracing::debug;

use crate::infra::{ActionTriple, Actuator, PhysicsProbe, VectorSensor};
use crate::planners::heuristic::{HeuristicPolicy, PolicyConfig};
use crate::planners::rl::ObservationEncoder;
use crate::state::WorldSnapshot;

/// One arena agent: a heuristic policy for control plus an observation
/// encoder feeding whatever learning system sits behind the sensor.
pub struct Agent {
    policy: HeuristicPolicy,
    encoder: ObservationEncoder,
}

impl Agent {
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            policy: HeuristicPolicy::new(config),
            encoder: ObservationEncoder::new(),
        }
    }

    /// Run one simulation step: publish observations, then decide and act.
    /// The encoder and the policy read the same snapshot but are otherwise
    /// independent; the sensor consumer never sees the heuristic's output.
    pub fn tick(
        &mut self,
        world: &WorldSnapshot,
        probe: &dyn PhysicsProbe,
        actuator: &mut dyn Actuator,
        sensor: &mut dyn VectorSensor,
    ) -> ActionTriple {
        let observations = self.encoder.encode(world);
        sensor.accept(&observations);

        let action = self.policy.decide(world, probe);
        debug!(?action, "applying action");
        actuator.apply(&action);
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MoveCommand, ProbeHit, Vec3};
    use crate::state::TargetState;

    struct OpenArena;

    impl PhysicsProbe for OpenArena {
        fn probe(&self, _origin: Vec3, _direction: Vec3, _max_range: f32) -> Option<ProbeHit> {
            None
        }
    }

    #[derive(Default)]
    struct RecordingActuator(Vec<ActionTriple>);

    impl Actuator for RecordingActuator {
        fn apply(&mut self, action: &ActionTriple) {
            self.0.push(*action);
        }
    }

    #[derive(Default)]
    struct RecordingSensor(Vec<usize>);

    impl VectorSensor for RecordingSensor {
        fn accept(&mut self, observations: &[f32]) {
            self.0.push(observations.len());
        }
    }

    #[test]
    fn test_tick_feeds_sensor_and_actuator_once() {
        let world = WorldSnapshot {
            team: 1,
            position: Vec3::ZERO,
            forward: Vec3::new(0.0, 0.0, 1.0),
            local_velocity: (0.0, 0.0),
            heading: 0.0,
            home_base: Vec3::new(0.0, 0.0, 10.0),
            time_remaining: 60.0,
            frozen: false,
            targets: vec![TargetState::new(Vec3::new(0.0, 0.0, 5.0))],
        };
        let mut agent = Agent::new(PolicyConfig::default());
        let mut actuator = RecordingActuator::default();
        let mut sensor = RecordingSensor::default();

        let action = agent.tick(&world, &OpenArena, &mut actuator, &mut sensor);

        assert_eq!(sensor.0, vec![16]);
        assert_eq!(actuator.0, vec![action]);
        assert_eq!(action.move_cmd, MoveCommand::Forward);
    }
}
