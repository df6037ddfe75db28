//! Discrete steering: turn-or-advance decisions toward a bearing.
//!
//! Each call writes exactly one command into the tick's action triple:
//! either a rotation toward the target or a drive along the facing axis.
//! The untouched command keeps whatever default it was seeded with.

use crate::infra::{ActionTriple, MoveCommand, RotateCommand};

/// Heading deadband in degrees. Within it the agent drives instead of
/// turning; outside it the agent turns toward the shorter side.
const TURN_DEADBAND: f32 = 5.0;

/// Drive forward once the target is inside the deadband, otherwise rotate
/// toward it. Negative bearing means the target is to the right.
pub fn approach_forward(bearing: f32, actions: &mut ActionTriple) {
    if bearing < -TURN_DEADBAND {
        actions.rotate_cmd = RotateCommand::Right;
    } else if bearing > TURN_DEADBAND {
        actions.rotate_cmd = RotateCommand::Left;
    } else {
        actions.move_cmd = MoveCommand::Forward;
    }
}

/// Mirror of [`approach_forward`] for targets behind the agent: line the
/// tail up using the same deadband against the supplement of the bearing,
/// then reverse toward the target.
pub fn approach_backward(bearing: f32, actions: &mut ActionTriple) {
    if bearing > -(180.0 - TURN_DEADBAND) && bearing < -90.0 {
        actions.rotate_cmd = RotateCommand::Left;
    } else if bearing < 180.0 - TURN_DEADBAND && bearing > 90.0 {
        actions.rotate_cmd = RotateCommand::Right;
    } else {
        actions.move_cmd = MoveCommand::Backward;
    }
}

/// Take whichever approach needs the least turning: forward when the target
/// is at most 90 degrees off the nose, backward otherwise. Reversing is
/// cheaper than a half turn when the target sits behind the agent.
pub fn approach_fastest(bearing: f32, actions: &mut ActionTriple) {
    if bearing.abs() <= 90.0 {
        approach_forward(bearing, actions);
    } else {
        approach_backward(bearing, actions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn writes_exactly_one_command(bearing: f32, steer: fn(f32, &mut ActionTriple)) {
        let mut actions = ActionTriple::idle();
        steer(bearing, &mut actions);
        let moved = actions.move_cmd != MoveCommand::None;
        let rotated = actions.rotate_cmd != RotateCommand::None;
        assert!(
            moved != rotated,
            "bearing {bearing}: expected exactly one of move/rotate, got {actions:?}"
        );
    }

    #[test]
    fn test_forward_within_deadband_drives() {
        let mut actions = ActionTriple::idle();
        approach_forward(3.0, &mut actions);
        assert_eq!(actions.move_cmd, MoveCommand::Forward);
        assert_eq!(actions.rotate_cmd, RotateCommand::None);
    }

    #[test]
    fn test_forward_deadband_boundary_drives() {
        let mut actions = ActionTriple::idle();
        approach_forward(5.0, &mut actions);
        assert_eq!(actions.move_cmd, MoveCommand::Forward);

        let mut actions = ActionTriple::idle();
        approach_forward(-5.0, &mut actions);
        assert_eq!(actions.move_cmd, MoveCommand::Forward);
    }

    #[test]
    fn test_forward_turns_toward_target() {
        let mut actions = ActionTriple::idle();
        approach_forward(-30.0, &mut actions);
        assert_eq!(actions.rotate_cmd, RotateCommand::Right);

        let mut actions = ActionTriple::idle();
        approach_forward(30.0, &mut actions);
        assert_eq!(actions.rotate_cmd, RotateCommand::Left);
    }

    #[test]
    fn test_forward_writes_exactly_one_command() {
        for bearing in [-180.0, -91.0, -5.1, -5.0, 0.0, 5.0, 5.1, 91.0, 180.0] {
            writes_exactly_one_command(bearing, approach_forward);
        }
    }

    #[test]
    fn test_backward_reverses_when_lined_up() {
        let mut actions = ActionTriple::idle();
        approach_backward(179.0, &mut actions);
        assert_eq!(actions.move_cmd, MoveCommand::Backward);

        let mut actions = ActionTriple::idle();
        approach_backward(-176.0, &mut actions);
        assert_eq!(actions.move_cmd, MoveCommand::Backward);
    }

    #[test]
    fn test_backward_turns_tail_toward_target() {
        let mut actions = ActionTriple::idle();
        approach_backward(-120.0, &mut actions);
        assert_eq!(actions.rotate_cmd, RotateCommand::Left);

        let mut actions = ActionTriple::idle();
        approach_backward(120.0, &mut actions);
        assert_eq!(actions.rotate_cmd, RotateCommand::Right);
    }

    #[test]
    fn test_fastest_prefers_forward_up_to_quarter_turn() {
        let mut actions = ActionTriple::idle();
        approach_fastest(90.0, &mut actions);
        assert_eq!(actions.rotate_cmd, RotateCommand::Left);
        assert_eq!(actions.move_cmd, MoveCommand::None);

        let mut actions = ActionTriple::idle();
        approach_fastest(-90.0, &mut actions);
        assert_eq!(actions.rotate_cmd, RotateCommand::Right);
    }

    #[test]
    fn test_fastest_reverses_past_quarter_turn() {
        let mut actions = ActionTriple::idle();
        approach_fastest(90.1, &mut actions);
        assert_eq!(actions.rotate_cmd, RotateCommand::Right);

        let mut actions = ActionTriple::idle();
        approach_fastest(178.0, &mut actions);
        assert_eq!(actions.move_cmd, MoveCommand::Backward);
    }

    #[test]
    fn test_fastest_writes_exactly_one_command() {
        for bearing in [-180.0, -135.0, -90.0, -45.0, 0.0, 45.0, 90.0, 135.0, 180.0] {
            writes_exactly_one_command(bearing, approach_fastest);
        }
    }
}
