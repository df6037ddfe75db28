//! Discrete per-tick output consumed by the engine actuator.

/// Forward-axis command. Discriminants match the engine's discrete action
/// encoding (0 = nothing, 1 = forward, 2 = backward).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveCommand {
    #[default]
    None = 0,
    Forward = 1,
    Backward = 2,
}

/// Rotate-axis command (0 = nothing, 1 = right, 2 = left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotateCommand {
    #[default]
    None = 0,
    Right = 1,
    Left = 2,
}

/// One tick's worth of agent output: movement, rotation, and whether the
/// laser is firing. Produced fresh each tick; no identity across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionTriple {
    pub move_cmd: MoveCommand,
    pub rotate_cmd: RotateCommand,
    pub fire: bool,
}

impl ActionTriple {
    /// Fully neutral action: no movement, no rotation, laser off.
    pub fn idle() -> Self {
        Self {
            move_cmd: MoveCommand::None,
            rotate_cmd: RotateCommand::None,
            fire: false,
        }
    }
}

impl Default for ActionTriple {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_action_is_neutral() {
        let action = ActionTriple::idle();
        assert_eq!(action.move_cmd, MoveCommand::None);
        assert_eq!(action.rotate_cmd, RotateCommand::None);
        assert!(!action.fire);
    }

    #[test]
    fn test_command_discriminants_match_engine_encoding() {
        assert_eq!(MoveCommand::Forward as u8, 1);
        assert_eq!(MoveCommand::Backward as u8, 2);
        assert_eq!(RotateCommand::Right as u8, 1);
        assert_eq!(RotateCommand::Left as u8, 2);
    }
}
