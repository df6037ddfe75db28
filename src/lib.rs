pub mod game;
pub mod infra;
pub mod planners;
pub mod sim;
pub mod state;

// Re-export commonly used types for convenience
pub use game::Agent;
pub use infra::{ActionTriple, MoveCommand, RotateCommand, Vec3};
pub use planners::heuristic::{HeuristicPolicy, PolicyConfig};
pub use planners::rl::ObservationEncoder;
pub use state::{TargetState, WorldSnapshot};
