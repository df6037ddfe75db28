mod avoidance;
mod planner;
mod policy;
mod steering;
mod tactics;

pub use planner::{SelectTactic, TacticPlanner};
pub use policy::{HeuristicPolicy, PolicyConfig, PolicyMemory};
pub use tactics::Tactic;
