mod world;

pub use world::{TargetState, WorldSnapshot};
