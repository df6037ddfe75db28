mod actions;
pub mod geometry;
mod interfaces;
mod types;

pub use actions::{ActionTriple, MoveCommand, RotateCommand};
pub use geometry::signed_bearing;
pub use interfaces::{Actuator, PhysicsProbe, ProbeHit, SurfaceTag, VectorSensor};
pub use types::Vec3;
