//! Bearing and angle helpers for horizontal-plane navigation.

use crate::infra::Vec3;

/// Signed angle in degrees between the direction agent→target and the
/// agent's forward axis, measured about the vertical axis, in [-180, 180].
/// Positive means the target lies to the left of forward, negative to the
/// right; straight ahead is 0 and dead astern is ±180.
pub fn signed_bearing(position: Vec3, forward: Vec3, target: Vec3) -> f32 {
    let dx = target.x - position.x;
    let dz = target.z - position.z;
    let cross = dz * forward.x - dx * forward.z;
    let dot = dx * forward.x + dz * forward.z;
    cross.atan2(dot).to_degrees()
}
