//! Minimal rotation from the canonical up axis onto an edge direction.

use config::constants::DIRECTION_EPSILON;
use glam::{DQuat, DVec3};

/// Returns the rotation that carries `+Y` onto `direction`.
///
/// `direction` must be normalized. Directions within [`DIRECTION_EPSILON`]
/// of `+Y` get the identity and those within it of `-Y` get a half turn about
/// X. Otherwise the axis is `Y x direction = (z, 0, -x)` and the angle is
/// `acos(direction.y)`.
///
/// # Example
///
/// ```rust
/// use tube_wireframe::quat_from_direction;
/// use glam::{DQuat, DVec3};
///
/// assert_eq!(quat_from_direction(DVec3::Y), DQuat::IDENTITY);
/// let q = quat_from_direction(DVec3::X);
/// assert!((q * DVec3::Y).abs_diff_eq(DVec3::X, 1e-12));
/// ```
pub fn quat_from_direction(direction: DVec3) -> DQuat {
    if direction.y > 1.0 - DIRECTION_EPSILON {
        DQuat::IDENTITY
    } else if direction.y < -(1.0 - DIRECTION_EPSILON) {
        DQuat::from_xyzw(1.0, 0.0, 0.0, 0.0)
    } else {
        let axis = DVec3::new(direction.z, 0.0, -direction.x).normalize();
        DQuat::from_axis_angle(axis, direction.y.clamp(-1.0, 1.0).acos())
    }
}
