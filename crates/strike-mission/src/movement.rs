//! Flight integration toward a destination.

use strike_core::constants::{APPROACH_GAIN, REFERENCE_FRAME_RATE};
use strike_core::spatial;
use strike_core::types::Vec3;

/// Result of one integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementUpdate {
    pub position: Vec3,
    pub rotation: Vec3,
    /// The craft was already within the arrival threshold; nothing moved.
    pub arrived: bool,
}

/// Level attitude facing from `from` toward `to`.
fn level_facing(from: Vec3, to: Vec3) -> Vec3 {
    Vec3::new(0.0, spatial::yaw_toward(from, to), 0.0)
}

/// Clamp a manual destination to the floor altitude.
pub fn floor_destination(destination: Vec3, floor: f64) -> Vec3 {
    Vec3::new(destination.x, destination.y.max(floor), destination.z)
}

/// Constant-speed step for operator-commanded moves.
///
/// Covers `speed` units per reference frame, never overshoots, and keeps
/// the craft at or above `floor`.
pub fn manual_step(
    position: Vec3,
    rotation: Vec3,
    destination: Vec3,
    speed: f64,
    floor: f64,
    epsilon: f64,
    delta: f64,
) -> MovementUpdate {
    let end = floor_destination(destination, floor);
    let remaining = spatial::distance(position, end);

    if remaining < epsilon {
        return MovementUpdate {
            position,
            rotation,
            arrived: true,
        };
    }

    let step = (speed * delta * REFERENCE_FRAME_RATE).min(remaining);
    let mut next = position + spatial::direction(position, end) * step;
    next.y = next.y.max(floor);

    MovementUpdate {
        position: next,
        rotation: level_facing(position, end),
        arrived: false,
    }
}

/// Exponential-approach step for mission legs.
///
/// Closes a fixed fraction of the remaining distance per second, so the
/// arrival threshold is always reached.
pub fn approach_step(
    position: Vec3,
    rotation: Vec3,
    destination: Vec3,
    speed: f64,
    epsilon: f64,
    delta: f64,
) -> MovementUpdate {
    let remaining = spatial::distance(position, destination);

    if remaining < epsilon {
        return MovementUpdate {
            position,
            rotation,
            arrived: true,
        };
    }

    let fraction = (speed * APPROACH_GAIN * delta).clamp(0.0, 1.0);
    MovementUpdate {
        position: position.lerp(destination, fraction),
        rotation: level_facing(position, destination),
        arrived: false,
    }
}

/// Fraction of a leg covered, never below `previous`.
pub fn leg_progress(origin: Vec3, destination: Vec3, position: Vec3, previous: f64) -> f64 {
    let leg = spatial::distance(origin, destination);
    if leg <= f64::EPSILON {
        return 1.0;
    }
    let covered = 1.0 - spatial::distance(position, destination) / leg;
    covered.clamp(0.0, 1.0).max(previous)
}
