//! Distance and direction helpers over the single simulation coordinate system.

use crate::constants::TARGET_ID_QUANTUM;
use crate::types::Vec3;

/// Straight-line distance between two points.
pub fn distance(a: Vec3, b: Vec3) -> f64 {
    a.distance(b)
}

/// Distance across the ground plane, ignoring altitude.
pub fn horizontal_distance(a: Vec3, b: Vec3) -> f64 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    (dx * dx + dz * dz).sqrt()
}

/// Unit vector from `from` toward `to`. Zero when the points coincide.
pub fn direction(from: Vec3, to: Vec3) -> Vec3 {
    (to - from).normalize_or_zero()
}

/// Yaw (radians) that faces from `from` toward `to`: `atan2(dx, dz)`.
pub fn yaw_toward(from: Vec3, to: Vec3) -> f64 {
    let d = to - from;
    d.x.atan2(d.z)
}

/// Quantize a position onto the identity grid.
pub fn quantize(v: Vec3) -> [i64; 3] {
    [
        (v.x / TARGET_ID_QUANTUM).round() as i64,
        (v.y / TARGET_ID_QUANTUM).round() as i64,
        (v.z / TARGET_ID_QUANTUM).round() as i64,
    ]
}

/// Whether every component is finite.
pub fn is_finite(v: Vec3) -> bool {
    v.is_finite()
}
