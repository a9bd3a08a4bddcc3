//! Fundamental geometric and simulation types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enums::GroundKind;
use crate::spatial;

/// 3D vector in simulation space.
/// x and z span the ground plane, y is altitude.
pub type Vec3 = glam::DVec3;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of updates run since the mission started.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one update of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Structural identity of a ground entity.
///
/// Derived from the entity kind and its spawn position quantized to
/// integer multiples of `TARGET_ID_QUANTUM`, so two spawns at the same
/// place always map to the same key regardless of float formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TargetId {
    pub kind: GroundKind,
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl TargetId {
    pub fn from_spawn(kind: GroundKind, position: Vec3) -> Self {
        let [x, y, z] = spatial::quantize(position);
        Self { kind, x, y, z }
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}:{}", self.kind, self.x, self.y, self.z)
    }
}
