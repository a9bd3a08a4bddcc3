//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{TargetId, Vec3};

/// Something the host may want to react to (sound, effect, log line).
/// Collected during a tick and drained into that tick's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A ground entity entered the scan radius for the first time.
    TargetDetected { kind: GroundKind, target_id: TargetId },
    MissionPhaseChanged { from: MissionPhase, to: MissionPhase },
    LockAcquiring { target_id: TargetId },
    LockAcquired { target_id: TargetId },
    /// An acquiring or locked attempt was dropped.
    LockBroken { target_id: TargetId },
    WeaponFired {
        munition_id: u32,
        weapon: WeaponKind,
        target_id: TargetId,
    },
    /// Munition reached its aim point.
    Explosion { weapon: WeaponKind, position: Vec3 },
    TargetDestroyed { kind: GroundKind, target_id: TargetId },
    AmmoExpended { weapon: WeaponKind },
    CraftHit { amount: u32, health: u32 },
    CraftDown { position: Vec3 },
    CraftGrounded { position: Vec3 },
    JamStarted { jam: JamKind, duration_secs: f64 },
    JamCleared { jam: JamKind },
    CraftSpotted { site_id: u32 },
    CraftLost { site_id: u32 },
    CounterFireLaunched {
        id: u32,
        site_id: u32,
        kind: CounterFireKind,
        target_position: Vec3,
    },
    CounterFireImpact {
        id: u32,
        kind: CounterFireKind,
        position: Vec3,
    },
    CommandRejected { command: String, reason: String },
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
