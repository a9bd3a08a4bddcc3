//! Operator commands sent from the host to the simulation.
//!
//! Commands are validated when processed. A rejected command leaves state
//! untouched and is reported through the snapshot's alerts and events.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{TargetId, Vec3};

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PilotCommand {
    // --- Flight ---
    /// Fly to an arbitrary point (idle/manual only).
    CommandMove { position: Vec3 },
    /// Fly to the attack position for a registered target.
    BeginMission { target_id: TargetId },
    /// Abort the attack and fly home.
    ReturnToBase,

    // --- Weapons ---
    /// Start acquiring a lock on a registered target.
    BeginLock { target_id: TargetId },
    /// Release the selected weapon at the locked target.
    Fire,
    /// Change the selected weapon.
    SelectWeapon { weapon: WeaponKind },

    // --- Damage ---
    /// Deliver damage or a jam to the craft.
    ApplyDamage {
        kind: DamageKind,
        #[serde(default)]
        amount: u32,
        #[serde(default)]
        duration_secs: Option<f64>,
    },
    /// Let a defense site that currently tracks the craft score a strike.
    ResolveCounterFire,

    // --- Simulation control ---
    /// Reset all state and spawn a theater.
    StartMission {
        #[serde(default)]
        theater: TheaterPreset,
    },
    /// Drop the mission and return to standby.
    Reset,
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f64 },
    Pause,
    Resume,
}

impl PilotCommand {
    /// Short name used in logs and rejections.
    pub fn name(&self) -> &'static str {
        match self {
            PilotCommand::CommandMove { .. } => "command_move",
            PilotCommand::BeginMission { .. } => "begin_mission",
            PilotCommand::ReturnToBase => "return_to_base",
            PilotCommand::BeginLock { .. } => "begin_lock",
            PilotCommand::Fire => "fire",
            PilotCommand::SelectWeapon { .. } => "select_weapon",
            PilotCommand::ApplyDamage { .. } => "apply_damage",
            PilotCommand::ResolveCounterFire => "resolve_counter_fire",
            PilotCommand::StartMission { .. } => "start_mission",
            PilotCommand::Reset => "reset",
            PilotCommand::SetTimeScale { .. } => "set_time_scale",
            PilotCommand::Pause => "pause",
            PilotCommand::Resume => "resume",
        }
    }

    /// Whether the command acts on the craft and so needs a running mission.
    pub fn needs_mission(&self) -> bool {
        !matches!(
            self,
            PilotCommand::StartMission { .. }
                | PilotCommand::Reset
                | PilotCommand::SetTimeScale { .. }
                | PilotCommand::Pause
                | PilotCommand::Resume
        )
    }
}
