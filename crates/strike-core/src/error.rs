//! Command rejections and configuration errors.

use thiserror::Error;

use crate::enums::{LockStatus, MissionPhase, WeaponKind};
use crate::types::TargetId;

/// Why a command was refused. The engine logs it and reports it through the
/// snapshot; nothing is raised to the host.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandRejection {
    #[error("no mission is running")]
    NoMission,

    #[error("craft is down")]
    CraftDown,

    #[error("cannot {command} while {phase:?}")]
    InvalidTransition {
        command: &'static str,
        phase: MissionPhase,
    },

    #[error("craft is not in attack position (phase {0:?})")]
    NotAttacking(MissionPhase),

    #[error("unknown target {0}")]
    UnknownTarget(TargetId),

    #[error("target {0} is already destroyed")]
    TargetDestroyed(TargetId),

    #[error("targeting is jammed")]
    TargetingJammed,

    #[error("no target locked (lock {0:?})")]
    NoLock(LockStatus),

    #[error("no {0:?} rounds left")]
    OutOfAmmo(WeaponKind),

    #[error("hit carries no damage")]
    NoDamage,

    #[error("invalid jam duration {0}")]
    InvalidDuration(f64),

    #[error("position is not finite")]
    InvalidPosition,

    #[error("invalid time scale {0}")]
    InvalidTimeScale(f64),

    #[error("no defense site has the craft in its envelope")]
    CraftNotDetected,

    #[error("counter-fire resolves automatically under the current policy")]
    AutomaticPolicy,
}

/// Failure to load or validate a `StrikeConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}
