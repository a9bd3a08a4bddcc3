//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of detectable ground entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroundKind {
    Tank,
    Jeep,
    Warehouse,
}

impl fmt::Display for GroundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroundKind::Tank => "tank",
            GroundKind::Jeep => "jeep",
            GroundKind::Warehouse => "warehouse",
        };
        f.write_str(name)
    }
}

/// Munition carried by the craft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeaponKind {
    /// Fast guided missile.
    #[default]
    Missile,
    /// Slow gravity bomb.
    Bomb,
}

/// Top-level phase of the attack workflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissionPhase {
    /// Holding position, accepting manual moves and mission orders.
    #[default]
    Idle,
    /// Flying to an operator-commanded point.
    Manual,
    /// Flying to the computed attack position.
    Moving,
    /// Holding at the attack position; weapons free.
    Attacking,
    /// Flying home.
    Returning,
    /// Shot down. Absorbing.
    Crashed,
}

/// Lock acquisition status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LockStatus {
    #[default]
    Inactive,
    Acquiring,
    Locked,
}

/// Damage delivered to the craft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DamageKind {
    /// Kinetic hit reducing health.
    Hit,
    /// Communications jamming for a duration.
    Communications,
    /// Targeting jamming for a duration.
    Targeting,
}

impl DamageKind {
    /// The jam this damage kind arms, if any.
    pub fn jam(self) -> Option<JamKind> {
        match self {
            DamageKind::Hit => None,
            DamageKind::Communications => Some(JamKind::Communications),
            DamageKind::Targeting => Some(JamKind::Targeting),
        }
    }
}

/// Jammable craft subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JamKind {
    Communications,
    Targeting,
}

/// Ordnance launched by a defense site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterFireKind {
    /// Ballistic round from the site's gun.
    Projectile,
    /// Bomb dropped onto the craft's last known position.
    Bomb,
}

/// How counter-fire turns into craft damage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterFirePolicy {
    /// Impacts are visual only; the operator resolves strikes explicitly.
    #[default]
    Manual,
    /// Impacts near the craft apply damage on their own.
    Automatic,
}

/// Coordinate system all game-logic positions are expressed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    /// Cartesian world units.
    #[default]
    Local,
    /// x = longitude degrees, y = altitude, z = latitude degrees.
    Geographic,
}

/// Theater layout spawned on mission start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TheaterPreset {
    /// Local-coordinate range with a defended warehouse.
    #[default]
    Range,
    /// Geographic-coordinate layout around the bay area grid.
    Geographic,
    /// Nothing spawned; the host supplies every entity.
    Empty,
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimPhase {
    #[default]
    Standby,
    Active,
    Paused,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
