//! State owned by the craft: pose, mission, targeting, arsenal and damage.
//!
//! These live on the engine rather than in the ECS world because there is
//! exactly one craft. They are serialized straight into snapshots.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::types::{TargetId, Vec3};

/// Craft pose and health.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    pub position: Vec3,
    /// Euler angles (pitch, yaw, roll) in radians.
    pub rotation: Vec3,
    /// 0..=100.
    pub health: u32,
}

impl Craft {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
            health: FULL_HEALTH,
        }
    }
}

/// Fall parameters captured when the craft goes down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrashData {
    pub falling: bool,
    pub start_position: Vec3,
    pub ground_level: f64,
    /// Altitude lost per second.
    pub fall_speed: f64,
    /// Tumble per reference frame on each axis (radians).
    pub rotation_speed: Vec3,
}

/// The mission state machine's data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionState {
    pub phase: MissionPhase,
    pub attack_position: Option<Vec3>,
    pub home_base: Vec3,
    /// Fraction of the current leg covered, 0..=1.
    pub move_progress: f64,
    /// Where the current mission leg started.
    pub leg_origin: Option<Vec3>,
    pub manual_destination: Option<Vec3>,
    pub crash: Option<CrashData>,
}

impl MissionState {
    pub fn new(home_base: Vec3) -> Self {
        Self {
            phase: MissionPhase::Idle,
            attack_position: None,
            home_base,
            move_progress: 0.0,
            leg_origin: None,
            manual_destination: None,
            crash: None,
        }
    }
}

/// Lock acquisition state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetingState {
    pub locked_target: Option<TargetId>,
    pub status: LockStatus,
    pub lock_timer_ms: f64,
    pub max_lock_time_ms: f64,
}

impl TargetingState {
    pub fn new(max_lock_time_ms: f64) -> Self {
        Self {
            locked_target: None,
            status: LockStatus::Inactive,
            lock_timer_ms: 0.0,
            max_lock_time_ms,
        }
    }
}

/// Remaining rounds per weapon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ammo {
    pub missile: u32,
    pub bomb: u32,
}

impl Ammo {
    pub fn get(&self, weapon: WeaponKind) -> u32 {
        match weapon {
            WeaponKind::Missile => self.missile,
            WeaponKind::Bomb => self.bomb,
        }
    }

    pub fn get_mut(&mut self, weapon: WeaponKind) -> &mut u32 {
        match weapon {
            WeaponKind::Missile => &mut self.missile,
            WeaponKind::Bomb => &mut self.bomb,
        }
    }
}

/// Weapon selection and ammunition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arsenal {
    pub selected: WeaponKind,
    pub ammo: Ammo,
}

/// Visible damage and jamming flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageEffects {
    pub smoke: bool,
    pub fire: bool,
    pub communications_jammed: bool,
    pub targeting_jammed: bool,
}

impl DamageEffects {
    pub fn jammed(&self, jam: JamKind) -> bool {
        match jam {
            JamKind::Communications => self.communications_jammed,
            JamKind::Targeting => self.targeting_jammed,
        }
    }

    pub fn set_jammed(&mut self, jam: JamKind, jammed: bool) {
        match jam {
            JamKind::Communications => self.communications_jammed = jammed,
            JamKind::Targeting => self.targeting_jammed = jammed,
        }
    }
}
