//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components. Entity positions are
//! stored as a bare `Vec3` component alongside these.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{TargetId, Vec3};

/// A detectable tank, jeep or warehouse.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GroundEntity {
    pub id: TargetId,
    pub kind: GroundKind,
}

/// A missile or bomb released by the craft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Munition {
    /// Unique per fire event.
    pub id: u32,
    pub weapon: WeaponKind,
    pub target_id: TargetId,
    pub origin: Vec3,
    pub target_position: Vec3,
    /// 0 at release, 1 at impact; values past 1 are the post-impact grace window.
    pub flight_progress: f64,
    /// Progress per second.
    pub speed: f64,
}

/// A static anti-drone installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenseSite {
    pub id: u32,
    pub detection_radius: f64,
    pub min_safe_altitude: f64,
    /// Whether the craft was inside the envelope on the last evaluation.
    pub detected: bool,
    /// Craft position at the last evaluation that saw it.
    pub last_known_craft: Option<Vec3>,
    /// Seconds until the next gun round.
    pub projectile_cooldown_secs: f64,
    /// Seconds until the next bomb drop.
    pub bomb_cooldown_secs: f64,
}

/// Ordnance fired by a defense site at the craft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CounterFire {
    pub id: u32,
    pub site_id: u32,
    pub kind: CounterFireKind,
    pub start: Vec3,
    /// Committed at launch; does not home.
    pub target_position: Vec3,
    pub launched_at_secs: f64,
    pub flight_secs: f64,
    /// 0 at launch, clamped to 1 at impact.
    pub progress: f64,
    pub impacted_at_secs: Option<f64>,
}
