//! Simulation snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::craft::*;
use crate::enums::*;
use crate::events::{Alert, SimEvent};
use crate::types::{SimTime, TargetId, Vec3};

/// Complete simulation state broadcast to the host after each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrikeSnapshot {
    pub time: SimTime,
    pub phase: SimPhase,
    pub craft: Craft,
    pub mission: MissionState,
    pub targeting: TargetingState,
    pub arsenal: Arsenal,
    pub damage: DamageEffects,
    /// Registered targets in detection order.
    pub targets: Vec<TargetView>,
    pub destroyed_targets: Vec<TargetId>,
    pub munitions: Vec<MunitionView>,
    pub defense_sites: Vec<DefenseSiteView>,
    pub counter_fire: Vec<CounterFireView>,
    pub events: Vec<SimEvent>,
    pub alerts: Vec<Alert>,
}

/// A registered target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub id: TargetId,
    pub kind: GroundKind,
    pub position: Vec3,
    pub destroyed: bool,
    /// Detected within the last few seconds (UI cue only).
    pub recently_detected: bool,
    /// Distance from the craft.
    pub range: f64,
}

/// A munition in flight or in its impact grace window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunitionView {
    pub id: u32,
    pub weapon: WeaponKind,
    pub target_id: TargetId,
    /// Interpolated position along the release-to-impact line.
    pub position: Vec3,
    pub target_position: Vec3,
    pub flight_progress: f64,
    pub impacted: bool,
}

/// A defense installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefenseSiteView {
    pub id: u32,
    pub position: Vec3,
    pub detection_radius: f64,
    pub craft_detected: bool,
    /// Where the site last saw the craft; counter-fire is aimed here.
    pub last_known_craft: Option<Vec3>,
}

/// A defense projectile or bomb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterFireView {
    pub id: u32,
    pub site_id: u32,
    pub kind: CounterFireKind,
    pub position: Vec3,
    pub target_position: Vec3,
    pub progress: f64,
    pub impacted: bool,
}
