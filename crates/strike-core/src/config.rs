//! Simulation configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Load with `StrikeConfig::from_json_str` or `StrikeConfig::load`;
//! both validate before returning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{CoordinateSystem, CounterFirePolicy, WeaponKind};
use crate::error::ConfigError;
use crate::types::Vec3;

/// Top-level configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrikeConfig {
    /// RNG seed. Same seed and command stream = same simulation.
    pub seed: u64,
    /// Coordinate system every game-logic position uses.
    pub coordinates: CoordinateSystem,
    /// Detection radius override. `None` picks the default for `coordinates`.
    pub scan_radius: Option<f64>,
    pub mission: MissionConfig,
    pub targeting: TargetingConfig,
    pub weapons: WeaponsConfig,
    pub damage: DamageConfig,
    pub defense: DefenseConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissionConfig {
    pub home_base: Vec3,
    pub craft_start: Vec3,
    pub attack_altitude: f64,
    pub attack_distance: f64,
    /// Mission approach rate (lerp fraction per second is `APPROACH_GAIN` times this).
    pub attack_speed: f64,
    /// Manual flight speed in units per reference frame.
    pub manual_speed: f64,
    pub manual_floor_altitude: f64,
    pub arrival_epsilon: f64,
    pub manual_arrival_epsilon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetingConfig {
    pub max_lock_time_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponsConfig {
    pub missile_loadout: u32,
    pub bomb_loadout: u32,
    pub missile_speed: f64,
    pub bomb_speed: f64,
    pub impact_grace_secs: f64,
    pub return_delay_secs: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DamageConfig {
    pub smoke_threshold: u32,
    pub default_jam_secs: f64,
    pub ground_level: f64,
    pub fall_speed_min: f64,
    pub fall_speed_max: f64,
    pub tumble_span: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefenseConfig {
    pub detection_radius: f64,
    pub min_safe_altitude: f64,
    pub projectile_interval_secs: f64,
    pub bomb_interval_secs: f64,
    pub projectile_flight_secs: f64,
    pub bomb_flight_secs: f64,
    pub bomb_drop_height: f64,
    pub projectile_ttl_secs: f64,
    pub bomb_ttl_secs: f64,
    pub cleanup_interval_secs: f64,
    pub policy: CounterFirePolicy,
    pub hit_radius: f64,
    pub projectile_damage: u32,
    pub bomb_damage: u32,
    pub manual_strike_damage: u32,
}

impl Default for StrikeConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            coordinates: CoordinateSystem::default(),
            scan_radius: None,
            mission: MissionConfig::default(),
            targeting: TargetingConfig::default(),
            weapons: WeaponsConfig::default(),
            damage: DamageConfig::default(),
            defense: DefenseConfig::default(),
        }
    }
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            home_base: Vec3::from_array(HOME_BASE),
            craft_start: Vec3::from_array(CRAFT_START),
            attack_altitude: ATTACK_ALTITUDE,
            attack_distance: ATTACK_DISTANCE,
            attack_speed: ATTACK_SPEED,
            manual_speed: MANUAL_SPEED,
            manual_floor_altitude: MANUAL_FLOOR_ALTITUDE,
            arrival_epsilon: MISSION_ARRIVAL_EPSILON,
            manual_arrival_epsilon: MANUAL_ARRIVAL_EPSILON,
        }
    }
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            max_lock_time_ms: MAX_LOCK_TIME_MS,
        }
    }
}

impl Default for WeaponsConfig {
    fn default() -> Self {
        Self {
            missile_loadout: MISSILE_LOADOUT,
            bomb_loadout: BOMB_LOADOUT,
            missile_speed: MISSILE_SPEED,
            bomb_speed: BOMB_SPEED,
            impact_grace_secs: IMPACT_GRACE_SECS,
            return_delay_secs: EXPENDITURE_RETURN_DELAY_SECS,
        }
    }
}

impl Default for DamageConfig {
    fn default() -> Self {
        Self {
            smoke_threshold: SMOKE_THRESHOLD,
            default_jam_secs: DEFAULT_JAM_SECS,
            ground_level: CRASH_GROUND_LEVEL,
            fall_speed_min: CRASH_FALL_SPEED_MIN,
            fall_speed_max: CRASH_FALL_SPEED_MAX,
            tumble_span: Vec3::from_array(CRASH_TUMBLE_SPAN),
        }
    }
}

impl Default for DefenseConfig {
    fn default() -> Self {
        Self {
            detection_radius: DEFENSE_DETECTION_RADIUS,
            min_safe_altitude: DEFENSE_MIN_SAFE_ALTITUDE,
            projectile_interval_secs: DEFENSE_PROJECTILE_INTERVAL_SECS,
            bomb_interval_secs: DEFENSE_BOMB_INTERVAL_SECS,
            projectile_flight_secs: DEFENSE_PROJECTILE_FLIGHT_SECS,
            bomb_flight_secs: DEFENSE_BOMB_FLIGHT_SECS,
            bomb_drop_height: DEFENSE_BOMB_DROP_HEIGHT,
            projectile_ttl_secs: DEFENSE_PROJECTILE_TTL_SECS,
            bomb_ttl_secs: DEFENSE_BOMB_TTL_SECS,
            cleanup_interval_secs: DEFENSE_CLEANUP_INTERVAL_SECS,
            policy: CounterFirePolicy::default(),
            hit_radius: COUNTER_FIRE_HIT_RADIUS,
            projectile_damage: COUNTER_FIRE_PROJECTILE_DAMAGE,
            bomb_damage: COUNTER_FIRE_BOMB_DAMAGE,
            manual_strike_damage: MANUAL_STRIKE_DAMAGE,
        }
    }
}

impl WeaponsConfig {
    /// Flight progress per second for a weapon.
    pub fn speed(&self, weapon: WeaponKind) -> f64 {
        match weapon {
            WeaponKind::Missile => self.missile_speed,
            WeaponKind::Bomb => self.bomb_speed,
        }
    }
}

impl StrikeConfig {
    /// Detection radius in the configured coordinate system.
    pub fn scan_radius(&self) -> f64 {
        self.scan_radius.unwrap_or(match self.coordinates {
            CoordinateSystem::Local => LOCAL_SCAN_RADIUS,
            CoordinateSystem::Geographic => GEOGRAPHIC_SCAN_RADIUS,
        })
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: StrikeConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("scan_radius", self.scan_radius())?;

        let m = &self.mission;
        finite_vec("mission.home_base", m.home_base)?;
        finite_vec("mission.craft_start", m.craft_start)?;
        finite("mission.attack_altitude", m.attack_altitude)?;
        positive("mission.attack_distance", m.attack_distance)?;
        positive("mission.attack_speed", m.attack_speed)?;
        positive("mission.manual_speed", m.manual_speed)?;
        finite("mission.manual_floor_altitude", m.manual_floor_altitude)?;
        positive("mission.arrival_epsilon", m.arrival_epsilon)?;
        positive("mission.manual_arrival_epsilon", m.manual_arrival_epsilon)?;

        positive("targeting.max_lock_time_ms", self.targeting.max_lock_time_ms)?;

        let w = &self.weapons;
        positive("weapons.missile_speed", w.missile_speed)?;
        positive("weapons.bomb_speed", w.bomb_speed)?;
        positive("weapons.impact_grace_secs", w.impact_grace_secs)?;
        non_negative("weapons.return_delay_secs", w.return_delay_secs)?;

        let d = &self.damage;
        if d.smoke_threshold > FULL_HEALTH {
            return Err(ConfigError::Invalid {
                field: "damage.smoke_threshold",
                reason: format!("{} exceeds full health {FULL_HEALTH}", d.smoke_threshold),
            });
        }
        positive("damage.default_jam_secs", d.default_jam_secs)?;
        finite("damage.ground_level", d.ground_level)?;
        positive("damage.fall_speed_min", d.fall_speed_min)?;
        if d.fall_speed_max <= d.fall_speed_min || !d.fall_speed_max.is_finite() {
            return Err(ConfigError::Invalid {
                field: "damage.fall_speed_max",
                reason: "must be finite and above fall_speed_min".into(),
            });
        }
        finite_vec("damage.tumble_span", d.tumble_span)?;

        let f = &self.defense;
        positive("defense.detection_radius", f.detection_radius)?;
        finite("defense.min_safe_altitude", f.min_safe_altitude)?;
        positive("defense.projectile_interval_secs", f.projectile_interval_secs)?;
        positive("defense.bomb_interval_secs", f.bomb_interval_secs)?;
        positive("defense.projectile_flight_secs", f.projectile_flight_secs)?;
        positive("defense.bomb_flight_secs", f.bomb_flight_secs)?;
        finite("defense.bomb_drop_height", f.bomb_drop_height)?;
        positive("defense.projectile_ttl_secs", f.projectile_ttl_secs)?;
        positive("defense.bomb_ttl_secs", f.bomb_ttl_secs)?;
        positive("defense.cleanup_interval_secs", f.cleanup_interval_secs)?;
        non_negative("defense.hit_radius", f.hit_radius)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} is not finite"),
        })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must be positive"),
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("{value} must not be negative"),
        })
    }
}

fn finite_vec(field: &'static str, value: Vec3) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "has a non-finite component".into(),
        })
    }
}
