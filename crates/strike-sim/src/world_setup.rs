//! Entity spawn factories and theater presets.

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use strike_core::components::{DefenseSite, GroundEntity};
use strike_core::config::DefenseConfig;
use strike_core::enums::{GroundKind, TheaterPreset};
use strike_core::types::{TargetId, Vec3};

/// A set of ground entities and defense sites to spawn at mission start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theater {
    pub ground: Vec<(GroundKind, Vec3)>,
    pub defense_sites: Vec<Vec3>,
}

impl Theater {
    pub fn preset(preset: TheaterPreset) -> Self {
        match preset {
            TheaterPreset::Range => Self::range(),
            TheaterPreset::Geographic => Self::geographic(),
            TheaterPreset::Empty => Self::default(),
        }
    }

    /// Local-coordinate range: three targets, the warehouse defended.
    pub fn range() -> Self {
        Self {
            ground: vec![
                (GroundKind::Tank, Vec3::new(-10.0, 0.0, -10.0)),
                (GroundKind::Jeep, Vec3::new(15.0, 0.0, -25.0)),
                (GroundKind::Warehouse, Vec3::new(40.0, 0.0, 35.0)),
            ],
            defense_sites: vec![Vec3::new(40.0, 20.0, 35.0)],
        }
    }

    /// Geographic layout (longitude, altitude, latitude). Meant for a
    /// config with geographic coordinates and home base. No defenses.
    pub fn geographic() -> Self {
        Self {
            ground: vec![
                (GroundKind::Tank, Vec3::new(-122.4144, 100.0, 37.7799)),
                (GroundKind::Jeep, Vec3::new(-122.4094, 100.0, 37.7699)),
                (GroundKind::Warehouse, Vec3::new(-122.4294, 100.0, 37.7649)),
            ],
            defense_sites: Vec::new(),
        }
    }
}

/// Spawn a detectable ground entity. Its id derives from kind and position.
pub fn spawn_ground_entity(world: &mut World, kind: GroundKind, position: Vec3) -> (Entity, TargetId) {
    let id = TargetId::from_spawn(kind, position);
    let entity = world.spawn((GroundEntity { id, kind }, position));
    (entity, id)
}

/// Spawn an idle defense site.
pub fn spawn_defense_site(world: &mut World, id: u32, position: Vec3, config: &DefenseConfig) -> Entity {
    world.spawn((
        DefenseSite {
            id,
            detection_radius: config.detection_radius,
            min_safe_altitude: config.min_safe_altitude,
            detected: false,
            last_known_craft: None,
            projectile_cooldown_secs: config.projectile_interval_secs,
            bomb_cooldown_secs: config.bomb_interval_secs,
        },
        position,
    ))
}

/// Populate the world from a theater. Site ids are drawn from `next_site_id`.
pub fn setup_theater(world: &mut World, theater: &Theater, config: &DefenseConfig, next_site_id: &mut u32) {
    for &(kind, position) in &theater.ground {
        spawn_ground_entity(world, kind, position);
    }
    for &position in &theater.defense_sites {
        let id = *next_site_id;
        *next_site_id += 1;
        spawn_defense_site(world, id, position, config);
    }
}
