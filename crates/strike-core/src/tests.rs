#[cfg(test)]
mod tests {
    use crate::commands::PilotCommand;
    use crate::config::StrikeConfig;
    use crate::constants::*;
    use crate::craft::{Ammo, DamageEffects};
    use crate::enums::*;
    use crate::error::{CommandRejection, ConfigError};
    use crate::spatial;
    use crate::types::{SimTime, TargetId, Vec3};

    #[test]
    fn test_target_id_is_stable_for_same_spawn() {
        let a = TargetId::from_spawn(GroundKind::Tank, Vec3::new(12.5, 0.0, -3.25));
        let b = TargetId::from_spawn(GroundKind::Tank, Vec3::new(12.5, 0.0, -3.25));
        assert_eq!(a, b);
    }

    #[test]
    fn test_target_id_distinguishes_kind_and_position() {
        let pos = Vec3::new(1.0, 2.0, 3.0);
        let tank = TargetId::from_spawn(GroundKind::Tank, pos);
        let jeep = TargetId::from_spawn(GroundKind::Jeep, pos);
        let moved = TargetId::from_spawn(GroundKind::Tank, pos + Vec3::new(0.001, 0.0, 0.0));
        assert_ne!(tank, jeep);
        assert_ne!(tank, moved);
    }

    #[test]
    fn test_target_id_absorbs_float_noise_below_quantum() {
        let a = TargetId::from_spawn(GroundKind::Jeep, Vec3::new(-122.4094, 100.0, 37.7699));
        let b = TargetId::from_spawn(
            GroundKind::Jeep,
            Vec3::new(-122.4094 + 1e-9, 100.0, 37.7699 - 1e-9),
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_target_id_display() {
        let id = TargetId::from_spawn(GroundKind::Warehouse, Vec3::new(1.0, 0.0, -2.0));
        assert_eq!(id.to_string(), "warehouse@1000000:0:-2000000");
    }

    #[test]
    fn test_spatial_helpers() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(3.0, 12.0, 4.0);
        assert!((spatial::distance(a, b) - 13.0).abs() < 1e-9);
        assert!((spatial::horizontal_distance(a, b) - 5.0).abs() < 1e-9);
        assert!((spatial::direction(a, b).length() - 1.0).abs() < 1e-9);
        assert_eq!(spatial::direction(a, a), Vec3::ZERO);
    }

    #[test]
    fn test_yaw_toward_uses_atan2_dx_dz() {
        let origin = Vec3::ZERO;
        assert!(spatial::yaw_toward(origin, Vec3::new(0.0, 0.0, 10.0)).abs() < 1e-12);
        let east = spatial::yaw_toward(origin, Vec3::new(10.0, 5.0, 0.0));
        assert!((east - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance(0.5);
        t.advance(0.25);
        assert_eq!(t.tick, 2);
        assert!((t.elapsed_secs - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_scan_radius_follows_coordinate_system() {
        let mut config = StrikeConfig::default();
        assert_eq!(config.scan_radius(), LOCAL_SCAN_RADIUS);
        config.coordinates = CoordinateSystem::Geographic;
        assert_eq!(config.scan_radius(), GEOGRAPHIC_SCAN_RADIUS);
        config.scan_radius = Some(7.5);
        assert_eq!(config.scan_radius(), 7.5);
    }

    #[test]
    fn test_config_partial_json_keeps_defaults() {
        let json = r#"{
            "seed": 7,
            "targeting": { "max_lock_time_ms": 1500.0 },
            "defense": { "policy": "automatic" }
        }"#;
        let config = StrikeConfig::from_json_str(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.targeting.max_lock_time_ms, 1500.0);
        assert_eq!(config.defense.policy, CounterFirePolicy::Automatic);
        assert_eq!(config.defense.detection_radius, DEFENSE_DETECTION_RADIUS);
        assert_eq!(config.weapons.missile_loadout, MISSILE_LOADOUT);
        assert_eq!(config.mission.home_base, Vec3::from_array(HOME_BASE));
    }

    #[test]
    fn test_config_rejects_non_positive_lock_time() {
        let err = StrikeConfig::from_json_str(r#"{ "targeting": { "max_lock_time_ms": 0.0 } }"#)
            .unwrap_err();
        match err {
            ConfigError::Invalid { field, .. } => assert_eq!(field, "targeting.max_lock_time_ms"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_config_rejects_smoke_threshold_above_full_health() {
        let mut config = StrikeConfig::default();
        config.damage.smoke_threshold = FULL_HEALTH + 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid {
                field: "damage.smoke_threshold",
                ..
            })
        ));
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        assert!(matches!(
            StrikeConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_config_load_missing_file_is_io_error() {
        assert!(matches!(
            StrikeConfig::load("/nonexistent/strike.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_pilot_command_wire_format() {
        let json = r#"{"type":"ApplyDamage","kind":"targeting","duration_secs":4.0}"#;
        let cmd: PilotCommand = serde_json::from_str(json).unwrap();
        assert_eq!(
            cmd,
            PilotCommand::ApplyDamage {
                kind: DamageKind::Targeting,
                amount: 0,
                duration_secs: Some(4.0),
            }
        );

        let cmd: PilotCommand = serde_json::from_str(r#"{"type":"StartMission"}"#).unwrap();
        assert_eq!(
            cmd,
            PilotCommand::StartMission {
                theater: TheaterPreset::Range
            }
        );
    }

    #[test]
    fn test_command_move_carries_vector() {
        let cmd = PilotCommand::CommandMove {
            position: Vec3::new(1.0, 20.0, -3.0),
        };
        let json = serde_json::to_string(&cmd).unwrap();
        let back: PilotCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
        assert_eq!(cmd.name(), "command_move");
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            CommandRejection::OutOfAmmo(WeaponKind::Bomb).to_string(),
            "no Bomb rounds left"
        );
        assert_eq!(
            CommandRejection::InvalidTransition {
                command: "return_to_base",
                phase: MissionPhase::Idle,
            }
            .to_string(),
            "cannot return_to_base while Idle"
        );
    }

    #[test]
    fn test_ammo_by_weapon() {
        let mut ammo = Ammo { missile: 6, bomb: 3 };
        *ammo.get_mut(WeaponKind::Bomb) -= 1;
        assert_eq!(ammo.get(WeaponKind::Bomb), 2);
        assert_eq!(ammo.get(WeaponKind::Missile), 6);
    }

    #[test]
    fn test_damage_effect_jam_flags() {
        let mut effects = DamageEffects::default();
        effects.set_jammed(JamKind::Targeting, true);
        assert!(effects.jammed(JamKind::Targeting));
        assert!(!effects.jammed(JamKind::Communications));
        assert!(effects.targeting_jammed);
        assert_eq!(DamageKind::Hit.jam(), None);
        assert_eq!(DamageKind::Communications.jam(), Some(JamKind::Communications));
    }
}
