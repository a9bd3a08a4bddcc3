#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use strike_core::config::DamageConfig;
    use strike_core::constants::*;
    use strike_core::enums::MissionPhase;
    use strike_core::spatial;
    use strike_core::types::Vec3;

    use crate::crash::{roll_crash, step_fall};
    use crate::fsm::{attack_position, next_phase, MissionTrigger};
    use crate::movement::{approach_step, leg_progress, manual_step};

    const ALL_PHASES: [MissionPhase; 6] = [
        MissionPhase::Idle,
        MissionPhase::Manual,
        MissionPhase::Moving,
        MissionPhase::Attacking,
        MissionPhase::Returning,
        MissionPhase::Crashed,
    ];

    // ---- Transition table ----

    #[test]
    fn test_transition_table_is_exactly_the_documented_edges() {
        use MissionPhase::*;
        use MissionTrigger::*;

        let expected = [
            (Idle, CommandMove, Manual),
            (Manual, CommandMove, Manual),
            (Manual, Arrived, Idle),
            (Idle, BeginMission, Moving),
            (Attacking, BeginMission, Moving),
            (Moving, Arrived, Attacking),
            (Attacking, ReturnToBase, Returning),
            (Attacking, AmmoExhausted, Returning),
            (Returning, Arrived, Idle),
            (Idle, HealthDepleted, Crashed),
            (Manual, HealthDepleted, Crashed),
            (Moving, HealthDepleted, Crashed),
            (Attacking, HealthDepleted, Crashed),
            (Returning, HealthDepleted, Crashed),
        ];

        let mut reachable = 0;
        for phase in ALL_PHASES {
            for trigger in MissionTrigger::ALL {
                let got = next_phase(phase, trigger);
                let want = expected
                    .iter()
                    .find(|(p, t, _)| *p == phase && *t == trigger)
                    .map(|(_, _, to)| *to);
                assert_eq!(got, want, "{phase:?} + {trigger:?}");
                if got.is_some() {
                    reachable += 1;
                }
            }
        }
        assert_eq!(reachable, expected.len());
    }

    #[test]
    fn test_crashed_is_absorbing() {
        for trigger in MissionTrigger::ALL {
            assert_eq!(next_phase(MissionPhase::Crashed, trigger), None);
        }
    }

    #[test]
    fn test_return_refused_outside_attacking() {
        assert_eq!(
            next_phase(MissionPhase::Moving, MissionTrigger::ReturnToBase),
            None
        );
        assert_eq!(
            next_phase(MissionPhase::Idle, MissionTrigger::ReturnToBase),
            None
        );
    }

    // ---- Attack position ----

    #[test]
    fn test_attack_position_stands_off_on_craft_side() {
        let target = Vec3::new(40.0, 0.0, 35.0);
        let craft = Vec3::new(-50.0, 30.0, -40.0);
        let pos = attack_position(craft, target, ATTACK_DISTANCE, ATTACK_ALTITUDE);

        assert_eq!(pos.y, ATTACK_ALTITUDE);
        // Horizontal part lies between target and craft.
        assert!(pos.x < target.x && pos.x > craft.x);
        assert!(pos.z < target.z && pos.z > craft.z);
        // The full 3D offset before altitude substitution has the stand-off length.
        let dir = spatial::direction(target, craft);
        let expected = target + dir * ATTACK_DISTANCE;
        assert!((pos.x - expected.x).abs() < 1e-9);
        assert!((pos.z - expected.z).abs() < 1e-9);
    }

    #[test]
    fn test_attack_position_directly_overhead() {
        let target = Vec3::new(5.0, 0.0, 5.0);
        let pos = attack_position(target, target, ATTACK_DISTANCE, ATTACK_ALTITUDE);
        assert_eq!(pos, Vec3::new(5.0, ATTACK_ALTITUDE, 5.0));
    }

    // ---- Movement ----

    #[test]
    fn test_manual_step_moves_at_reference_speed() {
        let start = Vec3::new(0.0, 30.0, 0.0);
        let dest = Vec3::new(0.0, 30.0, 100.0);
        let update = manual_step(start, Vec3::ZERO, dest, 0.5, 10.0, 1.0, 1.0 / 60.0);
        assert!(!update.arrived);
        assert!((update.position.z - 0.5).abs() < 1e-9);
        assert!(update.rotation.y.abs() < 1e-12);
        assert_eq!(update.rotation.x, 0.0);
        assert_eq!(update.rotation.z, 0.0);
    }

    #[test]
    fn test_manual_step_never_overshoots() {
        let start = Vec3::new(0.0, 30.0, 0.0);
        let dest = Vec3::new(3.0, 30.0, 0.0);
        let update = manual_step(start, Vec3::ZERO, dest, 0.5, 10.0, 1.0, 10.0);
        assert!((update.position - dest).length() < 1e-9);
    }

    #[test]
    fn test_manual_step_respects_floor() {
        let start = Vec3::new(0.0, 12.0, 0.0);
        let dest = Vec3::new(0.0, -50.0, 0.0);
        let mut pos = start;
        for _ in 0..600 {
            let update = manual_step(pos, Vec3::ZERO, dest, 0.5, 10.0, 1.0, 1.0 / 60.0);
            pos = update.position;
            assert!(pos.y >= 10.0);
            if update.arrived {
                break;
            }
        }
        assert!((pos.y - 10.0).abs() < 1.0);
    }

    #[test]
    fn test_approach_step_reaches_threshold() {
        let mut pos = Vec3::new(-50.0, 30.0, -40.0);
        let dest = Vec3::new(20.0, 40.0, 15.0);
        let mut arrived = false;
        for _ in 0..2_000 {
            let update = approach_step(pos, Vec3::ZERO, dest, 0.5, 2.0, 1.0 / 60.0);
            if update.arrived {
                arrived = true;
                break;
            }
            assert!(spatial::distance(update.position, dest) < spatial::distance(pos, dest));
            pos = update.position;
        }
        assert!(arrived);
        assert!(spatial::distance(pos, dest) < 2.0);
    }

    #[test]
    fn test_approach_step_large_delta_lands_on_destination() {
        let pos = Vec3::new(0.0, 30.0, 0.0);
        let dest = Vec3::new(100.0, 40.0, 0.0);
        let update = approach_step(pos, Vec3::ZERO, dest, 0.5, 2.0, 5.0);
        assert_eq!(update.position, dest);
        assert!((update.rotation.y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_leg_progress_is_monotonic() {
        let origin = Vec3::ZERO;
        let dest = Vec3::new(10.0, 0.0, 0.0);
        let half = leg_progress(origin, dest, Vec3::new(5.0, 0.0, 0.0), 0.0);
        assert!((half - 0.5).abs() < 1e-9);
        // Pushed back by drift: progress holds.
        let back = leg_progress(origin, dest, Vec3::new(2.0, 0.0, 0.0), half);
        assert_eq!(back, half);
        assert_eq!(leg_progress(origin, origin, origin, 0.0), 1.0);
    }

    // ---- Crash ----

    #[test]
    fn test_roll_crash_within_configured_ranges() {
        let config = DamageConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..100 {
            let crash = roll_crash(&mut rng, Vec3::new(0.0, 40.0, 0.0), &config);
            assert!(crash.falling);
            assert!(crash.fall_speed >= CRASH_FALL_SPEED_MIN);
            assert!(crash.fall_speed < CRASH_FALL_SPEED_MAX);
            assert!(crash.rotation_speed.x.abs() <= CRASH_TUMBLE_SPAN[0] / 2.0);
            assert!(crash.rotation_speed.y.abs() <= CRASH_TUMBLE_SPAN[1] / 2.0);
            assert!(crash.rotation_speed.z.abs() <= CRASH_TUMBLE_SPAN[2] / 2.0);
            assert_eq!(crash.ground_level, CRASH_GROUND_LEVEL);
        }
    }

    #[test]
    fn test_step_fall_descends_then_grounds() {
        let config = DamageConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut crash = roll_crash(&mut rng, Vec3::new(0.0, 12.0, 0.0), &config);
        let mut pos = Vec3::new(0.0, 12.0, 0.0);
        let mut rot = Vec3::ZERO;
        let mut t = 0.0;
        let mut grounded = false;
        for _ in 0..10_000 {
            t += DT;
            let update = step_fall(&crash, pos, rot, DT, t);
            assert!(update.position.y <= pos.y);
            assert!(update.position.y >= CRASH_GROUND_LEVEL);
            pos = update.position;
            rot = update.rotation;
            if update.grounded {
                crash.falling = false;
                grounded = true;
                break;
            }
        }
        assert!(grounded);
        assert_eq!(pos.y, CRASH_GROUND_LEVEL);

        // Frozen afterwards.
        let frozen = step_fall(&crash, pos, rot, DT, t + DT);
        assert_eq!(frozen.position, pos);
        assert_eq!(frozen.rotation, rot);
        assert!(!frozen.grounded);
    }

    #[test]
    fn test_step_fall_below_ground_snaps() {
        let config = DamageConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let crash = roll_crash(&mut rng, Vec3::new(1.0, 4.0, 2.0), &config);
        let update = step_fall(&crash, Vec3::new(1.0, 4.0, 2.0), Vec3::ZERO, DT, 0.0);
        assert!(update.grounded);
        assert_eq!(update.position, Vec3::new(1.0, CRASH_GROUND_LEVEL, 2.0));
    }

    proptest! {
        #[test]
        fn prop_approach_never_moves_away(
            x in -500.0f64..500.0, y in 0.0f64..200.0, z in -500.0f64..500.0,
            delta in 0.0f64..0.25,
        ) {
            let pos = Vec3::new(x, y, z);
            let dest = Vec3::new(10.0, 40.0, -20.0);
            let update = approach_step(pos, Vec3::ZERO, dest, 0.5, 2.0, delta);
            prop_assert!(spatial::distance(update.position, dest) <= spatial::distance(pos, dest) + 1e-9);
        }

        #[test]
        fn prop_manual_step_stays_above_floor(
            x in -500.0f64..500.0, y in 10.0f64..200.0, z in -500.0f64..500.0,
            dy in -300.0f64..300.0, delta in 0.0f64..0.25,
        ) {
            let pos = Vec3::new(x, y, z);
            let dest = Vec3::new(-x, dy, -z);
            let update = manual_step(pos, Vec3::ZERO, dest, 0.5, 10.0, 1.0, delta);
            prop_assert!(update.position.y >= 10.0);
        }
    }
}
