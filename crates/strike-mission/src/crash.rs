//! Crash fall: randomized parameters at the moment of destruction and the
//! per-tick tumble toward the ground.

use rand::Rng;

use strike_core::config::DamageConfig;
use strike_core::constants::*;
use strike_core::craft::CrashData;
use strike_core::types::Vec3;

/// Roll fall speed and tumble rates for a craft going down at `start`.
pub fn roll_crash<R: Rng>(rng: &mut R, start: Vec3, config: &DamageConfig) -> CrashData {
    let span = config.tumble_span;
    CrashData {
        falling: true,
        start_position: start,
        ground_level: config.ground_level,
        fall_speed: rng.gen_range(config.fall_speed_min..config.fall_speed_max),
        rotation_speed: Vec3::new(
            (rng.gen::<f64>() - 0.5) * span.x,
            (rng.gen::<f64>() - 0.5) * span.y,
            (rng.gen::<f64>() - 0.5) * span.z,
        ),
    }
}

/// Result of one fall step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallUpdate {
    pub position: Vec3,
    pub rotation: Vec3,
    /// The craft came to rest during this step.
    pub grounded: bool,
}

/// Advance a falling craft by `delta` seconds at simulation time `elapsed_secs`.
pub fn step_fall(
    crash: &CrashData,
    position: Vec3,
    rotation: Vec3,
    delta: f64,
    elapsed_secs: f64,
) -> FallUpdate {
    if !crash.falling {
        return FallUpdate {
            position,
            rotation,
            grounded: false,
        };
    }

    if position.y <= crash.ground_level {
        return FallUpdate {
            position: Vec3::new(position.x, crash.ground_level, position.z),
            rotation,
            grounded: true,
        };
    }

    let y = (position.y - crash.fall_speed * delta).max(crash.ground_level);
    let drift_x = (elapsed_secs / CRASH_DRIFT_PERIOD_X).sin() * CRASH_DRIFT_AMPLITUDE * crash.fall_speed;
    let drift_z = (elapsed_secs / CRASH_DRIFT_PERIOD_Z).cos() * CRASH_DRIFT_AMPLITUDE * crash.fall_speed;

    FallUpdate {
        position: Vec3::new(position.x + drift_x * delta, y, position.z + drift_z * delta),
        rotation: rotation + crash.rotation_speed * (delta * REFERENCE_FRAME_RATE),
        grounded: y <= crash.ground_level,
    }
}
