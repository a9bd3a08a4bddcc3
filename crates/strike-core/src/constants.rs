//! Simulation constants and tuning defaults.
//!
//! Defaults feed `StrikeConfig`; the remaining values are fixed properties
//! of the simulation.

/// Nominal update rate (Hz) used by `tick()` and the runner.
pub const TICK_RATE: u32 = 60;

/// Seconds per nominal update.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Largest host delta accepted in one update (seconds).
pub const MAX_UPDATE_DELTA: f64 = 0.25;

/// Maximum time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;

/// Per-frame rates in the tuning table are expressed against this frame rate.
pub const REFERENCE_FRAME_RATE: f64 = 60.0;

/// Identity grid spacing for target ids (world units or degrees).
pub const TARGET_ID_QUANTUM: f64 = 1e-6;

// --- Detection ---

/// Scan radius in local world units.
pub const LOCAL_SCAN_RADIUS: f64 = 20.0;

/// Scan radius in geographic degrees.
pub const GEOGRAPHIC_SCAN_RADIUS: f64 = 0.01;

/// How long a fresh detection stays flagged for the UI cue (seconds).
pub const DETECTION_CUE_SECS: f64 = 3.0;

// --- Mission ---

pub const HOME_BASE: [f64; 3] = [-50.0, 30.0, -40.0];

pub const CRAFT_START: [f64; 3] = [-45.0, 30.0, -40.0];

/// Altitude held at the attack position.
pub const ATTACK_ALTITUDE: f64 = 40.0;

/// Stand-off distance from the target.
pub const ATTACK_DISTANCE: f64 = 30.0;

/// Mission approach rate; lerp fraction per second is 5x this.
pub const ATTACK_SPEED: f64 = 0.5;

/// Lerp fraction per second per unit of approach speed.
pub const APPROACH_GAIN: f64 = 5.0;

/// Manual flight speed in units per reference frame.
pub const MANUAL_SPEED: f64 = 0.5;

/// Manual flight never goes below this altitude.
pub const MANUAL_FLOOR_ALTITUDE: f64 = 10.0;

/// Arrival threshold for mission legs.
pub const MISSION_ARRIVAL_EPSILON: f64 = 2.0;

/// Arrival threshold for manual moves.
pub const MANUAL_ARRIVAL_EPSILON: f64 = 1.0;

// --- Targeting ---

/// Time to acquire a lock (milliseconds).
pub const MAX_LOCK_TIME_MS: f64 = 3000.0;

// --- Weapons ---

pub const MISSILE_LOADOUT: u32 = 6;
pub const BOMB_LOADOUT: u32 = 3;

/// Flight progress per second.
pub const MISSILE_SPEED: f64 = 0.5;
pub const BOMB_SPEED: f64 = 0.3;

/// Munitions linger this long (in flight seconds) after impact.
pub const IMPACT_GRACE_SECS: f64 = 0.2;

/// Delay between expending the selected weapon and heading home.
pub const EXPENDITURE_RETURN_DELAY_SECS: f64 = 3.0;

// --- Damage ---

pub const FULL_HEALTH: u32 = 100;

/// Smoke appears below this health.
pub const SMOKE_THRESHOLD: u32 = 70;

pub const DEFAULT_JAM_SECS: f64 = 5.0;

/// Altitude at which a falling craft comes to rest.
pub const CRASH_GROUND_LEVEL: f64 = 10.0;

pub const CRASH_FALL_SPEED_MIN: f64 = 0.5;
pub const CRASH_FALL_SPEED_MAX: f64 = 2.0;

/// Full span of per-axis tumble rates (radians per reference frame).
pub const CRASH_TUMBLE_SPAN: [f64; 3] = [0.1, 0.05, 0.15];

/// Horizontal drift amplitude per unit of fall speed.
pub const CRASH_DRIFT_AMPLITUDE: f64 = 0.05;

/// Drift oscillation periods (seconds) for x and z.
pub const CRASH_DRIFT_PERIOD_X: f64 = 0.5;
pub const CRASH_DRIFT_PERIOD_Z: f64 = 0.7;

// --- Defense ---

pub const DEFENSE_DETECTION_RADIUS: f64 = 50.0;

/// Below this altitude the craft is invisible to defense radar.
pub const DEFENSE_MIN_SAFE_ALTITUDE: f64 = 20.0;

pub const DEFENSE_PROJECTILE_INTERVAL_SECS: f64 = 3.0;
pub const DEFENSE_BOMB_INTERVAL_SECS: f64 = 1.5;

pub const DEFENSE_PROJECTILE_FLIGHT_SECS: f64 = 1.0;
pub const DEFENSE_BOMB_FLIGHT_SECS: f64 = 2.0;

/// Bombs are released this far above the craft's last known position.
pub const DEFENSE_BOMB_DROP_HEIGHT: f64 = 80.0;

/// Gun muzzle height above the site origin.
pub const DEFENSE_MUZZLE_HEIGHT: f64 = 2.0;

pub const DEFENSE_PROJECTILE_TTL_SECS: f64 = 5.0;
pub const DEFENSE_BOMB_TTL_SECS: f64 = 10.0;

/// Period of the stale counter-fire sweep.
pub const DEFENSE_CLEANUP_INTERVAL_SECS: f64 = 5.0;

/// Bomb explosions stay visible this long after impact.
pub const BOMB_EXPLOSION_SECS: f64 = 1.5;

/// Automatic policy: impacts closer than this to the craft count as hits.
pub const COUNTER_FIRE_HIT_RADIUS: f64 = 5.0;

pub const COUNTER_FIRE_PROJECTILE_DAMAGE: u32 = 25;
pub const COUNTER_FIRE_BOMB_DAMAGE: u32 = 40;

/// Manual policy: damage of an operator-resolved strike.
pub const MANUAL_STRIKE_DAMAGE: u32 = 100;

// --- Theater ---

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;
