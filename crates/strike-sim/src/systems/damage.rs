//! Hits, jams and the transition to a crash.

use rand::Rng;

use strike_core::config::DamageConfig;
use strike_core::enums::{AlertLevel, DamageKind, JamKind};
use strike_core::error::CommandRejection;
use strike_core::events::SimEvent;

use crate::event_log::EventLog;
use crate::schedule::TimedEvent;
use crate::sortie::SortieState;
use crate::systems::{mission, targeting};

/// Apply an operator or scripted damage command.
///
/// `amount` only matters for hits, `duration_secs` only for jams.
#[allow(clippy::too_many_arguments)]
pub fn apply_damage<R: Rng>(
    sortie: &mut SortieState,
    config: &DamageConfig,
    kind: DamageKind,
    amount: u32,
    duration_secs: Option<f64>,
    rng: &mut R,
    now: f64,
    log: &mut EventLog,
) -> Result<(), CommandRejection> {
    if sortie.is_down() {
        return Err(CommandRejection::CraftDown);
    }

    match kind.jam() {
        None => {
            if amount == 0 {
                return Err(CommandRejection::NoDamage);
            }
            apply_hit(sortie, config, amount, rng, log);
        }
        Some(jam) => {
            let duration = duration_secs.unwrap_or(config.default_jam_secs);
            if !duration.is_finite() || duration <= 0.0 {
                return Err(CommandRejection::InvalidDuration(duration));
            }
            arm_jam(sortie, jam, duration, now, log);
        }
    }
    Ok(())
}

/// Subtract health, saturating at zero. Reaching zero brings the craft down.
/// Hits on a downed craft are absorbed.
pub fn apply_hit<R: Rng>(
    sortie: &mut SortieState,
    config: &DamageConfig,
    amount: u32,
    rng: &mut R,
    log: &mut EventLog,
) {
    if sortie.is_down() {
        return;
    }

    let craft = &mut sortie.craft;
    craft.health = craft.health.saturating_sub(amount);
    let health = craft.health;
    sortie.damage.smoke = health < config.smoke_threshold;

    tracing::info!(amount, health, "craft hit");
    log.emit(SimEvent::CraftHit { amount, health });

    if health == 0 {
        log.alert(AlertLevel::Critical, "craft destroyed");
        mission::bring_down(sortie, config, rng, log);
    } else if sortie.damage.smoke {
        log.alert(AlertLevel::Warning, format!("craft damaged, health {health}"));
    }
}

/// Raise a jam and (re)arm its clear. A newer jam always outlives an older
/// pending clear.
pub fn arm_jam(
    sortie: &mut SortieState,
    jam: JamKind,
    duration_secs: f64,
    now: f64,
    log: &mut EventLog,
) {
    sortie.damage.set_jammed(jam, true);
    sortie
        .scheduler
        .schedule(TimedEvent::ClearJam(jam), now + duration_secs);

    if jam == JamKind::Targeting {
        targeting::reset(&mut sortie.targeting, log);
    }

    tracing::info!(?jam, duration_secs, "jam started");
    log.emit(SimEvent::JamStarted { jam, duration_secs });
    log.alert(AlertLevel::Warning, format!("{jam:?} jammed for {duration_secs:.1}s"));
}

pub fn clear_jam(sortie: &mut SortieState, jam: JamKind, log: &mut EventLog) {
    if !sortie.damage.jammed(jam) {
        return;
    }
    sortie.damage.set_jammed(jam, false);
    tracing::info!(?jam, "jam cleared");
    log.emit(SimEvent::JamCleared { jam });
}
