//! Lock acquisition on a registered target.

use strike_core::enums::{LockStatus, MissionPhase};
use strike_core::craft::TargetingState;
use strike_core::error::CommandRejection;
use strike_core::events::SimEvent;
use strike_core::types::TargetId;

use crate::event_log::EventLog;
use crate::sortie::SortieState;

/// Start acquiring `target_id`, replacing any prior attempt.
pub fn begin_lock(
    sortie: &mut SortieState,
    target_id: TargetId,
    log: &mut EventLog,
) -> Result<(), CommandRejection> {
    match sortie.mission.phase {
        MissionPhase::Crashed => return Err(CommandRejection::CraftDown),
        MissionPhase::Attacking => {}
        other => return Err(CommandRejection::NotAttacking(other)),
    }
    if sortie.damage.targeting_jammed {
        return Err(CommandRejection::TargetingJammed);
    }
    if !sortie.registry.contains(&target_id) {
        return Err(CommandRejection::UnknownTarget(target_id));
    }
    if sortie.registry.is_destroyed(&target_id) {
        return Err(CommandRejection::TargetDestroyed(target_id));
    }

    let targeting = &mut sortie.targeting;
    if let Some(previous) = targeting.locked_target.filter(|id| *id != target_id) {
        if targeting.status != LockStatus::Inactive {
            log.emit(SimEvent::LockBroken {
                target_id: previous,
            });
        }
    }
    targeting.locked_target = Some(target_id);
    targeting.status = LockStatus::Acquiring;
    targeting.lock_timer_ms = 0.0;

    tracing::debug!(%target_id, "lock acquiring");
    log.emit(SimEvent::LockAcquiring { target_id });
    Ok(())
}

/// Advance an in-progress acquisition by `dt` seconds.
pub fn run(sortie: &mut SortieState, dt: f64, log: &mut EventLog) {
    let targeting = &mut sortie.targeting;
    if targeting.status != LockStatus::Acquiring {
        return;
    }

    targeting.lock_timer_ms = (targeting.lock_timer_ms + dt * 1000.0).min(targeting.max_lock_time_ms);
    if targeting.lock_timer_ms >= targeting.max_lock_time_ms {
        targeting.status = LockStatus::Locked;
        if let Some(target_id) = targeting.locked_target {
            tracing::info!(%target_id, "target locked");
            log.emit(SimEvent::LockAcquired { target_id });
        }
    }
}

/// Drop any lock or attempt.
pub fn reset(targeting: &mut TargetingState, log: &mut EventLog) {
    if targeting.status != LockStatus::Inactive {
        if let Some(target_id) = targeting.locked_target {
            log.emit(SimEvent::LockBroken { target_id });
        }
    }
    targeting.status = LockStatus::Inactive;
    targeting.lock_timer_ms = 0.0;
    targeting.locked_target = None;
}
