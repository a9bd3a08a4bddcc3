//! Weapon release, munition flight and target destruction.

use hecs::World;

use strike_core::components::Munition;
use strike_core::config::WeaponsConfig;
use strike_core::enums::{AlertLevel, LockStatus, MissionPhase, WeaponKind};
use strike_core::error::CommandRejection;
use strike_core::events::SimEvent;
use strike_core::types::Vec3;

use strike_mission::fsm::MissionTrigger;

use crate::event_log::EventLog;
use crate::schedule::TimedEvent;
use crate::sortie::SortieState;
use crate::systems::mission;

/// Change the selected weapon.
pub fn select_weapon(
    sortie: &mut SortieState,
    weapon: WeaponKind,
) -> Result<(), CommandRejection> {
    if sortie.is_down() {
        return Err(CommandRejection::CraftDown);
    }
    sortie.arsenal.selected = weapon;
    tracing::debug!(?weapon, "weapon selected");
    Ok(())
}

/// Release the selected weapon at the locked target.
///
/// Returns the new munition's id.
pub fn fire(
    world: &mut World,
    sortie: &mut SortieState,
    config: &WeaponsConfig,
    next_id: &mut u32,
    now: f64,
    log: &mut EventLog,
) -> Result<u32, CommandRejection> {
    match sortie.mission.phase {
        MissionPhase::Crashed => return Err(CommandRejection::CraftDown),
        MissionPhase::Attacking => {}
        other => return Err(CommandRejection::NotAttacking(other)),
    }
    let status = sortie.targeting.status;
    let target_id = match (status, sortie.targeting.locked_target) {
        (LockStatus::Locked, Some(id)) => id,
        _ => return Err(CommandRejection::NoLock(status)),
    };
    let target = sortie
        .registry
        .get(&target_id)
        .ok_or(CommandRejection::UnknownTarget(target_id))?;
    if sortie.registry.is_destroyed(&target_id) {
        return Err(CommandRejection::TargetDestroyed(target_id));
    }
    let weapon = sortie.arsenal.selected;
    let rounds = sortie.arsenal.ammo.get_mut(weapon);
    if *rounds == 0 {
        return Err(CommandRejection::OutOfAmmo(weapon));
    }
    *rounds -= 1;
    let remaining = *rounds;

    let id = *next_id;
    *next_id += 1;
    let origin = sortie.craft.position;
    world.spawn((
        Munition {
            id,
            weapon,
            target_id,
            origin,
            target_position: target.position,
            flight_progress: 0.0,
            speed: config.speed(weapon),
        },
        origin,
    ));

    tracing::info!(munition_id = id, ?weapon, %target_id, remaining, "weapon released");
    log.emit(SimEvent::WeaponFired {
        munition_id: id,
        weapon,
        target_id,
    });

    if remaining == 0 {
        log.emit(SimEvent::AmmoExpended { weapon });
        log.alert(AlertLevel::Warning, format!("{weapon:?} expended, returning to base"));
        arm_expenditure_return(sortie, config, now);
    }
    Ok(id)
}

/// Schedule the return home that follows running the selected weapon dry.
pub fn arm_expenditure_return(sortie: &mut SortieState, config: &WeaponsConfig, now: f64) {
    sortie
        .scheduler
        .schedule(TimedEvent::ExpenditureReturn, now + config.return_delay_secs);
}

/// The delayed return after running dry. Only acts if still on station.
pub fn expenditure_return(sortie: &mut SortieState, log: &mut EventLog) {
    if sortie.mission.phase != MissionPhase::Attacking {
        return;
    }
    tracing::info!("ammunition exhausted, returning to base");
    mission::transition(sortie, MissionTrigger::AmmoExhausted, log);
}

/// Advance every munition and resolve impacts.
///
/// A target is destroyed at most once, on the step its munition's progress
/// crosses 1.0. Spent munitions are left for cleanup.
pub fn run(world: &mut World, sortie: &mut SortieState, dt: f64, log: &mut EventLog) {
    for (_entity, (munition, position)) in world.query_mut::<(&mut Munition, &mut Vec3)>() {
        let before = munition.flight_progress;
        munition.flight_progress += dt * munition.speed;

        let t = munition.flight_progress.min(1.0);
        *position = munition.origin.lerp(munition.target_position, t);

        if before < 1.0 && munition.flight_progress >= 1.0 {
            log.emit(SimEvent::Explosion {
                weapon: munition.weapon,
                position: munition.target_position,
            });

            let target_id = munition.target_id;
            if sortie.registry.mark_destroyed(target_id) {
                let kind = sortie.registry.get(&target_id).map(|t| t.kind);
                tracing::info!(%target_id, munition_id = munition.id, "target destroyed");
                if let Some(kind) = kind {
                    log.emit(SimEvent::TargetDestroyed { kind, target_id });
                }
            }
        }
    }
}

/// Whether a munition has outlived its post-impact grace window.
pub fn is_spent(munition: &Munition, config: &WeaponsConfig) -> bool {
    munition.flight_progress >= 1.0 + munition.speed * config.impact_grace_secs
}
