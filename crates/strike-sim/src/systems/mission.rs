//! Mission system: applies phase transitions and flies the craft.
//!
//! Transition decisions come from `strike_mission::fsm::next_phase`; this
//! module carries out their side effects on the sortie.

use strike_core::config::{DamageConfig, MissionConfig, WeaponsConfig};
use strike_core::enums::MissionPhase;
use strike_core::error::CommandRejection;
use strike_core::events::SimEvent;
use strike_core::spatial;
use strike_core::types::{TargetId, Vec3};

use strike_mission::crash;
use strike_mission::fsm::{self, MissionTrigger};
use strike_mission::movement;

use crate::event_log::EventLog;
use crate::schedule::TimedEvent;
use crate::sortie::SortieState;
use crate::systems::{targeting, weapons};

/// Apply a trigger. Returns the new phase, or `None` if the current phase
/// has no transition for it (state untouched).
pub fn transition(
    sortie: &mut SortieState,
    trigger: MissionTrigger,
    log: &mut EventLog,
) -> Option<MissionPhase> {
    let from = sortie.mission.phase;
    let to = fsm::next_phase(from, trigger)?;

    // Leaving the attack position or going down voids the lock and any
    // pending expenditure return.
    if (from == MissionPhase::Attacking && to != MissionPhase::Attacking)
        || to == MissionPhase::Crashed
    {
        targeting::reset(&mut sortie.targeting, log);
        sortie.scheduler.cancel(TimedEvent::ExpenditureReturn);
    }

    let mission = &mut sortie.mission;
    match to {
        MissionPhase::Moving | MissionPhase::Returning => {
            mission.leg_origin = Some(sortie.craft.position);
            mission.move_progress = 0.0;
        }
        MissionPhase::Idle => {
            mission.attack_position = None;
            mission.leg_origin = None;
            mission.move_progress = 0.0;
        }
        MissionPhase::Attacking => {
            mission.leg_origin = None;
            mission.move_progress = 1.0;
        }
        MissionPhase::Crashed => {
            mission.leg_origin = None;
            mission.manual_destination = None;
        }
        MissionPhase::Manual => {}
    }
    mission.phase = to;

    if from != to {
        tracing::info!(?from, ?to, ?trigger, "mission phase changed");
        log.emit(SimEvent::MissionPhaseChanged { from, to });
    }
    Some(to)
}

/// Whether `trigger` is accepted in the current phase.
fn check_trigger(
    sortie: &SortieState,
    command: &'static str,
    trigger: MissionTrigger,
) -> Result<(), CommandRejection> {
    let phase = sortie.mission.phase;
    if phase == MissionPhase::Crashed {
        return Err(CommandRejection::CraftDown);
    }
    match fsm::next_phase(phase, trigger) {
        Some(_) => Ok(()),
        None => Err(CommandRejection::InvalidTransition { command, phase }),
    }
}

/// Fly to an arbitrary point (idle/manual).
pub fn command_move(
    sortie: &mut SortieState,
    config: &MissionConfig,
    position: Vec3,
    log: &mut EventLog,
) -> Result<(), CommandRejection> {
    check_trigger(sortie, "command_move", MissionTrigger::CommandMove)?;
    if !spatial::is_finite(position) {
        return Err(CommandRejection::InvalidPosition);
    }

    let destination = movement::floor_destination(position, config.manual_floor_altitude);
    sortie.mission.manual_destination = Some(destination);
    transition(sortie, MissionTrigger::CommandMove, log);
    tracing::debug!(?destination, "manual move ordered");
    Ok(())
}

/// Start an attack run on a registered, intact target.
pub fn begin_mission(
    sortie: &mut SortieState,
    config: &MissionConfig,
    target_id: TargetId,
    log: &mut EventLog,
) -> Result<(), CommandRejection> {
    check_trigger(sortie, "begin_mission", MissionTrigger::BeginMission)?;
    let target = sortie
        .registry
        .get(&target_id)
        .ok_or(CommandRejection::UnknownTarget(target_id))?;
    if sortie.registry.is_destroyed(&target_id) {
        return Err(CommandRejection::TargetDestroyed(target_id));
    }

    let attack_position = fsm::attack_position(
        sortie.craft.position,
        target.position,
        config.attack_distance,
        config.attack_altitude,
    );
    sortie.mission.attack_position = Some(attack_position);
    sortie.mission.manual_destination = None;
    transition(sortie, MissionTrigger::BeginMission, log);
    tracing::info!(%target_id, ?attack_position, "attack run started");
    Ok(())
}

/// Abort the attack and fly home.
pub fn return_to_base(sortie: &mut SortieState, log: &mut EventLog) -> Result<(), CommandRejection> {
    check_trigger(sortie, "return_to_base", MissionTrigger::ReturnToBase)?;
    transition(sortie, MissionTrigger::ReturnToBase, log);
    Ok(())
}

/// Advance flight (or the crash fall) by `dt` seconds.
pub fn run(
    sortie: &mut SortieState,
    mission_config: &MissionConfig,
    weapons_config: &WeaponsConfig,
    now: f64,
    dt: f64,
    log: &mut EventLog,
) {
    let phase = sortie.mission.phase;
    if fsm::is_mission_leg(phase) {
        run_leg(sortie, mission_config, weapons_config, now, dt, log);
        return;
    }
    match phase {
        MissionPhase::Crashed => run_crash(sortie, now, dt, log),
        MissionPhase::Manual => run_manual(sortie, mission_config, dt, log),
        _ => {}
    }
}

fn run_manual(sortie: &mut SortieState, config: &MissionConfig, dt: f64, log: &mut EventLog) {
    let Some(destination) = sortie.mission.manual_destination else {
        transition(sortie, MissionTrigger::Arrived, log);
        return;
    };

    let update = movement::manual_step(
        sortie.craft.position,
        sortie.craft.rotation,
        destination,
        config.manual_speed,
        config.manual_floor_altitude,
        config.manual_arrival_epsilon,
        dt,
    );
    sortie.craft.position = update.position;
    sortie.craft.rotation = update.rotation;

    if update.arrived {
        sortie.mission.manual_destination = None;
        transition(sortie, MissionTrigger::Arrived, log);
    }
}

fn run_leg(
    sortie: &mut SortieState,
    config: &MissionConfig,
    weapons_config: &WeaponsConfig,
    now: f64,
    dt: f64,
    log: &mut EventLog,
) {
    let destination = match sortie.mission.phase {
        MissionPhase::Moving => match sortie.mission.attack_position {
            Some(p) => p,
            None => return,
        },
        _ => sortie.mission.home_base,
    };

    let update = movement::approach_step(
        sortie.craft.position,
        sortie.craft.rotation,
        destination,
        config.attack_speed,
        config.arrival_epsilon,
        dt,
    );

    if update.arrived {
        let arrived_at = transition(sortie, MissionTrigger::Arrived, log);
        // On station with nothing left in the selected weapon: head home.
        let weapon = sortie.arsenal.selected;
        if arrived_at == Some(MissionPhase::Attacking) && sortie.arsenal.ammo.get(weapon) == 0 {
            tracing::info!(?weapon, "on station with selected weapon empty");
            weapons::arm_expenditure_return(sortie, weapons_config, now);
        }
        return;
    }

    sortie.craft.position = update.position;
    sortie.craft.rotation = update.rotation;
    let origin = sortie.mission.leg_origin.unwrap_or(update.position);
    sortie.mission.move_progress = movement::leg_progress(
        origin,
        destination,
        update.position,
        sortie.mission.move_progress,
    );
}

fn run_crash(sortie: &mut SortieState, now: f64, dt: f64, log: &mut EventLog) {
    let Some(crash_data) = sortie.mission.crash.as_mut() else {
        return;
    };
    if !crash_data.falling {
        return;
    }

    let update = crash::step_fall(crash_data, sortie.craft.position, sortie.craft.rotation, dt, now);
    sortie.craft.position = update.position;
    sortie.craft.rotation = update.rotation;

    if update.grounded {
        crash_data.falling = false;
        tracing::info!(position = ?update.position, "craft came to rest");
        log.emit(SimEvent::CraftGrounded {
            position: update.position,
        });
    }
}

/// Bring the craft down at its current position.
pub fn bring_down<R: rand::Rng>(
    sortie: &mut SortieState,
    config: &DamageConfig,
    rng: &mut R,
    log: &mut EventLog,
) {
    if transition(sortie, MissionTrigger::HealthDepleted, log).is_none() {
        return;
    }
    let position = sortie.craft.position;
    sortie.mission.crash = Some(crash::roll_crash(rng, position, config));
    sortie.damage.smoke = true;
    sortie.damage.fire = true;
    tracing::warn!(?position, "craft down");
    log.emit(SimEvent::CraftDown { position });
}
