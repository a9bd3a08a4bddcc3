//! Snapshot system: builds a complete StrikeSnapshot from the world and
//! sortie. Read-only.

use hecs::World;

use strike_core::components::*;
use strike_core::constants::DETECTION_CUE_SECS;
use strike_core::enums::SimPhase;
use strike_core::events::{Alert, SimEvent};
use strike_core::spatial;
use strike_core::state::*;
use strike_core::types::{SimTime, Vec3};

use crate::sortie::SortieState;

/// Build the snapshot for the current step.
pub fn build_snapshot(
    world: &World,
    sortie: &SortieState,
    time: &SimTime,
    phase: SimPhase,
    events: Vec<SimEvent>,
    alerts: Vec<Alert>,
) -> StrikeSnapshot {
    StrikeSnapshot {
        time: *time,
        phase,
        craft: sortie.craft,
        mission: sortie.mission.clone(),
        targeting: sortie.targeting,
        arsenal: sortie.arsenal,
        damage: sortie.damage,
        targets: build_targets(sortie, time.elapsed_secs),
        destroyed_targets: sortie.registry.destroyed().to_vec(),
        munitions: build_munitions(world),
        defense_sites: build_defense_sites(world),
        counter_fire: build_counter_fire(world),
        events,
        alerts,
    }
}

fn build_targets(sortie: &SortieState, now: f64) -> Vec<TargetView> {
    let craft_position = sortie.craft.position;
    sortie
        .registry
        .targets()
        .iter()
        .map(|target| TargetView {
            id: target.id,
            kind: target.kind,
            position: target.position,
            destroyed: sortie.registry.is_destroyed(&target.id),
            recently_detected: now - target.detected_at_secs < DETECTION_CUE_SECS,
            range: spatial::distance(craft_position, target.position),
        })
        .collect()
}

fn build_munitions(world: &World) -> Vec<MunitionView> {
    let mut munitions: Vec<MunitionView> = world
        .query::<(&Munition, &Vec3)>()
        .iter()
        .map(|(_, (munition, position))| MunitionView {
            id: munition.id,
            weapon: munition.weapon,
            target_id: munition.target_id,
            position: *position,
            target_position: munition.target_position,
            flight_progress: munition.flight_progress,
            impacted: munition.flight_progress >= 1.0,
        })
        .collect();
    munitions.sort_by_key(|m| m.id);
    munitions
}

fn build_defense_sites(world: &World) -> Vec<DefenseSiteView> {
    let mut sites: Vec<DefenseSiteView> = world
        .query::<(&DefenseSite, &Vec3)>()
        .iter()
        .map(|(_, (site, position))| DefenseSiteView {
            id: site.id,
            position: *position,
            detection_radius: site.detection_radius,
            craft_detected: site.detected,
            last_known_craft: site.last_known_craft,
        })
        .collect();
    sites.sort_by_key(|s| s.id);
    sites
}

fn build_counter_fire(world: &World) -> Vec<CounterFireView> {
    let mut rounds: Vec<CounterFireView> = world
        .query::<(&CounterFire, &Vec3)>()
        .iter()
        .map(|(_, (round, position))| CounterFireView {
            id: round.id,
            site_id: round.site_id,
            kind: round.kind,
            position: *position,
            target_position: round.target_position,
            progress: round.progress,
            impacted: round.impacted_at_secs.is_some(),
        })
        .collect();
    rounds.sort_by_key(|r| r.id);
    rounds
}
