//! Defense sites: craft tracking, counter-fire launch and flight.

use std::f64::consts::PI;

use hecs::World;
use rand::Rng;

use strike_core::components::{CounterFire, DefenseSite};
use strike_core::config::{DamageConfig, DefenseConfig};
use strike_core::constants::DEFENSE_MUZZLE_HEIGHT;
use strike_core::enums::{AlertLevel, CounterFireKind, CounterFirePolicy};
use strike_core::error::CommandRejection;
use strike_core::events::SimEvent;
use strike_core::spatial;
use strike_core::types::Vec3;

use crate::event_log::EventLog;
use crate::sortie::SortieState;
use crate::systems::damage;

/// Peak height of a gun round's arc as a fraction of its range.
const PROJECTILE_ARC: f64 = 0.15;

/// Whether a site at `site_position` currently sees a craft at `craft_position`.
pub fn site_detects(site: &DefenseSite, site_position: Vec3, craft_position: Vec3, craft_down: bool) -> bool {
    !craft_down
        && spatial::distance(site_position, craft_position) < site.detection_radius
        && craft_position.y > site.min_safe_altitude
}

/// Where a round is after covering `progress` of its flight.
pub fn counter_fire_position(round: &CounterFire) -> Vec3 {
    let t = round.progress.clamp(0.0, 1.0);
    let mut position = round.start.lerp(round.target_position, t);
    if round.kind == CounterFireKind::Projectile {
        let range = spatial::distance(round.start, round.target_position);
        position.y += range * PROJECTILE_ARC * (PI * t).sin();
    }
    position
}

struct Launch {
    site_id: u32,
    kind: CounterFireKind,
    start: Vec3,
    target_position: Vec3,
    flight_secs: f64,
}

/// Run the defense system for one step.
#[allow(clippy::too_many_arguments)]
pub fn run<R: Rng>(
    world: &mut World,
    sortie: &mut SortieState,
    config: &DefenseConfig,
    damage_config: &DamageConfig,
    rng: &mut R,
    next_id: &mut u32,
    now: f64,
    dt: f64,
    log: &mut EventLog,
) {
    let launches = track_craft(world, sortie, config, dt, log);

    for launch in launches {
        let id = *next_id;
        *next_id += 1;
        tracing::debug!(id, site_id = launch.site_id, kind = ?launch.kind, "counter-fire launched");
        log.emit(SimEvent::CounterFireLaunched {
            id,
            site_id: launch.site_id,
            kind: launch.kind,
            target_position: launch.target_position,
        });
        world.spawn((
            CounterFire {
                id,
                site_id: launch.site_id,
                kind: launch.kind,
                start: launch.start,
                target_position: launch.target_position,
                launched_at_secs: now,
                flight_secs: launch.flight_secs,
                progress: 0.0,
                impacted_at_secs: None,
            },
            launch.start,
        ));
    }

    let impacts = advance_counter_fire(world, now, dt, log);

    if config.policy == CounterFirePolicy::Automatic {
        for (kind, position) in impacts {
            if spatial::distance(position, sortie.craft.position) >= config.hit_radius {
                continue;
            }
            let amount = match kind {
                CounterFireKind::Projectile => config.projectile_damage,
                CounterFireKind::Bomb => config.bomb_damage,
            };
            damage::apply_hit(sortie, damage_config, amount, rng, log);
        }
    }
}

/// Update each site's view of the craft and collect the rounds due to fire.
fn track_craft(
    world: &mut World,
    sortie: &SortieState,
    config: &DefenseConfig,
    dt: f64,
    log: &mut EventLog,
) -> Vec<Launch> {
    let craft_position = sortie.craft.position;
    let craft_down = sortie.is_down();
    let mut launches = Vec::new();

    for (_entity, (site, position)) in world.query_mut::<(&mut DefenseSite, &Vec3)>() {
        let detected = site_detects(site, *position, craft_position, craft_down);

        if detected && !site.detected {
            tracing::info!(site_id = site.id, "craft spotted by defense site");
            log.emit(SimEvent::CraftSpotted { site_id: site.id });
            log.alert(AlertLevel::Warning, format!("detected by defense site {}", site.id));
            site.projectile_cooldown_secs = config.projectile_interval_secs;
            site.bomb_cooldown_secs = config.bomb_interval_secs;
        } else if !detected && site.detected {
            tracing::info!(site_id = site.id, "craft lost by defense site");
            log.emit(SimEvent::CraftLost { site_id: site.id });
            site.last_known_craft = None;
        }
        site.detected = detected;

        if detected {
            site.last_known_craft = Some(craft_position);
            fire_due(site, *position, config, dt, &mut launches);
        }
    }
    launches
}

/// Count down a detecting site's cooldowns and queue what comes due, aimed
/// at where the site last saw the craft.
fn fire_due(
    site: &mut DefenseSite,
    site_position: Vec3,
    config: &DefenseConfig,
    dt: f64,
    launches: &mut Vec<Launch>,
) {
    let Some(aim) = site.last_known_craft else {
        return;
    };

    site.projectile_cooldown_secs -= dt;
    if site.projectile_cooldown_secs <= 0.0 {
        site.projectile_cooldown_secs += config.projectile_interval_secs;
        launches.push(Launch {
            site_id: site.id,
            kind: CounterFireKind::Projectile,
            start: site_position + Vec3::new(0.0, DEFENSE_MUZZLE_HEIGHT, 0.0),
            target_position: aim,
            flight_secs: config.projectile_flight_secs,
        });
    }

    site.bomb_cooldown_secs -= dt;
    if site.bomb_cooldown_secs <= 0.0 {
        site.bomb_cooldown_secs += config.bomb_interval_secs;
        launches.push(Launch {
            site_id: site.id,
            kind: CounterFireKind::Bomb,
            start: aim + Vec3::new(0.0, config.bomb_drop_height, 0.0),
            target_position: aim,
            flight_secs: config.bomb_flight_secs,
        });
    }
}

/// Move rounds along their committed paths. Returns the rounds that landed
/// on this step.
fn advance_counter_fire(
    world: &mut World,
    now: f64,
    dt: f64,
    log: &mut EventLog,
) -> Vec<(CounterFireKind, Vec3)> {
    let mut impacts = Vec::new();

    for (_entity, (round, position)) in world.query_mut::<(&mut CounterFire, &mut Vec3)>() {
        if round.impacted_at_secs.is_some() {
            continue;
        }
        round.progress = if round.flight_secs > 0.0 {
            (round.progress + dt / round.flight_secs).min(1.0)
        } else {
            1.0
        };
        *position = counter_fire_position(round);

        if round.progress >= 1.0 {
            round.impacted_at_secs = Some(now);
            log.emit(SimEvent::CounterFireImpact {
                id: round.id,
                kind: round.kind,
                position: *position,
            });
            impacts.push((round.kind, *position));
        }
    }
    impacts
}

/// Operator-resolved strike under the manual policy: lands if any site has
/// the craft in its envelope right now.
pub fn resolve_counter_fire<R: Rng>(
    world: &World,
    sortie: &mut SortieState,
    config: &DefenseConfig,
    damage_config: &DamageConfig,
    rng: &mut R,
    log: &mut EventLog,
) -> Result<(), CommandRejection> {
    if config.policy == CounterFirePolicy::Automatic {
        return Err(CommandRejection::AutomaticPolicy);
    }
    if sortie.is_down() {
        return Err(CommandRejection::CraftDown);
    }

    let craft_position = sortie.craft.position;
    let spotted = world
        .query::<(&DefenseSite, &Vec3)>()
        .iter()
        .any(|(_entity, (site, position))| site_detects(site, *position, craft_position, false));
    if !spotted {
        return Err(CommandRejection::CraftNotDetected);
    }

    damage::apply_hit(sortie, damage_config, config.manual_strike_damage, rng, log);
    Ok(())
}
