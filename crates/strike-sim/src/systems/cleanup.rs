//! Cleanup system: removes spent munitions and landed or stale counter-fire.

use hecs::{Entity, World};

use strike_core::components::{CounterFire, Munition};
use strike_core::config::{DefenseConfig, WeaponsConfig};
use strike_core::constants::BOMB_EXPLOSION_SECS;
use strike_core::enums::CounterFireKind;

use crate::systems::weapons;

/// Remove finished entities. Every `cleanup_interval_secs` it also sweeps
/// counter-fire that has outlived its TTL regardless of state.
pub fn run(
    world: &mut World,
    weapons_config: &WeaponsConfig,
    defense_config: &DefenseConfig,
    now: f64,
    last_sweep_secs: &mut f64,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    // Munitions past their post-impact grace window.
    for (entity, munition) in world.query_mut::<&Munition>() {
        if weapons::is_spent(munition, weapons_config) {
            despawn_buffer.push(entity);
        }
    }

    // Landed rounds. Bombs linger for their explosion.
    for (entity, round) in world.query_mut::<&CounterFire>() {
        let Some(impacted_at) = round.impacted_at_secs else {
            continue;
        };
        let linger = match round.kind {
            CounterFireKind::Projectile => 0.0,
            CounterFireKind::Bomb => BOMB_EXPLOSION_SECS,
        };
        if now - impacted_at >= linger {
            despawn_buffer.push(entity);
        }
    }

    if now - *last_sweep_secs >= defense_config.cleanup_interval_secs {
        *last_sweep_secs = now;
        for (entity, round) in world.query_mut::<&CounterFire>() {
            let ttl = match round.kind {
                CounterFireKind::Projectile => defense_config.projectile_ttl_secs,
                CounterFireKind::Bomb => defense_config.bomb_ttl_secs,
            };
            if now - round.launched_at_secs > ttl && !despawn_buffer.contains(&entity) {
                despawn_buffer.push(entity);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
