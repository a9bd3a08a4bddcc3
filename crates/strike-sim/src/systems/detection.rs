//! Detection system: promotes ground entities inside the scan radius into
//! the target registry, once each.

use hecs::World;

use strike_core::components::GroundEntity;
use strike_core::events::SimEvent;
use strike_core::spatial;
use strike_core::types::Vec3;

use crate::event_log::EventLog;
use crate::registry::{Target, TargetRegistry};
use crate::sortie::SortieState;

/// Check one entity against the craft. Returns true when it was promoted
/// by this call. Registered entities are skipped without evaluation.
pub fn check_detection(
    entity: &GroundEntity,
    position: Vec3,
    craft_position: Vec3,
    scan_radius: f64,
    registry: &mut TargetRegistry,
    now: f64,
    log: &mut EventLog,
) -> bool {
    if registry.contains(&entity.id) {
        return false;
    }
    if spatial::distance(position, craft_position) >= scan_radius {
        return false;
    }

    let inserted = registry.insert(Target {
        id: entity.id,
        kind: entity.kind,
        position,
        detected_at_secs: now,
    });
    if inserted {
        tracing::info!(target_id = %entity.id, kind = %entity.kind, "target detected");
        log.emit(SimEvent::TargetDetected {
            kind: entity.kind,
            target_id: entity.id,
        });
    }
    inserted
}

/// Run detection for every ground entity. A downed craft detects nothing.
pub fn run(world: &World, sortie: &mut SortieState, scan_radius: f64, now: f64, log: &mut EventLog) {
    if sortie.is_down() {
        return;
    }

    let craft_position = sortie.craft.position;
    let mut query = world.query::<(&GroundEntity, &Vec3)>();
    for (_entity, (ground, position)) in query.iter() {
        check_detection(
            ground,
            *position,
            craft_position,
            scan_radius,
            &mut sortie.registry,
            now,
            log,
        );
    }
}
