//! Mission finite state machine.
//!
//! `next_phase` is the only place phase transitions are decided. Every
//! (phase, trigger) pair without an entry is refused.

use strike_core::enums::MissionPhase;
use strike_core::spatial;
use strike_core::types::Vec3;

/// Something that may move the mission to another phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissionTrigger {
    /// Operator ordered a move to an arbitrary point.
    CommandMove,
    /// Operator ordered an attack run on a target.
    BeginMission,
    /// The craft reached the destination of its current leg.
    Arrived,
    /// Operator ordered the craft home.
    ReturnToBase,
    /// The expenditure delay elapsed with the selected weapon empty.
    AmmoExhausted,
    /// Health reached zero.
    HealthDepleted,
}

impl MissionTrigger {
    pub const ALL: [MissionTrigger; 6] = [
        MissionTrigger::CommandMove,
        MissionTrigger::BeginMission,
        MissionTrigger::Arrived,
        MissionTrigger::ReturnToBase,
        MissionTrigger::AmmoExhausted,
        MissionTrigger::HealthDepleted,
    ];
}

/// Evaluate a trigger against the current phase.
pub fn next_phase(phase: MissionPhase, trigger: MissionTrigger) -> Option<MissionPhase> {
    use MissionPhase::*;
    use MissionTrigger::*;

    match (phase, trigger) {
        // Terminal: no transitions
        (Crashed, _) => None,
        (_, HealthDepleted) => Some(Crashed),

        (Idle | Manual, CommandMove) => Some(Manual),
        (Manual, Arrived) => Some(Idle),

        (Idle | Attacking, BeginMission) => Some(Moving),
        (Moving, Arrived) => Some(Attacking),

        (Attacking, ReturnToBase | AmmoExhausted) => Some(Returning),
        (Returning, Arrived) => Some(Idle),

        _ => None,
    }
}

/// Whether the phase flies a leg toward a fixed destination.
pub fn is_mission_leg(phase: MissionPhase) -> bool {
    matches!(phase, MissionPhase::Moving | MissionPhase::Returning)
}

/// Stand-off point for attacking `target` from the craft's side.
///
/// `target + normalize(craft - target) * distance`, with altitude replaced
/// by `altitude`. When the craft sits directly on the target the offset
/// collapses and the craft attacks from overhead.
pub fn attack_position(craft: Vec3, target: Vec3, distance: f64, altitude: f64) -> Vec3 {
    let offset = spatial::direction(target, craft) * distance;
    let mut position = target + offset;
    position.y = altitude;
    position
}
