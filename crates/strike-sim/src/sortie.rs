//! The craft's mutable state for one mission, passed explicitly to systems.

use strike_core::config::StrikeConfig;
use strike_core::craft::*;

use crate::registry::TargetRegistry;
use crate::schedule::Scheduler;

/// Everything the craft owns. Exactly one writer per update: the engine
/// hands it to one system at a time.
#[derive(Debug, Clone)]
pub struct SortieState {
    pub craft: Craft,
    pub mission: MissionState,
    pub targeting: TargetingState,
    pub arsenal: Arsenal,
    pub damage: DamageEffects,
    pub registry: TargetRegistry,
    pub scheduler: Scheduler,
}

impl SortieState {
    /// Fresh sortie at the configured start position with a full loadout.
    pub fn new(config: &StrikeConfig) -> Self {
        Self {
            craft: Craft::new(config.mission.craft_start),
            mission: MissionState::new(config.mission.home_base),
            targeting: TargetingState::new(config.targeting.max_lock_time_ms),
            arsenal: Arsenal {
                selected: Default::default(),
                ammo: Ammo {
                    missile: config.weapons.missile_loadout,
                    bomb: config.weapons.bomb_loadout,
                },
            },
            damage: DamageEffects::default(),
            registry: TargetRegistry::new(),
            scheduler: Scheduler::new(),
        }
    }

    pub fn is_down(&self) -> bool {
        self.mission.phase == strike_core::enums::MissionPhase::Crashed
    }
}
