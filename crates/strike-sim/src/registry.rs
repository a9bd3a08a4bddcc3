//! Target registry: detected ground entities, in detection order.
//!
//! Append-only: targets are never removed, only marked destroyed.

use std::collections::{HashMap, HashSet};

use strike_core::enums::GroundKind;
use strike_core::types::{TargetId, Vec3};

/// A ground entity promoted by detection.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: TargetId,
    pub kind: GroundKind,
    pub position: Vec3,
    /// Simulation time of detection.
    pub detected_at_secs: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: Vec<Target>,
    index: HashMap<TargetId, usize>,
    destroyed: Vec<TargetId>,
    destroyed_set: HashSet<TargetId>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &TargetId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &TargetId) -> Option<&Target> {
        self.index.get(id).map(|&i| &self.targets[i])
    }

    /// Register a target. Returns false if its id is already present.
    pub fn insert(&mut self, target: Target) -> bool {
        if self.index.contains_key(&target.id) {
            return false;
        }
        self.index.insert(target.id, self.targets.len());
        self.targets.push(target);
        true
    }

    /// Mark a registered target destroyed. Returns false if it is unknown
    /// or was already destroyed.
    pub fn mark_destroyed(&mut self, id: TargetId) -> bool {
        if !self.index.contains_key(&id) || !self.destroyed_set.insert(id) {
            return false;
        }
        self.destroyed.push(id);
        true
    }

    pub fn is_destroyed(&self, id: &TargetId) -> bool {
        self.destroyed_set.contains(id)
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Destroyed ids in destruction order.
    pub fn destroyed(&self) -> &[TargetId] {
        &self.destroyed
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
