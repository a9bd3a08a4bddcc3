//! Systems that operate on the simulation world and sortie state each update.
//!
//! Systems are free functions over explicit state: `&mut World` for entities,
//! `&mut SortieState` for the craft. They do not own state.

pub mod cleanup;
pub mod damage;
pub mod defense;
pub mod detection;
pub mod mission;
pub mod snapshot;
pub mod targeting;
pub mod weapons;
