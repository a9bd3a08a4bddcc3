//! Simulation engine for STRIKE.
//!
//! Owns the hecs ECS world and the craft's sortie state, runs systems once
//! per update, and produces `StrikeSnapshot`s for the host.

pub mod engine;
pub mod event_log;
pub mod registry;
pub mod schedule;
pub mod sortie;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use strike_core as core;
