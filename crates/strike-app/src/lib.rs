//! STRIKE runner.
//!
//! Hosts the simulation engine on its own thread and exposes it through a
//! small command/snapshot surface. Also carries the scripted demo sortie
//! the binary flies, on a private engine or through that surface.

pub mod control;
pub mod game_loop;
pub mod script;
pub mod state;

pub use strike_core as core;
