//! Core types and definitions for the STRIKE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! spatial helpers, components, commands, snapshots, events, configuration
//! and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod craft;
pub mod enums;
pub mod error;
pub mod events;
pub mod spatial;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
