//! Mission logic for STRIKE.
//!
//! Pure functions for the craft's mission state machine, flight
//! integration and crash fall. No ECS dependency; operates on plain data.

pub mod crash;
pub mod fsm;
pub mod movement;

pub use strike_core as core;

#[cfg(test)]
mod tests;
