//! Host-facing control surface over the game loop thread.

use std::time::Duration;

use strike_core::commands::PilotCommand;
use strike_core::config::StrikeConfig;
use strike_core::state::StrikeSnapshot;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop is gone")]
    Disconnected,
    #[error("runner state lock poisoned")]
    Poisoned,
    #[error("failed to spawn game loop: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("no new snapshot within {0:?}")]
    Stalled(Duration),
}

/// Start the game loop thread if it is not already running.
pub fn start_simulation(state: &AppState, config: StrikeConfig) -> Result<(), ControlError> {
    let mut running = state.running.lock().map_err(|_| ControlError::Poisoned)?;
    if *running {
        return Err(ControlError::AlreadyRunning);
    }

    let cmd_tx = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    let mut tx_lock = state.command_tx.lock().map_err(|_| ControlError::Poisoned)?;
    *tx_lock = Some(cmd_tx);
    *running = true;
    Ok(())
}

/// Forward a pilot command to the game loop.
pub fn send_command(state: &AppState, command: PilotCommand) -> Result<(), ControlError> {
    let tx_lock = state.command_tx.lock().map_err(|_| ControlError::Poisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::Pilot(command))
            .map_err(|_| ControlError::Disconnected),
        None => Err(ControlError::NotStarted),
    }
}

/// The most recent snapshot, if a tick has run. Its events and alerts are
/// everything not yet collected; they stay in place.
pub fn get_snapshot(state: &AppState) -> Result<Option<StrikeSnapshot>, ControlError> {
    let lock = state.latest_snapshot.lock().map_err(|_| ControlError::Poisoned)?;
    Ok(lock.clone())
}

/// Like `get_snapshot`, but takes the uncollected events and alerts so the
/// next call only sees newer ones.
pub fn collect_snapshot(state: &AppState) -> Result<Option<StrikeSnapshot>, ControlError> {
    let mut lock = state.latest_snapshot.lock().map_err(|_| ControlError::Poisoned)?;
    Ok(lock.as_mut().map(|latest| {
        let events = std::mem::take(&mut latest.events);
        let alerts = std::mem::take(&mut latest.alerts);
        StrikeSnapshot {
            events,
            alerts,
            ..latest.clone()
        }
    }))
}

/// Stop the game loop. Stopping a stopped runner is a no-op.
pub fn stop_simulation(state: &AppState) -> Result<(), ControlError> {
    let mut running = state.running.lock().map_err(|_| ControlError::Poisoned)?;
    let mut tx_lock = state.command_tx.lock().map_err(|_| ControlError::Poisoned)?;
    if let Some(tx) = tx_lock.take() {
        // A loop that already exited has dropped its receiver.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    *running = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strike_sim::engine::SimulationEngine;

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PilotCommand::Pause),
            Err(ControlError::NotStarted)
        ));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_collect_takes_events_once() {
        let state = AppState::new();
        let mut engine = SimulationEngine::default();
        let _ = engine.apply_command(PilotCommand::Fire);
        *state.latest_snapshot.lock().unwrap() = Some(engine.snapshot());

        let peeked = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(peeked.events.len(), 1);

        let collected = collect_snapshot(&state).unwrap().unwrap();
        assert_eq!(collected.events.len(), 1);
        assert_eq!(collected.alerts.len(), 1);

        let again = collect_snapshot(&state).unwrap().unwrap();
        assert!(again.events.is_empty());
        assert!(again.alerts.is_empty());
        assert_eq!(again.time, collected.time);
    }

    #[test]
    fn test_start_twice_fails_and_stop_is_idempotent() {
        let state = AppState::new();
        start_simulation(&state, StrikeConfig::default()).unwrap();
        assert!(matches!(
            start_simulation(&state, StrikeConfig::default()),
            Err(ControlError::AlreadyRunning)
        ));
        send_command(&state, PilotCommand::Pause).unwrap();

        stop_simulation(&state).unwrap();
        stop_simulation(&state).unwrap();
        assert!(!*state.running.lock().unwrap());
        assert!(matches!(
            send_command(&state, PilotCommand::Pause),
            Err(ControlError::NotStarted)
        ));
    }
}
