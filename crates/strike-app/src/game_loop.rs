//! Game loop thread: runs the simulation engine at 60 Hz and publishes
//! snapshots.
//!
//! The engine is created inside the thread and reached only through the
//! command channel. The latest snapshot is stored in shared state for
//! polling; events and alerts pile up on it until the host collects them.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use strike_core::config::StrikeConfig;
use strike_core::constants::TICK_RATE;
use strike_core::state::StrikeSnapshot;
use strike_sim::engine::SimulationEngine;

use crate::state::GameLoopCommand;

/// Wall-clock duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Uncollected events (and alerts) kept on the published snapshot. Oldest
/// are dropped first.
pub const MAX_UNCOLLECTED_EVENTS: usize = 4096;

/// Spawns the game loop in a new thread and returns its command sender.
pub fn spawn_game_loop(
    config: StrikeConfig,
    latest_snapshot: Arc<Mutex<Option<StrikeSnapshot>>>,
) -> io::Result<mpsc::Sender<GameLoopCommand>> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("strike-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })?;

    Ok(cmd_tx)
}

/// The game loop. Runs until `Shutdown` or channel disconnect.
///
/// The engine applies the time scale to each fixed step, so the loop
/// itself always paces at `TICK_DURATION`.
fn run_game_loop(
    config: StrikeConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<StrikeSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    tracing::info!("game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Pilot(cmd)) => {
                    tracing::debug!(command = cmd.name(), "command received");
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    tracing::info!(tick = engine.time().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick (pause is handled by the engine)
        let snapshot = engine.tick();
        for alert in &snapshot.alerts {
            tracing::debug!(level = ?alert.level, message = %alert.message, "alert");
        }

        // 3. Publish for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            publish(&mut lock, snapshot);
        }

        // 4. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind: resync instead of bursting to catch up.
            next_tick_time = now;
        }
    }
}

/// Replace the published snapshot, carrying over events and alerts the
/// host has not collected yet.
pub fn publish(slot: &mut Option<StrikeSnapshot>, mut snapshot: StrikeSnapshot) {
    if let Some(previous) = slot.take() {
        snapshot.events = carry_over(previous.events, snapshot.events);
        snapshot.alerts = carry_over(previous.alerts, snapshot.alerts);
    }
    *slot = Some(snapshot);
}

fn carry_over<T>(mut pending: Vec<T>, mut fresh: Vec<T>) -> Vec<T> {
    pending.append(&mut fresh);
    if pending.len() > MAX_UNCOLLECTED_EVENTS {
        let excess = pending.len() - MAX_UNCOLLECTED_EVENTS;
        tracing::warn!(dropped = excess, "uncollected events overflowed");
        pending.drain(..excess);
    }
    pending
}
