//! Scripted demo sortie: fly to the range, strike the tank, head home.
//!
//! The same flight plan runs against any `Cockpit`: a private engine
//! stepped tick by tick (deterministic for a config), or the live game
//! loop reached through the control surface.

use std::convert::Infallible;
use std::time::{Duration, Instant};

use serde::Serialize;

use strike_core::commands::PilotCommand;
use strike_core::config::StrikeConfig;
use strike_core::enums::{GroundKind, LockStatus, MissionPhase, TheaterPreset};
use strike_core::events::SimEvent;
use strike_core::state::StrikeSnapshot;
use strike_core::types::{TargetId, Vec3};
use strike_sim::engine::SimulationEngine;

use crate::control::{self, ControlError};
use crate::game_loop::TICK_DURATION;
use crate::state::AppState;

/// Staging point near the range tank, inside its scan radius.
const STAGING_POINT: Vec3 = Vec3::new(-20.0, 12.0, -15.0);

/// Upper bound on ticks spent in any one stage (60 s).
const STAGE_TICK_LIMIT: usize = 3600;

/// Longest wall-clock wait for the live loop to publish a newer tick.
const LIVE_STALL_LIMIT: Duration = Duration::from_secs(5);

/// Outcome of a scripted sortie.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SortieReport {
    /// Last stage reached.
    pub stage: String,
    pub completed: bool,
    pub targets_detected: usize,
    pub targets_destroyed: usize,
    pub rounds_fired: usize,
    pub rejected_commands: usize,
    pub final_phase: MissionPhase,
    pub health: u32,
    pub elapsed_secs: f64,
}

impl SortieReport {
    fn absorb(&mut self, snapshot: &StrikeSnapshot) {
        for event in &snapshot.events {
            match event {
                SimEvent::TargetDetected { .. } => self.targets_detected += 1,
                SimEvent::TargetDestroyed { .. } => self.targets_destroyed += 1,
                SimEvent::WeaponFired { .. } => self.rounds_fired += 1,
                SimEvent::CommandRejected { .. } => self.rejected_commands += 1,
                _ => {}
            }
        }
        self.final_phase = snapshot.mission.phase;
        self.health = snapshot.craft.health;
        self.elapsed_secs = snapshot.time.elapsed_secs;
    }
}

/// Where the flight plan sends commands and reads snapshots from.
pub trait Cockpit {
    type Error;

    /// Issue a command and return the first snapshot that reflects it.
    fn command(&mut self, command: PilotCommand) -> Result<StrikeSnapshot, Self::Error>;

    /// The next snapshot after the one last returned.
    fn advance(&mut self) -> Result<StrikeSnapshot, Self::Error>;
}

/// A private engine, one tick per snapshot.
pub struct EngineCockpit {
    engine: SimulationEngine,
}

impl EngineCockpit {
    pub fn new(config: StrikeConfig) -> Self {
        Self {
            engine: SimulationEngine::new(config),
        }
    }
}

impl Cockpit for EngineCockpit {
    type Error = Infallible;

    fn command(&mut self, command: PilotCommand) -> Result<StrikeSnapshot, Infallible> {
        self.engine.queue_command(command);
        Ok(self.engine.tick())
    }

    fn advance(&mut self) -> Result<StrikeSnapshot, Infallible> {
        Ok(self.engine.tick())
    }
}

/// The game loop thread, driven through `control`.
///
/// Snapshots are collected rather than peeked, so every event the loop
/// publishes reaches the flight plan exactly once.
pub struct LiveCockpit<'a> {
    state: &'a AppState,
    last_tick: u64,
}

impl<'a> LiveCockpit<'a> {
    /// Attach to a runner that `control::start_simulation` has started.
    pub fn new(state: &'a AppState) -> Self {
        Self { state, last_tick: 0 }
    }

    /// Poll until a snapshot at or past `tick` is published. Events from
    /// the snapshots passed over on the way are folded into it.
    fn wait_for_tick(&mut self, tick: u64) -> Result<StrikeSnapshot, ControlError> {
        let deadline = Instant::now() + LIVE_STALL_LIMIT;
        let mut events = Vec::new();
        let mut alerts = Vec::new();
        loop {
            if let Some(mut snapshot) = control::collect_snapshot(self.state)? {
                events.append(&mut snapshot.events);
                alerts.append(&mut snapshot.alerts);
                if snapshot.time.tick >= tick {
                    self.last_tick = snapshot.time.tick;
                    snapshot.events = events;
                    snapshot.alerts = alerts;
                    return Ok(snapshot);
                }
            }
            if Instant::now() >= deadline {
                return Err(ControlError::Stalled(LIVE_STALL_LIMIT));
            }
            std::thread::sleep(TICK_DURATION / 2);
        }
    }
}

impl Cockpit for LiveCockpit<'_> {
    type Error = ControlError;

    fn command(&mut self, command: PilotCommand) -> Result<StrikeSnapshot, ControlError> {
        let published = control::get_snapshot(self.state)?
            .map_or(self.last_tick, |s| s.time.tick);
        control::send_command(self.state, command)?;
        // The tick in progress may already be past its command drain; the
        // one after it is not.
        self.wait_for_tick(published + 2)
    }

    fn advance(&mut self) -> Result<StrikeSnapshot, ControlError> {
        self.wait_for_tick(self.last_tick + 1)
    }
}

struct Sortie<C: Cockpit> {
    cockpit: C,
    report: SortieReport,
    last: Option<StrikeSnapshot>,
}

impl<C: Cockpit> Sortie<C> {
    fn step(&mut self) -> Result<&StrikeSnapshot, C::Error> {
        let snapshot = self.cockpit.advance()?;
        self.report.absorb(&snapshot);
        Ok(self.last.insert(snapshot))
    }

    fn command(&mut self, command: PilotCommand) -> Result<(), C::Error> {
        let snapshot = self.cockpit.command(command)?;
        self.report.absorb(&snapshot);
        self.last = Some(snapshot);
        Ok(())
    }

    /// Step until `done` holds for the latest snapshot.
    fn stage(&mut self, name: &str, done: impl Fn(&StrikeSnapshot) -> bool) -> Result<bool, C::Error> {
        self.report.stage = name.to_string();
        for _ in 0..STAGE_TICK_LIMIT {
            if done(self.step()?) {
                tracing::info!(stage = name, elapsed = self.report.elapsed_secs, "stage complete");
                return Ok(true);
            }
            if self.report.final_phase == MissionPhase::Crashed {
                break;
            }
        }
        tracing::warn!(stage = name, phase = ?self.report.final_phase, "stage did not complete");
        Ok(false)
    }
}

/// Fly the demo sortie against the range theater.
pub fn fly<C: Cockpit>(cockpit: C) -> Result<SortieReport, C::Error> {
    let mut sortie = Sortie {
        cockpit,
        report: SortieReport::default(),
        last: None,
    };

    sortie.command(PilotCommand::StartMission {
        theater: TheaterPreset::Range,
    })?;
    sortie.command(PilotCommand::CommandMove {
        position: STAGING_POINT,
    })?;
    if !sortie.stage("staging", |s| s.mission.phase == MissionPhase::Idle)? {
        return Ok(sortie.report);
    }

    let Some(tank) = find_target(sortie.last.as_ref(), GroundKind::Tank) else {
        tracing::warn!("tank not detected from staging point");
        return Ok(sortie.report);
    };

    sortie.command(PilotCommand::BeginMission { target_id: tank })?;
    if !sortie.stage("attack run", |s| s.mission.phase == MissionPhase::Attacking)? {
        return Ok(sortie.report);
    }

    sortie.command(PilotCommand::BeginLock { target_id: tank })?;
    if !sortie.stage("lock", |s| s.targeting.status == LockStatus::Locked)? {
        return Ok(sortie.report);
    }

    sortie.command(PilotCommand::Fire)?;
    if !sortie.stage("strike", |s| s.destroyed_targets.contains(&tank))? {
        return Ok(sortie.report);
    }

    sortie.command(PilotCommand::ReturnToBase)?;
    if !sortie.stage("return", |s| s.mission.phase == MissionPhase::Idle)? {
        return Ok(sortie.report);
    }

    sortie.report.completed = true;
    Ok(sortie.report)
}

/// Fly the demo sortie on a private engine.
pub fn run_scripted_sortie(config: StrikeConfig) -> SortieReport {
    match fly(EngineCockpit::new(config)) {
        Ok(report) => report,
        Err(never) => match never {},
    }
}

/// Fly the demo sortie on the game loop thread at `time_scale`.
pub fn run_live_sortie(config: StrikeConfig, time_scale: f64) -> Result<SortieReport, ControlError> {
    let state = AppState::new();
    control::start_simulation(&state, config)?;
    // Standby does not tick, so there is no snapshot to wait for here.
    let result = control::send_command(&state, PilotCommand::SetTimeScale { scale: time_scale })
        .and_then(|()| fly(LiveCockpit::new(&state)));
    control::stop_simulation(&state)?;
    result
}

fn find_target(snapshot: Option<&StrikeSnapshot>, kind: GroundKind) -> Option<TargetId> {
    snapshot?
        .targets
        .iter()
        .find(|t| t.kind == kind && !t.destroyed)
        .map(|t| t.id)
}
