//! Simulation engine: the single owner of all STRIKE state.
//!
//! `SimulationEngine` owns the hecs ECS world and the craft's sortie,
//! processes pilot commands, runs all systems, and produces
//! `StrikeSnapshot`s. Headless and deterministic for a given seed and
//! command stream.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use strike_core::commands::PilotCommand;
use strike_core::config::StrikeConfig;
use strike_core::constants::{DT, MAX_TIME_SCALE, MAX_UPDATE_DELTA};
use strike_core::enums::{DamageKind, GroundKind, SimPhase, WeaponKind};
use strike_core::error::CommandRejection;
use strike_core::state::StrikeSnapshot;
use strike_core::types::{SimTime, TargetId, Vec3};

use crate::event_log::EventLog;
use crate::schedule::TimedEvent;
use crate::sortie::SortieState;
use crate::systems;
use crate::world_setup::{self, Theater};

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: StrikeConfig,
    world: World,
    time: SimTime,
    phase: SimPhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    sortie: SortieState,
    log: EventLog,
    command_queue: VecDeque<PilotCommand>,
    despawn_buffer: Vec<Entity>,
    next_munition_id: u32,
    next_counter_fire_id: u32,
    next_site_id: u32,
    last_cleanup_secs: f64,
}

impl SimulationEngine {
    /// Create an engine in standby. Nothing exists until `StartMission`.
    pub fn new(config: StrikeConfig) -> Self {
        let sortie = SortieState::new(&config);
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            time_scale: 1.0,
            sortie,
            log: EventLog::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            next_munition_id: 0,
            next_counter_fire_id: 0,
            next_site_id: 0,
            last_cleanup_secs: 0.0,
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PilotCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PilotCommand>) {
        self.command_queue.extend(commands);
    }

    /// Process a command now. A rejection is also reported in the next
    /// snapshot.
    pub fn apply_command(&mut self, command: PilotCommand) -> Result<(), CommandRejection> {
        let name = command.name();
        let result = self.dispatch(command);
        if let Err(rejection) = &result {
            self.log.reject(name, rejection);
        }
        result
    }

    /// Advance by one fixed step.
    pub fn tick(&mut self) -> StrikeSnapshot {
        self.update(DT)
    }

    /// Advance by a host-supplied delta in seconds. The delta is clamped to
    /// `[0, MAX_UPDATE_DELTA]` and then scaled by the time scale.
    pub fn update(&mut self, delta: f64) -> StrikeSnapshot {
        self.log.set_tick(self.time.tick);
        self.process_commands();

        if self.phase == SimPhase::Active {
            let delta = if delta.is_finite() {
                delta.clamp(0.0, MAX_UPDATE_DELTA)
            } else {
                0.0
            };
            let dt = delta * self.time_scale;
            self.time.advance(dt);
            self.run_systems(dt);
        }

        self.snapshot()
    }

    /// Build a snapshot now, handing over pending events and alerts.
    pub fn snapshot(&mut self) -> StrikeSnapshot {
        let (events, alerts) = self.log.drain();
        systems::snapshot::build_snapshot(&self.world, &self.sortie, &self.time, self.phase, events, alerts)
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn config(&self) -> &StrikeConfig {
        &self.config
    }

    /// Read-only view of the craft's state.
    pub fn sortie(&self) -> &SortieState {
        &self.sortie
    }

    /// Read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Add a ground entity to the running world.
    pub fn spawn_ground_entity(&mut self, kind: GroundKind, position: Vec3) -> TargetId {
        let (_entity, id) = world_setup::spawn_ground_entity(&mut self.world, kind, position);
        id
    }

    /// Add a defense site to the running world. Returns its id.
    pub fn spawn_defense_site(&mut self, position: Vec3) -> u32 {
        let id = self.next_site_id;
        self.next_site_id += 1;
        world_setup::spawn_defense_site(&mut self.world, id, position, &self.config.defense);
        id
    }

    /// Start a mission on a custom theater.
    pub fn start_mission_with(&mut self, theater: &Theater) {
        self.world.clear();
        self.time = SimTime::default();
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.sortie = SortieState::new(&self.config);
        self.despawn_buffer.clear();
        self.next_munition_id = 0;
        self.next_counter_fire_id = 0;
        self.next_site_id = 0;
        self.last_cleanup_secs = 0.0;

        world_setup::setup_theater(&mut self.world, theater, &self.config.defense, &mut self.next_site_id);
        self.phase = SimPhase::Active;
        tracing::info!(
            ground = theater.ground.len(),
            defense_sites = theater.defense_sites.len(),
            seed = self.config.seed,
            "mission started"
        );
    }

    // --- Command shorthands ---

    pub fn command_move(&mut self, position: Vec3) -> Result<(), CommandRejection> {
        self.apply_command(PilotCommand::CommandMove { position })
    }

    pub fn begin_mission(&mut self, target_id: TargetId) -> Result<(), CommandRejection> {
        self.apply_command(PilotCommand::BeginMission { target_id })
    }

    pub fn return_to_base(&mut self) -> Result<(), CommandRejection> {
        self.apply_command(PilotCommand::ReturnToBase)
    }

    pub fn begin_lock(&mut self, target_id: TargetId) -> Result<(), CommandRejection> {
        self.apply_command(PilotCommand::BeginLock { target_id })
    }

    pub fn fire(&mut self) -> Result<(), CommandRejection> {
        self.apply_command(PilotCommand::Fire)
    }

    pub fn select_weapon(&mut self, weapon: WeaponKind) -> Result<(), CommandRejection> {
        self.apply_command(PilotCommand::SelectWeapon { weapon })
    }

    pub fn apply_damage(
        &mut self,
        kind: DamageKind,
        amount: u32,
        duration_secs: Option<f64>,
    ) -> Result<(), CommandRejection> {
        self.apply_command(PilotCommand::ApplyDamage {
            kind,
            amount,
            duration_secs,
        })
    }

    pub fn resolve_counter_fire(&mut self) -> Result<(), CommandRejection> {
        self.apply_command(PilotCommand::ResolveCounterFire)
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            let _ = self.apply_command(command);
        }
    }

    fn dispatch(&mut self, command: PilotCommand) -> Result<(), CommandRejection> {
        if command.needs_mission() && self.phase == SimPhase::Standby {
            return Err(CommandRejection::NoMission);
        }
        let now = self.time.elapsed_secs;

        match command {
            PilotCommand::CommandMove { position } => systems::mission::command_move(
                &mut self.sortie,
                &self.config.mission,
                position,
                &mut self.log,
            ),
            PilotCommand::BeginMission { target_id } => systems::mission::begin_mission(
                &mut self.sortie,
                &self.config.mission,
                target_id,
                &mut self.log,
            ),
            PilotCommand::ReturnToBase => systems::mission::return_to_base(&mut self.sortie, &mut self.log),
            PilotCommand::BeginLock { target_id } => {
                systems::targeting::begin_lock(&mut self.sortie, target_id, &mut self.log)
            }
            PilotCommand::Fire => systems::weapons::fire(
                &mut self.world,
                &mut self.sortie,
                &self.config.weapons,
                &mut self.next_munition_id,
                now,
                &mut self.log,
            )
            .map(|_| ()),
            PilotCommand::SelectWeapon { weapon } => systems::weapons::select_weapon(&mut self.sortie, weapon),
            PilotCommand::ApplyDamage {
                kind,
                amount,
                duration_secs,
            } => systems::damage::apply_damage(
                &mut self.sortie,
                &self.config.damage,
                kind,
                amount,
                duration_secs,
                &mut self.rng,
                now,
                &mut self.log,
            ),
            PilotCommand::ResolveCounterFire => systems::defense::resolve_counter_fire(
                &self.world,
                &mut self.sortie,
                &self.config.defense,
                &self.config.damage,
                &mut self.rng,
                &mut self.log,
            ),
            PilotCommand::StartMission { theater } => {
                self.start_mission_with(&Theater::preset(theater));
                Ok(())
            }
            PilotCommand::Reset => {
                self.reset();
                Ok(())
            }
            PilotCommand::SetTimeScale { scale } => {
                if !scale.is_finite() {
                    return Err(CommandRejection::InvalidTimeScale(scale));
                }
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
                Ok(())
            }
            PilotCommand::Pause => {
                if self.phase == SimPhase::Active {
                    self.phase = SimPhase::Paused;
                }
                Ok(())
            }
            PilotCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Active;
                }
                Ok(())
            }
        }
    }

    fn reset(&mut self) {
        self.world.clear();
        // Undelivered events belong to the old session. Queued commands
        // are kept: they follow the reset.
        self.log.clear();
        self.despawn_buffer.clear();
        self.time = SimTime::default();
        self.sortie = SortieState::new(&self.config);
        self.next_munition_id = 0;
        self.next_counter_fire_id = 0;
        self.next_site_id = 0;
        self.last_cleanup_secs = 0.0;
        self.phase = SimPhase::Standby;
        tracing::info!("simulation reset");
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let now = self.time.elapsed_secs;

        // 1. Timed events (jam clears, expenditure return)
        for event in self.sortie.scheduler.drain_due(now) {
            match event {
                TimedEvent::ClearJam(jam) => systems::damage::clear_jam(&mut self.sortie, jam, &mut self.log),
                TimedEvent::ExpenditureReturn => {
                    systems::weapons::expenditure_return(&mut self.sortie, &mut self.log)
                }
            }
        }
        // 2. Detection
        systems::detection::run(
            &self.world,
            &mut self.sortie,
            self.config.scan_radius(),
            now,
            &mut self.log,
        );
        // 3. Flight and crash fall
        systems::mission::run(
            &mut self.sortie,
            &self.config.mission,
            &self.config.weapons,
            now,
            dt,
            &mut self.log,
        );
        // 4. Lock acquisition
        systems::targeting::run(&mut self.sortie, dt, &mut self.log);
        // 5. Munition flight and impacts
        systems::weapons::run(&mut self.world, &mut self.sortie, dt, &mut self.log);
        // 6. Defense sites and counter-fire
        systems::defense::run(
            &mut self.world,
            &mut self.sortie,
            &self.config.defense,
            &self.config.damage,
            &mut self.rng,
            &mut self.next_counter_fire_id,
            now,
            dt,
            &mut self.log,
        );
        // 7. Cleanup
        systems::cleanup::run(
            &mut self.world,
            &self.config.weapons,
            &self.config.defense,
            now,
            &mut self.last_cleanup_secs,
            &mut self.despawn_buffer,
        );
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(StrikeConfig::default())
    }
}
