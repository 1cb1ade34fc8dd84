//! Simulation engine: the core of the battle.
//!
//! `SimulationEngine` owns the hecs ECS world, processes host commands,
//! runs all systems, and produces `BattleSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use skirmish_core::commands::SimCommand;
use skirmish_core::components::{Troop, TroopId};
use skirmish_core::config::{ConfigError, Scenario, TroopConfig};
use skirmish_core::constants::DT;
use skirmish_core::enums::{BattleOutcome, BattlePhase, ScenarioId, Team};
use skirmish_core::events::PresentationEvent;
use skirmish_core::state::BattleSnapshot;
use skirmish_core::types::SimTime;

use crate::ports::{is_live_troop, LinearScanIndex, SpawnQueue, WorldIndex};
use crate::scenario;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::animation::Presentation;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Seconds advanced by [`SimulationEngine::tick`].
    pub dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42, dt: DT }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: BattlePhase,
    outcome: BattleOutcome,
    dt: f64,
    rng: ChaCha8Rng,
    scenario: ScenarioId,
    next_troop_id: u32,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    spawn_queue: SpawnQueue,
    presentation: Presentation,
    index: Box<dyn WorldIndex>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: BattlePhase::default(),
            outcome: BattleOutcome::default(),
            dt: config.dt,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            scenario: ScenarioId::default(),
            next_troop_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            spawn_queue: SpawnQueue::new(),
            presentation: Presentation::new(),
            index: Box::new(LinearScanIndex),
            score: ScoreState::default(),
        }
    }

    /// Replace the target-acquisition index (e.g. with a spatial one).
    pub fn with_index(mut self, index: Box<dyn WorldIndex>) -> Self {
        self.index = index;
        self
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = SimCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by the configured `dt` and return the resulting snapshot.
    pub fn tick(&mut self) -> BattleSnapshot {
        self.tick_with(self.dt)
    }

    /// Advance the simulation by an externally supplied `dt`.
    /// A negative or non-finite `dt` is treated as zero.
    pub fn tick_with(&mut self, dt: f64) -> BattleSnapshot {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            warn!(dt, "invalid tick length, using 0");
            0.0
        };
        self.process_commands();

        if self.phase == BattlePhase::Active {
            self.run_systems(dt as f32);
            self.time.advance(dt);
            self.check_outcome();
        }

        let events = self.presentation.log.take();
        self.score.record(&events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.outcome,
            events,
            &self.presentation,
            &self.score,
        )
    }

    /// Validate `config` and place a troop. Works in any phase; the troop
    /// joins the fight on the next active tick.
    pub fn spawn_troop(&mut self, config: &TroopConfig) -> Result<TroopId, ConfigError> {
        config.validate()?;
        let id = TroopId(self.next_troop_id);
        self.next_troop_id += 1;
        world_setup::spawn_troop(&mut self.world, id, config);
        Ok(id)
    }

    /// Place every troop of `scenario`. Nothing is spawned if any record is invalid.
    pub fn load_scenario(&mut self, scenario: &Scenario) -> Result<Vec<TroopId>, ConfigError> {
        scenario.validate()?;
        scenario
            .troops
            .iter()
            .map(|config| self.spawn_troop(config))
            .collect()
    }

    /// Get the current battle phase.
    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the score state.
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single host command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::SelectScenario { scenario: preset } => {
                if self.phase == BattlePhase::Setup {
                    self.clear_field();
                    self.scenario = preset;
                    let roster = scenario::build(preset, &mut self.rng);
                    if let Err(err) = self.load_scenario(&roster) {
                        warn!(?preset, %err, "preset scenario rejected");
                    }
                }
            }
            SimCommand::SpawnTroop { config } => {
                if self.phase == BattlePhase::Finished {
                    return;
                }
                if let Err(err) = self.spawn_troop(&config) {
                    warn!(%err, "troop spawn rejected");
                }
            }
            SimCommand::StartBattle => {
                if self.phase == BattlePhase::Setup {
                    let (attackers, defenders) = self.live_counts();
                    info!(attackers, defenders, scenario = ?self.scenario, "battle started");
                    self.phase = BattlePhase::Active;
                    self.time = SimTime::default();
                }
            }
            SimCommand::Pause => {
                if self.phase == BattlePhase::Active {
                    self.phase = BattlePhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == BattlePhase::Paused {
                    self.phase = BattlePhase::Active;
                }
            }
            SimCommand::ReturnToSetup => {
                self.clear_field();
                self.phase = BattlePhase::Setup;
                self.time = SimTime::default();
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Animation rate resets armed on earlier ticks
        systems::animation::run(&mut self.presentation, dt);
        // 2. Troops: cooldowns, targeting, movement, attacks
        systems::combat::run(
            &mut self.world,
            self.index.as_ref(),
            &mut self.spawn_queue,
            &mut self.presentation,
            dt,
        );
        // 3. Projectiles in flight
        systems::homing::run(
            &mut self.world,
            &mut self.presentation,
            &mut self.despawn_buffer,
            dt,
        );
        // 4. Materialize shots fired this tick
        self.flush_spawns();
        // 5. Cleanup (dead troops, spent projectiles)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    fn flush_spawns(&mut self) {
        for pending in self.spawn_queue.drain() {
            let target = self
                .world
                .get::<&TroopId>(pending.projectile.target)
                .ok()
                .map(|id| *id);
            world_setup::spawn_projectile(&mut self.world, &pending);
            if let Some(target) = target {
                self.presentation.log.push(PresentationEvent::ProjectileFired {
                    projectile: pending.id,
                    source: pending.projectile.source,
                    target,
                    origin: pending.origin,
                });
            }
        }
    }

    /// Finish the battle once a side has nobody left standing.
    fn check_outcome(&mut self) {
        let outcome = match self.live_counts() {
            (0, 0) => BattleOutcome::Draw,
            (_, 0) => BattleOutcome::Victory(Team::Attacker),
            (0, _) => BattleOutcome::Victory(Team::Defender),
            _ => return,
        };
        info!(?outcome, elapsed_secs = self.time.elapsed_secs, "battle finished");
        self.outcome = outcome;
        self.phase = BattlePhase::Finished;
    }

    /// Live troops per side: (attackers, defenders).
    fn live_counts(&self) -> (u32, u32) {
        let mut counts = (0, 0);
        let mut query = self.world.query::<(&Troop, &Team)>();
        for (entity, (_troop, team)) in query.iter() {
            if !is_live_troop(&self.world, entity) {
                continue;
            }
            match team {
                Team::Attacker => counts.0 += 1,
                Team::Defender => counts.1 += 1,
            }
        }
        counts
    }

    fn clear_field(&mut self) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.spawn_queue.reset();
        self.presentation.clear();
        self.next_troop_id = 0;
        self.outcome = BattleOutcome::Undecided;
        self.score = ScoreState::default();
    }
}
