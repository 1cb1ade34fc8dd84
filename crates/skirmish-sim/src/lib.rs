//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs the combat systems once per tick,
//! and produces BattleSnapshots for the host.

pub mod engine;
pub mod ports;
pub mod scenario;
pub mod score;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skirmish_core as core;
