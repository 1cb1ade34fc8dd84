//! Core types and definitions for the SKIRMISH combat simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, configuration records, commands, snapshots, events, and
//! constants. It holds plain data only; the tick loop lives in `skirmish-sim`.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;
