//! Commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::config::TroopConfig;
use crate::enums::ScenarioId;

/// All possible host actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimCommand {
    /// Replace the current troops with a preset scenario. Setup phase only.
    SelectScenario { scenario: ScenarioId },
    /// Place one troop. Setup phase only; invalid records are dropped.
    SpawnTroop { config: TroopConfig },
    /// Begin simulating.
    StartBattle,
    Pause,
    Resume,
    /// Clear the field and go back to setup.
    ReturnToSetup,
}
