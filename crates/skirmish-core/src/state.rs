//! Battle state snapshot: the complete visible state handed to the host each tick.

use serde::{Deserialize, Serialize};

use crate::components::{ProjectileId, TroopId};
use crate::enums::*;
use crate::events::PresentationEvent;
use crate::types::{Position, SimTime};

/// Complete battle state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleSnapshot {
    pub time: SimTime,
    pub phase: BattlePhase,
    pub outcome: BattleOutcome,
    pub troops: Vec<TroopView>,
    pub projectiles: Vec<ProjectileView>,
    /// Events raised during this tick, in emission order.
    pub events: Vec<PresentationEvent>,
    pub score: ScoreView,
}

/// A live troop, sorted by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TroopView {
    pub id: TroopId,
    pub team: Team,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub state: CombatState,
    pub animation: AnimationClip,
    pub animation_rate: f32,
    pub target: Option<TroopId>,
    pub attack_cooldown: f32,
}

/// A projectile in flight, sorted by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: ProjectileId,
    pub position: Position,
    pub target: Option<TroopId>,
    pub damage: i32,
}

/// Running tallies for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreView {
    pub attackers_alive: u32,
    pub defenders_alive: u32,
    pub attackers_lost: u32,
    pub defenders_lost: u32,
    pub projectiles_fired: u32,
    pub projectiles_lost: u32,
    pub battle_time_secs: f64,
}
