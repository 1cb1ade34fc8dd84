//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Side a troop fights for. Fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Attacker,
    Defender,
}

impl Team {
    /// The team this one fights against.
    pub fn opponent(self) -> Team {
        match self {
            Team::Attacker => Team::Defender,
            Team::Defender => Team::Attacker,
        }
    }
}

/// Troop behavior state, evaluated once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatState {
    /// No target.
    #[default]
    Idle,
    /// Has a target, out of range, closing in.
    Seeking,
    /// Has a target within attack range.
    Attacking,
    /// Health depleted. Terminal.
    Dead,
}

/// Animation clip a troop is presenting. View-facing only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnimationClip {
    #[default]
    Idle,
    Walk,
    Attack,
}

/// How a troop delivers damage, derived from its attack range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackKind {
    /// Damage applied instantly on attack.
    Melee,
    /// Damage delivered by a homing projectile.
    Ranged,
}

/// Battle phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattlePhase {
    /// Troops can be placed; nothing moves.
    #[default]
    Setup,
    Active,
    Paused,
    /// At most one team has troops left.
    Finished,
}

/// Result of a battle, decided when a team is wiped out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleOutcome {
    #[default]
    Undecided,
    Victory(Team),
    /// Both teams lost their last troop in the same tick.
    Draw,
}

/// Built-in scenario presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioId {
    /// One melee troop per team.
    #[default]
    Duel,
    /// Melee front line with archers behind it against a melee line.
    RangedSupport,
    /// Randomized formations drawn from the engine RNG.
    Skirmish,
}
