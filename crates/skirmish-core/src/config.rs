//! Spawn-time configuration records.
//!
//! A troop is created from a flat [`TroopConfig`]; a [`Scenario`] is a list of
//! them. Both deserialize from JSON with the stock troop stats filling any
//! omitted field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::CombatStats;
use crate::constants::*;
use crate::enums::Team;
use crate::types::Position;

/// Rejected configuration. The simulation itself never fails; only records
/// crossing into it are checked.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("attack speed must be a positive finite number, got {0}")]
    AttackSpeed(f32),
    #[error("health must be positive, got {0}")]
    Health(i32),
    #[error("damage must not be negative, got {0}")]
    Damage(i32),
    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("malformed scenario: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything needed to spawn one troop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TroopConfig {
    pub team: Team,
    pub position: Position,
    pub move_speed: f32,
    pub attack_range: f32,
    /// Attacks per second.
    pub attack_speed: f32,
    pub damage: i32,
    pub health: i32,
    pub fire_offset: Position,
    pub projectile_speed: f32,
}

impl Default for TroopConfig {
    fn default() -> Self {
        Self {
            team: Team::Attacker,
            position: Position::default(),
            move_speed: DEFAULT_MOVE_SPEED,
            attack_range: DEFAULT_ATTACK_RANGE,
            attack_speed: DEFAULT_ATTACK_SPEED,
            damage: DEFAULT_DAMAGE,
            health: DEFAULT_HEALTH,
            fire_offset: Position::default(),
            projectile_speed: DEFAULT_PROJECTILE_SPEED,
        }
    }
}

impl TroopConfig {
    /// Stock melee troop at `position`.
    pub fn melee(team: Team, position: Position) -> Self {
        Self {
            team,
            position,
            ..Default::default()
        }
    }

    /// Stock troop with a ranged attack.
    pub fn archer(team: Team, position: Position) -> Self {
        Self {
            team,
            position,
            attack_range: ARCHER_ATTACK_RANGE,
            fire_offset: Position::new(0.0, 1.0, 0.0),
            ..Default::default()
        }
    }

    /// Check the record can drive the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.attack_speed.is_finite() && self.attack_speed > 0.0) {
            return Err(ConfigError::AttackSpeed(self.attack_speed));
        }
        if self.health <= 0 {
            return Err(ConfigError::Health(self.health));
        }
        if self.damage < 0 {
            return Err(ConfigError::Damage(self.damage));
        }
        for (field, value) in [
            ("move_speed", self.move_speed),
            ("attack_range", self.attack_range),
            ("projectile_speed", self.projectile_speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { field, value });
            }
        }
        Ok(())
    }

    /// Immutable stats component for this record.
    pub fn stats(&self) -> CombatStats {
        CombatStats {
            move_speed: self.move_speed,
            attack_range: self.attack_range,
            attack_speed: self.attack_speed,
            damage: self.damage,
            fire_offset: self.fire_offset,
            projectile_speed: self.projectile_speed,
        }
    }
}

/// A set of troops to place before a battle starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub troops: Vec<TroopConfig>,
}

impl Scenario {
    /// Parse and validate a scenario from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.troops.iter().try_for_each(TroopConfig::validate)
    }
}
