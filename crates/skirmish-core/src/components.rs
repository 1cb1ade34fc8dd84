//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems, except for
//! small accessors for the cooldown floor and liveness checks.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Stable troop identity, assigned in spawn order. Also the iteration order
/// used for target tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TroopId(pub u32);

/// Stable projectile identity, assigned in spawn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectileId(pub u32);

/// Marks an entity as a troop.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Troop;

/// Immutable combat configuration copied from the spawn record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatStats {
    pub move_speed: f32,
    pub attack_range: f32,
    /// Attacks per second. Always > 0.
    pub attack_speed: f32,
    pub damage: i32,
    /// Offset from the troop position where projectiles appear.
    pub fire_offset: Position,
    pub projectile_speed: f32,
}

impl CombatStats {
    /// Seconds between attacks.
    pub fn attack_interval(&self) -> f32 {
        1.0 / self.attack_speed
    }

    pub fn attack_kind(&self) -> AttackKind {
        if self.attack_range <= crate::constants::MELEE_RANGE_THRESHOLD {
            AttackKind::Melee
        } else {
            AttackKind::Ranged
        }
    }
}

/// Hit points. Clamped to 0 when the troop dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }
}

/// Seconds until the next attack is allowed. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttackCooldown {
    pub remaining_secs: f32,
}

impl AttackCooldown {
    /// Count down by `dt`, flooring at zero. Non-positive `dt` is ignored.
    pub fn tick(&mut self, dt: f32) {
        if self.remaining_secs > 0.0 && dt > 0.0 {
            self.remaining_secs = (self.remaining_secs - dt).max(0.0);
        }
    }

    pub fn is_ready(&self) -> bool {
        self.remaining_secs <= 0.0
    }
}

/// Weak reference to the troop being pursued. Never owns the referent; the
/// handle is generational, so a despawned target fails lookup instead of
/// aliasing a new entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Target {
    pub entity: Option<hecs::Entity>,
}

/// Animation clip the troop last asked the presenter for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    pub clip: AnimationClip,
}

/// A guided shot chasing a single troop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HomingProjectile {
    pub target: hecs::Entity,
    /// Copied from the shooter at fire time.
    pub damage: i32,
    pub speed: f32,
    /// Shooter identity, for event attribution only.
    pub source: TroopId,
}
