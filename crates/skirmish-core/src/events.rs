//! Events emitted by the simulation for presentation and lifecycle observers.
//!
//! Nothing here feeds back into simulation state.

use serde::{Deserialize, Serialize};

use crate::components::{ProjectileId, TroopId};
use crate::constants::{ATTACK_CROSSFADE_SECS, LOCOMOTION_CROSSFADE_SECS};
use crate::enums::{AnimationClip, Team};
use crate::types::Position;

/// What a troop wants its animator to play this tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "clip")]
pub enum AnimationIntent {
    Idle,
    Walk,
    /// Attack swing played at `rate` times normal speed.
    Attack { rate: f32 },
}

impl AnimationIntent {
    pub fn clip(&self) -> AnimationClip {
        match self {
            AnimationIntent::Idle => AnimationClip::Idle,
            AnimationIntent::Walk => AnimationClip::Walk,
            AnimationIntent::Attack { .. } => AnimationClip::Attack,
        }
    }

    /// Playback rate the animator should run at.
    pub fn rate(&self) -> f32 {
        match self {
            AnimationIntent::Attack { rate } => *rate,
            _ => 1.0,
        }
    }

    /// Blend time into this clip.
    pub fn crossfade_secs(&self) -> f32 {
        match self {
            AnimationIntent::Attack { .. } => ATTACK_CROSSFADE_SECS,
            _ => LOCOMOTION_CROSSFADE_SECS,
        }
    }
}

/// Why a projectile left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileRemoval {
    /// Reached its target and applied damage.
    Impact,
    /// Target died or vanished first; no damage applied.
    TargetLost,
}

/// Observer-facing events collected during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PresentationEvent {
    Animation {
        troop: TroopId,
        intent: AnimationIntent,
    },
    /// Animation playback rate returns to normal after an attack swing.
    AnimationRateReset { troop: TroopId },
    ProjectileFired {
        projectile: ProjectileId,
        source: TroopId,
        target: TroopId,
        origin: Position,
    },
    ProjectileRemoved {
        projectile: ProjectileId,
        reason: ProjectileRemoval,
    },
    TroopDied { troop: TroopId, team: Team },
}
