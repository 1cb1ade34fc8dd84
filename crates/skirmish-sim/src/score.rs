//! Running battle tallies, fed from the events each tick produces.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use skirmish_core::enums::Team;
use skirmish_core::events::{PresentationEvent, ProjectileRemoval};

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub attackers_lost: u32,
    pub defenders_lost: u32,
    pub projectiles_fired: u32,
    /// Projectiles removed because their target died first.
    pub projectiles_lost: u32,
}

impl ScoreState {
    /// Fold one tick's events into the tallies.
    pub fn record(&mut self, events: &[PresentationEvent]) {
        for event in events {
            match event {
                PresentationEvent::TroopDied { team, .. } => match team {
                    Team::Attacker => self.attackers_lost += 1,
                    Team::Defender => self.defenders_lost += 1,
                },
                PresentationEvent::ProjectileFired { .. } => self.projectiles_fired += 1,
                PresentationEvent::ProjectileRemoved {
                    reason: ProjectileRemoval::TargetLost,
                    ..
                } => self.projectiles_lost += 1,
                _ => {}
            }
        }
    }
}
