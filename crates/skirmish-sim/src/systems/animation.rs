//! Animation side channel.
//!
//! `Presentation` is what the engine hands to the combat systems as their
//! presenter and lifecycle sink. It logs every intent and keeps the timed
//! playback-rate effect of attack swings: an attack at rate `r` plays for
//! `1 / r` seconds, then the rate drops back to normal. None of this is read
//! by combat logic.

use std::collections::BTreeMap;

use skirmish_core::components::{ProjectileId, TroopId};
use skirmish_core::enums::Team;
use skirmish_core::events::{AnimationIntent, ProjectileRemoval};

use crate::ports::{AnimationPresenter, EventLog, LifecycleSink};

#[derive(Debug, Clone, Copy, PartialEq)]
struct RateReset {
    rate: f32,
    remaining_secs: f32,
}

/// Event log plus pending rate resets, keyed by troop.
#[derive(Debug, Default)]
pub struct Presentation {
    pub log: EventLog,
    resets: BTreeMap<TroopId, RateReset>,
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current playback rate for `troop` (1.0 unless mid-swing).
    pub fn playback_rate(&self, troop: TroopId) -> f32 {
        self.resets.get(&troop).map_or(1.0, |reset| reset.rate)
    }

    pub fn pending_resets(&self) -> usize {
        self.resets.len()
    }

    /// Drop all timers and buffered events.
    pub fn clear(&mut self) {
        self.resets.clear();
        self.log.events.clear();
    }
}

impl AnimationPresenter for Presentation {
    fn present(&mut self, troop: TroopId, intent: AnimationIntent) {
        self.log.present(troop, intent);
        if let AnimationIntent::Attack { rate } = intent {
            if rate > 0.0 {
                // A new swing restarts the clock.
                self.resets.insert(
                    troop,
                    RateReset {
                        rate,
                        remaining_secs: 1.0 / rate,
                    },
                );
            }
        }
    }

    fn reset_rate(&mut self, troop: TroopId) {
        self.resets.remove(&troop);
        self.log.reset_rate(troop);
    }
}

impl LifecycleSink for Presentation {
    fn troop_died(&mut self, troop: TroopId, team: Team) {
        self.resets.remove(&troop);
        self.log.troop_died(troop, team);
    }

    fn projectile_removed(&mut self, projectile: ProjectileId, reason: ProjectileRemoval) {
        self.log.projectile_removed(projectile, reason);
    }
}

/// Count down rate resets and fire the ones that expire this tick.
pub fn run(presentation: &mut Presentation, dt: f32) {
    let mut expired = Vec::new();
    for (troop, reset) in presentation.resets.iter_mut() {
        reset.remaining_secs -= dt;
        if reset.remaining_secs <= 0.0 {
            expired.push(*troop);
        }
    }

    for troop in expired {
        presentation.reset_rate(troop);
    }
}
