//! Boundary contracts between the combat systems and their collaborators.
//!
//! Systems only talk to the outside through these traits, so tests can swap
//! in recorders and a host can swap in its own spatial index or animator.
//! The engine wires the default implementations defined here.

use hecs::{Entity, World};

use skirmish_core::components::{Health, HomingProjectile, ProjectileId, Troop, TroopId};
use skirmish_core::enums::{CombatState, Team};
use skirmish_core::events::{AnimationIntent, PresentationEvent, ProjectileRemoval};
use skirmish_core::types::Position;

/// Finds targets for troops that have none.
pub trait WorldIndex {
    /// The live troop of the team opposing `team` closest to `position`, if any.
    fn nearest_opponent(&self, world: &World, position: &Position, team: Team) -> Option<Entity>;
}

/// Creates projectiles on behalf of ranged troops.
pub trait ProjectileSpawner {
    fn spawn_projectile(
        &mut self,
        origin: Position,
        target: Entity,
        damage: i32,
        speed: f32,
        source: TroopId,
    ) -> ProjectileId;
}

/// Receives per-tick animation intents. Purely observational.
pub trait AnimationPresenter {
    fn present(&mut self, troop: TroopId, intent: AnimationIntent);

    /// Playback rate goes back to normal once an attack swing has run its course.
    fn reset_rate(&mut self, troop: TroopId);
}

/// Told when things leave the battlefield so scene objects can follow.
pub trait LifecycleSink {
    fn troop_died(&mut self, troop: TroopId, team: Team);

    fn projectile_removed(&mut self, projectile: ProjectileId, reason: ProjectileRemoval);
}

/// Whether `entity` is a troop that can still fight or be fought.
pub fn is_live_troop(world: &World, entity: Entity) -> bool {
    let Ok(mut query) = world.query_one::<(&Troop, &Health, &CombatState)>(entity) else {
        return false;
    };
    let alive = query
        .get()
        .is_some_and(|(_, health, state)| health.is_alive() && *state != CombatState::Dead);
    alive
}

/// Linear scan over every live troop. Ties go to the lowest `TroopId`, which is
/// also spawn order, so results are stable for a fixed roster.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScanIndex;

impl WorldIndex for LinearScanIndex {
    fn nearest_opponent(&self, world: &World, position: &Position, team: Team) -> Option<Entity> {
        let opponent = team.opponent();
        let mut best: Option<(f32, TroopId, Entity)> = None;

        let mut query = world.query::<(&Troop, &TroopId, &Team, &Position, &Health, &CombatState)>();
        for (entity, (_troop, id, troop_team, pos, health, state)) in query.iter() {
            if *troop_team != opponent || !health.is_alive() || *state == CombatState::Dead {
                continue;
            }
            let dist = position.distance_to(pos);
            let closer = match best {
                None => true,
                Some((best_dist, best_id, _)) => {
                    dist < best_dist || (dist == best_dist && *id < best_id)
                }
            };
            if closer {
                best = Some((dist, *id, entity));
            }
        }

        best.map(|(_, _, entity)| entity)
    }
}

/// A projectile waiting to be materialized at the end of the troop pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingProjectile {
    pub id: ProjectileId,
    pub origin: Position,
    pub projectile: HomingProjectile,
}

/// Defers projectile creation so the arena is never mutated mid-iteration.
/// Ids are handed out immediately and stay valid once flushed.
#[derive(Debug, Default)]
pub struct SpawnQueue {
    next_id: u32,
    pending: Vec<PendingProjectile>,
}

impl SpawnQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> &[PendingProjectile] {
        &self.pending
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, PendingProjectile> {
        self.pending.drain(..)
    }

    /// Forget queued shots and restart numbering.
    pub fn reset(&mut self) {
        self.next_id = 0;
        self.pending.clear();
    }
}

impl ProjectileSpawner for SpawnQueue {
    fn spawn_projectile(
        &mut self,
        origin: Position,
        target: Entity,
        damage: i32,
        speed: f32,
        source: TroopId,
    ) -> ProjectileId {
        let id = ProjectileId(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingProjectile {
            id,
            origin,
            projectile: HomingProjectile {
                target,
                damage,
                speed,
                source,
            },
        });
        id
    }
}

/// Records everything observers would be told, in order. The engine drains it
/// into each snapshot.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<PresentationEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<PresentationEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn push(&mut self, event: PresentationEvent) {
        self.events.push(event);
    }

    /// Last animation intent sent for `troop`, if any.
    pub fn last_intent(&self, troop: TroopId) -> Option<AnimationIntent> {
        self.events.iter().rev().find_map(|event| match event {
            PresentationEvent::Animation { troop: t, intent } if *t == troop => Some(*intent),
            _ => None,
        })
    }
}

impl AnimationPresenter for EventLog {
    fn present(&mut self, troop: TroopId, intent: AnimationIntent) {
        self.events.push(PresentationEvent::Animation { troop, intent });
    }

    fn reset_rate(&mut self, troop: TroopId) {
        self.events
            .push(PresentationEvent::AnimationRateReset { troop });
    }
}

impl LifecycleSink for EventLog {
    fn troop_died(&mut self, troop: TroopId, team: Team) {
        self.events.push(PresentationEvent::TroopDied { troop, team });
    }

    fn projectile_removed(&mut self, projectile: ProjectileId, reason: ProjectileRemoval) {
        self.events
            .push(PresentationEvent::ProjectileRemoved { projectile, reason });
    }
}
