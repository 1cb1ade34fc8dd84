//! Entity spawn factories for the battlefield.
//!
//! Creates troop and projectile entities with their component bundles.
//! Callers are expected to have validated troop configs already.

use hecs::World;

use skirmish_core::components::*;
use skirmish_core::config::TroopConfig;
use skirmish_core::enums::{AnimationClip, CombatState};

use crate::ports::PendingProjectile;

/// Spawn a troop at full health with no target and a ready attack.
pub fn spawn_troop(world: &mut World, id: TroopId, config: &TroopConfig) -> hecs::Entity {
    world.spawn((
        Troop,
        id,
        config.team,
        config.position,
        config.stats(),
        Health::full(config.health),
        AttackCooldown::default(),
        Target::default(),
        CombatState::Idle,
        AnimationState {
            clip: AnimationClip::Idle,
        },
    ))
}

/// Materialize a queued projectile.
pub fn spawn_projectile(world: &mut World, pending: &PendingProjectile) -> hecs::Entity {
    world.spawn((pending.id, pending.origin, pending.projectile))
}

/// Find the entity currently carrying troop `id`.
pub fn find_troop(world: &World, id: TroopId) -> Option<hecs::Entity> {
    world
        .query::<(&Troop, &TroopId)>()
        .iter()
        .find(|(_, (_, troop_id))| **troop_id == id)
        .map(|(entity, _)| entity)
}

/// Find the entity currently carrying projectile `id`.
pub fn find_projectile(world: &World, id: ProjectileId) -> Option<hecs::Entity> {
    world
        .query::<(&HomingProjectile, &ProjectileId)>()
        .iter()
        .find(|(_, (_, projectile_id))| **projectile_id == id)
        .map(|(entity, _)| entity)
}
