//! Homing projectile system: pure-pursuit flight and impact resolution.
//!
//! Every tick each projectile re-aims at its target's current position and
//! steps toward it (never past it). Within `PROJECTILE_IMPACT_RADIUS` it
//! applies its damage and is queued for removal. If the target died or
//! vanished first, the shot is lost: removed without damage.

use hecs::{Entity, World};
use tracing::debug;

use skirmish_core::components::{HomingProjectile, ProjectileId};
use skirmish_core::constants::PROJECTILE_IMPACT_RADIUS;
use skirmish_core::events::ProjectileRemoval;
use skirmish_core::types::Position;

use crate::ports::{is_live_troop, LifecycleSink};
use crate::systems::combat::take_damage;

/// Advance every projectile once. Spent projectiles are pushed to
/// `despawn_buffer` for the cleanup system.
pub fn run<L>(world: &mut World, sink: &mut L, despawn_buffer: &mut Vec<Entity>, dt: f32)
where
    L: LifecycleSink,
{
    let mut order: Vec<(ProjectileId, Entity)> = world
        .query::<(&ProjectileId, &HomingProjectile)>()
        .iter()
        .map(|(entity, (id, _))| (*id, entity))
        .collect();
    order.sort_unstable_by_key(|(id, _)| *id);

    for (id, entity) in order {
        let Ok((position, projectile)) =
            world.query_one_mut::<(&Position, &HomingProjectile)>(entity)
        else {
            continue;
        };
        let (position, projectile) = (*position, *projectile);

        if !is_live_troop(world, projectile.target) {
            debug!(projectile = id.0, "target lost, projectile removed");
            sink.projectile_removed(id, ProjectileRemoval::TargetLost);
            despawn_buffer.push(entity);
            continue;
        }
        let Some(target_pos) = world.get::<&Position>(projectile.target).ok().map(|p| *p) else {
            continue;
        };

        let moved = position.step_towards(&target_pos, projectile.speed * dt);
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = moved;
        }

        if moved.distance_to(&target_pos) < PROJECTILE_IMPACT_RADIUS {
            let outcome = take_damage(world, projectile.target, projectile.damage, sink);
            debug!(projectile = id.0, ?outcome, "projectile impact");
            sink.projectile_removed(id, ProjectileRemoval::Impact);
            despawn_buffer.push(entity);
        }
    }
}
