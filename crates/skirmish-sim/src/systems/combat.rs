//! Troop combat system: target acquisition and the attack state machine.
//!
//! Each live troop is updated once per tick in `TroopId` order:
//! 1. count the attack cooldown down (floor 0)
//! 2. no target: ask the world index for the nearest live opponent, idle, done
//! 3. stale target (dead or gone): drop it, idle, done
//! 4. out of range: walk toward the target; in range: attack if the cooldown allows
//!
//! Melee hits land immediately through [`take_damage`], so a troop killed
//! earlier in the pass is skipped when its own turn comes.

use hecs::{Entity, World};
use tracing::{debug, info};

use skirmish_core::components::*;
use skirmish_core::enums::{AttackKind, CombatState, Team};
use skirmish_core::events::AnimationIntent;
use skirmish_core::types::Position;

use crate::ports::{is_live_troop, AnimationPresenter, LifecycleSink, ProjectileSpawner, WorldIndex};

/// What a call to [`take_damage`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target already dead or not a troop.
    Ignored,
    Wounded { remaining: i32 },
    Killed,
}

/// Run one combat tick for every live troop.
pub fn run<I, S, O>(world: &mut World, index: &I, spawner: &mut S, observer: &mut O, dt: f32)
where
    I: WorldIndex + ?Sized,
    S: ProjectileSpawner,
    O: AnimationPresenter + LifecycleSink,
{
    let mut order: Vec<(TroopId, Entity)> = world
        .query::<(&Troop, &TroopId, &CombatState)>()
        .iter()
        .filter(|(_, (_, _, state))| **state != CombatState::Dead)
        .map(|(entity, (_, id, _))| (*id, entity))
        .collect();
    order.sort_unstable_by_key(|(id, _)| *id);

    for (id, entity) in order {
        update_troop(world, entity, id, index, spawner, observer, dt);
    }
}

fn update_troop<I, S, O>(
    world: &mut World,
    entity: Entity,
    id: TroopId,
    index: &I,
    spawner: &mut S,
    observer: &mut O,
    dt: f32,
) where
    I: WorldIndex + ?Sized,
    S: ProjectileSpawner,
    O: AnimationPresenter + LifecycleSink,
{
    if !is_live_troop(world, entity) {
        return;
    }

    // 1. Cooldown
    let (team, position, stats, target, cooldown_ready) = {
        let Ok((team, position, stats, cooldown, target)) = world.query_one_mut::<(
            &Team,
            &Position,
            &CombatStats,
            &mut AttackCooldown,
            &Target,
        )>(entity) else {
            return;
        };
        cooldown.tick(dt);
        (*team, *position, *stats, target.entity, cooldown.is_ready())
    };

    // 2. Acquire
    let Some(target) = target else {
        let found = index.nearest_opponent(world, &position, team);
        if let Some(found) = found {
            debug!(troop = id.0, target = ?troop_id(world, found), "target acquired");
        }
        set_target(world, entity, found);
        set_state(world, entity, CombatState::Idle);
        present(world, entity, id, AnimationIntent::Idle, observer);
        return;
    };

    // 3. Re-validate
    if !is_live_troop(world, target) {
        debug!(troop = id.0, "target lost");
        set_target(world, entity, None);
        set_state(world, entity, CombatState::Idle);
        present(world, entity, id, AnimationIntent::Idle, observer);
        return;
    }
    let Some(target_pos) = world.get::<&Position>(target).ok().map(|p| *p) else {
        set_target(world, entity, None);
        return;
    };

    // 4. Close in or strike
    let distance = position.distance_to(&target_pos);
    if distance > stats.attack_range {
        let moved = position.advance_towards(&target_pos, stats.move_speed * dt);
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            *pos = moved;
        }
        set_state(world, entity, CombatState::Seeking);
        present(world, entity, id, AnimationIntent::Walk, observer);
    } else {
        set_state(world, entity, CombatState::Attacking);
        if cooldown_ready {
            attack(world, entity, id, &position, &stats, target, spawner, observer);
        }
    }
}

/// Fire one attack at `target`. Caller has checked range and cooldown.
#[allow(clippy::too_many_arguments)]
fn attack<S, O>(
    world: &mut World,
    entity: Entity,
    id: TroopId,
    position: &Position,
    stats: &CombatStats,
    target: Entity,
    spawner: &mut S,
    observer: &mut O,
) where
    S: ProjectileSpawner,
    O: AnimationPresenter + LifecycleSink,
{
    present(
        world,
        entity,
        id,
        AnimationIntent::Attack {
            rate: stats.attack_speed,
        },
        observer,
    );

    match stats.attack_kind() {
        AttackKind::Melee => {
            take_damage(world, target, stats.damage, observer);
        }
        AttackKind::Ranged => {
            let origin = Position(position.0 + stats.fire_offset.0);
            let projectile = spawner.spawn_projectile(
                origin,
                target,
                stats.damage,
                stats.projectile_speed,
                id,
            );
            debug!(troop = id.0, projectile = projectile.0, "projectile fired");
        }
    }

    if let Ok(mut cooldown) = world.get::<&mut AttackCooldown>(entity) {
        cooldown.remaining_secs = stats.attack_interval();
    }
}

/// Subtract `amount` from a troop's health. At zero or below the troop is
/// clamped to 0, marked `Dead`, and reported to `sink`; cleanup removes it at
/// the end of the tick. Dead or missing troops are left alone.
pub fn take_damage<L>(world: &mut World, entity: Entity, amount: i32, sink: &mut L) -> DamageOutcome
where
    L: LifecycleSink + ?Sized,
{
    let Ok((id, team, health, state)) =
        world.query_one_mut::<(&TroopId, &Team, &mut Health, &mut CombatState)>(entity)
    else {
        return DamageOutcome::Ignored;
    };
    if *state == CombatState::Dead || !health.is_alive() {
        return DamageOutcome::Ignored;
    }

    health.current -= amount;
    if health.current > 0 {
        return DamageOutcome::Wounded {
            remaining: health.current,
        };
    }

    health.current = 0;
    *state = CombatState::Dead;
    let (id, team) = (*id, *team);
    info!(troop = id.0, ?team, "troop died");
    sink.troop_died(id, team);
    DamageOutcome::Killed
}

fn troop_id(world: &World, entity: Entity) -> Option<u32> {
    world.get::<&TroopId>(entity).ok().map(|id| id.0)
}

fn set_target(world: &mut World, entity: Entity, target: Option<Entity>) {
    if let Ok(mut t) = world.get::<&mut Target>(entity) {
        t.entity = target;
    }
}

fn set_state(world: &mut World, entity: Entity, state: CombatState) {
    if let Ok(mut s) = world.get::<&mut CombatState>(entity) {
        *s = state;
    }
}

fn present<O>(world: &mut World, entity: Entity, id: TroopId, intent: AnimationIntent, observer: &mut O)
where
    O: AnimationPresenter,
{
    if let Ok(mut anim) = world.get::<&mut AnimationState>(entity) {
        anim.clip = intent.clip();
    }
    observer.present(id, intent);
}
