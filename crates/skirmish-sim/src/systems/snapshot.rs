//! Snapshot system: queries the ECS world and builds a complete BattleSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use skirmish_core::components::*;
use skirmish_core::enums::*;
use skirmish_core::events::PresentationEvent;
use skirmish_core::state::*;
use skirmish_core::types::{Position, SimTime};

use crate::score::ScoreState;
use crate::systems::animation::Presentation;

/// Build a complete BattleSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: BattlePhase,
    outcome: BattleOutcome,
    events: Vec<PresentationEvent>,
    presentation: &Presentation,
    score: &ScoreState,
) -> BattleSnapshot {
    let troops = build_troops(world, presentation);
    let (attackers_alive, defenders_alive) = count_alive(&troops);

    BattleSnapshot {
        time: *time,
        phase,
        outcome,
        projectiles: build_projectiles(world),
        troops,
        events,
        score: ScoreView {
            attackers_alive,
            defenders_alive,
            attackers_lost: score.attackers_lost,
            defenders_lost: score.defenders_lost,
            projectiles_fired: score.projectiles_fired,
            projectiles_lost: score.projectiles_lost,
            battle_time_secs: time.elapsed_secs,
        },
    }
}

/// Build TroopView list from all troops that are still standing.
fn build_troops(world: &World, presentation: &Presentation) -> Vec<TroopView> {
    let mut troops: Vec<TroopView> = world
        .query::<(
            &Troop,
            &TroopId,
            &Team,
            &Position,
            &Health,
            &CombatState,
            &AnimationState,
            &Target,
            &AttackCooldown,
        )>()
        .iter()
        .filter(|(_, (_, _, _, _, _, state, _, _, _))| **state != CombatState::Dead)
        .map(
            |(_, (_, id, team, pos, health, state, anim, target, cooldown))| TroopView {
                id: *id,
                team: *team,
                position: *pos,
                health: health.current,
                max_health: health.max,
                state: *state,
                animation: anim.clip,
                animation_rate: presentation.playback_rate(*id),
                target: target.entity.and_then(|t| live_troop_id(world, t)),
                attack_cooldown: cooldown.remaining_secs,
            },
        )
        .collect();

    troops.sort_by_key(|t| t.id);
    troops
}

/// Build ProjectileView list from every projectile in flight.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&ProjectileId, &Position, &HomingProjectile)>()
        .iter()
        .map(|(_, (id, pos, projectile))| ProjectileView {
            id: *id,
            position: *pos,
            target: live_troop_id(world, projectile.target),
            damage: projectile.damage,
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn live_troop_id(world: &World, entity: Entity) -> Option<TroopId> {
    if !crate::ports::is_live_troop(world, entity) {
        return None;
    }
    world.get::<&TroopId>(entity).ok().map(|id| *id)
}

fn count_alive(troops: &[TroopView]) -> (u32, u32) {
    troops
        .iter()
        .fold((0, 0), |(attackers, defenders), troop| match troop.team {
            Team::Attacker => (attackers + 1, defenders),
            Team::Defender => (attackers, defenders + 1),
        })
}
