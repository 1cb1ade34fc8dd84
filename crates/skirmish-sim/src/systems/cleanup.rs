//! Cleanup system: removes dead troops and spent projectiles between ticks.

use hecs::{Entity, World};

use skirmish_core::components::Troop;
use skirmish_core::enums::CombatState;

/// Despawn everything queued in `despawn_buffer` plus every troop marked
/// `Dead`. Runs after all other systems so nothing is freed mid-iteration.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    for (entity, (_troop, state)) in world.query_mut::<(&Troop, &CombatState)>() {
        if *state == CombatState::Dead {
            despawn_buffer.push(entity);
        }
    }

    // Despawn collected entities.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
