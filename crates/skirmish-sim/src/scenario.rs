//! Scenario definitions: preset troop layouts.
//!
//! Attackers form up on the negative x side, defenders on the positive side,
//! facing each other across `FRONT_SEPARATION`.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::config::{Scenario, TroopConfig};
use skirmish_core::constants::*;
use skirmish_core::enums::{ScenarioId, Team};
use skirmish_core::types::Position;

/// Build the troop roster for a preset. Only `Skirmish` draws from `rng`.
pub fn build(scenario: ScenarioId, rng: &mut ChaCha8Rng) -> Scenario {
    match scenario {
        ScenarioId::Duel => build_duel(),
        ScenarioId::RangedSupport => build_ranged_support(),
        ScenarioId::Skirmish => build_skirmish(rng),
    }
}

/// Two stock melee troops, face to face.
fn build_duel() -> Scenario {
    let half = FRONT_SEPARATION / 2.0;
    Scenario {
        troops: vec![
            TroopConfig::melee(Team::Attacker, Position::new(-half, 0.0, 0.0)),
            TroopConfig::melee(Team::Defender, Position::new(half, 0.0, 0.0)),
        ],
    }
}

/// Attackers: 3 melee in front, 2 archers behind. Defenders: 4 melee.
fn build_ranged_support() -> Scenario {
    let half = FRONT_SEPARATION / 2.0;
    let mut troops = Vec::new();

    troops.extend(row(-half, 3).map(|p| TroopConfig::melee(Team::Attacker, p)));
    troops.extend(
        row(-half - 3.0, 2).map(|p| TroopConfig::archer(Team::Attacker, p)),
    );
    troops.extend(row(half, 4).map(|p| TroopConfig::melee(Team::Defender, p)));

    Scenario { troops }
}

/// 4-8 troops per side, jittered positions, roughly one archer in three.
fn build_skirmish(rng: &mut ChaCha8Rng) -> Scenario {
    let half = FRONT_SEPARATION / 2.0;
    let mut troops = Vec::new();

    for (team, front_x) in [(Team::Attacker, -half), (Team::Defender, half)] {
        let count = rng.gen_range(4..=8);
        for i in 0..count {
            let x = front_x + rng.gen_range(-2.0..2.0);
            let z = (i as f32 - count as f32 / 2.0) * FORMATION_SPACING + rng.gen_range(-0.5..0.5);
            let position = Position::new(x, 0.0, z);
            let mut config = if rng.gen_bool(1.0 / 3.0) {
                TroopConfig::archer(team, position)
            } else {
                TroopConfig::melee(team, position)
            };
            config.move_speed = rng.gen_range(2.5..3.5);
            config.attack_speed = rng.gen_range(0.8..1.5);
            troops.push(config);
        }
    }

    Scenario { troops }
}

/// `count` evenly spaced positions along z at `x`, centered on the x axis.
fn row(x: f32, count: usize) -> impl Iterator<Item = Position> {
    let offset = (count as f32 - 1.0) * FORMATION_SPACING / 2.0;
    (0..count).map(move |i| Position::new(x, 0.0, i as f32 * FORMATION_SPACING - offset))
}
