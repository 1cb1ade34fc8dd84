//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Combat ---

/// Troops with an attack range at or below this strike in melee; anything
/// longer fires projectiles.
pub const MELEE_RANGE_THRESHOLD: f32 = 2.0;

/// Distance below which a homing projectile counts as a hit.
pub const PROJECTILE_IMPACT_RADIUS: f32 = 0.3;

// --- Troop defaults ---

pub const DEFAULT_MOVE_SPEED: f32 = 3.0;
pub const DEFAULT_ATTACK_RANGE: f32 = 2.0;
/// Attacks per second.
pub const DEFAULT_ATTACK_SPEED: f32 = 1.0;
pub const DEFAULT_DAMAGE: i32 = 10;
pub const DEFAULT_HEALTH: i32 = 100;
pub const DEFAULT_PROJECTILE_SPEED: f32 = 10.0;

// --- Animation ---

/// Crossfade into Idle or Walk (seconds).
pub const LOCOMOTION_CROSSFADE_SECS: f32 = 0.1;

/// Crossfade into Attack (seconds).
pub const ATTACK_CROSSFADE_SECS: f32 = 0.05;

// --- Scenarios ---

/// Gap between the two armies at spawn (world units along x).
pub const FRONT_SEPARATION: f32 = 20.0;

/// Spacing between troops in a formation row.
pub const FORMATION_SPACING: f32 = 1.5;

/// Attack range given to archers in preset scenarios.
pub const ARCHER_ATTACK_RANGE: f32 = 8.0;
