//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Position in simulation space (world units). y is up; troops walk on the x/z plane
/// but nothing in the combat logic depends on that.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(pub Vec3);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }

    /// Move toward `target` by at most `max_step`, never past it.
    pub fn step_towards(&self, target: &Position, max_step: f32) -> Position {
        let delta = target.0 - self.0;
        let distance = delta.length();
        if distance <= max_step || distance <= f32::EPSILON {
            return *target;
        }
        Position(self.0 + delta / distance * max_step)
    }

    /// Move along the normalized direction toward `target` by exactly `step`.
    /// Unlike [`Position::step_towards`] this can overshoot; a zero-length
    /// direction leaves the position unchanged.
    pub fn advance_towards(&self, target: &Position, step: f32) -> Position {
        let dir = (target.0 - self.0).normalize_or_zero();
        Position(self.0 + dir * step)
    }
}

impl From<Vec3> for Position {
    fn from(v: Vec3) -> Self {
        Self(v)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
