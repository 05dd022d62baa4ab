//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// 2D position in logical viewport space (pixels, origin top-left).
/// x grows rightward, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec2);

/// 2D velocity in pixels per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec2);

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// Logical viewport dimensions. Entity sizes and speeds are stored
/// unscaled and multiplied by `scale()` at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Euclidean distance to another position in pixels.
    pub fn distance_to(&self, other: &Position) -> f32 {
        self.0.distance(other.0)
    }
}

impl Velocity {
    pub fn new(x: f32, y: f32) -> Self {
        Self(Vec2::new(x, y))
    }

    /// Speed magnitude (pixels per tick).
    pub fn speed(&self) -> f32 {
        self.0.length()
    }

    /// Facing angle in radians derived from the velocity vector.
    pub fn heading(&self) -> f32 {
        self.0.y.atan2(self.0.x)
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: crate::constants::REFERENCE_WIDTH,
            height: 600.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size/speed scaling factor relative to the reference layout.
    pub fn scale(&self) -> f32 {
        self.width / crate::constants::REFERENCE_WIDTH
    }
}

/// Linear remap of `v` from range [a0, a1] to range [b0, b1].
pub fn map_range(v: f32, a0: f32, a1: f32, b0: f32, b1: f32) -> f32 {
    b0 + (v - a0) / (a1 - a0) * (b1 - b0)
}

/// Clamp a vector's magnitude to `max`, preserving direction.
pub fn limit(v: Vec2, max: f32) -> Vec2 {
    v.clamp_length_max(max)
}
