//! Parallax star field background.
//!
//! Non-ECS: a plain vector updated every tick regardless of phase.
//! Stars wrap to the top when they leave the viewport and recolor as
//! the level climbs.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::constants::{STAR_COUNT, STAR_LAYERS};
use starfall_core::state::StarView;
use starfall_core::types::Viewport;

#[derive(Debug, Clone)]
pub struct Star {
    pub position: Vec2,
    pub layer: u8,
    pub size: f32,
    pub speed: f32,
}

#[derive(Debug)]
pub struct StarField {
    stars: Vec<Star>,
    /// Global speed multiplier; decays toward zero during game-over and
    /// boss-intro sequences, snaps back to 1.0 while playing.
    speed_factor: f32,
    color: [u8; 3],
}

impl StarField {
    pub fn new(rng: &mut ChaCha8Rng, viewport: Viewport) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|i| {
                let layer = (i % STAR_LAYERS as usize) as u8;
                Star {
                    position: Vec2::new(
                        rng.gen_range(0.0..viewport.width),
                        rng.gen_range(0.0..viewport.height),
                    ),
                    layer,
                    size: 1.0 + layer as f32,
                    speed: 0.5 + layer as f32 * 0.75,
                }
            })
            .collect();
        Self {
            stars,
            speed_factor: 1.0,
            color: level_color(1),
        }
    }

    /// Scroll all layers, wrapping stars back to the top edge.
    pub fn update(&mut self, rng: &mut ChaCha8Rng, viewport: Viewport) {
        for star in &mut self.stars {
            star.position.y += star.speed * self.speed_factor;
            if star.position.y > viewport.height {
                star.position.y = 0.0;
                star.position.x = rng.gen_range(0.0..viewport.width);
            }
        }
    }

    /// Decay the scroll speed (game-over / boss-intro freeze-out).
    pub fn slow(&mut self) {
        self.speed_factor *= 0.99;
    }

    pub fn reset_speed(&mut self) {
        self.speed_factor = 1.0;
    }

    pub fn recolor(&mut self, level: u32) {
        self.color = level_color(level);
    }

    pub fn views(&self) -> Vec<StarView> {
        self.stars
            .iter()
            .map(|s| StarView {
                position: s.position,
                size: s.size,
                layer: s.layer,
                color: self.color,
            })
            .collect()
    }
}

/// Background tint cycles with the level band.
fn level_color(level: u32) -> [u8; 3] {
    match (level / 5) % 4 {
        0 => [255, 255, 255],
        1 => [200, 220, 255],
        2 => [255, 220, 200],
        _ => [220, 255, 220],
    }
}
