//! Effects registry — transient visual and text feedback.
//!
//! Two independent collections, each entry carrying a remaining lifetime
//! and a linear opacity curve. Strictly cosmetic: nothing here ever
//! influences collision or scoring, so it is safe to drop under load.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::constants::*;
use starfall_core::state::{EffectView, TextEffectView};
use starfall_core::types::map_range;

/// A short-lived visual effect (explosion flash or debris particle).
#[derive(Debug, Clone)]
pub struct VisualEffect {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub lifetime: u32,
    pub max_lifetime: u32,
    pub color: [u8; 3],
}

/// A floating text message drifting upward.
#[derive(Debug, Clone)]
pub struct TextEffect {
    pub position: Vec2,
    pub text: String,
    pub size: f32,
    pub lifetime: u32,
    pub max_lifetime: u32,
    pub color: [u8; 3],
}

/// Owns both effect collections.
#[derive(Debug, Default)]
pub struct EffectsRegistry {
    pub visual: Vec<VisualEffect>,
    pub text: Vec<TextEffect>,
}

impl EffectsRegistry {
    /// Explosion flash plus a handful of debris particles.
    pub fn spawn_explosion(&mut self, rng: &mut ChaCha8Rng, position: Vec2, size: f32) {
        self.visual.push(VisualEffect {
            position,
            velocity: Vec2::ZERO,
            size,
            lifetime: EXPLOSION_LIFETIME_TICKS,
            max_lifetime: EXPLOSION_LIFETIME_TICKS,
            color: [255, 160, 40],
        });
        for _ in 0..5 {
            let angle = rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = rng.gen_range(1.0..3.0);
            let lifetime = rng.gen_range(15..25);
            self.visual.push(VisualEffect {
                position,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                size: size * 0.3,
                lifetime,
                max_lifetime: lifetime,
                color: [255, 220, 120],
            });
        }
    }

    pub fn spawn_text(&mut self, position: Vec2, text: impl Into<String>, size: f32) {
        self.text.push(TextEffect {
            position,
            text: text.into(),
            size,
            lifetime: TEXT_LIFETIME_TICKS,
            max_lifetime: TEXT_LIFETIME_TICKS,
            color: [255, 255, 255],
        });
    }

    /// Long-lived banner text (level up, boss defeated).
    pub fn spawn_banner(&mut self, position: Vec2, text: impl Into<String>, size: f32) {
        self.text.push(TextEffect {
            position,
            text: text.into(),
            size,
            lifetime: TEXT_LIFETIME_LONG_TICKS,
            max_lifetime: TEXT_LIFETIME_LONG_TICKS,
            color: [255, 230, 80],
        });
    }

    /// Decrement lifetimes and drop expired entries. Text drifts upward.
    pub fn update(&mut self) {
        for effect in &mut self.visual {
            effect.position += effect.velocity;
            effect.lifetime = effect.lifetime.saturating_sub(1);
        }
        self.visual.retain(|e| e.lifetime > 0);

        for text in &mut self.text {
            text.position.y -= TEXT_DRIFT_PER_TICK;
            text.lifetime = text.lifetime.saturating_sub(1);
        }
        self.text.retain(|t| t.lifetime > 0);
    }

    pub fn clear(&mut self) {
        self.visual.clear();
        self.text.clear();
    }

    pub fn visual_views(&self) -> Vec<EffectView> {
        self.visual
            .iter()
            .map(|e| EffectView {
                position: e.position,
                size: e.size,
                alpha: map_range(e.lifetime as f32, 0.0, e.max_lifetime as f32, 0.0, 255.0),
                color: e.color,
            })
            .collect()
    }

    pub fn text_views(&self) -> Vec<TextEffectView> {
        self.text
            .iter()
            .map(|t| TextEffectView {
                position: t.position,
                text: t.text.clone(),
                size: t.size,
                alpha: map_range(t.lifetime as f32, 0.0, t.max_lifetime as f32, 0.0, 255.0),
                color: t.color,
            })
            .collect()
    }
}
