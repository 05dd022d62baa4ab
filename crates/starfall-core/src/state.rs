//! Game state snapshot — the complete visible state sent to the frontend
//! each tick.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub power_ups: Vec<PowerUpView>,
    pub stars: Vec<StarView>,
    pub visual_effects: Vec<EffectView>,
    pub text_effects: Vec<TextEffectView>,
    pub events: Vec<GameEvent>,
    pub achievement_toast: Option<AchievementToastView>,
    /// Intro/game-over overlay opacity (0-255).
    pub overlay_alpha: f32,
}

/// Score, level, and status bars.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub score: u64,
    pub level: u32,
    pub high_score: u64,
    pub lives: u32,
    /// Present while a boss is alive.
    pub boss_bar: Option<BossBarView>,
    /// Remaining fraction of the active power-up, if any.
    pub power_up: Option<PowerUpBarView>,
    /// Special ability readiness, 1.0 = ready.
    pub special_charge: f32,
    pub special_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossBarView {
    pub name: String,
    /// health / max_health.
    pub fraction: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpBarView {
    pub kind: PowerUpKind,
    /// Remaining fraction of the duration.
    pub fraction: f32,
}

/// Player ship as a renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec2,
    pub size: f32,
    pub class: ShipClass,
    pub invulnerable: bool,
    pub shielded: bool,
    /// Blast wave ring radius while the Assault special is expanding.
    pub blast_radius: Option<f32>,
}

/// An enemy (or boss) as a renderer sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Vec2,
    pub size: f32,
    /// Facing angle derived from velocity (hunters, kamikazes).
    pub heading: f32,
    /// Boss extras, present only for kind == Boss.
    pub boss: Option<BossView>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub kind: BossKind,
    pub health_fraction: f32,
    pub entering: bool,
    /// Laser charge 0..1 while a Destroyer is charging.
    pub laser_charge: Option<f32>,
    /// Remaining teleport flash ticks for a Mothership.
    pub teleport_flash: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Vec2,
    pub size: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub position: Vec2,
    pub size: f32,
    pub spin: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarView {
    pub position: Vec2,
    pub size: f32,
    /// Parallax layer, 0 = furthest.
    pub layer: u8,
    /// Packed RGB color.
    pub color: [u8; 3],
}

/// Transient visual effect (explosion, particle).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectView {
    pub position: Vec2,
    pub size: f32,
    /// 0-255, linear in remaining lifetime.
    pub alpha: f32,
    pub color: [u8; 3],
}

/// Floating text effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextEffectView {
    pub position: Vec2,
    pub text: String,
    pub size: f32,
    pub alpha: f32,
    pub color: [u8; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AchievementToastView {
    pub id: AchievementId,
    pub title: String,
    /// Remaining display ticks.
    pub remaining: u32,
}
