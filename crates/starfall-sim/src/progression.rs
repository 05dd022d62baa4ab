//! Progression state: score, level, boss lifecycle flags, and the
//! countdown timers backing deferred phase transitions.
//!
//! Deferred transitions (boss warning, intro fade, game-over reveal)
//! are explicit countdown fields checked each tick, so they are always
//! consistent with the latest state and trivially cancellable.

use glam::Vec2;

use starfall_core::components::BossState;

/// Score/level state plus the boss lifecycle flags.
#[derive(Debug, Clone)]
pub struct Progression {
    pub score: u64,
    pub level: u32,
    pub high_score: u64,
    pub lives: u32,
    pub boss_active: bool,
    /// Set when the current cycle's boss has been defeated; cleared on
    /// every level-up so each boss level triggers at most once.
    pub boss_defeated: bool,
    /// Countdown until the warning banner hands off to the intro.
    pub boss_warning_timer: Option<u32>,
    /// Level the pending intro will spawn a boss for.
    pub pending_boss_level: Option<u32>,
    /// Ticks elapsed inside BossIntro.
    pub intro_timer: u32,
    /// Intro overlay opacity (0-255).
    pub intro_alpha: f32,
    /// Ticks elapsed inside GameOver.
    pub game_over_timer: u32,
    pub game_over_alpha: f32,
    /// Whether the submit prompt has been emitted for this game over.
    pub submit_prompted: bool,
    /// Staggered victory explosions: (remaining ticks, position).
    pub victory_queue: Vec<(u32, Vec2)>,
    /// Ticks survived this session.
    pub survival_ticks: u64,
}

impl Progression {
    pub fn new(high_score: u64) -> Self {
        Self {
            score: 0,
            level: 1,
            high_score,
            lives: 1,
            boss_active: false,
            boss_defeated: false,
            boss_warning_timer: None,
            pending_boss_level: None,
            intro_timer: 0,
            intro_alpha: 0.0,
            game_over_timer: 0,
            game_over_alpha: 0.0,
            submit_prompted: false,
            victory_queue: Vec::new(),
            survival_ticks: 0,
        }
    }

    /// The score threshold for the next level.
    pub fn level_threshold(&self) -> u64 {
        self.level as u64 * starfall_core::constants::LEVEL_SCORE_STEP
    }
}

/// Result of applying damage to a boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossHit {
    Survived,
    /// Health crossed from positive to zero on this hit. Granted at
    /// most once per boss instance.
    Destroyed,
}

/// Apply damage to a boss. Health is clamped at zero and the
/// destruction result fires only on the transition, so repeated calls
/// after death never double-reward.
pub fn apply_boss_damage(boss: &mut BossState, amount: i32) -> BossHit {
    if boss.health <= 0 {
        return BossHit::Survived;
    }
    boss.health = (boss.health - amount).max(0);
    if boss.health == 0 {
        BossHit::Destroyed
    } else {
        BossHit::Survived
    }
}
