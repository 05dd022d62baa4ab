//! Simulation constants and tuning parameters.
//!
//! Sizes and speeds are unscaled reference values; the engine multiplies
//! by `Viewport::scale()` at spawn time.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Reference viewport width all sizes/speeds are tuned against.
pub const REFERENCE_WIDTH: f32 = 400.0;

// --- Player ---

/// Player ship visual size.
pub const PLAYER_SIZE: f32 = 30.0;

/// Base acceleration per tick of held input.
pub const PLAYER_ACCEL: f32 = 0.5;

/// Velocity retained per tick when coasting.
pub const PLAYER_FRICTION: f32 = 0.9;

/// Invulnerability window after a shielded hit (ticks).
pub const PLAYER_INVULN_TICKS: u32 = 90;

/// Active power-up duration (ticks).
pub const POWERUP_DURATION_TICKS: u32 = 300;

/// Shield collision radius multiplier over the bare hull.
pub const SHIELD_RADIUS_FACTOR: f32 = 1.5;

// --- Bullets ---

/// Player bullet vertical speed (pixels per tick, upward).
pub const BULLET_SPEED: f32 = 10.0;

/// Player bullet visual size.
pub const BULLET_SIZE: f32 = 6.0;

/// Default fire cooldown between shots (ticks).
pub const FIRE_COOLDOWN_TICKS: u32 = 15;

/// Enemy bullet speed (pixels per tick, before scale).
pub const ENEMY_BULLET_SPEED: f32 = 3.0;

/// Enemy bullet visual size.
pub const ENEMY_BULLET_SIZE: f32 = 10.0;

// --- Spawning ---

/// Base probability of spawning an enemy each tick.
pub const ENEMY_SPAWN_RATE: f64 = 0.02;

/// Spawn rate growth per level.
pub const ENEMY_SPAWN_RATE_PER_LEVEL: f64 = 0.1;

/// Probability of spawning a power-up each tick.
pub const POWERUP_SPAWN_RATE: f64 = 0.001;

/// Maximum concurrent non-boss enemies.
pub const MAX_ENEMIES: usize = 15;

// --- Progression ---

/// Score required per level: `level * LEVEL_SCORE_STEP`.
pub const LEVEL_SCORE_STEP: u64 = 1000;

/// Boss warning banner duration before the intro starts (ticks).
pub const BOSS_WARNING_TICKS: u32 = 180;

/// Boss intro fade-in alpha increment per tick (cap 255).
pub const BOSS_INTRO_FADE_IN_STEP: f32 = 5.0;

/// Boss intro total hold before fade-out begins (ticks).
pub const BOSS_INTRO_HOLD_TICKS: u32 = 180;

/// Boss intro fade-out alpha decrement per tick.
pub const BOSS_INTRO_FADE_OUT_STEP: f32 = 10.0;

/// Ticks into GameOver before the score submission handoff fires.
pub const GAME_OVER_SUBMIT_TICKS: u32 = 120;

/// Ticks into GameOver before a restart input is accepted.
pub const GAME_OVER_RESTART_TICKS: u32 = 90;

// --- Bosses ---

/// Boss health = BOSS_HEALTH_BASE + BOSS_HEALTH_PER_LEVEL * level.
pub const BOSS_HEALTH_BASE: i32 = 10;
pub const BOSS_HEALTH_PER_LEVEL: i32 = 5;

/// Boss size multiplier over PLAYER_SIZE.
pub const BOSS_SIZE_FACTOR: f32 = 2.5;

/// Points awarded per boss level on defeat.
pub const BOSS_POINTS_PER_LEVEL: u64 = 1000;

/// Boss lateral max speed (pixels per tick, before scale).
pub const BOSS_MAX_SPEED: f32 = 1.5;

/// Ticks per boss phase before cycling.
pub const BOSS_PHASE_DURATION_TICKS: u32 = 300;

/// Base ticks between boss attacks.
pub const BOSS_ATTACK_RATE_TICKS: u32 = 60;

/// Entry animation progress per tick (reaches combat at 1.0).
pub const BOSS_ENTRY_STEP: f32 = 0.01;

/// Boss collision radius as a fraction of size.
pub const BOSS_COLLISION_FACTOR: f32 = 0.4;

/// Power-ups dropped on boss defeat.
pub const BOSS_DEFEAT_POWERUPS: usize = 3;

// --- Effects ---

/// Explosion effect lifetime (ticks).
pub const EXPLOSION_LIFETIME_TICKS: u32 = 30;

/// Standard floating-text lifetime (ticks).
pub const TEXT_LIFETIME_TICKS: u32 = 90;

/// Long floating-text lifetime (level-up, boss banners).
pub const TEXT_LIFETIME_LONG_TICKS: u32 = 120;

/// Floating text upward drift per tick.
pub const TEXT_DRIFT_PER_TICK: f32 = 0.5;

/// Achievement toast display duration (ticks).
pub const ACHIEVEMENT_TOAST_TICKS: u32 = 180;

// --- Star field ---

/// Number of background stars.
pub const STAR_COUNT: usize = 200;

/// Parallax layers (furthest = slowest).
pub const STAR_LAYERS: u8 = 3;
