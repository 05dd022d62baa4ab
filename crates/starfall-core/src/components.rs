//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods beyond simple
//! accessors. Game logic lives in systems, not components.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Shared spatial footprint: visual size, hit-testing radius, and the
/// score awarded when destroyed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spatial {
    /// Visual size in pixels (already viewport-scaled).
    pub size: f32,
    /// Effective hit-testing radius, may differ from half the size.
    pub collision_radius: f32,
    /// Score awarded on destruction.
    pub point_value: u64,
}

/// Per-variant enemy behavior state (tagged payload).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum EnemyState {
    Basic {
        fall_speed: f32,
        wobble_amount: f32,
        wobble_speed: f32,
        wobble_phase: f32,
    },
    Zigzag {
        base_speed: f32,
        /// Ticks since the last direction flip.
        timer: u32,
        /// Flip interval in ticks (randomized 30-60 at spawn).
        period: u32,
        /// Current horizontal direction, -1.0 or 1.0.
        direction: f32,
    },
    Hunter {
        max_speed: f32,
        accel: f32,
        /// Phase accumulator for the visual/collision pulse.
        pulse: f32,
    },
    Dodger {
        base_speed: f32,
        max_speed: f32,
        /// Radius within which an approaching bullet triggers a dodge.
        dodge_distance: f32,
        /// Lateral direction of the committed dodge, -1.0 or 1.0.
        dodge_dir: f32,
        dodging: bool,
        /// Remaining ticks of the committed dodge burst.
        dodge_cooldown: u32,
        /// Drift phase accumulator.
        drift: f32,
    },
    Formation {
        /// Position of this member within its wave.
        index: usize,
        /// Total members in the wave.
        group_size: usize,
        /// Wave identifier shared by all members.
        group: u32,
        /// Lateral spacing offset from the wave center.
        offset: f32,
        /// Per-member phase shift of the shared sinusoid.
        phase: f32,
        base_speed: f32,
        wave_amplitude: f32,
        can_shoot: bool,
        shoot_cooldown: u32,
        shoot_rate: u32,
    },
    Kamikaze {
        max_speed: f32,
        charge_speed: f32,
        accel: f32,
        /// Radius at which the charge commits.
        charge_distance: f32,
        /// Sticky: never reverts once set.
        charging: bool,
    },
    EnemyBullet {
        /// Ticks since spawn, drives the visual flicker.
        age: u32,
    },
}

impl EnemyState {
    pub fn kind(&self) -> EnemyKind {
        match self {
            EnemyState::Basic { .. } => EnemyKind::Basic,
            EnemyState::Zigzag { .. } => EnemyKind::Zigzag,
            EnemyState::Hunter { .. } => EnemyKind::Hunter,
            EnemyState::Dodger { .. } => EnemyKind::Dodger,
            EnemyState::Formation { .. } => EnemyKind::Formation,
            EnemyState::Kamikaze { .. } => EnemyKind::Kamikaze,
            EnemyState::EnemyBullet { .. } => EnemyKind::EnemyBullet,
        }
    }
}

/// Boss behavior state. Health is monotonically non-increasing until
/// destruction; phase cycles 0 -> 1 -> 2 -> 0 on `phase_timer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossState {
    pub kind: BossKind,
    /// Level this boss was spawned for (drives points and health).
    pub level: u32,
    pub health: i32,
    pub max_health: i32,
    /// Cyclic phase index 0..3.
    pub phase: u8,
    pub phase_timer: u32,
    pub phase_duration: u32,
    pub attack_cooldown: u32,
    pub attack_rate: u32,
    pub max_speed: f32,
    /// Entry animation gate: combat logic engages once this clears.
    pub entering: bool,
    /// Entry animation progress 0.0..=1.0.
    pub entry_progress: f32,
    // Destroyer laser fields.
    pub laser_charging: bool,
    pub laser_charge: f32,
    pub laser_width: f32,
    pub laser_cooldown: u32,
    // Mothership orbit/teleport fields.
    pub orbit_angle: f32,
    pub orbit_speed: f32,
    pub orbit_distance: f32,
    pub orbit_points: u8,
    pub teleport_cooldown: u32,
    pub teleport_rate: u32,
    /// Remaining ticks of the post-teleport flash (burst fires while > 0).
    pub teleport_flash: u32,
}

/// The player ship. One per session, replaced on restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerShip {
    pub class: ShipClass,
    pub max_speed: f32,
    pub accel: f32,
    pub friction: f32,
    /// Remaining ticks until the next shot is allowed.
    pub cooldown: u32,
    /// Cooldown applied after each shot (power-ups modify this).
    pub cooldown_time: u32,
    /// Class baseline restored when a power-up expires.
    pub base_cooldown_time: u32,
    pub invulnerable: bool,
    pub invuln_timer: u32,
    pub active_power_up: Option<PowerUpKind>,
    pub power_up_timer: u32,
    // Special ability state.
    pub special_cooldown: u32,
    pub special_cooldown_time: u32,
    pub special_duration: u32,
    pub special_timer: u32,
    pub special_active: bool,
    // Blast wave ring (Assault special).
    pub blast_active: bool,
    pub blast_radius: f32,
    pub blast_max_radius: f32,
    // Held input state.
    pub move_axes: Vec2,
    pub fire_held: bool,
    /// One-shot fire request consumed by the player system.
    pub fire_requested: bool,
}

/// Power-up pickup state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUpState {
    pub kind: PowerUpKind,
    /// Visual rotation angle.
    pub spin: f32,
    pub spin_rate: f32,
}

/// Marks an entity as a player bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BulletTag;

/// Marks an entity as hostile (enemies, bosses, enemy bullets).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HostileTag;

/// Persisted achievement unlock map. Keys are stable; merge never
/// relocks a previously unlocked achievement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AchievementBook {
    pub entries: BTreeMap<AchievementId, AchievementStatus>,
}

impl AchievementBook {
    pub fn status(&self, id: AchievementId) -> AchievementStatus {
        self.entries.get(&id).copied().unwrap_or_default()
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.status(id).is_unlocked()
    }

    /// Record an unlock. Returns true if this is a new unlock.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        let entry = self.entries.entry(id).or_default();
        if entry.is_unlocked() {
            false
        } else {
            *entry = AchievementStatus::Unlocked;
            true
        }
    }

    pub fn mark_displayed(&mut self, id: AchievementId) {
        if let Some(entry) = self.entries.get_mut(&id) {
            if entry.is_unlocked() {
                *entry = AchievementStatus::Displayed;
            }
        }
    }

    /// Merge a loaded book into this one. Unlocks are unioned; an
    /// unlocked achievement never reverts to locked.
    pub fn merge(&mut self, other: &AchievementBook) {
        for (id, status) in &other.entries {
            let entry = self.entries.entry(*id).or_default();
            if status.is_unlocked() && !entry.is_unlocked() {
                *entry = *status;
            } else if *status == AchievementStatus::Displayed {
                *entry = AchievementStatus::Displayed;
            }
        }
    }

    pub fn unlocked_count(&self) -> usize {
        self.entries.values().filter(|s| s.is_unlocked()).count()
    }
}
