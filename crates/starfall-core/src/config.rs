//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::enums::ShipClass;
use crate::types::Viewport;

/// Boss trigger levels and repeat-tier scaling.
///
/// The level list and tier multipliers are configuration rather than
/// hard-coded: the engine maps each configured level to a boss variant
/// and stat multipliers via `starfall-sim`'s deterministic tier table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossConfig {
    /// Levels at which a boss fight triggers.
    pub levels: Vec<u32>,
    /// Health = health_base + health_per_level * level, before tier
    /// multipliers.
    pub health_base: i32,
    pub health_per_level: i32,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            levels: vec![10, 20, 30, 40, 50],
            health_base: crate::constants::BOSS_HEALTH_BASE,
            health_per_level: crate::constants::BOSS_HEALTH_PER_LEVEL,
        }
    }
}

impl BossConfig {
    pub fn is_boss_level(&self, level: u32) -> bool {
        self.levels.contains(&level)
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed; a fixed seed makes the whole session deterministic.
    pub seed: u64,
    pub viewport: Viewport,
    pub ship_class: ShipClass,
    pub boss: BossConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            viewport: Viewport::default(),
            ship_class: ShipClass::Scout,
            boss: BossConfig::default(),
        }
    }
}
