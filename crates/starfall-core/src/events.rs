//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Feedback events drained into each snapshot for the frontend to
/// react to (sound, haptics, camera shake).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Non-boss enemy destroyed by a bullet or blast wave.
    EnemyDestroyed { kind: EnemyKind, points: u64 },
    /// Boss took a hit and survived.
    BossDamaged { health: i32, max_health: i32 },
    /// Boss destroyed.
    BossDefeated { points: u64 },
    /// Boss warning banner started.
    BossWarning,
    /// Level threshold crossed.
    LevelUp { level: u32 },
    /// Player took a fatal or shielded hit.
    PlayerHit,
    PowerUpCollected { kind: PowerUpKind },
    /// Camera shake request; magnitude in pixels.
    ScreenShake { magnitude: f32 },
    AchievementUnlocked { id: AchievementId },
    /// GameOver handing off to the external submission flow.
    SubmitPrompt { score: u64, level: u32 },
}
