//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Start,
    Playing,
    BossIntro,
    GameOver,
    /// Parked while the frontend drives score submission.
    LeaderboardSubmit,
    /// Parked while the frontend shows the leaderboard.
    LeaderboardView,
}

/// Enemy variant discriminant. Per-variant behavior state lives in the
/// `EnemyState` component payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Drifts downward with a sinusoidal wobble.
    Basic,
    /// Flips horizontal direction on a timer, reflects off edges.
    Zigzag,
    /// Steers toward the player, capped at max speed.
    Hunter,
    /// Dodges laterally away from incoming bullets.
    Dodger,
    /// Member of a coordinated wave sharing a sinusoidal reference.
    Formation,
    /// Commits to an accelerating charge once the player is close.
    Kamikaze,
    Boss,
    /// Projectile fired by bosses and formation members.
    EnemyBullet,
}

/// Boss variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossKind {
    Destroyer,
    Mothership,
}

/// Power-up pickup kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Halves the fire cooldown.
    RapidFire,
    /// Timed invulnerability with an enlarged collision radius.
    Shield,
    /// Three-way spread shot.
    MultiShot,
}

/// Selectable player ship class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShipClass {
    #[default]
    Scout,
    Fighter,
    Tank,
    Assault,
}

/// Per-class special ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialAbility {
    /// Halves all enemy velocities for the duration.
    TimeSlow,
    /// Forces the three-way spread regardless of power-up.
    TripleShot,
    /// Timed invulnerability.
    ShieldWall,
    /// Expanding ring that destroys every non-boss enemy it touches.
    BlastWave,
}

impl ShipClass {
    /// Level at which this class becomes selectable.
    pub fn unlock_level(&self) -> u32 {
        match self {
            ShipClass::Scout => 1,
            ShipClass::Fighter => 3,
            ShipClass::Tank => 5,
            ShipClass::Assault => 8,
        }
    }

    pub fn special(&self) -> SpecialAbility {
        match self {
            ShipClass::Scout => SpecialAbility::TimeSlow,
            ShipClass::Fighter => SpecialAbility::TripleShot,
            ShipClass::Tank => SpecialAbility::ShieldWall,
            ShipClass::Assault => SpecialAbility::BlastWave,
        }
    }

    pub fn all() -> [ShipClass; 4] {
        [
            ShipClass::Scout,
            ShipClass::Fighter,
            ShipClass::Tank,
            ShipClass::Assault,
        ]
    }
}

impl BossKind {
    /// Display name for the boss health bar.
    pub fn display_name(&self) -> &'static str {
        match self {
            BossKind::Destroyer => "DESTROYER",
            BossKind::Mothership => "MOTHERSHIP",
        }
    }
}

/// Achievement identifiers. Ordering matters only for stable
/// serialization of the persisted book.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum AchievementId {
    FirstBlood,
    Centurion,
    Veteran,
    Legend,
    LevelFive,
    LevelTen,
    BossSlayer,
    PowerCollector,
    Untouchable,
    KamikazeWhisperer,
    FormationBreaker,
    BulletDancer,
    FleetAdmiral,
    SpecialForces,
    Survivor,
}

impl AchievementId {
    pub fn all() -> [AchievementId; 15] {
        use AchievementId::*;
        [
            FirstBlood,
            Centurion,
            Veteran,
            Legend,
            LevelFive,
            LevelTen,
            BossSlayer,
            PowerCollector,
            Untouchable,
            KamikazeWhisperer,
            FormationBreaker,
            BulletDancer,
            FleetAdmiral,
            SpecialForces,
            Survivor,
        ]
    }

    /// Short name shown in the unlock toast.
    pub fn title(&self) -> &'static str {
        use AchievementId::*;
        match self {
            FirstBlood => "First Blood",
            Centurion => "Centurion",
            Veteran => "Veteran",
            Legend => "Legend",
            LevelFive => "Rising Star",
            LevelTen => "Ace Pilot",
            BossSlayer => "Boss Slayer",
            PowerCollector => "Power Collector",
            Untouchable => "Untouchable",
            KamikazeWhisperer => "Kamikaze Whisperer",
            FormationBreaker => "Formation Breaker",
            BulletDancer => "Bullet Dancer",
            FleetAdmiral => "Fleet Admiral",
            SpecialForces => "Special Forces",
            Survivor => "Survivor",
        }
    }
}

/// Persisted unlock status for a single achievement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementStatus {
    #[default]
    Locked,
    /// Unlocked but the toast has not been shown yet.
    Unlocked,
    /// Unlocked and the toast has been shown.
    Displayed,
}

impl AchievementStatus {
    pub fn is_unlocked(&self) -> bool {
        !matches!(self, AchievementStatus::Locked)
    }
}
