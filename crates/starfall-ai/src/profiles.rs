//! Ship-class behavioral profiles.
//!
//! Consolidates per-class stats for the player system.

use starfall_core::enums::{ShipClass, SpecialAbility};

/// Stat profile for a player ship class.
pub struct ShipProfile {
    /// Maximum speed (pixels per tick, before scale).
    pub max_speed: f32,
    /// Ticks between shots.
    pub fire_cooldown: u32,
    /// Ticks between special activations.
    pub special_cooldown: u32,
    /// Ticks the special stays active.
    pub special_duration: u32,
    pub special: SpecialAbility,
}

/// Get the stat profile for a given ship class.
pub fn get_profile(class: ShipClass) -> ShipProfile {
    match class {
        ShipClass::Scout => ShipProfile {
            max_speed: 9.0,
            fire_cooldown: 10,
            special_cooldown: 240,
            special_duration: 180,
            special: SpecialAbility::TimeSlow,
        },
        ShipClass::Fighter => ShipProfile {
            max_speed: 7.0,
            fire_cooldown: 15,
            special_cooldown: 300,
            special_duration: 180,
            special: SpecialAbility::TripleShot,
        },
        ShipClass::Tank => ShipProfile {
            max_speed: 5.0,
            fire_cooldown: 20,
            special_cooldown: 360,
            special_duration: 180,
            special: SpecialAbility::ShieldWall,
        },
        ShipClass::Assault => ShipProfile {
            max_speed: 6.0,
            fire_cooldown: 18,
            special_cooldown: 330,
            special_duration: 180,
            special: SpecialAbility::BlastWave,
        },
    }
}
