//! Enemy and power-up spawning.
//!
//! Rolls the per-tick spawn probabilities against the level's spawn
//! table. Everything here is suppressed while a boss fight is running.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::EnemyState;
use starfall_core::constants::*;
use starfall_core::enums::EnemyKind;
use starfall_core::types::Viewport;

use crate::progression::Progression;
use crate::world_setup;

/// Probability of a formation wave per tick once unlocked.
const FORMATION_SPAWN_RATE: f64 = 0.002;

/// Level at which formation waves appear.
const FORMATION_MIN_LEVEL: u32 = 4;

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    progression: &Progression,
    viewport: Viewport,
    next_formation_group: &mut u32,
) {
    if progression.boss_active {
        return;
    }

    let enemy_count = world
        .query_mut::<&EnemyState>()
        .into_iter()
        .filter(|(_, state)| state.kind() != EnemyKind::EnemyBullet)
        .count();

    let spawn_rate =
        ENEMY_SPAWN_RATE * (1.0 + progression.level as f64 * ENEMY_SPAWN_RATE_PER_LEVEL);

    if enemy_count < MAX_ENEMIES && rng.gen::<f64>() < spawn_rate {
        world_setup::spawn_random_enemy(world, rng, progression.level, viewport);
    }

    if progression.level >= FORMATION_MIN_LEVEL
        && enemy_count + 5 <= MAX_ENEMIES
        && rng.gen::<f64>() < FORMATION_SPAWN_RATE
    {
        world_setup::spawn_formation(world, rng, *next_formation_group, viewport);
        *next_formation_group += 1;
    }

    if rng.gen::<f64>() < POWERUP_SPAWN_RATE {
        let x = rng.gen_range(20.0..viewport.width - 20.0);
        world_setup::spawn_power_up(world, rng, Vec2::new(x, -20.0), viewport);
    }
}
