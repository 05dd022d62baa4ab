//! Entity spawn factories.
//!
//! Creates the player ship, enemies, bosses, bullets, and power-ups
//! with appropriate component bundles. All sizes and speeds are scaled
//! by the viewport factor at spawn time.

use glam::Vec2;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_ai::profiles::get_profile;
use starfall_core::components::*;
use starfall_core::config::BossConfig;
use starfall_core::constants::*;
use starfall_core::enums::*;
use starfall_core::types::{Position, Velocity, Viewport};

/// Spawn the player ship near the bottom center of the viewport.
pub fn spawn_player(world: &mut World, class: ShipClass, viewport: Viewport) -> hecs::Entity {
    let s = viewport.scale();
    let profile = get_profile(class);
    let size = PLAYER_SIZE * s;

    world.spawn((
        Position(Vec2::new(viewport.width / 2.0, viewport.height - 50.0 * s)),
        Velocity(Vec2::ZERO),
        Spatial {
            size,
            collision_radius: size / 2.0,
            point_value: 0,
        },
        PlayerShip {
            class,
            max_speed: profile.max_speed * s,
            accel: PLAYER_ACCEL * s,
            friction: PLAYER_FRICTION,
            cooldown: 0,
            cooldown_time: profile.fire_cooldown,
            base_cooldown_time: profile.fire_cooldown,
            invulnerable: false,
            invuln_timer: 0,
            active_power_up: None,
            power_up_timer: 0,
            special_cooldown: 0,
            special_cooldown_time: profile.special_cooldown,
            special_duration: profile.special_duration,
            special_timer: 0,
            special_active: false,
            blast_active: false,
            blast_radius: 0.0,
            blast_max_radius: 150.0 * s,
            move_axes: Vec2::ZERO,
            fire_held: false,
            fire_requested: false,
        },
    ))
}

/// Spawn a random non-formation enemy from the level's spawn table.
pub fn spawn_random_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    level: u32,
    viewport: Viewport,
) -> hecs::Entity {
    // Variants unlock as the level climbs.
    let mut table = vec![EnemyKind::Basic];
    if level >= 2 {
        table.push(EnemyKind::Zigzag);
    }
    if level >= 3 {
        table.push(EnemyKind::Hunter);
    }
    if level >= 4 {
        table.push(EnemyKind::Dodger);
    }
    if level >= 5 {
        table.push(EnemyKind::Kamikaze);
    }
    let kind = table[rng.gen_range(0..table.len())];
    spawn_enemy(world, rng, kind, viewport)
}

/// Spawn a single enemy of the given kind at a random x above the screen.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    kind: EnemyKind,
    viewport: Viewport,
) -> hecs::Entity {
    let s = viewport.scale();

    let (state, size_factor, points, velocity) = match kind {
        EnemyKind::Basic => {
            let fall_speed = rng.gen_range(1.5..3.0) * s;
            (
                EnemyState::Basic {
                    fall_speed,
                    wobble_amount: rng.gen_range(0.5..1.5) * s,
                    wobble_speed: rng.gen_range(0.05..0.1),
                    wobble_phase: rng.gen_range(0.0..std::f32::consts::TAU),
                },
                0.9,
                100,
                Vec2::new(0.0, fall_speed),
            )
        }
        EnemyKind::Zigzag => {
            let base_speed = rng.gen_range(2.0..3.0) * s;
            let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            (
                EnemyState::Zigzag {
                    base_speed,
                    timer: 0,
                    period: rng.gen_range(30..60),
                    direction,
                },
                0.8,
                150,
                Vec2::new(direction * base_speed, base_speed * 0.8),
            )
        }
        EnemyKind::Hunter => {
            let max_speed = rng.gen_range(1.5..2.5) * s;
            (
                EnemyState::Hunter {
                    max_speed,
                    accel: 0.1 * s,
                    pulse: 0.0,
                },
                1.1,
                200,
                Vec2::new(0.0, max_speed * 0.5),
            )
        }
        EnemyKind::Dodger => {
            let base_speed = rng.gen_range(1.0..1.5) * s;
            (
                EnemyState::Dodger {
                    base_speed,
                    max_speed: rng.gen_range(2.0..3.0) * s,
                    dodge_distance: 100.0 * s,
                    dodge_dir: 1.0,
                    dodging: false,
                    dodge_cooldown: 0,
                    drift: rng.gen_range(0.0..std::f32::consts::TAU),
                },
                0.8,
                250,
                Vec2::new(0.0, base_speed),
            )
        }
        EnemyKind::Kamikaze => {
            let max_speed = 2.0 * s;
            (
                EnemyState::Kamikaze {
                    max_speed,
                    charge_speed: 8.0 * s,
                    accel: 0.2 * s,
                    charge_distance: 150.0 * s,
                    charging: false,
                },
                0.9,
                300,
                Vec2::new(0.0, max_speed * 0.8),
            )
        }
        _ => unreachable!("formation/boss/bullet spawns have dedicated factories"),
    };

    let size = PLAYER_SIZE * size_factor * s;
    let x = rng.gen_range(size / 2.0..viewport.width - size / 2.0);

    world.spawn((
        Position(Vec2::new(x, -size)),
        Velocity(velocity),
        Spatial {
            size,
            collision_radius: size / 2.0,
            point_value: points,
        },
        state,
        HostileTag,
    ))
}

/// Spawn a full formation wave sharing one group id.
pub fn spawn_formation(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    group: u32,
    viewport: Viewport,
) -> Vec<hecs::Entity> {
    let s = viewport.scale();
    let count = 5;
    let size = PLAYER_SIZE * 0.7 * s;
    let base_speed = 1.5 * s;

    (0..count)
        .map(|i| {
            let offset = (i as f32 - (count as f32 - 1.0) / 2.0) * 40.0 * s;
            let x = (viewport.width / 2.0 + offset)
                .clamp(size / 2.0, viewport.width - size / 2.0);
            world.spawn((
                Position(Vec2::new(x, -size - rng.gen_range(0.0..20.0))),
                Velocity(Vec2::new(0.0, base_speed)),
                Spatial {
                    size,
                    collision_radius: size / 2.0,
                    point_value: 150,
                },
                EnemyState::Formation {
                    index: i,
                    group_size: count,
                    group,
                    offset,
                    phase: i as f32 * 0.5,
                    base_speed,
                    wave_amplitude: 80.0 * s,
                    can_shoot: i % 2 == 0,
                    shoot_cooldown: 120 + 10 * i as u32,
                    shoot_rate: 120 + 10 * i as u32,
                },
                HostileTag,
            ))
        })
        .collect()
}

/// Boss stat multipliers for a configured boss level.
struct BossTier {
    kind: BossKind,
    size_factor: f32,
    health_factor: f32,
    attack_rate_factor: f32,
    orbit_points: u8,
}

/// Deterministic mapping from level number to boss variant and tier
/// scaling. Levels beyond the named tiers alternate by multiple of 20.
fn boss_tier(level: u32) -> BossTier {
    match level {
        10 => BossTier {
            kind: BossKind::Destroyer,
            size_factor: 1.0,
            health_factor: 1.0,
            attack_rate_factor: 1.0,
            orbit_points: 4,
        },
        20 => BossTier {
            kind: BossKind::Mothership,
            size_factor: 1.0,
            health_factor: 1.0,
            attack_rate_factor: 1.0,
            orbit_points: 4,
        },
        30 => BossTier {
            kind: BossKind::Destroyer,
            size_factor: 1.2,
            health_factor: 1.5,
            attack_rate_factor: 1.0,
            orbit_points: 4,
        },
        40 => BossTier {
            kind: BossKind::Mothership,
            size_factor: 1.0,
            health_factor: 1.0,
            attack_rate_factor: 0.8,
            orbit_points: 6,
        },
        50 => BossTier {
            kind: BossKind::Destroyer,
            size_factor: 1.5,
            health_factor: 2.0,
            attack_rate_factor: 0.7,
            orbit_points: 4,
        },
        n if n % 20 == 0 => BossTier {
            kind: BossKind::Mothership,
            size_factor: 1.0,
            health_factor: 1.0,
            attack_rate_factor: 1.0,
            orbit_points: 4,
        },
        _ => BossTier {
            kind: BossKind::Destroyer,
            size_factor: 1.0,
            health_factor: 1.0,
            attack_rate_factor: 1.0,
            orbit_points: 4,
        },
    }
}

/// Spawn the level-appropriate boss above the screen, entering.
pub fn spawn_boss(
    world: &mut World,
    level: u32,
    config: &BossConfig,
    viewport: Viewport,
) -> hecs::Entity {
    let s = viewport.scale();
    let tier = boss_tier(level);

    let base_size = match tier.kind {
        BossKind::Destroyer => BOSS_SIZE_FACTOR * PLAYER_SIZE,
        BossKind::Mothership => 3.0 * PLAYER_SIZE,
    };
    let size = base_size * tier.size_factor * s;
    let max_health = ((config.health_base + config.health_per_level * level as i32) as f32
        * tier.health_factor) as i32;
    let attack_rate =
        ((BOSS_ATTACK_RATE_TICKS as f32 * tier.attack_rate_factor) as u32).max(1);

    world.spawn((
        Position(Vec2::new(viewport.width / 2.0, -size)),
        Velocity(Vec2::ZERO),
        Spatial {
            size,
            collision_radius: size * BOSS_COLLISION_FACTOR,
            point_value: BOSS_POINTS_PER_LEVEL * level as u64,
        },
        BossState {
            kind: tier.kind,
            level,
            health: max_health,
            max_health,
            phase: 0,
            phase_timer: 0,
            phase_duration: BOSS_PHASE_DURATION_TICKS,
            attack_cooldown: attack_rate,
            attack_rate,
            max_speed: BOSS_MAX_SPEED * s,
            entering: true,
            entry_progress: 0.0,
            laser_charging: false,
            laser_charge: 0.0,
            laser_width: size * 0.3,
            laser_cooldown: 0,
            orbit_angle: 0.0,
            orbit_speed: 0.02,
            orbit_distance: size * 0.7,
            orbit_points: tier.orbit_points,
            teleport_cooldown: 0,
            teleport_rate: 180,
            teleport_flash: 0,
        },
        HostileTag,
    ))
}

/// Spawn a player bullet.
pub fn spawn_bullet(
    world: &mut World,
    position: Vec2,
    velocity: Vec2,
    size: f32,
) -> hecs::Entity {
    world.spawn((
        Position(position),
        Velocity(velocity),
        Spatial {
            size,
            collision_radius: size / 2.0,
            point_value: 0,
        },
        BulletTag,
    ))
}

/// Spawn an enemy bullet (boss attacks, formation fire).
pub fn spawn_enemy_bullet(
    world: &mut World,
    position: Vec2,
    velocity: Vec2,
    viewport: Viewport,
) -> hecs::Entity {
    let size = ENEMY_BULLET_SIZE * viewport.scale();
    world.spawn((
        Position(position),
        Velocity(velocity),
        Spatial {
            size,
            collision_radius: size * 0.4,
            point_value: 0,
        },
        EnemyState::EnemyBullet { age: 0 },
        HostileTag,
    ))
}

/// Spawn a drifting power-up pickup.
pub fn spawn_power_up(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    position: Vec2,
    viewport: Viewport,
) -> hecs::Entity {
    let s = viewport.scale();
    let kind = match rng.gen_range(0..3) {
        0 => PowerUpKind::RapidFire,
        1 => PowerUpKind::Shield,
        _ => PowerUpKind::MultiShot,
    };
    let size = 20.0 * s;
    world.spawn((
        Position(position),
        Velocity(Vec2::new(
            rng.gen_range(-0.5..0.5),
            rng.gen_range(1.0..2.0) * s,
        )),
        Spatial {
            size,
            collision_radius: size / 2.0,
            point_value: 0,
        },
        PowerUpState {
            kind,
            spin: 0.0,
            spin_rate: rng.gen_range(0.02..0.08),
        },
    ))
}
