//! Boss phase state machines.
//!
//! A boss cycles through three phases on a fixed timer; each phase pairs
//! a movement pattern with an attack pattern keyed by (kind, phase).
//! Movement and attacks are evaluated separately so the attack cooldown
//! runs independently of phase motion. The caller pre-rolls any random
//! values so these functions stay deterministic and RNG-free.

use glam::Vec2;

use starfall_core::components::BossState;
use starfall_core::constants::*;
use starfall_core::enums::BossKind;
use starfall_core::types::map_range;

/// Input to a boss evaluation for one tick.
pub struct BossCtx {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub player_position: Vec2,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub scale: f32,
    pub tick: u64,
    /// Uniform sample in [0, 1) pre-rolled by the caller. Gates the
    /// Destroyer's laser start and the Mothership's teleport.
    pub roll: f32,
    /// Pre-rolled teleport destination (upper half of the screen).
    pub teleport_target: Vec2,
    /// Pre-rolled spawn offsets for summoned minions.
    pub minion_offsets: [Vec2; 2],
}

/// Movement output for one tick.
pub struct BossSteer {
    pub velocity: Vec2,
    /// Hard position set (entry animation, teleport).
    pub position_override: Option<Vec2>,
    /// Clamp the y position to at most this value after integration.
    pub max_y: Option<f32>,
    /// The Destroyer's laser finished charging and sweeps this tick.
    pub fire_laser: bool,
}

/// A projectile or minion emitted by an attack pattern. The simulation
/// buffers these and spawns entities after the enemy pass completes.
#[derive(Debug, Clone)]
pub enum AttackShot {
    Bullet { position: Vec2, velocity: Vec2 },
    Minion { position: Vec2 },
}

/// Advance the boss one tick: entry animation, phase cycling, and the
/// phase movement pattern. Attack emission is separate (`attack`).
pub fn advance(state: &mut BossState, ctx: &BossCtx) -> BossSteer {
    state.laser_cooldown = state.laser_cooldown.saturating_sub(1);
    state.teleport_cooldown = state.teleport_cooldown.saturating_sub(1);
    state.teleport_flash = state.teleport_flash.saturating_sub(1);
    if state.kind == BossKind::Mothership {
        state.orbit_angle = (state.orbit_angle + state.orbit_speed) % std::f32::consts::TAU;
    }

    // Entry animation: descend from above the screen; combat logic is
    // gated until the descent completes.
    if state.entering {
        state.entry_progress += BOSS_ENTRY_STEP;
        let y = map_range(
            state.entry_progress.min(1.0),
            0.0,
            1.0,
            -ctx.size,
            ctx.viewport_height * 0.2,
        );
        if state.entry_progress >= 1.0 {
            state.entering = false;
            state.entry_progress = 1.0;
        }
        return BossSteer {
            velocity: Vec2::ZERO,
            position_override: Some(Vec2::new(ctx.position.x, y)),
            max_y: None,
            fire_laser: false,
        };
    }

    state.phase_timer += 1;
    if state.phase_timer >= state.phase_duration {
        state.phase = (state.phase + 1) % 3;
        state.phase_timer = 0;
    }

    match (state.kind, state.phase) {
        (BossKind::Destroyer, 1) => destroyer_laser_hold(state, ctx),
        (BossKind::Mothership, 1) => mothership_teleport(state, ctx),
        (_, 0) => sweep(state, ctx),
        (_, 1) => chase(state, ctx),
        _ => hold(state, ctx),
    }
}

/// Lateral sweep across the top of the screen.
fn sweep(state: &BossState, ctx: &BossCtx) -> BossSteer {
    let t = ctx.tick as f32;
    BossSteer {
        velocity: Vec2::new(
            (t * 0.02).sin() * state.max_speed * 2.0,
            (t * 0.01).sin() * state.max_speed * 0.5,
        ),
        position_override: None,
        max_y: Some(ctx.viewport_height * 0.4),
        fire_laser: false,
    }
}

/// Direct chase constrained to the upper part of the screen.
fn chase(state: &BossState, ctx: &BossCtx) -> BossSteer {
    let target = Vec2::new(
        ctx.player_position.x,
        ctx.player_position.y.min(ctx.viewport_height * 0.4),
    );
    let to_target = target - ctx.position;
    let velocity = if to_target.length_squared() > 0.0 {
        to_target.normalize() * state.max_speed
    } else {
        Vec2::ZERO
    };
    BossSteer {
        velocity,
        position_override: None,
        max_y: Some(ctx.viewport_height * 0.4),
        fire_laser: false,
    }
}

/// Near-stationary drift high on the screen.
fn hold(state: &BossState, ctx: &BossCtx) -> BossSteer {
    let t = ctx.tick as f32;
    BossSteer {
        velocity: Vec2::new(
            (t * 0.05).sin() * state.max_speed * 0.5,
            (t * 0.05).cos() * state.max_speed * 0.3,
        ),
        position_override: None,
        max_y: Some(ctx.viewport_height * 0.3),
        fire_laser: false,
    }
}

/// Destroyer phase 1: hold while charging the beam. The beam fires when
/// the charge completes, then cools down for two attack cycles.
fn destroyer_laser_hold(state: &mut BossState, ctx: &BossCtx) -> BossSteer {
    let mut steer = hold(state, ctx);
    steer.velocity *= 0.5;

    if !state.laser_charging && state.laser_cooldown == 0 && ctx.roll < 0.01 {
        state.laser_charging = true;
        state.laser_charge = 0.0;
    }
    if state.laser_charging {
        state.laser_charge += 0.02;
        if state.laser_charge >= 1.0 {
            state.laser_charging = false;
            state.laser_charge = 0.0;
            state.laser_cooldown = state.attack_rate * 2;
            steer.fire_laser = true;
        }
    }
    steer
}

/// Mothership phase 1: occasionally blink to a pre-rolled destination,
/// otherwise chase. The flash window keys the burst attack.
fn mothership_teleport(state: &mut BossState, ctx: &BossCtx) -> BossSteer {
    if state.teleport_cooldown == 0 && ctx.roll < 0.02 {
        state.teleport_flash = 20;
        state.teleport_cooldown = state.teleport_rate;
        return BossSteer {
            velocity: Vec2::ZERO,
            position_override: Some(ctx.teleport_target),
            max_y: None,
            fire_laser: false,
        };
    }
    chase(state, ctx)
}

/// Evaluate the attack cooldown and emit this tick's shots, if any.
pub fn attack(state: &mut BossState, ctx: &BossCtx) -> Vec<AttackShot> {
    if state.entering {
        return Vec::new();
    }
    if state.attack_cooldown > 0 {
        state.attack_cooldown -= 1;
        return Vec::new();
    }
    state.attack_cooldown = state.attack_rate;

    let speed = ENEMY_BULLET_SPEED * ctx.scale;
    match (state.kind, state.phase) {
        (BossKind::Destroyer, 0) => spread(ctx.position, speed, 7, 0.15),
        // Laser phase: the beam is handled by movement, no projectiles.
        (BossKind::Destroyer, 1) => Vec::new(),
        (BossKind::Destroyer, _) => {
            let mut shots = vec![
                AttackShot::Minion {
                    position: ctx.position + ctx.minion_offsets[0],
                },
                AttackShot::Minion {
                    position: ctx.position + ctx.minion_offsets[1],
                },
            ];
            shots.extend(aimed(ctx.position, ctx.player_position, speed));
            shots
        }
        (BossKind::Mothership, 0) => orbit_fire(state, ctx, speed, false),
        (BossKind::Mothership, 1) => {
            if state.teleport_flash > 0 {
                circle(ctx.position, speed, 12)
            } else {
                aimed(ctx.position, ctx.player_position, speed)
            }
        }
        (BossKind::Mothership, _) => orbit_fire(state, ctx, speed, true),
    }
}

/// Fan of shots centered straight down.
fn spread(origin: Vec2, speed: f32, count: u32, step: f32) -> Vec<AttackShot> {
    let half = (count as i32 - 1) / 2;
    (-half..=half)
        .map(|i| {
            let angle = std::f32::consts::FRAC_PI_2 + i as f32 * step;
            AttackShot::Bullet {
                position: origin,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
            }
        })
        .collect()
}

/// Single shot aimed at the player's live position.
fn aimed(origin: Vec2, target: Vec2, speed: f32) -> Vec<AttackShot> {
    let dir = target - origin;
    if dir.length_squared() == 0.0 {
        return Vec::new();
    }
    vec![AttackShot::Bullet {
        position: origin,
        velocity: dir.normalize() * speed,
    }]
}

/// Ring of shots in all directions.
fn circle(origin: Vec2, speed: f32, count: u32) -> Vec<AttackShot> {
    (0..count)
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            AttackShot::Bullet {
                position: origin,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
            }
        })
        .collect()
}

/// Fire from each orbit point: tangentially, or aimed at the player.
fn orbit_fire(state: &BossState, ctx: &BossCtx, speed: f32, at_player: bool) -> Vec<AttackShot> {
    (0..state.orbit_points)
        .filter_map(|i| {
            let angle =
                state.orbit_angle + std::f32::consts::TAU * i as f32 / state.orbit_points as f32;
            let point = ctx.position + Vec2::new(angle.cos(), angle.sin()) * state.orbit_distance;
            let dir = if at_player {
                ctx.player_position - point
            } else {
                // Tangential to the orbit.
                Vec2::new(-angle.sin(), angle.cos())
            };
            if dir.length_squared() == 0.0 {
                return None;
            }
            Some(AttackShot::Bullet {
                position: point,
                velocity: dir.normalize() * speed,
            })
        })
        .collect()
}
