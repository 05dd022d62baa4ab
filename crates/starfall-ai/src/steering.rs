//! Enemy steering rules.
//!
//! Pure functions that compute the next velocity (and timer updates)
//! for each enemy variant based on its behavior state and situation.
//! No ECS dependency — operates on plain data.

use glam::Vec2;

use starfall_core::components::EnemyState;
use starfall_core::types::limit;

/// Input to a steering evaluation for a single enemy.
pub struct SteerContext {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub player_position: Vec2,
    pub viewport_width: f32,
    pub scale: f32,
    /// Current simulation tick, drives shared sinusoids.
    pub tick: u64,
}

/// Output of a steering evaluation.
pub struct Steer {
    pub velocity: Vec2,
    /// Edge reflection: clamp the x position to this value.
    pub clamp_x: Option<f32>,
    /// Formation member wants to fire an aimed shot this tick.
    pub shoot: bool,
}

impl Steer {
    fn velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            clamp_x: None,
            shoot: false,
        }
    }
}

/// Evaluate one enemy's steering rule, advancing its internal timers.
/// Bullets are the positions of live player bullets (dodgers scan them).
pub fn steer(state: &mut EnemyState, ctx: &SteerContext, bullets: &[Vec2]) -> Steer {
    match state {
        EnemyState::Basic {
            fall_speed,
            wobble_amount,
            wobble_speed,
            wobble_phase,
        } => {
            let wobble = (ctx.tick as f32 * *wobble_speed + *wobble_phase).sin() * *wobble_amount;
            Steer::velocity(Vec2::new(wobble, *fall_speed))
        }
        EnemyState::Zigzag {
            base_speed,
            timer,
            period,
            direction,
        } => {
            *timer += 1;
            if *timer >= *period {
                *direction = -*direction;
                *timer = 0;
            }
            // Reflect off screen edges: clamp and force direction inward.
            let half = ctx.size / 2.0;
            let mut clamp_x = None;
            if ctx.position.x < half {
                *direction = 1.0;
                clamp_x = Some(half);
            } else if ctx.position.x > ctx.viewport_width - half {
                *direction = -1.0;
                clamp_x = Some(ctx.viewport_width - half);
            }
            Steer {
                velocity: Vec2::new(*direction * *base_speed, *base_speed * 0.8),
                clamp_x,
                shoot: false,
            }
        }
        EnemyState::Hunter {
            max_speed,
            accel,
            pulse,
        } => {
            *pulse = (*pulse + 0.05) % std::f32::consts::TAU;
            let desired = ctx.player_position - ctx.position;
            let steering = if desired.length_squared() > 0.0 {
                desired.normalize() * *accel
            } else {
                Vec2::ZERO
            };
            Steer::velocity(limit(ctx.velocity + steering, *max_speed))
        }
        EnemyState::Dodger {
            base_speed,
            max_speed,
            dodge_distance,
            dodge_dir,
            dodging,
            dodge_cooldown,
            drift,
        } => {
            if !*dodging {
                // Scan live bullets: any approaching one within range commits
                // a lateral burst away from its x offset.
                for bullet in bullets {
                    let close = ctx.position.distance(*bullet) < *dodge_distance;
                    let approaching = bullet.y > ctx.position.y - ctx.size;
                    if close && approaching {
                        *dodging = true;
                        *dodge_cooldown = 20;
                        *dodge_dir = if bullet.x > ctx.position.x { -1.0 } else { 1.0 };
                        break;
                    }
                }
            }
            let vx = if *dodging {
                *dodge_cooldown = dodge_cooldown.saturating_sub(1);
                if *dodge_cooldown == 0 {
                    *dodging = false;
                }
                *dodge_dir * *max_speed
            } else {
                *drift += 0.05;
                drift.sin() * *base_speed * 0.3
            };
            // Stay on screen: clamp and reverse a committed dodge at the edge.
            let half = ctx.size / 2.0;
            let mut clamp_x = None;
            if ctx.position.x < half {
                *dodge_dir = 1.0;
                clamp_x = Some(half);
            } else if ctx.position.x > ctx.viewport_width - half {
                *dodge_dir = -1.0;
                clamp_x = Some(ctx.viewport_width - half);
            }
            Steer {
                velocity: Vec2::new(vx, *base_speed),
                clamp_x,
                shoot: false,
            }
        }
        EnemyState::Formation {
            offset,
            phase,
            base_speed,
            wave_amplitude,
            can_shoot,
            shoot_cooldown,
            shoot_rate,
            ..
        } => {
            // Spring toward the shared sinusoidal reference point.
            let target_x =
                ctx.viewport_width / 2.0 + (ctx.tick as f32 * 0.02 + *phase).sin() * *wave_amplitude
                    + *offset;
            let vx = (target_x - ctx.position.x) * 0.1;

            let mut shoot = false;
            if *can_shoot {
                if *shoot_cooldown > 0 {
                    *shoot_cooldown -= 1;
                } else if (ctx.player_position.x - ctx.position.x).abs() < 100.0 * ctx.scale {
                    shoot = true;
                    *shoot_cooldown = *shoot_rate;
                }
            }
            Steer {
                velocity: Vec2::new(vx, *base_speed),
                clamp_x: None,
                shoot,
            }
        }
        EnemyState::Kamikaze {
            max_speed,
            charge_speed,
            accel,
            charge_distance,
            charging,
        } => {
            if !*charging && ctx.position.distance(ctx.player_position) < *charge_distance {
                // Sticky: never reverts.
                *charging = true;
            }
            if *charging {
                let desired = ctx.player_position - ctx.position;
                let steering = if desired.length_squared() > 0.0 {
                    desired.normalize() * *accel * 2.0
                } else {
                    Vec2::ZERO
                };
                Steer::velocity(limit(ctx.velocity + steering, *charge_speed))
            } else {
                // Cruise downward with slight horizontal tracking.
                let track = if ctx.player_position.x < ctx.position.x {
                    -*max_speed * 0.3
                } else {
                    *max_speed * 0.3
                };
                Steer::velocity(Vec2::new(track, *max_speed * 0.8))
            }
        }
        EnemyState::EnemyBullet { age } => {
            *age += 1;
            Steer::velocity(ctx.velocity)
        }
    }
}

/// Hunter collision radius oscillates with its visual pulse.
pub fn hunter_radius(size: f32, pulse: f32) -> f32 {
    size / 2.0 * (1.0 + pulse.sin() * 0.1)
}
