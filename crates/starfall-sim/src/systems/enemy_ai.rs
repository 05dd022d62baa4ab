//! Enemy AI system — evaluates steering and boss behavior each tick.
//!
//! Calls the pure behavior functions from starfall-ai, then applies the
//! resulting velocities. Anything a behavior wants to spawn (boss
//! shots, formation fire, summoned minions) goes into a side buffer the
//! engine merges after this pass, never into the collection being
//! iterated.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_ai::boss::{self, AttackShot, BossCtx};
use starfall_ai::steering::{hunter_radius, steer, SteerContext};
use starfall_core::components::{BossState, BulletTag, EnemyState, Spatial};
use starfall_core::constants::ENEMY_BULLET_SPEED;
use starfall_core::types::{Position, Velocity, Viewport};

/// A Destroyer beam sweeping this tick: (origin, width).
pub type LaserBeam = (Vec2, f32);

pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    tick: u64,
    player_position: Vec2,
    viewport: Viewport,
    shot_buffer: &mut Vec<AttackShot>,
    laser_beams: &mut Vec<LaserBeam>,
    boss_clamps: &mut Vec<(Entity, f32)>,
) {
    let s = viewport.scale();

    // Live player bullet positions, scanned by dodgers.
    let bullets: Vec<Vec2> = world
        .query_mut::<(&BulletTag, &Position)>()
        .into_iter()
        .map(|(_, (_, pos))| pos.0)
        .collect();

    // Regular enemies: evaluate steering in place, buffering formation
    // fire so spawns happen after the pass.
    let mut formation_shots: Vec<Vec2> = Vec::new();
    for (_entity, (state, pos, vel, spatial)) in
        world.query_mut::<(&mut EnemyState, &mut Position, &mut Velocity, &Spatial)>()
    {
        let ctx = SteerContext {
            position: pos.0,
            velocity: vel.0,
            size: spatial.size,
            player_position,
            viewport_width: viewport.width,
            scale: s,
            tick,
        };
        let out = steer(state, &ctx, &bullets);
        vel.0 = out.velocity;
        if let Some(x) = out.clamp_x {
            pos.0.x = x;
        }
        if out.shoot {
            formation_shots.push(pos.0);
        }
    }
    for origin in formation_shots {
        let dir = player_position - origin;
        if dir.length_squared() > 0.0 {
            shot_buffer.push(AttackShot::Bullet {
                position: origin,
                velocity: dir.normalize() * ENEMY_BULLET_SPEED * s,
            });
        }
    }

    // Hunter collision radii pulse with their visual throb.
    for (_entity, (state, spatial)) in world.query_mut::<(&EnemyState, &mut Spatial)>() {
        if let EnemyState::Hunter { pulse, .. } = state {
            spatial.collision_radius = hunter_radius(spatial.size, *pulse);
        }
    }

    // Boss: pre-roll this tick's random samples so the behavior crate
    // stays deterministic and RNG-free.
    let roll: f32 = rng.gen();
    let teleport_target = Vec2::new(
        rng.gen_range(viewport.width * 0.15..viewport.width * 0.85),
        rng.gen_range(viewport.height * 0.1..viewport.height * 0.4),
    );
    let minion_offsets = [
        Vec2::new(rng.gen_range(-60.0..-20.0) * s, rng.gen_range(-10.0..10.0) * s),
        Vec2::new(rng.gen_range(20.0..60.0) * s, rng.gen_range(-10.0..10.0) * s),
    ];

    let boss_entity = world
        .query_mut::<(&BossState, &Position)>()
        .into_iter()
        .next()
        .map(|(entity, _)| entity);

    if let Some(entity) = boss_entity {
        let (position, velocity, size) = {
            let pos = world.get::<&Position>(entity).map(|p| p.0).unwrap_or_default();
            let vel = world.get::<&Velocity>(entity).map(|v| v.0).unwrap_or_default();
            let size = world.get::<&Spatial>(entity).map(|sp| sp.size).unwrap_or(0.0);
            (pos, vel, size)
        };
        let ctx = BossCtx {
            position,
            velocity,
            size,
            player_position,
            viewport_width: viewport.width,
            viewport_height: viewport.height,
            scale: s,
            tick,
            roll,
            teleport_target,
            minion_offsets,
        };

        if let Ok(mut state) = world.get::<&mut BossState>(entity) {
            let out = boss::advance(&mut state, &ctx);
            shot_buffer.extend(boss::attack(&mut state, &ctx));
            if out.fire_laser {
                laser_beams.push((position, state.laser_width));
            }
            drop(state);

            if let Ok(mut vel) = world.get::<&mut Velocity>(entity) {
                vel.0 = out.velocity;
            }
            if let Some(target) = out.position_override {
                if let Ok(mut pos) = world.get::<&mut Position>(entity) {
                    pos.0 = target;
                }
            }
            if let Some(max_y) = out.max_y {
                boss_clamps.push((entity, max_y));
            }
        }
    }

    // Power-up pickups just spin.
    for (_entity, power_up) in
        world.query_mut::<&mut starfall_core::components::PowerUpState>()
    {
        power_up.spin += power_up.spin_rate;
    }
}
