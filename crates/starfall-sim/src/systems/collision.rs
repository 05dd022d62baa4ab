//! Collision and interaction resolver.
//!
//! Converts spatial overlap into gameplay consequences exactly once per
//! qualifying pair per tick: bullet x enemy, enemy x player, power-up x
//! player, plus the Destroyer beam and the Assault blast ring. Hits are
//! resolved in entity spawn order and a bullet destroys at most one
//! target.

use std::collections::HashSet;

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starfall_core::components::{BossState, BulletTag, EnemyState, PlayerShip, PowerUpState, Spatial};
use starfall_core::constants::*;
use starfall_core::enums::{EnemyKind, PowerUpKind, SpecialAbility};
use starfall_core::events::GameEvent;
use starfall_core::types::{Position, Viewport};

use crate::achievements::AchievementTracker;
use crate::effects::EffectsRegistry;
use crate::progression::{apply_boss_damage, BossHit, Progression};
use crate::systems::enemy_ai::LaserBeam;

#[derive(Debug, Default)]
pub struct CollisionOutcome {
    pub player_died: bool,
}

enum Target {
    Enemy {
        kind: EnemyKind,
        formation: Option<(u32, usize)>,
    },
    Boss,
}

struct TargetEntry {
    entity: Entity,
    position: Vec2,
    radius: f32,
    points: u64,
    size: f32,
    target: Target,
}

struct PlayerInfo {
    entity: Entity,
    position: Vec2,
    radius: f32,
    vulnerable: bool,
    blast_radius: Option<f32>,
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    progression: &mut Progression,
    achievements: &mut AchievementTracker,
    effects: &mut EffectsRegistry,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
    laser_beams: &[LaserBeam],
    viewport: Viewport,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    let player = match gather_player(world) {
        Some(p) => p,
        None => return outcome,
    };

    let mut bullets: Vec<(Entity, Vec2, f32)> = world
        .query_mut::<(&BulletTag, &Position, &Spatial)>()
        .into_iter()
        .map(|(entity, (_, pos, spatial))| (entity, pos.0, spatial.collision_radius))
        .collect();
    bullets.sort_by_key(|(entity, ..)| entity.id());

    let mut targets = gather_targets(world);
    // Deterministic tie-break: sort by entity id. Ids mostly track spawn
    // order, though hecs recycles an index after a despawn.
    targets.sort_by_key(|t| t.entity.id());

    let mut destroyed: HashSet<Entity> = HashSet::new();

    // --- Bullet x enemy ---
    for (bullet_entity, bullet_pos, bullet_radius) in &bullets {
        for i in 0..targets.len() {
            if destroyed.contains(&targets[i].entity) {
                continue;
            }
            let hit = bullet_pos.distance(targets[i].position)
                < bullet_radius + targets[i].radius;
            if !hit {
                continue;
            }
            match targets[i].target {
                Target::Boss => {
                    resolve_boss_hit(
                        world,
                        &targets[i],
                        1,
                        rng,
                        progression,
                        achievements,
                        effects,
                        events,
                        &mut destroyed,
                        despawn_buffer,
                        viewport,
                    );
                }
                Target::Enemy { kind, formation } => {
                    destroy_enemy(
                        &targets[i],
                        kind,
                        formation,
                        rng,
                        progression,
                        achievements,
                        effects,
                        events,
                        &mut destroyed,
                        despawn_buffer,
                    );
                    // Power-up drop rolls only for bullet kills.
                    if kind != EnemyKind::EnemyBullet && rng.gen::<f64>() < 0.1 {
                        pending_power_up(world, rng, targets[i].position, viewport);
                    }
                }
            }
            // A bullet destroys at most one target.
            despawn_buffer.push(*bullet_entity);
            break;
        }
    }

    // --- Blast ring x enemy ---
    if let Some(blast_radius) = player.blast_radius {
        for i in 0..targets.len() {
            if destroyed.contains(&targets[i].entity) {
                continue;
            }
            let (kind, formation) = match targets[i].target {
                Target::Enemy { kind, formation } => (kind, formation),
                Target::Boss => continue,
            };
            if player.position.distance(targets[i].position)
                < blast_radius + targets[i].radius
            {
                destroy_enemy(
                    &targets[i],
                    kind,
                    formation,
                    rng,
                    progression,
                    achievements,
                    effects,
                    events,
                    &mut destroyed,
                    despawn_buffer,
                );
            }
        }
    }

    // --- Destroyer beam x player ---
    for (origin, width) in laser_beams {
        let in_beam = (player.position.x - origin.x).abs() < width / 2.0
            && player.position.y > origin.y;
        if in_beam && player.vulnerable {
            kill_player(&player, rng, progression, achievements, effects, events);
            outcome.player_died = true;
        }
    }

    // --- Enemy x player ---
    if !outcome.player_died {
        for entry in &targets {
            if destroyed.contains(&entry.entity) {
                continue;
            }
            if player.position.distance(entry.position) < player.radius + entry.radius {
                if player.vulnerable {
                    kill_player(&player, rng, progression, achievements, effects, events);
                    outcome.player_died = true;
                    // The colliding enemy is removed unless it is a boss.
                    if !matches!(entry.target, Target::Boss) {
                        destroyed.insert(entry.entity);
                        despawn_buffer.push(entry.entity);
                    }
                    break;
                }
            }
        }
    }

    // --- Power-up x player ---
    let mut pickups: Vec<(Entity, PowerUpKind, Vec2)> = Vec::new();
    for (entity, (power_up, pos, spatial)) in
        world.query_mut::<(&PowerUpState, &Position, &Spatial)>()
    {
        if player.position.distance(pos.0) < player.radius + spatial.collision_radius {
            pickups.push((entity, power_up.kind, pos.0));
        }
    }
    for (entity, kind, position) in pickups {
        apply_power_up(world, player.entity, kind);
        achievements.on_power_up();
        events.push(GameEvent::PowerUpCollected { kind });
        effects.spawn_text(position, power_up_label(kind), 14.0 * viewport.scale());
        despawn_buffer.push(entity);
    }

    outcome
}

fn gather_player(world: &mut World) -> Option<PlayerInfo> {
    world
        .query_mut::<(&PlayerShip, &Position, &Spatial)>()
        .into_iter()
        .next()
        .map(|(entity, (ship, pos, spatial))| {
            let shielded = ship.active_power_up == Some(PowerUpKind::Shield)
                || (ship.special_active
                    && ship.class.special() == SpecialAbility::ShieldWall);
            let radius = if shielded {
                spatial.collision_radius * SHIELD_RADIUS_FACTOR
            } else {
                spatial.collision_radius
            };
            PlayerInfo {
                entity,
                position: pos.0,
                radius,
                vulnerable: !ship.invulnerable && !shielded,
                blast_radius: ship.blast_active.then_some(ship.blast_radius),
            }
        })
}

fn gather_targets(world: &mut World) -> Vec<TargetEntry> {
    let mut targets: Vec<TargetEntry> = world
        .query_mut::<(&EnemyState, &Position, &Spatial)>()
        .into_iter()
        .map(|(entity, (state, pos, spatial))| {
            let formation = match state {
                EnemyState::Formation {
                    group, group_size, ..
                } => Some((*group, *group_size)),
                _ => None,
            };
            TargetEntry {
                entity,
                position: pos.0,
                radius: spatial.collision_radius,
                points: spatial.point_value,
                size: spatial.size,
                target: Target::Enemy {
                    kind: state.kind(),
                    formation,
                },
            }
        })
        .collect();

    targets.extend(
        world
            .query_mut::<(&BossState, &Position, &Spatial)>()
            .into_iter()
            .map(|(entity, (_, pos, spatial))| TargetEntry {
                entity,
                position: pos.0,
                radius: spatial.collision_radius,
                points: spatial.point_value,
                size: spatial.size,
                target: Target::Boss,
            }),
    );
    targets
}

#[allow(clippy::too_many_arguments)]
fn resolve_boss_hit(
    world: &mut World,
    entry: &TargetEntry,
    damage: i32,
    rng: &mut ChaCha8Rng,
    progression: &mut Progression,
    achievements: &mut AchievementTracker,
    effects: &mut EffectsRegistry,
    events: &mut Vec<GameEvent>,
    destroyed: &mut HashSet<Entity>,
    despawn_buffer: &mut Vec<Entity>,
    viewport: Viewport,
) {
    let result = {
        let mut state = match world.get::<&mut BossState>(entry.entity) {
            Ok(s) => s,
            Err(_) => return,
        };
        let result = apply_boss_damage(&mut state, damage);
        events.push(GameEvent::BossDamaged {
            health: state.health,
            max_health: state.max_health,
        });
        result
    };

    match result {
        BossHit::Survived => {
            effects.spawn_explosion(rng, entry.position, entry.size * 0.2);
        }
        BossHit::Destroyed => {
            let s = viewport.scale();
            progression.score += entry.points;
            progression.level += 1;
            progression.boss_defeated = true;
            progression.boss_active = false;
            achievements.on_boss_defeated();
            events.push(GameEvent::BossDefeated {
                points: entry.points,
            });
            events.push(GameEvent::ScreenShake { magnitude: 12.0 * s });
            events.push(GameEvent::LevelUp {
                level: progression.level,
            });
            effects.spawn_banner(
                Vec2::new(viewport.width / 2.0, viewport.height / 2.0),
                "BOSS DEFEATED",
                24.0 * s,
            );

            // Staggered victory explosions around the carcass.
            for i in 0..20u32 {
                let jitter = Vec2::new(
                    rng.gen_range(-entry.size..entry.size),
                    rng.gen_range(-entry.size..entry.size),
                );
                progression
                    .victory_queue
                    .push((i * 5, entry.position + jitter));
            }
            // Reward drops at jittered offsets.
            for _ in 0..BOSS_DEFEAT_POWERUPS {
                let jitter = Vec2::new(
                    rng.gen_range(-50.0..50.0) * s,
                    rng.gen_range(-50.0..50.0) * s,
                );
                pending_power_up(world, rng, entry.position + jitter, viewport);
            }

            destroyed.insert(entry.entity);
            despawn_buffer.push(entry.entity);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn destroy_enemy(
    entry: &TargetEntry,
    kind: EnemyKind,
    formation: Option<(u32, usize)>,
    rng: &mut ChaCha8Rng,
    progression: &mut Progression,
    achievements: &mut AchievementTracker,
    effects: &mut EffectsRegistry,
    events: &mut Vec<GameEvent>,
    destroyed: &mut HashSet<Entity>,
    despawn_buffer: &mut Vec<Entity>,
) {
    progression.score += entry.points;
    achievements.on_enemy_destroyed(kind, formation);
    events.push(GameEvent::EnemyDestroyed {
        kind,
        points: entry.points,
    });
    effects.spawn_explosion(rng, entry.position, entry.size);
    if entry.points > 0 {
        effects.spawn_text(entry.position, format!("+{}", entry.points), 12.0);
    }
    destroyed.insert(entry.entity);
    despawn_buffer.push(entry.entity);
}

fn kill_player(
    player: &PlayerInfo,
    rng: &mut ChaCha8Rng,
    progression: &mut Progression,
    achievements: &mut AchievementTracker,
    effects: &mut EffectsRegistry,
    events: &mut Vec<GameEvent>,
) {
    progression.lives = 0;
    progression.high_score = progression.high_score.max(progression.score);
    achievements.on_damage_taken();
    events.push(GameEvent::PlayerHit);
    events.push(GameEvent::ScreenShake { magnitude: 16.0 });
    effects.spawn_explosion(rng, player.position, PLAYER_SIZE);
}

/// Spawn a power-up drop at a destroyed enemy's position.
fn pending_power_up(world: &mut World, rng: &mut ChaCha8Rng, position: Vec2, viewport: Viewport) {
    crate::world_setup::spawn_power_up(world, rng, position, viewport);
}

fn apply_power_up(world: &mut World, player: Entity, kind: PowerUpKind) {
    if let Ok(mut ship) = world.get::<&mut PlayerShip>(player) {
        // Replaces any previously active effect and resets the duration.
        if ship.active_power_up == Some(PowerUpKind::RapidFire) && kind != PowerUpKind::RapidFire
        {
            ship.cooldown_time = ship.base_cooldown_time;
        }
        ship.active_power_up = Some(kind);
        ship.power_up_timer = POWERUP_DURATION_TICKS;
        if kind == PowerUpKind::RapidFire {
            ship.cooldown_time = (ship.base_cooldown_time / 2).max(1);
        }
    }
}

fn power_up_label(kind: PowerUpKind) -> &'static str {
    match kind {
        PowerUpKind::RapidFire => "RAPID FIRE",
        PowerUpKind::Shield => "SHIELD",
        PowerUpKind::MultiShot => "MULTI SHOT",
    }
}
