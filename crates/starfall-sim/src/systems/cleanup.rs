//! Cleanup system: removes entities that left the play field.
//!
//! Runs after collision, so the despawn buffer may already hold entities
//! queued by the resolver. Off-screen exits also feed a couple of
//! near-miss achievement counters before the entity is dropped.

use hecs::{Entity, World};

use starfall_core::components::{BossState, BulletTag, EnemyState, PowerUpState, Spatial};
use starfall_core::types::{Position, Viewport};

use crate::achievements::AchievementTracker;

pub fn run(
    world: &mut World,
    achievements: &mut AchievementTracker,
    viewport: Viewport,
    despawn_buffer: &mut Vec<Entity>,
) {
    // Player bullets that cleared the top edge.
    for (entity, (pos, _tag, spatial)) in
        world.query_mut::<(&Position, &BulletTag, &Spatial)>()
    {
        if pos.0.y < -spatial.size {
            despawn_buffer.push(entity);
        }
    }

    // Enemies that drifted off any edge. A charging kamikaze that leaves
    // the field counts as survived; an enemy bullet that exits below the
    // player counts as dodged.
    for (entity, (pos, state, spatial)) in
        world.query_mut::<(&Position, &EnemyState, &Spatial)>()
    {
        let margin = spatial.size * 2.0;
        let out = pos.0.y > viewport.height + margin
            || pos.0.y < -margin * 2.0
            || pos.0.x < -margin
            || pos.0.x > viewport.width + margin;
        if !out {
            continue;
        }
        match state {
            EnemyState::Kamikaze { charging: true, .. } => {
                achievements.on_kamikaze_survived();
            }
            EnemyState::EnemyBullet { .. } => {
                if pos.0.y > viewport.height {
                    achievements.on_bullet_dodged();
                }
            }
            _ => {}
        }
        despawn_buffer.push(entity);
    }

    // A boss is only exempt from bounds checks while flying in.
    for (entity, (pos, boss, spatial)) in
        world.query_mut::<(&Position, &BossState, &Spatial)>()
    {
        if boss.entering && boss.health > 0 {
            continue;
        }
        let margin = spatial.size * 2.0;
        if pos.0.y > viewport.height + margin
            || pos.0.x < -margin
            || pos.0.x > viewport.width + margin
        {
            despawn_buffer.push(entity);
        }
    }

    // Power-ups that fell past the bottom edge.
    for (entity, (pos, _power_up, spatial)) in
        world.query_mut::<(&Position, &PowerUpState, &Spatial)>()
    {
        if pos.0.y > viewport.height + spatial.size {
            despawn_buffer.push(entity);
        }
    }

    // Entities may be queued twice (collision then bounds); the second
    // despawn is a no-op.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
