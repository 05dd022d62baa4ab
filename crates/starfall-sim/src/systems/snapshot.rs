//! Snapshot builder: read-only projection of the world into the
//! serializable state sent to the frontend. Never mutates anything.

use hecs::World;

use starfall_core::components::{
    BossState, BulletTag, EnemyState, PlayerShip, PowerUpState, Spatial,
};
use starfall_core::enums::{EnemyKind, GamePhase, PowerUpKind, SpecialAbility};
use starfall_core::events::GameEvent;
use starfall_core::state::*;
use starfall_core::types::{Position, SimTime, Velocity};

use crate::achievements::AchievementTracker;
use crate::effects::EffectsRegistry;
use crate::progression::Progression;
use crate::stars::StarField;

#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: SimTime,
    phase: GamePhase,
    progression: &Progression,
    effects: &EffectsRegistry,
    stars: &StarField,
    achievements: &AchievementTracker,
    events: Vec<GameEvent>,
    overlay_alpha: f32,
) -> GameStateSnapshot {
    let mut snapshot = GameStateSnapshot {
        time,
        phase,
        events,
        overlay_alpha,
        stars: stars.views(),
        visual_effects: effects.visual_views(),
        text_effects: effects.text_views(),
        achievement_toast: achievements.toast_view(),
        ..Default::default()
    };

    let mut hud = HudView {
        score: progression.score,
        level: progression.level,
        high_score: progression.high_score,
        lives: progression.lives,
        ..Default::default()
    };

    for (_, (ship, pos, spatial)) in world.query::<(&PlayerShip, &Position, &Spatial)>().iter()
    {
        let shielded = ship.active_power_up == Some(PowerUpKind::Shield)
            || (ship.special_active && ship.class.special() == SpecialAbility::ShieldWall);
        snapshot.player = Some(PlayerView {
            position: pos.0,
            size: spatial.size,
            class: ship.class,
            invulnerable: ship.invulnerable,
            shielded,
            blast_radius: ship.blast_active.then_some(ship.blast_radius),
        });
        hud.power_up = ship.active_power_up.map(|kind| PowerUpBarView {
            kind,
            fraction: ship.power_up_timer as f32
                / starfall_core::constants::POWERUP_DURATION_TICKS as f32,
        });
        hud.special_charge = if ship.special_cooldown == 0 {
            1.0
        } else {
            1.0 - ship.special_cooldown as f32 / ship.special_cooldown_time.max(1) as f32
        };
        hud.special_active = ship.special_active;
    }

    for (_, (state, pos, vel, spatial)) in world
        .query::<(&EnemyState, &Position, &Velocity, &Spatial)>()
        .iter()
    {
        snapshot.enemies.push(EnemyView {
            kind: state.kind(),
            position: pos.0,
            size: spatial.size,
            heading: vel.heading(),
            boss: None,
        });
    }

    for (_, (boss, pos, vel, spatial)) in world
        .query::<(&BossState, &Position, &Velocity, &Spatial)>()
        .iter()
    {
        let fraction = boss.health.max(0) as f32 / boss.max_health.max(1) as f32;
        hud.boss_bar = Some(BossBarView {
            name: boss.kind.display_name().to_string(),
            fraction,
        });
        snapshot.enemies.push(EnemyView {
            kind: EnemyKind::Boss,
            position: pos.0,
            size: spatial.size,
            heading: vel.heading(),
            boss: Some(BossView {
                kind: boss.kind,
                health_fraction: fraction,
                entering: boss.entering,
                laser_charge: boss.laser_charging.then_some(boss.laser_charge),
                teleport_flash: boss.teleport_flash,
            }),
        });
    }

    for (_, (_, pos, spatial)) in world.query::<(&BulletTag, &Position, &Spatial)>().iter() {
        snapshot.bullets.push(BulletView {
            position: pos.0,
            size: spatial.size,
        });
    }

    for (_, (power_up, pos, spatial)) in
        world.query::<(&PowerUpState, &Position, &Spatial)>().iter()
    {
        snapshot.power_ups.push(PowerUpView {
            kind: power_up.kind,
            position: pos.0,
            size: spatial.size,
            spin: power_up.spin,
        });
    }

    snapshot.hud = hud;
    snapshot
}
