//! Player ship system: input-driven movement, fire cooldowns, power-up
//! and special-ability timers, and bullet spawning.

use glam::Vec2;
use hecs::World;

use starfall_core::components::{PlayerShip, Spatial};
use starfall_core::constants::*;
use starfall_core::enums::{PowerUpKind, ShipClass, SpecialAbility};
use starfall_core::types::{limit, Position, Velocity, Viewport};

/// Per-tick summary of the player's state for downstream systems.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerFrame {
    pub position: Vec2,
    /// Scout special: enemies integrate at half speed while set.
    pub time_slow: bool,
    /// Assault special: expanding ring (center is the player position).
    pub blast_radius: Option<f32>,
    pub special_used: bool,
}

pub fn run(
    world: &mut World,
    viewport: Viewport,
    special_requested: bool,
) -> PlayerFrame {
    let mut frame = PlayerFrame::default();
    let mut bullet_spawns: Vec<(Vec2, Vec2, f32)> = Vec::new();

    for (_entity, (ship, pos, vel, spatial)) in
        world.query_mut::<(&mut PlayerShip, &Position, &mut Velocity, &Spatial)>()
    {
        // Acceleration from held axes, friction, speed cap.
        vel.0 += ship.move_axes * ship.accel;
        vel.0 *= ship.friction;
        vel.0 = limit(vel.0, ship.max_speed);

        // Timers.
        ship.cooldown = ship.cooldown.saturating_sub(1);
        if ship.invuln_timer > 0 {
            ship.invuln_timer -= 1;
            if ship.invuln_timer == 0 {
                ship.invulnerable = false;
            }
        }
        if ship.active_power_up.is_some() {
            ship.power_up_timer = ship.power_up_timer.saturating_sub(1);
            if ship.power_up_timer == 0 {
                ship.active_power_up = None;
                // Restore the class baseline, not a flat default.
                ship.cooldown_time = ship.base_cooldown_time;
            }
        }

        // Special ability lifecycle.
        ship.special_cooldown = ship.special_cooldown.saturating_sub(1);
        if special_requested && !ship.special_active && ship.special_cooldown == 0 {
            ship.special_active = true;
            ship.special_timer = ship.special_duration;
            ship.special_cooldown = ship.special_cooldown_time;
            frame.special_used = true;
            if ship.class == ShipClass::Assault {
                ship.blast_active = true;
                ship.blast_radius = 0.0;
            }
        }
        if ship.special_active {
            ship.special_timer = ship.special_timer.saturating_sub(1);
            if ship.special_timer == 0 {
                ship.special_active = false;
            }
        }
        if ship.blast_active {
            ship.blast_radius += 8.0 * viewport.scale();
            if ship.blast_radius >= ship.blast_max_radius {
                ship.blast_active = false;
                ship.blast_radius = 0.0;
            }
        }

        // Firing.
        let wants_fire = ship.fire_held || ship.fire_requested;
        ship.fire_requested = false;
        if wants_fire && ship.cooldown == 0 {
            ship.cooldown = ship.cooldown_time;
            queue_shots(ship, pos.0, spatial.size, viewport, &mut bullet_spawns);
        }

        frame.position = pos.0;
        frame.time_slow =
            ship.special_active && ship.class.special() == SpecialAbility::TimeSlow;
        frame.blast_radius = ship.blast_active.then_some(ship.blast_radius);
    }

    for (position, velocity, size) in bullet_spawns {
        crate::world_setup::spawn_bullet(world, position, velocity, size);
    }

    frame
}

/// Compute this shot's bullet pattern from class and active modifiers.
fn queue_shots(
    ship: &PlayerShip,
    position: Vec2,
    ship_size: f32,
    viewport: Viewport,
    spawns: &mut Vec<(Vec2, Vec2, f32)>,
) {
    let s = viewport.scale();
    let muzzle = position - Vec2::new(0.0, ship_size / 2.0 + 10.0 * s);
    let speed = BULLET_SPEED * s;
    let mut size = BULLET_SIZE * s;
    if ship.class == ShipClass::Tank {
        size *= 1.5;
    }

    let triple = ship.active_power_up == Some(PowerUpKind::MultiShot)
        || (ship.special_active && ship.class.special() == SpecialAbility::TripleShot);

    if triple {
        for spread in [-2.0, 0.0, 2.0] {
            spawns.push((muzzle, Vec2::new(spread * s, -speed), size));
        }
    } else if ship.class == ShipClass::Assault {
        // Parallel pair.
        for offset in [-8.0, 8.0] {
            spawns.push((
                muzzle + Vec2::new(offset * s, 0.0),
                Vec2::new(0.0, -speed),
                size,
            ));
        }
    } else {
        spawns.push((muzzle, Vec2::new(0.0, -speed), size));
    }
}
