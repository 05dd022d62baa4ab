//! Kinematic integration system.
//!
//! Velocities are expressed in pixels per tick, so integration is a
//! plain add. The player is clamped to the viewport, bosses to their
//! phase's vertical band.

use hecs::{Entity, World};

use starfall_core::components::{HostileTag, PlayerShip, Spatial};
use starfall_core::types::{Position, Velocity, Viewport};

pub fn run(
    world: &mut World,
    viewport: Viewport,
    time_slow: bool,
    boss_clamps: &[(Entity, f32)],
) {
    for (_entity, (pos, vel, hostile)) in
        world.query_mut::<(&mut Position, &Velocity, Option<&HostileTag>)>()
    {
        // The Scout's time-slow halves hostile motion while active.
        let factor = if time_slow && hostile.is_some() {
            0.5
        } else {
            1.0
        };
        pos.0 += vel.0 * factor;
    }

    // Keep the player on screen.
    for (_entity, (pos, _ship, spatial)) in
        world.query_mut::<(&mut Position, &PlayerShip, &Spatial)>()
    {
        let half = spatial.size / 2.0;
        pos.0.x = pos.0.x.clamp(half, viewport.width - half);
        pos.0.y = pos.0.y.clamp(half, viewport.height - half);
    }

    for &(entity, max_y) in boss_clamps {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.0.y = pos.0.y.min(max_y);
        }
    }
}
