#[cfg(test)]
mod tests {
    use glam::Vec2;

    use starfall_core::components::{BossState, EnemyState};
    use starfall_core::constants::*;
    use starfall_core::enums::BossKind;

    use crate::boss::{self, AttackShot, BossCtx};
    use crate::steering::{hunter_radius, steer, SteerContext};

    fn make_ctx(position: Vec2, velocity: Vec2) -> SteerContext {
        SteerContext {
            position,
            velocity,
            size: 30.0,
            player_position: Vec2::new(200.0, 550.0),
            viewport_width: 400.0,
            scale: 1.0,
            tick: 0,
        }
    }

    fn make_boss(kind: BossKind) -> BossState {
        BossState {
            kind,
            level: 10,
            health: 60,
            max_health: 60,
            phase: 0,
            phase_timer: 0,
            phase_duration: BOSS_PHASE_DURATION_TICKS,
            attack_cooldown: 0,
            attack_rate: BOSS_ATTACK_RATE_TICKS,
            max_speed: BOSS_MAX_SPEED,
            entering: false,
            entry_progress: 1.0,
            laser_charging: false,
            laser_charge: 0.0,
            laser_width: 22.5,
            laser_cooldown: 0,
            orbit_angle: 0.0,
            orbit_speed: 0.02,
            orbit_distance: 52.5,
            orbit_points: 4,
            teleport_cooldown: 0,
            teleport_rate: 180,
            teleport_flash: 0,
        }
    }

    fn make_boss_ctx(position: Vec2) -> BossCtx {
        BossCtx {
            position,
            velocity: Vec2::ZERO,
            size: 75.0,
            player_position: Vec2::new(200.0, 550.0),
            viewport_width: 400.0,
            viewport_height: 600.0,
            scale: 1.0,
            tick: 0,
            roll: 0.5,
            teleport_target: Vec2::new(100.0, 100.0),
            minion_offsets: [Vec2::new(-40.0, 0.0), Vec2::new(40.0, 0.0)],
        }
    }

    #[test]
    fn test_zigzag_flips_on_period() {
        let mut state = EnemyState::Zigzag {
            base_speed: 2.0,
            timer: 0,
            period: 3,
            direction: 1.0,
        };
        let ctx = make_ctx(Vec2::new(200.0, 100.0), Vec2::ZERO);

        let out = steer(&mut state, &ctx, &[]);
        assert_eq!(out.velocity.x, 2.0);
        steer(&mut state, &ctx, &[]);
        // Third evaluation reaches the period and flips.
        let out = steer(&mut state, &ctx, &[]);
        assert_eq!(out.velocity.x, -2.0);
        // Vertical drift is 80% of base speed throughout.
        assert_eq!(out.velocity.y, 1.6);
    }

    #[test]
    fn test_zigzag_reflects_off_left_edge() {
        let mut state = EnemyState::Zigzag {
            base_speed: 2.0,
            timer: 0,
            period: 100,
            direction: -1.0,
        };
        let ctx = make_ctx(Vec2::new(5.0, 100.0), Vec2::ZERO);
        let out = steer(&mut state, &ctx, &[]);
        assert!(out.velocity.x > 0.0, "should be forced away from the edge");
        assert_eq!(out.clamp_x, Some(15.0));
    }

    #[test]
    fn test_hunter_steers_toward_player_and_clamps() {
        let mut state = EnemyState::Hunter {
            max_speed: 2.0,
            accel: 0.1,
            pulse: 0.0,
        };
        let mut velocity = Vec2::ZERO;
        for _ in 0..100 {
            let ctx = make_ctx(Vec2::new(200.0, 100.0), velocity);
            velocity = steer(&mut state, &ctx, &[]).velocity;
        }
        // Player is below: velocity converges downward, capped at max speed.
        assert!(velocity.y > 0.0);
        assert!(velocity.length() <= 2.0 + 1e-4);
    }

    #[test]
    fn test_hunter_pulse_modulates_radius() {
        let mut state = EnemyState::Hunter {
            max_speed: 2.0,
            accel: 0.1,
            pulse: 0.0,
        };
        let ctx = make_ctx(Vec2::new(200.0, 100.0), Vec2::ZERO);
        steer(&mut state, &ctx, &[]);
        if let EnemyState::Hunter { pulse, .. } = state {
            assert!(pulse > 0.0);
            let r = hunter_radius(33.0, pulse);
            assert!(r > 0.0);
            assert!((r - 16.5).abs() < 16.5 * 0.11);
        } else {
            unreachable!();
        }
    }

    #[test]
    fn test_dodger_dodges_away_from_bullet() {
        // Bullet at lateral offset +50, within dodge distance and
        // approaching: dodge direction must resolve to -1.
        let mut state = EnemyState::Dodger {
            base_speed: 1.2,
            max_speed: 2.5,
            dodge_distance: 100.0,
            dodge_dir: 0.0,
            dodging: false,
            dodge_cooldown: 0,
            drift: 0.0,
        };
        let ctx = make_ctx(Vec2::new(200.0, 100.0), Vec2::ZERO);
        let bullets = [Vec2::new(250.0, 120.0)];
        let out = steer(&mut state, &ctx, &bullets);
        match state {
            EnemyState::Dodger {
                dodging, dodge_dir, ..
            } => {
                assert!(dodging);
                assert_eq!(dodge_dir, -1.0);
            }
            _ => unreachable!(),
        }
        assert_eq!(out.velocity.x, -2.5);
    }

    #[test]
    fn test_dodger_ignores_distant_bullet() {
        let mut state = EnemyState::Dodger {
            base_speed: 1.2,
            max_speed: 2.5,
            dodge_distance: 100.0,
            dodge_dir: 0.0,
            dodging: false,
            dodge_cooldown: 0,
            drift: 0.0,
        };
        let ctx = make_ctx(Vec2::new(200.0, 100.0), Vec2::ZERO);
        let bullets = [Vec2::new(200.0, 500.0)];
        steer(&mut state, &ctx, &bullets);
        assert!(matches!(state, EnemyState::Dodger { dodging: false, .. }));
    }

    #[test]
    fn test_dodger_burst_lasts_twenty_ticks() {
        let mut state = EnemyState::Dodger {
            base_speed: 1.2,
            max_speed: 2.5,
            dodge_distance: 100.0,
            dodge_dir: 0.0,
            dodging: false,
            dodge_cooldown: 0,
            drift: 0.0,
        };
        let ctx = make_ctx(Vec2::new(200.0, 100.0), Vec2::ZERO);
        steer(&mut state, &ctx, &[Vec2::new(250.0, 120.0)]);
        // No further bullets: the committed burst runs out on its own.
        for _ in 0..19 {
            assert!(matches!(state, EnemyState::Dodger { dodging: true, .. }));
            steer(&mut state, &ctx, &[]);
        }
        assert!(matches!(state, EnemyState::Dodger { dodging: false, .. }));
    }

    #[test]
    fn test_dodger_clamps_and_reverses_at_edge() {
        // A leftward burst committed near the left edge must not carry the
        // dodger off-field: the edge clamps x and flips the dodge direction.
        let mut state = EnemyState::Dodger {
            base_speed: 1.2,
            max_speed: 2.5,
            dodge_distance: 100.0,
            dodge_dir: -1.0,
            dodging: true,
            dodge_cooldown: 20,
            drift: 0.0,
        };
        let mut position = Vec2::new(20.0, 100.0);
        for _ in 0..20 {
            let ctx = make_ctx(position, Vec2::ZERO);
            let out = steer(&mut state, &ctx, &[]);
            if let Some(x) = out.clamp_x {
                position.x = x;
            }
            position += out.velocity;
        }
        assert!(position.x >= 15.0 - 2.5, "dodger left the screen: {}", position.x);
        match state {
            EnemyState::Dodger { dodge_dir, .. } => assert_eq!(dodge_dir, 1.0),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_formation_spring_is_proportional() {
        let mut state = EnemyState::Formation {
            index: 0,
            group_size: 5,
            group: 1,
            offset: -80.0,
            phase: 0.0,
            base_speed: 1.5,
            wave_amplitude: 80.0,
            can_shoot: true,
            shoot_cooldown: 0,
            shoot_rate: 120,
        };
        // At tick 0 the shared sinusoid is zero: target_x = 200 - 80 = 120.
        let ctx = make_ctx(Vec2::new(220.0, 100.0), Vec2::ZERO);
        let out = steer(&mut state, &ctx, &[]);
        assert!((out.velocity.x - (120.0 - 220.0) * 0.1).abs() < 1e-4);
        assert_eq!(out.velocity.y, 1.5);
    }

    #[test]
    fn test_formation_shoots_when_aligned() {
        let mut state = EnemyState::Formation {
            index: 0,
            group_size: 5,
            group: 1,
            offset: 0.0,
            phase: 0.0,
            base_speed: 1.5,
            wave_amplitude: 80.0,
            can_shoot: true,
            shoot_cooldown: 0,
            shoot_rate: 120,
        };
        // Player at x=200, member at x=210: within the 100px window.
        let ctx = make_ctx(Vec2::new(210.0, 100.0), Vec2::ZERO);
        let out = steer(&mut state, &ctx, &[]);
        assert!(out.shoot);
        // Cooldown armed; the next tick must not fire.
        let out = steer(&mut state, &ctx, &[]);
        assert!(!out.shoot);
    }

    #[test]
    fn test_kamikaze_charge_is_sticky() {
        let mut state = EnemyState::Kamikaze {
            max_speed: 2.0,
            charge_speed: 8.0,
            accel: 0.2,
            charge_distance: 150.0,
            charging: false,
        };
        // Close enough: the charge commits.
        let near = make_ctx(Vec2::new(200.0, 450.0), Vec2::new(0.0, 1.6));
        steer(&mut state, &near, &[]);
        assert!(matches!(state, EnemyState::Kamikaze { charging: true, .. }));

        // Moving far away afterwards does not revert the charge.
        let far = make_ctx(Vec2::new(200.0, 0.0), Vec2::new(0.0, 1.6));
        let out = steer(&mut state, &far, &[]);
        assert!(matches!(state, EnemyState::Kamikaze { charging: true, .. }));
        assert!(out.velocity.length() <= 8.0 + 1e-4);
    }

    #[test]
    fn test_kamikaze_cruise_tracks_player_laterally() {
        let mut state = EnemyState::Kamikaze {
            max_speed: 2.0,
            charge_speed: 8.0,
            accel: 0.2,
            charge_distance: 150.0,
            charging: false,
        };
        // Out of charge range, player at x=200: drift toward it from
        // either side at 30% of max speed.
        let left = make_ctx(Vec2::new(100.0, 50.0), Vec2::ZERO);
        let out = steer(&mut state, &left, &[]);
        assert_eq!(out.velocity, Vec2::new(0.6, 1.6));

        let right = make_ctx(Vec2::new(300.0, 50.0), Vec2::ZERO);
        let out = steer(&mut state, &right, &[]);
        assert_eq!(out.velocity, Vec2::new(-0.6, 1.6));
    }

    #[test]
    fn test_boss_phase_cycles() {
        let mut state = make_boss(BossKind::Destroyer);
        state.phase_duration = 10;
        let ctx = make_boss_ctx(Vec2::new(200.0, 120.0));
        let mut seen = Vec::new();
        for _ in 0..30 {
            boss::advance(&mut state, &ctx);
            seen.push(state.phase);
        }
        assert!(seen.contains(&0));
        assert!(seen.contains(&1));
        assert!(seen.contains(&2));
        // Cycles back to phase 0.
        assert_eq!(state.phase, 0);
    }

    #[test]
    fn test_boss_entry_descends_then_clears() {
        let mut state = make_boss(BossKind::Destroyer);
        state.entering = true;
        state.entry_progress = 0.0;
        let ctx = make_boss_ctx(Vec2::new(200.0, -75.0));

        let out = boss::advance(&mut state, &ctx);
        let first_y = out.position_override.unwrap().y;
        assert!(first_y < 0.0, "starts above the screen");

        for _ in 0..200 {
            boss::advance(&mut state, &ctx);
        }
        assert!(!state.entering);
        assert_eq!(state.entry_progress, 1.0);
    }

    #[test]
    fn test_boss_no_attacks_while_entering() {
        let mut state = make_boss(BossKind::Destroyer);
        state.entering = true;
        state.entry_progress = 0.0;
        let ctx = make_boss_ctx(Vec2::new(200.0, -75.0));
        assert!(boss::attack(&mut state, &ctx).is_empty());
    }

    #[test]
    fn test_destroyer_spread_is_seven_shots() {
        let mut state = make_boss(BossKind::Destroyer);
        state.phase = 0;
        state.attack_cooldown = 0;
        let ctx = make_boss_ctx(Vec2::new(200.0, 120.0));
        let shots = boss::attack(&mut state, &ctx);
        assert_eq!(shots.len(), 7);
        for shot in &shots {
            match shot {
                AttackShot::Bullet { velocity, .. } => {
                    assert!(velocity.y > 0.0, "spread fires downward")
                }
                AttackShot::Minion { .. } => panic!("spread emits no minions"),
            }
        }
        // Cooldown re-armed.
        assert_eq!(state.attack_cooldown, state.attack_rate);
    }

    #[test]
    fn test_destroyer_summons_minions_in_phase_two() {
        let mut state = make_boss(BossKind::Destroyer);
        state.phase = 2;
        state.attack_cooldown = 0;
        let ctx = make_boss_ctx(Vec2::new(200.0, 120.0));
        let shots = boss::attack(&mut state, &ctx);
        let minions = shots
            .iter()
            .filter(|s| matches!(s, AttackShot::Minion { .. }))
            .count();
        assert_eq!(minions, 2);
        assert_eq!(shots.len(), 3, "two minions plus an aimed shot");
    }

    #[test]
    fn test_destroyer_laser_charges_and_fires() {
        let mut state = make_boss(BossKind::Destroyer);
        state.phase = 1;
        state.phase_timer = 0;
        let mut ctx = make_boss_ctx(Vec2::new(200.0, 120.0));
        ctx.roll = 0.005; // below the start probability

        let mut fired = false;
        for _ in 0..120 {
            let out = boss::advance(&mut state, &ctx);
            if out.fire_laser {
                fired = true;
                break;
            }
        }
        assert!(fired, "charge at 0.02/tick completes within ~50 ticks");
        assert!(!state.laser_charging);
        assert_eq!(state.laser_cooldown, state.attack_rate * 2);
    }

    #[test]
    fn test_mothership_teleports_and_bursts() {
        let mut state = make_boss(BossKind::Mothership);
        state.phase = 1;
        state.teleport_cooldown = 0;
        let mut ctx = make_boss_ctx(Vec2::new(200.0, 120.0));
        ctx.roll = 0.01; // below the teleport probability

        let out = boss::advance(&mut state, &ctx);
        assert_eq!(out.position_override, Some(ctx.teleport_target));
        assert_eq!(state.teleport_flash, 20);

        // The burst fires a 12-shot ring while the flash is live.
        state.attack_cooldown = 0;
        let shots = boss::attack(&mut state, &ctx);
        assert_eq!(shots.len(), 12);
    }

    #[test]
    fn test_mothership_orbit_fire_matches_point_count() {
        let mut state = make_boss(BossKind::Mothership);
        state.phase = 0;
        state.attack_cooldown = 0;
        let ctx = make_boss_ctx(Vec2::new(200.0, 120.0));
        let shots = boss::attack(&mut state, &ctx);
        assert_eq!(shots.len(), state.orbit_points as usize);
    }
}
