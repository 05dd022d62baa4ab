#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::components::{AchievementBook, EnemyState};
    use crate::enums::*;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::types::{limit, map_range, SimTime, Viewport};

    /// Verify all phase enum values round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Start,
            GamePhase::Playing,
            GamePhase::BossIntro,
            GamePhase::GameOver,
            GamePhase::LeaderboardSubmit,
            GamePhase::LeaderboardView,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartGame,
            PlayerCommand::Restart,
            PlayerCommand::SetMoveAxes { x: -1.0, y: 0.0 },
            PlayerCommand::Fire,
            PlayerCommand::ActivateSpecial,
            PlayerCommand::SelectShip {
                class: ShipClass::Tank,
            },
            PlayerCommand::SetViewport {
                width: 800.0,
                height: 1200.0,
            },
            PlayerCommand::SkipSubmission,
            PlayerCommand::ScoreSubmitted { accepted: true },
            PlayerCommand::ShowLeaderboard,
            PlayerCommand::LeaderboardLoaded { ok: false },
            PlayerCommand::CloseLeaderboard,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::EnemyDestroyed {
                kind: EnemyKind::Hunter,
                points: 200,
            },
            GameEvent::BossDamaged {
                health: 9,
                max_health: 15,
            },
            GameEvent::LevelUp { level: 3 },
            GameEvent::ScreenShake { magnitude: 10.0 },
            GameEvent::SubmitPrompt {
                score: 4200,
                level: 5,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let _back: GameEvent = serde_json::from_str(&json).unwrap();
        }
    }

    /// EnemyState serializes with a kind tag and round-trips.
    #[test]
    fn test_enemy_state_serde() {
        let state = EnemyState::Zigzag {
            base_speed: 2.5,
            timer: 10,
            period: 45,
            direction: -1.0,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"kind\":\"Zigzag\""));
        let back: EnemyState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), EnemyKind::Zigzag);
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }

    /// Viewport scale is relative to the 400px reference width.
    #[test]
    fn test_viewport_scale() {
        assert_eq!(Viewport::new(400.0, 600.0).scale(), 1.0);
        assert_eq!(Viewport::new(800.0, 1200.0).scale(), 2.0);
    }

    #[test]
    fn test_map_range() {
        assert_eq!(map_range(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(map_range(30.0, 0.0, 30.0, 0.0, 255.0), 255.0);
        // Inverted output range (lifetime -> alpha)
        assert_eq!(map_range(0.0, 0.0, 30.0, 255.0, 0.0), 255.0);
    }

    #[test]
    fn test_limit_clamps_magnitude() {
        let v = limit(Vec2::new(3.0, 4.0), 2.5);
        assert!((v.length() - 2.5).abs() < 1e-5);
        // Direction preserved
        assert!(v.x > 0.0 && v.y > 0.0);
        // Under the cap, unchanged
        let w = limit(Vec2::new(1.0, 0.0), 2.5);
        assert_eq!(w, Vec2::new(1.0, 0.0));
    }

    /// Unlocking is idempotent and merge never relocks.
    #[test]
    fn test_achievement_book_merge_never_relocks() {
        let mut book = AchievementBook::default();
        assert!(book.unlock(AchievementId::FirstBlood));
        assert!(!book.unlock(AchievementId::FirstBlood));
        book.mark_displayed(AchievementId::FirstBlood);

        // Merging an all-locked book must not revert the unlock.
        let empty = AchievementBook::default();
        book.merge(&empty);
        assert!(book.is_unlocked(AchievementId::FirstBlood));
        assert_eq!(
            book.status(AchievementId::FirstBlood),
            AchievementStatus::Displayed
        );

        // Merging a book with extra unlocks unions them in.
        let mut other = AchievementBook::default();
        other.unlock(AchievementId::BossSlayer);
        book.merge(&other);
        assert!(book.is_unlocked(AchievementId::BossSlayer));
        assert_eq!(book.unlocked_count(), 2);
    }

    /// Ship classes unlock at levels 1/3/5/8.
    #[test]
    fn test_ship_unlock_levels() {
        assert_eq!(ShipClass::Scout.unlock_level(), 1);
        assert_eq!(ShipClass::Fighter.unlock_level(), 3);
        assert_eq!(ShipClass::Tank.unlock_level(), 5);
        assert_eq!(ShipClass::Assault.unlock_level(), 8);
    }
}
