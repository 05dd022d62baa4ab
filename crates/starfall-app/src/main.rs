//! Headless demo: runs a scripted session for a few seconds and logs a
//! summary. Useful for profiling the sim without any frontend.

use std::thread;
use std::time::Duration;

use starfall_app::{spawn_game_loop, AppState, SharedSnapshot, SnapshotSink};
use starfall_sim::core::commands::PlayerCommand;
use starfall_sim::core::config::SimConfig;
use starfall_sim::core::state::GameStateSnapshot;

/// Logs a heartbeat once a second instead of rendering.
struct LogSink {
    ticks: u64,
}

impl SnapshotSink for LogSink {
    fn publish(&mut self, snapshot: &GameStateSnapshot) {
        self.ticks += 1;
        if self.ticks % 60 == 0 {
            log::info!(
                "tick {}: phase {:?}, score {}, {} enemies",
                snapshot.time.tick,
                snapshot.phase,
                snapshot.hud.score,
                snapshot.enemies.len()
            );
        }
    }
}

fn main() {
    if let Err(err) = simple_logging::log_to_file("starfall.log", log::LevelFilter::Info) {
        eprintln!("failed to init logging: {err}");
    }

    let latest = SharedSnapshot::default();
    let sender = spawn_game_loop(
        SimConfig::default(),
        "data",
        LogSink { ticks: 0 },
        latest.clone(),
    );
    let app = AppState::new(sender, latest);

    app.send(PlayerCommand::StartGame);
    app.send(PlayerCommand::SetFiring { on: true });
    app.send(PlayerCommand::SetMoveAxes { x: 1.0, y: 0.0 });
    thread::sleep(Duration::from_secs(3));
    app.send(PlayerCommand::SetMoveAxes { x: -1.0, y: 0.0 });
    thread::sleep(Duration::from_secs(3));

    if let Some(snapshot) = app.snapshot() {
        log::info!(
            "demo finished: phase {:?}, score {}, level {}, high score {}",
            snapshot.phase,
            snapshot.hud.score,
            snapshot.hud.level,
            snapshot.hud.high_score
        );
    }
    app.shutdown();
    // Give the loop a moment to save records before exiting.
    thread::sleep(Duration::from_millis(100));
}
