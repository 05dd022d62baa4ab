//! Tests for the loop thread and the app handle.

use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use starfall_sim::core::commands::PlayerCommand;
use starfall_sim::core::config::SimConfig;
use starfall_sim::core::enums::GamePhase;
use starfall_sim::core::state::GameStateSnapshot;

use crate::game_loop::{spawn_game_loop, GameLoopCommand, SharedSnapshot, SnapshotSink};
use crate::state::AppState;

struct ChannelSink(mpsc::Sender<GameStateSnapshot>);

impl SnapshotSink for ChannelSink {
    fn publish(&mut self, snapshot: &GameStateSnapshot) {
        let _ = self.0.send(snapshot.clone());
    }
}

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("starfall-app-{tag}-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn test_loop_ticks_and_publishes() {
    let dir = scratch_dir("ticks");
    let (snap_tx, snap_rx) = mpsc::channel();
    let latest = SharedSnapshot::default();
    let sender = spawn_game_loop(
        SimConfig::default(),
        &dir,
        ChannelSink(snap_tx),
        latest.clone(),
    );
    let app = AppState::new(sender, latest);

    app.send(PlayerCommand::StartGame);
    // First published snapshot within a generous deadline.
    let first = snap_rx
        .recv_timeout(Duration::from_secs(2))
        .expect("loop should publish");
    assert!(first.time.tick >= 1);

    thread::sleep(Duration::from_millis(300));
    let latest = app.snapshot().expect("slot should be filled");
    assert_eq!(latest.phase, GamePhase::Playing);
    assert!(latest.time.tick > first.time.tick, "ticks should advance");

    app.shutdown();
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_shutdown_stops_the_loop_and_saves() {
    let dir = scratch_dir("shutdown");
    let (snap_tx, snap_rx) = mpsc::channel();
    let latest = SharedSnapshot::default();
    let sender = spawn_game_loop(
        SimConfig::default(),
        &dir,
        ChannelSink(snap_tx),
        latest.clone(),
    );

    snap_rx
        .recv_timeout(Duration::from_secs(2))
        .expect("loop should start");
    sender
        .send(GameLoopCommand::Shutdown)
        .expect("loop should still be listening");

    // Once the shutdown drains, publishing stops entirely.
    thread::sleep(Duration::from_millis(200));
    while snap_rx.try_recv().is_ok() {}
    thread::sleep(Duration::from_millis(200));
    assert!(snap_rx.try_recv().is_err(), "no snapshots after shutdown");

    // Shutdown persists the achievement book.
    assert!(dir.join("achievements.json").exists());
    let _ = fs::remove_dir_all(&dir);
}
