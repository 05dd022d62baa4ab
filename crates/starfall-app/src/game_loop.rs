//! The game loop thread.
//!
//! Runs the session at the fixed tick rate on a dedicated thread,
//! draining the command channel at each tick boundary. Snapshots go to
//! a `SnapshotSink` (the rendering-surface seam) and into a shared slot
//! the host can poll. If a tick overruns its slot the next one starts
//! immediately; missed ticks are never replayed, so a slow frame cannot
//! spiral.

use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use starfall_persist::{AchievementStore, OfflineScoreLedger, ScoreEntry};
use starfall_sim::core::commands::PlayerCommand;
use starfall_sim::core::config::SimConfig;
use starfall_sim::core::constants::TICK_RATE;
use starfall_sim::core::state::GameStateSnapshot;
use starfall_sim::GameSession;

/// Where each tick's snapshot is delivered. Implemented by whatever
/// surface presents the game (window, web bridge, test recorder).
pub trait SnapshotSink: Send + 'static {
    fn publish(&mut self, snapshot: &GameStateSnapshot);
}

/// Commands accepted by the loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    Player(PlayerCommand),
    /// Save records and exit the loop.
    Shutdown,
}

/// Latest snapshot slot shared with the host.
pub type SharedSnapshot = Arc<Mutex<Option<GameStateSnapshot>>>;

/// Start the game loop on a background thread. Returns the command
/// sender; dropping it without `Shutdown` leaves the loop running.
pub fn spawn_game_loop<S: SnapshotSink>(
    config: SimConfig,
    data_dir: impl Into<PathBuf>,
    sink: S,
    latest_snapshot: SharedSnapshot,
) -> mpsc::Sender<GameLoopCommand> {
    let (tx, rx) = mpsc::channel();
    let data_dir = data_dir.into();
    thread::spawn(move || run_loop(config, data_dir, rx, sink, latest_snapshot));
    tx
}

fn run_loop<S: SnapshotSink>(
    config: SimConfig,
    data_dir: PathBuf,
    rx: mpsc::Receiver<GameLoopCommand>,
    mut sink: S,
    latest_snapshot: SharedSnapshot,
) {
    let store = AchievementStore::new(data_dir.join("achievements.json"));
    let mut ledger = OfflineScoreLedger::open(data_dir.join("scores.json"));

    let mut session = GameSession::new(config);
    let high_score = ledger.best().map(|entry| entry.score).unwrap_or(0);
    let max_level = ledger
        .entries()
        .iter()
        .map(|entry| entry.level)
        .max()
        .unwrap_or(0);
    session.restore_records(store.load(), high_score, max_level);

    let tick_duration = Duration::from_secs_f64(1.0 / TICK_RATE as f64);

    loop {
        let start = Instant::now();

        while let Ok(command) = rx.try_recv() {
            match command {
                GameLoopCommand::Player(cmd) => {
                    // Declined or failed remote submissions land in the
                    // offline ledger before the engine sees the command.
                    if matches!(
                        cmd,
                        PlayerCommand::SkipSubmission
                            | PlayerCommand::ScoreSubmitted { accepted: false }
                    ) {
                        record_offline_score(&mut ledger, &latest_snapshot);
                    }
                    session.queue_command(cmd);
                }
                GameLoopCommand::Shutdown => {
                    store.save(session.achievement_book());
                    log::info!("game loop shut down");
                    return;
                }
            }
        }

        let snapshot = session.tick();
        if session.take_book_dirty() {
            store.save(session.achievement_book());
        }
        sink.publish(&snapshot);
        if let Ok(mut slot) = latest_snapshot.lock() {
            *slot = Some(snapshot);
        }

        let elapsed = start.elapsed();
        if elapsed < tick_duration {
            thread::sleep(tick_duration - elapsed);
        }
    }
}

fn record_offline_score(ledger: &mut OfflineScoreLedger, latest: &SharedSnapshot) {
    let Ok(slot) = latest.lock() else { return };
    if let Some(snapshot) = slot.as_ref() {
        if snapshot.hud.score > 0 {
            ledger.record(ScoreEntry::now(
                "PLAYER",
                snapshot.hud.score,
                snapshot.hud.level,
            ));
        }
    }
}
