//! Shared handle the host keeps after launching the loop.

use std::sync::mpsc;

use starfall_sim::core::commands::PlayerCommand;
use starfall_sim::core::state::GameStateSnapshot;

use crate::game_loop::{GameLoopCommand, SharedSnapshot};

/// Command sender plus the snapshot slot for polling.
pub struct AppState {
    commands: mpsc::Sender<GameLoopCommand>,
    latest_snapshot: SharedSnapshot,
}

impl AppState {
    pub fn new(commands: mpsc::Sender<GameLoopCommand>, latest_snapshot: SharedSnapshot) -> Self {
        Self {
            commands,
            latest_snapshot,
        }
    }

    /// Forward a player command; a closed loop is not an error here.
    pub fn send(&self, command: PlayerCommand) {
        if self.commands.send(GameLoopCommand::Player(command)).is_err() {
            log::warn!("game loop is gone, dropping command");
        }
    }

    pub fn shutdown(&self) {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
    }

    /// Latest published snapshot, if any tick has completed yet.
    pub fn snapshot(&self) -> Option<GameStateSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
    }
}
