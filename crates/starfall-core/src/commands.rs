//! Player commands sent from the frontend to the simulation.
//!
//! Commands are validated and queued for processing at the next tick
//! boundary.

use serde::{Deserialize, Serialize};

use crate::enums::ShipClass;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Begin a new game from the start screen.
    StartGame,
    /// Restart after game over (accepted once the reveal delay passes).
    Restart,
    /// Choose a ship class before starting (ignored if still locked).
    SelectShip { class: ShipClass },

    // --- Gameplay input ---
    /// Digital movement axes, each -1.0, 0.0, or 1.0.
    SetMoveAxes { x: f32, y: f32 },
    /// Single fire press. Also skips the boss intro when one is running.
    Fire,
    /// Fire button held state for autofire.
    SetFiring { on: bool },
    /// Trigger the ship's special ability if its cooldown is ready.
    ActivateSpecial,

    // --- Layout ---
    /// Viewport resized; the engine re-derives scaled constants.
    SetViewport { width: f32, height: f32 },

    // --- Leaderboard handoff ---
    /// Player declined to submit a score.
    SkipSubmission,
    /// Frontend finished (or failed) the remote submission.
    ScoreSubmitted { accepted: bool },
    /// Open the leaderboard view.
    ShowLeaderboard,
    /// Frontend finished loading the leaderboard (ok = false degrades
    /// to the offline record).
    LeaderboardLoaded { ok: bool },
    /// Close the leaderboard view.
    CloseLeaderboard,
}
