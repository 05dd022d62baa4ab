//! Host shell for STARFALL: the fixed-rate game loop thread, the
//! command channel into it, and the shared snapshot slot a rendering
//! surface reads from.

pub mod game_loop;
pub mod state;

pub use game_loop::{spawn_game_loop, GameLoopCommand, SharedSnapshot, SnapshotSink};
pub use state::AppState;

pub use starfall_sim as sim;

#[cfg(test)]
mod tests;
