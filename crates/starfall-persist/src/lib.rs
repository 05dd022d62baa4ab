//! Best-effort local persistence for STARFALL.
//!
//! Two file-backed JSON stores: the achievement book and the offline
//! score ledger. Both degrade gracefully: missing or malformed data
//! yields defaults, failures are logged and never fatal.

pub mod error;
pub mod scores;
pub mod store;

pub use error::PersistError;
pub use scores::{OfflineScoreLedger, ScoreEntry};
pub use store::AchievementStore;

pub use starfall_core as core;

#[cfg(test)]
mod tests;
