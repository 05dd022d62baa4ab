//! Offline score ledger.
//!
//! The fallback record book used when a remote leaderboard submission
//! is skipped or fails. Keeps the top entries sorted by score, highest
//! first, and writes through on every record.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::PersistError;

/// Entries kept on disk.
const MAX_ENTRIES: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub name: String,
    pub score: u64,
    pub level: u32,
    pub at_unix: u64,
}

impl ScoreEntry {
    pub fn now(name: impl Into<String>, score: u64, level: u32) -> Self {
        Self {
            name: name.into(),
            score,
            level,
            at_unix: current_unix_timestamp(),
        }
    }
}

/// File-backed top-ten score table.
#[derive(Debug)]
pub struct OfflineScoreLedger {
    path: PathBuf,
    entries: Vec<ScoreEntry>,
}

impl OfflineScoreLedger {
    /// Open the ledger, loading whatever is on disk. Missing or
    /// malformed data yields an empty ledger; the failure is logged.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match try_load(&path) {
            Ok(entries) => entries,
            Err(err) => {
                log::warn!("failed to load score ledger from {}: {err}", path.display());
                Vec::new()
            }
        };
        Self { path, entries }
    }

    /// Record a score and write through. The table stays sorted by
    /// score, highest first, trimmed to the retention cap.
    pub fn record(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
        if let Err(err) = self.try_save() {
            log::warn!("failed to save score ledger to {}: {err}", self.path.display());
        }
    }

    /// The best recorded score, if any.
    pub fn best(&self) -> Option<&ScoreEntry> {
        self.entries.first()
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    fn try_save(&self) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

fn try_load(path: &Path) -> Result<Vec<ScoreEntry>, PersistError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(path)?;
    let mut entries: Vec<ScoreEntry> = serde_json::from_str(&contents)?;
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
    Ok(entries)
}

fn current_unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
