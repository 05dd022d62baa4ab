//! The achievement book store.
//!
//! A single versioned JSON file. Loading merges into a default book, so
//! a file written by an older build that knows fewer achievements still
//! loads cleanly, and a newer file never relocks anything.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use starfall_core::components::AchievementBook;

use crate::error::PersistError;

const STORE_VERSION: u32 = 1;

fn current_version() -> u32 {
    STORE_VERSION
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredBook {
    #[serde(default = "current_version")]
    version: u32,
    book: AchievementBook,
}

/// File-backed achievement persistence.
#[derive(Debug, Clone)]
pub struct AchievementStore {
    path: PathBuf,
}

impl AchievementStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted book. Missing or malformed data yields the
    /// default (everything locked); the failure is logged, never fatal.
    pub fn load(&self) -> AchievementBook {
        match self.try_load() {
            Ok(Some(book)) => book,
            Ok(None) => AchievementBook::default(),
            Err(err) => {
                log::warn!(
                    "failed to load achievements from {}: {err}",
                    self.path.display()
                );
                AchievementBook::default()
            }
        }
    }

    /// Persist the book, last write wins. Failures are logged.
    pub fn save(&self, book: &AchievementBook) {
        if let Err(err) = self.try_save(book) {
            log::warn!(
                "failed to save achievements to {}: {err}",
                self.path.display()
            );
        }
    }

    fn try_load(&self) -> Result<Option<AchievementBook>, PersistError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path)?;
        let stored: StoredBook = serde_json::from_str(&contents)?;
        if stored.version > STORE_VERSION {
            log::warn!(
                "achievement file version {} is newer than supported {}, merging anyway",
                stored.version,
                STORE_VERSION
            );
        }
        // Merge into a fresh book so unknown entries drop out and known
        // unlocks survive.
        let mut book = AchievementBook::default();
        book.merge(&stored.book);
        Ok(Some(book))
    }

    fn try_save(&self, book: &AchievementBook) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let stored = StoredBook {
            version: STORE_VERSION,
            book: book.clone(),
        };
        let contents = serde_json::to_string_pretty(&stored)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
