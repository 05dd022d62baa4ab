//! Tests for the achievement store and the offline score ledger.

use std::fs;
use std::path::PathBuf;

use starfall_core::components::AchievementBook;
use starfall_core::enums::{AchievementId, AchievementStatus};

use crate::scores::{OfflineScoreLedger, ScoreEntry};
use crate::store::AchievementStore;

/// Unique scratch path per test; removed on drop.
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn new(tag: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "starfall-persist-{}-{}.json",
            tag,
            std::process::id()
        ));
        let _ = fs::remove_file(&path);
        Self(path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn test_missing_file_yields_default_book() {
    let scratch = ScratchFile::new("missing");
    let store = AchievementStore::new(&scratch.0);
    let book = store.load();
    assert_eq!(book.unlocked_count(), 0);
}

#[test]
fn test_book_round_trip() {
    let scratch = ScratchFile::new("roundtrip");
    let store = AchievementStore::new(&scratch.0);

    let mut book = AchievementBook::default();
    book.unlock(AchievementId::FirstBlood);
    book.unlock(AchievementId::BossSlayer);
    book.mark_displayed(AchievementId::FirstBlood);
    store.save(&book);

    let loaded = store.load();
    assert_eq!(loaded, book);
    assert_eq!(
        loaded.status(AchievementId::FirstBlood),
        AchievementStatus::Displayed
    );
}

#[test]
fn test_corrupt_file_degrades_to_default() {
    let scratch = ScratchFile::new("corrupt");
    fs::write(&scratch.0, "{ not json !!").unwrap();
    let store = AchievementStore::new(&scratch.0);
    let book = store.load();
    assert_eq!(book.unlocked_count(), 0);
}

#[test]
fn test_loaded_unlocks_survive_session_merge() {
    let scratch = ScratchFile::new("merge");
    let store = AchievementStore::new(&scratch.0);

    let mut persisted = AchievementBook::default();
    persisted.unlock(AchievementId::Legend);
    store.save(&persisted);

    // A fresh session book merged with the load never relocks.
    let mut session = AchievementBook::default();
    session.unlock(AchievementId::FirstBlood);
    session.merge(&store.load());
    assert!(session.is_unlocked(AchievementId::Legend));
    assert!(session.is_unlocked(AchievementId::FirstBlood));

    // Merging twice changes nothing.
    let once = session.clone();
    session.merge(&store.load());
    assert_eq!(session, once);
}

#[test]
fn test_ledger_sorts_and_truncates() {
    let scratch = ScratchFile::new("ledger");
    let mut ledger = OfflineScoreLedger::open(&scratch.0);
    for score in [300, 900, 100, 500] {
        ledger.record(ScoreEntry::now("ACE", score, 1));
    }
    assert_eq!(ledger.best().unwrap().score, 900);
    let scores: Vec<u64> = ledger.entries().iter().map(|e| e.score).collect();
    assert_eq!(scores, vec![900, 500, 300, 100]);

    for score in 0..20 {
        ledger.record(ScoreEntry::now("PAD", 1000 + score, 1));
    }
    assert_eq!(ledger.entries().len(), 10);
}

#[test]
fn test_offline_submit_fallback_persists() {
    let scratch = ScratchFile::new("fallback");
    {
        // Remote submission failed; the score lands in the ledger.
        let mut ledger = OfflineScoreLedger::open(&scratch.0);
        ledger.record(ScoreEntry::now("ACE", 4200, 5));
    }
    // A later launch restores it as the local record.
    let ledger = OfflineScoreLedger::open(&scratch.0);
    let best = ledger.best().expect("record should persist");
    assert_eq!(best.score, 4200);
    assert_eq!(best.level, 5);
    assert_eq!(best.name, "ACE");
}
