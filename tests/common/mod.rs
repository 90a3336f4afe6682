//! Shared test utilities for quest log tests

#![allow(dead_code)]

use questlog::shell::QuestLog;
use questlog::store::QuestDb;
use tempfile::TempDir;

/// Opens a quest database in a fresh temporary directory
pub fn create_test_db() -> (TempDir, QuestDb) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = QuestDb::open(&temp_dir.path().join("quests.db")).expect("Failed to open quest db");
    (temp_dir, db)
}

/// Quest log for a freshly signed-in user
pub fn create_test_log(name: &str) -> (TempDir, QuestLog<QuestDb>) {
    let (temp_dir, db) = create_test_db();
    let user_id = db.sign_in(name).expect("Failed to sign in");
    (temp_dir, QuestLog::new(db, user_id))
}
