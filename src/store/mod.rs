//! Quest persistence
//!
//! Profiles and quests live in a SQLite database (`~/.questlog/quests.db`),
//! keyed by an opaque user id handed out at sign-in.
//!
//! # Usage
//!
//! ```ignore
//! let db = QuestDb::open_default()?;
//! let user = db.sign_in("ada")?;
//!
//! let id = db.create_task(&user, &NewTask::new("Water plants", Priority::Low))?;
//! let tasks = db.list_tasks(&user)?;
//! ```

mod db;
mod profiles;
mod tasks;
mod users;

pub use db::{QuestDb, SCHEMA_VERSION};
pub use tasks::NewTask;

use anyhow::Result;

use crate::domain::{Task, TaskId, UserProfile};

/// Storage contract the shell relies on
///
/// Every call either fully succeeds or leaves stored state untouched.
pub trait QuestStore {
    fn load_profile(&self, user_id: &str) -> Result<Option<UserProfile>>;
    fn save_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()>;

    fn create_task(&self, user_id: &str, task: &NewTask) -> Result<TaskId>;
    /// All quests in creation order
    fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>>;
    /// Returns false if the quest does not exist
    fn update_task(&self, user_id: &str, task: &Task) -> Result<bool>;
    /// Returns false if the quest does not exist
    fn delete_task(&self, user_id: &str, task_id: &str) -> Result<bool>;

    /// Write a quest and the profile together, or neither
    fn save_task_and_profile(&self, user_id: &str, task: &Task, profile: &UserProfile) -> Result<bool>;
}

impl QuestStore for QuestDb {
    fn load_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        self.select_profile(user_id)
    }

    fn save_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        Self::write_profile(&tx, user_id, profile)?;
        tx.commit()?;
        Ok(())
    }

    fn create_task(&self, user_id: &str, task: &NewTask) -> Result<TaskId> {
        self.insert_task(user_id, task)
    }

    fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        self.select_tasks(user_id)
    }

    fn update_task(&self, user_id: &str, task: &Task) -> Result<bool> {
        let conn = self.conn();
        Self::write_task(&conn, user_id, task)
    }

    fn delete_task(&self, user_id: &str, task_id: &str) -> Result<bool> {
        self.remove_task(user_id, task_id)
    }

    fn save_task_and_profile(&self, user_id: &str, task: &Task, profile: &UserProfile) -> Result<bool> {
        let mut conn = self.conn();
        let tx = conn.transaction()?;
        if !Self::write_task(&tx, user_id, task)? {
            // Dropping the transaction rolls it back
            return Ok(false);
        }
        Self::write_profile(&tx, user_id, profile)?;
        tx.commit()?;
        Ok(true)
    }
}
