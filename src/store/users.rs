//! Local identity registry
//!
//! Hands out a stable opaque user id per display name. Nothing here checks
//! credentials.

use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use tracing::info;
use uuid::Uuid;

use super::db::QuestDb;
use crate::error::QuestError;

impl QuestDb {
    /// Return the id registered for `display_name`, creating one on first sign-in
    pub fn sign_in(&self, display_name: &str) -> Result<String> {
        let name = display_name.trim();
        if name.is_empty() {
            return Err(QuestError::EmptyUserName.into());
        }

        if let Some(id) = self.find_user(name)? {
            return Ok(id);
        }

        let id = Uuid::new_v4().to_string();
        let conn = self.conn();
        conn.execute(
            "INSERT INTO users (user_id, display_name, created_at) VALUES (?1, ?2, ?3)",
            params![id, name, Utc::now().timestamp_millis()],
        )?;
        info!("Registered new user '{}'", name);
        Ok(id)
    }

    pub fn find_user(&self, display_name: &str) -> Result<Option<String>> {
        let conn = self.conn();
        let id = conn
            .query_row(
                "SELECT user_id FROM users WHERE display_name = ?1",
                [display_name.trim()],
                |r| r.get(0),
            )
            .optional()?;
        Ok(id)
    }

    pub fn display_name(&self, user_id: &str) -> Result<Option<String>> {
        let conn = self.conn();
        let name = conn
            .query_row(
                "SELECT display_name FROM users WHERE user_id = ?1",
                [user_id],
                |r| r.get(0),
            )
            .optional()?;
        Ok(name)
    }
}
