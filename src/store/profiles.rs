//! Profile and achievement rows

use std::collections::BTreeSet;

use anyhow::Result;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::db::QuestDb;
use crate::domain::UserProfile;

impl QuestDb {
    pub(crate) fn select_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
        let conn = self.conn();
        let row = conn
            .query_row(
                "SELECT level, xp, current_avatar FROM profiles WHERE user_id = ?1",
                [user_id],
                |r| Ok((r.get::<_, u32>(0)?, r.get::<_, u32>(1)?, r.get::<_, String>(2)?)),
            )
            .optional()?;

        let Some((level, xp, current_avatar)) = row else {
            return Ok(None);
        };

        let mut stmt =
            conn.prepare("SELECT achievement_id FROM achievements WHERE user_id = ?1")?;
        let achievements = stmt
            .query_map([user_id], |r| r.get::<_, String>(0))?
            .collect::<rusqlite::Result<BTreeSet<_>>>()?;

        Ok(Some(UserProfile {
            level,
            xp,
            current_avatar,
            achievements,
        }))
    }

    /// Upsert the profile and make the achievement rows match its set.
    ///
    /// Existing achievement rows keep their original unlock time.
    pub(crate) fn write_profile(conn: &Connection, user_id: &str, profile: &UserProfile) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        conn.execute(
            r#"INSERT INTO profiles (user_id, level, xp, current_avatar, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5)
               ON CONFLICT(user_id) DO UPDATE SET
                   level = ?2, xp = ?3, current_avatar = ?4, updated_at = ?5"#,
            params![user_id, profile.level, profile.xp, profile.current_avatar, now],
        )?;

        let stored: Vec<String> = {
            let mut stmt =
                conn.prepare("SELECT achievement_id FROM achievements WHERE user_id = ?1")?;
            stmt.query_map([user_id], |r| r.get(0))?
                .collect::<rusqlite::Result<_>>()?
        };

        for id in stored.iter().filter(|id| !profile.achievements.contains(*id)) {
            conn.execute(
                "DELETE FROM achievements WHERE user_id = ?1 AND achievement_id = ?2",
                params![user_id, id],
            )?;
        }
        for id in &profile.achievements {
            conn.execute(
                "INSERT OR IGNORE INTO achievements (user_id, achievement_id, unlocked_at) VALUES (?1, ?2, ?3)",
                params![user_id, id, now],
            )?;
        }
        Ok(())
    }

    /// Unlock times in milliseconds, keyed by achievement ID
    pub fn unlock_times(&self, user_id: &str) -> Result<Vec<(String, i64)>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT achievement_id, unlocked_at FROM achievements WHERE user_id = ?1 ORDER BY unlocked_at, achievement_id",
        )?;
        let rows = stmt
            .query_map([user_id], |r| Ok((r.get(0)?, r.get(1)?)))?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }
}
