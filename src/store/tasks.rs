//! Quest rows

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use super::db::QuestDb;
use crate::domain::{parse_due_date, Priority, Task, TaskId, DUE_DATE_FORMAT};

/// Fields the user supplies when adding a quest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub text: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
}

impl NewTask {
    pub fn new(text: impl Into<String>, priority: Priority) -> Self {
        Self {
            text: text.into(),
            due_date: None,
            priority,
        }
    }

    pub fn due(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

fn format_due_date(date: Option<NaiveDate>) -> Option<String> {
    date.map(|d| d.format(DUE_DATE_FORMAT).to_string())
}

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<Task> {
    let due_date: Option<String> = row.get(2)?;
    let priority: String = row.get(3)?;
    Ok(Task {
        id: row.get(0)?,
        text: row.get(1)?,
        due_date: due_date.as_deref().and_then(parse_due_date),
        priority: Priority::lenient(&priority),
        completed: row.get(4)?,
    })
}

impl QuestDb {
    pub(crate) fn insert_task(&self, user_id: &str, task: &NewTask) -> Result<TaskId> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp_millis();
        let conn = self.conn();
        conn.execute(
            r#"INSERT INTO tasks (id, user_id, text, due_date, priority, completed, created_at, updated_at)
               VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?6)"#,
            params![
                id,
                user_id,
                task.text,
                format_due_date(task.due_date),
                task.priority.as_str(),
                now,
            ],
        )?;
        Ok(id)
    }

    pub(crate) fn select_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, text, due_date, priority, completed FROM tasks WHERE user_id = ?1 ORDER BY seq",
        )?;
        let tasks = stmt
            .query_map([user_id], task_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    /// Update a quest's mutable fields. Returns false if it does not exist.
    pub(crate) fn write_task(conn: &Connection, user_id: &str, task: &Task) -> Result<bool> {
        let changed = conn.execute(
            r#"UPDATE tasks SET text = ?3, due_date = ?4, priority = ?5, completed = ?6, updated_at = ?7
               WHERE id = ?1 AND user_id = ?2"#,
            params![
                task.id,
                user_id,
                task.text,
                format_due_date(task.due_date),
                task.priority.as_str(),
                task.completed,
                Utc::now().timestamp_millis(),
            ],
        )?;
        Ok(changed > 0)
    }

    pub(crate) fn remove_task(&self, user_id: &str, task_id: &str) -> Result<bool> {
        let conn = self.conn();
        let changed = conn.execute(
            "DELETE FROM tasks WHERE id = ?1 AND user_id = ?2",
            params![task_id, user_id],
        )?;
        Ok(changed > 0)
    }
}
