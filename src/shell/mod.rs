//! Application shell - user actions against stored state
//!
//! Each action loads the user's profile and quests, runs the engine, writes
//! the result, and reloads from the store so callers only ever see state that
//! was actually persisted. A failed write leaves nothing half-applied.

mod session;

pub use session::{current_user, sign_in, sign_out};

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::domain::{resolve_avatar, Priority, Task, TaskFilter, TaskId, UserProfile};
use crate::engine::{Dashboard, GamificationEngine, GamificationEvent};
use crate::error::QuestError;
use crate::store::{NewTask, QuestStore};

/// Profile and quests for one user, as last read from the store
#[derive(Debug, Clone)]
pub struct QuestState {
    pub profile: UserProfile,
    /// Creation order
    pub tasks: Vec<Task>,
}

/// What an action did
#[derive(Debug, Clone)]
pub struct ActionOutcome {
    /// Quest the action targeted
    pub task_id: Option<TaskId>,
    pub xp_awarded: u32,
    pub events: Vec<GamificationEvent>,
    /// State after the action, reloaded from the store
    pub state: QuestState,
}

/// One user's quest log
pub struct QuestLog<S: QuestStore> {
    store: S,
    engine: GamificationEngine,
    user_id: String,
}

impl<S: QuestStore> QuestLog<S> {
    pub fn new(store: S, user_id: impl Into<String>) -> Self {
        Self::with_engine(store, user_id, GamificationEngine::new())
    }

    pub fn with_engine(store: S, user_id: impl Into<String>, engine: GamificationEngine) -> Self {
        Self {
            store,
            engine,
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn engine(&self) -> &GamificationEngine {
        &self.engine
    }

    /// Read the current state, creating a fresh profile on first use
    pub fn load(&self) -> Result<QuestState> {
        let profile = match self.store.load_profile(&self.user_id)? {
            Some(profile) => profile,
            None => {
                info!("Creating profile for {}", self.user_id);
                let profile = UserProfile::default();
                self.store.save_profile(&self.user_id, &profile)?;
                profile
            }
        };
        let tasks = self.store.list_tasks(&self.user_id)?;
        Ok(QuestState { profile, tasks })
    }

    /// Quests in display order, narrowed by `filter`
    pub fn list(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let state = self.load()?;
        let mut tasks = self.engine.sort_tasks(&state.tasks);
        tasks.retain(|t| filter.matches(t));
        Ok(tasks)
    }

    pub fn dashboard(&self) -> Result<Dashboard> {
        let state = self.load()?;
        Ok(self.engine.dashboard(&state.profile, &state.tasks))
    }

    /// Add a quest, then check achievements against the new list
    ///
    /// The quest is stored even if saving the unlocks fails; the failure is
    /// logged and no unlock is reported.
    pub fn add_task(&self, text: &str, due_date: Option<NaiveDate>, priority: Priority) -> Result<ActionOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QuestError::EmptyTaskText.into());
        }

        let new_task = NewTask {
            text: text.to_string(),
            due_date,
            priority,
        };
        let id = self.store.create_task(&self.user_id, &new_task)?;
        debug!("Created quest {}", id);

        let state = self.load()?;
        let events = self.settle_achievements(&state).unwrap_or_else(|e| {
            warn!("Quest {} added but achievements were not saved: {:#}", id, e);
            Vec::new()
        });

        Ok(ActionOutcome {
            task_id: Some(id),
            xp_awarded: 0,
            events,
            state: self.load()?,
        })
    }

    /// Complete a quest: award XP, resolve level ups and unlock achievements
    pub fn complete_task(&self, id_or_prefix: &str) -> Result<ActionOutcome> {
        let state = self.load()?;
        let id = resolve_task_id(&state.tasks, id_or_prefix)?;

        let Some(completion) = self.engine.complete_task(&state.profile, &state.tasks, &id) else {
            return Err(QuestError::AlreadyCompleted(id).into());
        };

        let task = completion
            .tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| QuestError::TaskNotFound(id.clone()))?;

        if !self
            .store
            .save_task_and_profile(&self.user_id, task, &completion.profile)?
        {
            return Err(QuestError::TaskNotFound(id).into());
        }

        info!(
            "Completed quest {} (+{} XP, level {})",
            id, completion.xp_awarded, completion.profile.level
        );

        Ok(ActionOutcome {
            task_id: Some(id),
            xp_awarded: completion.xp_awarded,
            events: completion.events,
            state: self.load()?,
        })
    }

    /// Mark a completed quest open again. Earned XP stays.
    pub fn reopen_task(&self, id_or_prefix: &str) -> Result<ActionOutcome> {
        let state = self.load()?;
        let id = resolve_task_id(&state.tasks, id_or_prefix)?;

        let Some(tasks) = self.engine.reopen_task(&state.tasks, &id) else {
            return Err(QuestError::NotCompleted(id).into());
        };
        let task = tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| QuestError::TaskNotFound(id.clone()))?;

        if !self.store.update_task(&self.user_id, task)? {
            return Err(QuestError::TaskNotFound(id).into());
        }

        Ok(ActionOutcome {
            task_id: Some(id),
            xp_awarded: 0,
            events: Vec::new(),
            state: self.load()?,
        })
    }

    /// Change a quest's text. Completed quests are frozen.
    pub fn edit_task(&self, id_or_prefix: &str, text: &str) -> Result<ActionOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Err(QuestError::EmptyTaskText.into());
        }

        let state = self.load()?;
        let id = resolve_task_id(&state.tasks, id_or_prefix)?;
        let mut task = state
            .tasks
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| QuestError::TaskNotFound(id.clone()))?;

        if task.completed {
            return Err(QuestError::TaskCompleted(id).into());
        }

        task.text = text.to_string();
        if !self.store.update_task(&self.user_id, &task)? {
            return Err(QuestError::TaskNotFound(id).into());
        }

        Ok(ActionOutcome {
            task_id: Some(id),
            xp_awarded: 0,
            events: Vec::new(),
            state: self.load()?,
        })
    }

    pub fn delete_task(&self, id_or_prefix: &str) -> Result<ActionOutcome> {
        let state = self.load()?;
        let id = resolve_task_id(&state.tasks, id_or_prefix)?;

        if !self.store.delete_task(&self.user_id, &id)? {
            return Err(QuestError::TaskNotFound(id).into());
        }
        debug!("Deleted quest {}", id);

        Ok(ActionOutcome {
            task_id: Some(id),
            xp_awarded: 0,
            events: Vec::new(),
            state: self.load()?,
        })
    }

    /// Switch avatar; accepts any form [`resolve_avatar`] understands
    pub fn set_avatar(&self, avatar: &str) -> Result<UserProfile> {
        let resolved =
            resolve_avatar(avatar).ok_or_else(|| QuestError::UnknownAvatar(avatar.to_string()))?;

        let mut profile = self.load()?.profile;
        profile.current_avatar = resolved.to_string();
        self.store.save_profile(&self.user_id, &profile)?;
        Ok(profile)
    }

    /// Evaluate achievements and persist only if something unlocked
    fn settle_achievements(&self, state: &QuestState) -> Result<Vec<GamificationEvent>> {
        let check = self.engine.evaluate_achievements(&state.profile, &state.tasks);
        if !check.changed() {
            return Ok(Vec::new());
        }
        self.store.save_profile(&self.user_id, &check.profile)?;
        Ok(check
            .unlocked
            .into_iter()
            .map(|id| GamificationEvent::AchievementUnlocked { id })
            .collect())
    }
}

/// Find the quest whose id equals `input` or, failing that, uniquely starts with it
pub fn resolve_task_id(tasks: &[Task], input: &str) -> Result<TaskId, QuestError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(QuestError::TaskNotFound(String::new()));
    }
    if let Some(task) = tasks.iter().find(|t| t.id == input) {
        return Ok(task.id.clone());
    }

    let mut matches = tasks.iter().filter(|t| t.id.starts_with(input));
    match (matches.next(), matches.next()) {
        (Some(task), None) => Ok(task.id.clone()),
        (Some(_), Some(_)) => Err(QuestError::AmbiguousTaskId(input.to_string())),
        (None, _) => Err(QuestError::TaskNotFound(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::QuestDb;

    /// Store that refuses profile writes once armed
    struct ProfileWriteFails {
        db: QuestDb,
        armed: std::cell::Cell<bool>,
    }

    impl QuestStore for ProfileWriteFails {
        fn load_profile(&self, user_id: &str) -> Result<Option<UserProfile>> {
            self.db.load_profile(user_id)
        }

        fn save_profile(&self, user_id: &str, profile: &UserProfile) -> Result<()> {
            if self.armed.get() {
                anyhow::bail!("disk full");
            }
            self.db.save_profile(user_id, profile)
        }

        fn create_task(&self, user_id: &str, task: &NewTask) -> Result<TaskId> {
            self.db.create_task(user_id, task)
        }

        fn list_tasks(&self, user_id: &str) -> Result<Vec<Task>> {
            self.db.list_tasks(user_id)
        }

        fn update_task(&self, user_id: &str, task: &Task) -> Result<bool> {
            self.db.update_task(user_id, task)
        }

        fn delete_task(&self, user_id: &str, task_id: &str) -> Result<bool> {
            self.db.delete_task(user_id, task_id)
        }

        fn save_task_and_profile(&self, user_id: &str, task: &Task, profile: &UserProfile) -> Result<bool> {
            self.db.save_task_and_profile(user_id, task, profile)
        }
    }

    #[test]
    fn test_add_task_survives_failed_unlock_save() {
        let db = QuestDb::open_in_memory().unwrap();
        let user_id = db.sign_in("ada").unwrap();
        let store = ProfileWriteFails {
            db,
            armed: std::cell::Cell::new(false),
        };
        let log = QuestLog::new(store, user_id);
        log.load().unwrap();
        log.store.armed.set(true);

        let outcome = log.add_task("Sharpen sword", None, Priority::High).unwrap();
        assert!(outcome.events.is_empty());
        assert_eq!(outcome.state.tasks.len(), 1);
        assert_eq!(outcome.task_id.as_deref(), Some(outcome.state.tasks[0].id.as_str()));
        assert!(!outcome.state.profile.has_achievement("first_quest"));

        log.store.armed.set(false);
        let retry = log.add_task("Polish shield", None, Priority::Low).unwrap();
        assert_eq!(
            retry.events,
            vec![GamificationEvent::AchievementUnlocked { id: "first_quest" }]
        );
    }

    #[test]
    fn test_resolve_task_id_prefixes() {
        let tasks = vec![
            Task::new("abc123", "x", Priority::Low),
            Task::new("abd456", "x", Priority::Low),
        ];
        assert_eq!(resolve_task_id(&tasks, "abc123").unwrap(), "abc123");
        assert_eq!(resolve_task_id(&tasks, "abc").unwrap(), "abc123");
        assert!(matches!(
            resolve_task_id(&tasks, "ab"),
            Err(QuestError::AmbiguousTaskId(_))
        ));
        assert!(matches!(
            resolve_task_id(&tasks, "zz"),
            Err(QuestError::TaskNotFound(_))
        ));
        assert!(matches!(
            resolve_task_id(&tasks, ""),
            Err(QuestError::TaskNotFound(_))
        ));
    }
}
