//! Gamification engine - the entry point the shell talks to
//!
//! Every method takes the current state by reference and hands back new
//! values; the caller owns the single mutable copy and decides what to persist.

use serde::Serialize;

use super::checker::{evaluate_achievements, AchievementCheck};
use super::dashboard::Dashboard;
use super::definitions::{Achievement, ACHIEVEMENTS};
use super::levels::{apply_xp, LevelUp, XpGain};
use super::ordering::sort_tasks;
use crate::domain::{Priority, Task, UserProfile};

/// Events the shell should announce to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GamificationEvent {
    LevelUp(LevelUp),
    AchievementUnlocked { id: &'static str },
}

/// Outcome of completing a quest
#[derive(Debug, Clone)]
pub struct Completion {
    pub profile: UserProfile,
    /// Task list with the quest marked completed
    pub tasks: Vec<Task>,
    pub xp_awarded: u32,
    /// Level ups first, then unlocks, each in order
    pub events: Vec<GamificationEvent>,
}

impl Completion {
    pub fn level_ups(&self) -> impl Iterator<Item = &LevelUp> {
        self.events.iter().filter_map(|e| match e {
            GamificationEvent::LevelUp(l) => Some(l),
            _ => None,
        })
    }

    pub fn unlocked(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.events.iter().filter_map(|e| match e {
            GamificationEvent::AchievementUnlocked { id } => Some(*id),
            _ => None,
        })
    }
}

/// XP, levels, achievements and quest ordering over in-memory state
#[derive(Debug, Clone, Copy)]
pub struct GamificationEngine {
    achievements: &'static [Achievement],
}

impl Default for GamificationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GamificationEngine {
    /// Engine with the built-in achievement table
    pub fn new() -> Self {
        Self {
            achievements: ACHIEVEMENTS,
        }
    }

    /// Engine with a custom achievement table, evaluated in slice order
    pub fn with_achievements(achievements: &'static [Achievement]) -> Self {
        Self { achievements }
    }

    pub fn achievements(&self) -> &'static [Achievement] {
        self.achievements
    }

    pub fn apply_xp(&self, profile: &UserProfile, priority: Priority) -> XpGain {
        apply_xp(profile, priority)
    }

    pub fn evaluate_achievements(&self, profile: &UserProfile, tasks: &[Task]) -> AchievementCheck {
        evaluate_achievements(self.achievements, profile, tasks)
    }

    pub fn sort_tasks(&self, tasks: &[Task]) -> Vec<Task> {
        sort_tasks(tasks)
    }

    pub fn dashboard(&self, profile: &UserProfile, tasks: &[Task]) -> Dashboard {
        Dashboard::build(self.achievements, profile, tasks)
    }

    /// Mark a quest completed, award its XP and check achievements.
    ///
    /// Returns `None` if no quest has that id or it is already completed.
    pub fn complete_task(&self, profile: &UserProfile, tasks: &[Task], task_id: &str) -> Option<Completion> {
        let index = tasks.iter().position(|t| t.id == task_id)?;
        if tasks[index].completed {
            return None;
        }

        let mut tasks = tasks.to_vec();
        tasks[index].completed = true;

        let gain = self.apply_xp(profile, tasks[index].priority);
        let check = self.evaluate_achievements(&gain.profile, &tasks);

        let mut events: Vec<GamificationEvent> =
            gain.level_ups.iter().copied().map(GamificationEvent::LevelUp).collect();
        events.extend(
            check
                .unlocked
                .iter()
                .map(|&id| GamificationEvent::AchievementUnlocked { id }),
        );

        Some(Completion {
            profile: check.profile,
            tasks,
            xp_awarded: gain.awarded,
            events,
        })
    }

    /// Mark a completed quest as open again. XP already earned is kept.
    ///
    /// Returns `None` if no quest has that id or it is not completed.
    pub fn reopen_task(&self, tasks: &[Task], task_id: &str) -> Option<Vec<Task>> {
        let index = tasks.iter().position(|t| t.id == task_id)?;
        if !tasks[index].completed {
            return None;
        }
        let mut tasks = tasks.to_vec();
        tasks[index].completed = false;
        Some(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quests(n: usize, priority: Priority) -> Vec<Task> {
        (0..n)
            .map(|i| Task::new(format!("q{}", i), "quest", priority))
            .collect()
    }

    #[test]
    fn test_complete_awards_xp_by_priority() {
        let engine = GamificationEngine::new();
        let mut profile = UserProfile::default();
        profile.achievements.insert("first_quest".to_string());
        let tasks = quests(1, Priority::High);

        let done = engine.complete_task(&profile, &tasks, "q0").unwrap();
        assert_eq!(done.xp_awarded, 25);
        assert_eq!(done.profile.xp, 25);
        assert!(done.tasks[0].completed);
        assert!(done.events.is_empty());
        assert!(!tasks[0].completed);
    }

    #[test]
    fn test_complete_reports_level_up_then_unlocks() {
        let engine = GamificationEngine::new();
        let profile = UserProfile {
            level: 4,
            xp: 190,
            ..Default::default()
        };
        let tasks = quests(1, Priority::Medium);

        let done = engine.complete_task(&profile, &tasks, "q0").unwrap();
        assert_eq!(done.profile.level, 5);
        assert_eq!(done.profile.xp, 5);
        assert_eq!(
            done.events,
            vec![
                GamificationEvent::LevelUp(LevelUp {
                    old_level: 4,
                    new_level: 5
                }),
                GamificationEvent::AchievementUnlocked { id: "first_quest" },
                GamificationEvent::AchievementUnlocked { id: "level_five" },
            ]
        );
        assert_eq!(done.level_ups().count(), 1);
        assert_eq!(done.unlocked().collect::<Vec<_>>(), vec!["first_quest", "level_five"]);
    }

    #[test]
    fn test_tenth_completion_unlocks_ten_quests() {
        let engine = GamificationEngine::new();
        let mut tasks = quests(10, Priority::Low);
        for task in tasks.iter_mut().take(9) {
            task.completed = true;
        }
        let mut profile = UserProfile::default();
        profile.achievements.insert("first_quest".to_string());

        let done = engine.complete_task(&profile, &tasks, "q9").unwrap();
        assert_eq!(done.unlocked().collect::<Vec<_>>(), vec!["ten_quests"]);
    }

    #[test]
    fn test_complete_unknown_or_finished_is_none() {
        let engine = GamificationEngine::new();
        let profile = UserProfile::default();
        let tasks = vec![Task::new("done", "x", Priority::High).completed()];
        assert!(engine.complete_task(&profile, &tasks, "missing").is_none());
        assert!(engine.complete_task(&profile, &tasks, "done").is_none());
    }

    #[test]
    fn test_reopen_keeps_xp() {
        let engine = GamificationEngine::new();
        let tasks = quests(1, Priority::High);
        let done = engine.complete_task(&UserProfile::default(), &tasks, "q0").unwrap();

        let reopened = engine.reopen_task(&done.tasks, "q0").unwrap();
        assert!(!reopened[0].completed);
        assert_eq!(done.profile.xp, 25);
        assert!(engine.reopen_task(&reopened, "q0").is_none());
    }
}
