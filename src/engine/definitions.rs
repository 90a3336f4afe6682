//! Achievement definitions and metadata
//!
//! Achievements are data: adding one means adding a row to [`ACHIEVEMENTS`],
//! never touching the evaluator.

use crate::domain::{Task, UserProfile};

/// Unlock condition over the profile and the full task list
pub type Condition = fn(&UserProfile, &[Task]) -> bool;

/// Full achievement definition
#[derive(Debug, Clone, Copy)]
pub struct Achievement {
    /// Storage key, unique within a definition table
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Font Awesome icon class used by front ends
    pub icon: &'static str,
    pub condition: Condition,
}

impl Achievement {
    /// Look up a built-in achievement by its string key
    pub fn find(id: &str) -> Option<&'static Achievement> {
        ACHIEVEMENTS.iter().find(|a| a.id == id)
    }

    pub fn is_met(&self, profile: &UserProfile, tasks: &[Task]) -> bool {
        (self.condition)(profile, tasks)
    }
}

fn any_quest(_profile: &UserProfile, tasks: &[Task]) -> bool {
    !tasks.is_empty()
}

fn ten_completed(_profile: &UserProfile, tasks: &[Task]) -> bool {
    tasks.iter().filter(|t| t.completed).count() >= 10
}

fn reached_level_five(profile: &UserProfile, _tasks: &[Task]) -> bool {
    profile.level >= 5
}

/// Built-in achievements, in evaluation order
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_quest",
        name: "First Quest",
        description: "Add your first quest",
        icon: "fa-book-dead",
        condition: any_quest,
    },
    Achievement {
        id: "ten_quests",
        name: "Ten Quests Conquered",
        description: "Complete 10 quests",
        icon: "fa-dungeon",
        condition: ten_completed,
    },
    Achievement {
        id: "level_five",
        name: "Reached Level 5",
        description: "Reach level 5",
        icon: "fa-crown",
        condition: reached_level_five,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;

    fn builtin(id: &str) -> &'static Achievement {
        Achievement::find(id).unwrap()
    }

    #[test]
    fn test_find_by_storage_key() {
        let ids: Vec<&str> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["first_quest", "ten_quests", "level_five"]);
        assert_eq!(builtin("ten_quests").name, "Ten Quests Conquered");
        assert!(Achievement::find("speed_demon").is_none());
    }

    #[test]
    fn test_first_quest_counts_incomplete_tasks() {
        let profile = UserProfile::default();
        let tasks = vec![Task::new("a", "open quest", Priority::Low)];
        assert!(builtin("first_quest").is_met(&profile, &tasks));
        assert!(!builtin("first_quest").is_met(&profile, &[]));
    }

    #[test]
    fn test_ten_quests_needs_completed_tasks() {
        let profile = UserProfile::default();
        let mut tasks: Vec<Task> = (0..9)
            .map(|i| Task::new(i.to_string(), "q", Priority::Low).completed())
            .collect();
        tasks.push(Task::new("open", "q", Priority::Low));
        let ten = builtin("ten_quests");
        assert!(!ten.is_met(&profile, &tasks));

        tasks.push(Task::new("9", "q", Priority::Low).completed());
        assert!(ten.is_met(&profile, &tasks));
    }

    #[test]
    fn test_level_five_threshold() {
        let five = builtin("level_five");
        let mut profile = UserProfile {
            level: 4,
            ..Default::default()
        };
        assert!(!five.is_met(&profile, &[]));
        profile.level = 5;
        assert!(five.is_met(&profile, &[]));
    }
}
