//! Achievement checking logic

use tracing::debug;

use super::definitions::Achievement;
use crate::domain::{Task, UserProfile};

/// Result of an achievement check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementCheck {
    pub profile: UserProfile,
    /// Newly unlocked IDs in evaluation order
    pub unlocked: Vec<&'static str>,
}

impl AchievementCheck {
    /// Whether the profile differs from the one passed in
    pub fn changed(&self) -> bool {
        !self.unlocked.is_empty()
    }
}

/// Evaluate every locked achievement in `definitions` against the current state
pub fn evaluate_achievements(
    definitions: &'static [Achievement],
    profile: &UserProfile,
    tasks: &[Task],
) -> AchievementCheck {
    let mut next = profile.clone();
    let mut unlocked = Vec::new();

    for achievement in definitions {
        if next.has_achievement(achievement.id) {
            continue;
        }
        // Conditions see the profile as it was passed in
        if achievement.is_met(profile, tasks) && next.achievements.insert(achievement.id.to_string()) {
            debug!("Achievement unlocked: {}", achievement.id);
            unlocked.push(achievement.id);
        }
    }

    AchievementCheck {
        profile: next,
        unlocked,
    }
}
