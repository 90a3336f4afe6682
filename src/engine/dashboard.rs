//! Read-only metrics for the profile header and achievement shelf

use serde::Serialize;

use super::definitions::Achievement;
use super::levels::xp_required_for_level;
use crate::domain::{Task, UserProfile};

/// Number of tasks still open
pub fn incomplete_count(tasks: &[Task]) -> usize {
    tasks.iter().filter(|t| !t.completed).count()
}

/// Progress through the current level (0.0 - 1.0)
pub fn xp_fraction(profile: &UserProfile) -> f64 {
    let required = xp_required_for_level(profile.level);
    (profile.xp as f64 / required as f64).clamp(0.0, 1.0)
}

/// One badge on the achievement shelf
#[derive(Debug, Clone, Serialize)]
pub struct BadgeView {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub unlocked: bool,
}

/// Snapshot of everything the profile header shows
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub level: u32,
    pub xp: u32,
    pub xp_required: u32,
    pub xp_fraction: f64,
    pub incomplete: usize,
    pub avatar: String,
    pub badges: Vec<BadgeView>,
}

impl Dashboard {
    pub fn build(definitions: &'static [Achievement], profile: &UserProfile, tasks: &[Task]) -> Self {
        let badges = definitions
            .iter()
            .map(|a| BadgeView {
                id: a.id,
                name: a.name,
                icon: a.icon,
                unlocked: profile.has_achievement(a.id),
            })
            .collect();

        Self {
            level: profile.level,
            xp: profile.xp,
            xp_required: xp_required_for_level(profile.level),
            xp_fraction: xp_fraction(profile),
            incomplete: incomplete_count(tasks),
            avatar: profile.avatar().to_string(),
            badges,
        }
    }

    /// "35 / 50 XP"
    pub fn xp_label(&self) -> String {
        format!("{} / {} XP", self.xp, self.xp_required)
    }

    /// Text progress bar of the given width
    pub fn progress_bar(&self, width: usize) -> String {
        let filled = ((self.xp_fraction * width as f64).floor() as usize).min(width);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
    }
}
