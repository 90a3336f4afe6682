use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Avatar shown for a profile that never picked one
pub const DEFAULT_AVATAR: &str = "avatars/default.png";

/// Avatars the user can choose from
pub static AVATARS: &[&str] = &[
    "avatars/avatar1.png",
    "avatars/avatar2.png",
    "avatars/avatar3.png",
    "avatars/avatar4.png",
    "avatars/avatar5.png",
    "avatars/avatar6.png",
];

/// Resolve a user-supplied avatar reference against the catalogue.
///
/// Accepts the full path (`avatars/avatar3.png`), the file name
/// (`avatar3.png`), the stem (`avatar3`) or the bare number (`3`).
pub fn resolve_avatar(input: &str) -> Option<&'static str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if input == DEFAULT_AVATAR || input == "default" {
        return Some(DEFAULT_AVATAR);
    }
    AVATARS.iter().copied().find(|path| {
        let file = path.trim_start_matches("avatars/");
        let stem = file.trim_end_matches(".png");
        let number = stem.trim_start_matches("avatar");
        *path == input || file == input || stem == input || number == input
    })
}

/// A player's gamification state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Current level, starts at 1
    pub level: u32,
    /// Progress within the current level
    pub xp: u32,
    pub current_avatar: String,
    /// Unlocked achievement IDs
    #[serde(default)]
    pub achievements: BTreeSet<String>,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            current_avatar: DEFAULT_AVATAR.to_string(),
            achievements: BTreeSet::new(),
        }
    }
}

impl UserProfile {
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.contains(id)
    }

    /// Avatar to display, falling back to the default for blank values
    pub fn avatar(&self) -> &str {
        if self.current_avatar.trim().is_empty() {
            DEFAULT_AVATAR
        } else {
            &self.current_avatar
        }
    }
}
