//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::Priority;

/// General settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Database file. Defaults to `~/.questlog/quests.db` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,

    /// Priority used by `add` when none is given
    #[serde(default)]
    pub default_priority: Priority,

    /// Width of the XP bar in `status`
    #[serde(default = "default_progress_width")]
    pub progress_width: usize,
}

fn default_progress_width() -> usize {
    20
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: None,
            default_priority: Priority::default(),
            progress_width: default_progress_width(),
        }
    }
}

/// Who is currently signed in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn clear(&mut self) {
        self.user_id = None;
        self.display_name = None;
    }
}
