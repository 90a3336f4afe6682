//! Configuration loading and management
//!
//! Lives in `~/.questlog/config.toml` unless a path is passed explicitly.

mod io;
mod settings;

pub use settings::{SessionState, Settings};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,

    /// Active sign-in
    #[serde(default)]
    pub session: SessionState,
}

impl Config {
    /// Database path from settings, or the default next to the config
    pub fn database_path(&self) -> PathBuf {
        self.settings
            .database_path
            .clone()
            .unwrap_or_else(|| Self::global_config_dir().join("quests.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use tempfile::tempdir;

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.settings.default_priority, Priority::Medium);
        assert_eq!(config.settings.progress_width, 20);
        assert!(!config.session.is_signed_in());
    }

    #[test]
    fn test_load_creates_then_roundtrips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert!(config.session.user_id.is_none());

        config.session.user_id = Some("abc".to_string());
        config.session.display_name = Some("ada".to_string());
        config.settings.default_priority = Priority::High;
        config.save_to_file(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.session.user_id.as_deref(), Some("abc"));
        assert_eq!(reloaded.settings.default_priority, Priority::High);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("default_priority = \"high\""));
    }

    #[test]
    fn test_database_path_override() {
        let mut config = Config::default();
        assert!(config.database_path().ends_with("quests.db"));
        config.settings.database_path = Some(PathBuf::from("/tmp/custom.db"));
        assert_eq!(config.database_path(), PathBuf::from("/tmp/custom.db"));
    }
}
