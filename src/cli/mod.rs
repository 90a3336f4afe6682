//! CLI command implementations

pub mod init;
pub mod profile;
pub mod quest;
pub mod render;
pub mod session;

use std::path::PathBuf;

use anyhow::Result;

use questlog::config::Config;
use questlog::shell::{current_user, QuestLog};
use questlog::store::QuestDb;

/// Loaded config plus where it came from
pub struct Context {
    pub config_path: PathBuf,
    pub config: Config,
}

impl Context {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let config_path = config_path.unwrap_or_else(Config::global_config_path);
        let config = Config::load_from(&config_path)?;
        Ok(Self {
            config_path,
            config,
        })
    }

    pub fn save(&self) -> Result<()> {
        self.config.save_to_file(&self.config_path)
    }

    pub fn open_db(&self) -> Result<QuestDb> {
        QuestDb::open(&self.config.database_path())
    }

    /// Quest log for the signed-in user
    pub fn quest_log(&self) -> Result<QuestLog<QuestDb>> {
        let user_id = current_user(&self.config)?;
        Ok(QuestLog::new(self.open_db()?, user_id))
    }
}
