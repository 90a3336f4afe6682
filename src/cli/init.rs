//! Init command implementation

use anyhow::{bail, Result};
use std::path::PathBuf;

use questlog::config::Config;

/// Default configuration content for questlog init
pub const DEFAULT_CONFIG: &str = r#"# questlog configuration
# =======================

[settings]
# Database file (defaults to ~/.questlog/quests.db)
# database_path = "/path/to/quests.db"

# Priority for `questlog add` when --priority is omitted: low, medium or high
default_priority = "medium"

# Width of the XP bar shown by `questlog status`
progress_width = 20

# Filled in by `questlog login`
[session]
"#;

pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
