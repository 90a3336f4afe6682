//! Profile commands: status, achievements, avatar

use anyhow::Result;

use questlog::engine::Achievement;
use questlog::{AVATARS, DEFAULT_AVATAR};

use super::Context;

pub fn status_command(ctx: &Context, json: bool) -> Result<()> {
    let log = ctx.quest_log()?;
    let dashboard = log.dashboard()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
        return Ok(());
    }

    let name = ctx.config.session.display_name.as_deref().unwrap_or("adventurer");
    println!("{} ({})", name, dashboard.avatar);
    println!("  Level {}", dashboard.level);
    println!(
        "  {} {}",
        dashboard.progress_bar(ctx.config.settings.progress_width),
        dashboard.xp_label()
    );
    println!("  Open quests: {}", dashboard.incomplete);

    let unlocked = dashboard.badges.iter().filter(|b| b.unlocked).count();
    println!("  Achievements: {}/{}", unlocked, dashboard.badges.len());
    Ok(())
}

pub fn achievements_command(ctx: &Context) -> Result<()> {
    let log = ctx.quest_log()?;
    let dashboard = log.dashboard()?;

    for badge in &dashboard.badges {
        let mark = if badge.unlocked { "x" } else { " " };
        let description = Achievement::find(badge.id).map(|a| a.description).unwrap_or("");
        println!("  [{}] {:<22} {}", mark, badge.name, description);
    }
    Ok(())
}

/// Show the catalogue, or switch when `choice` is given
pub fn avatar_command(ctx: &Context, choice: Option<String>) -> Result<()> {
    let log = ctx.quest_log()?;

    let Some(choice) = choice else {
        let current = log.load()?.profile;
        println!("Available avatars:");
        for (i, avatar) in AVATARS.iter().enumerate() {
            let mark = if current.avatar() == *avatar { "*" } else { " " };
            println!("  {} {}  {}", mark, i + 1, avatar);
        }
        let mark = if current.avatar() == DEFAULT_AVATAR { "*" } else { " " };
        println!("  {} default  {}", mark, DEFAULT_AVATAR);
        return Ok(());
    };

    let profile = log.set_avatar(&choice)?;
    println!("Avatar set to {}", profile.current_avatar);
    Ok(())
}
