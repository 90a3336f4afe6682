//! Quest commands: add, list, done, undo, edit, delete

use anyhow::{Context as _, Result};
use chrono::NaiveDate;

use questlog::{Priority, TaskFilter, DUE_DATE_FORMAT};

use super::render::{print_events, print_task, short_id};
use super::Context;

pub fn add_command(ctx: &Context, text: &str, due: Option<String>, priority: Option<Priority>) -> Result<()> {
    let due_date = due
        .map(|d| {
            NaiveDate::parse_from_str(d.trim(), DUE_DATE_FORMAT)
                .with_context(|| format!("Invalid due date '{}', expected YYYY-MM-DD", d))
        })
        .transpose()?;
    let priority = priority.unwrap_or(ctx.config.settings.default_priority);

    let log = ctx.quest_log()?;
    let outcome = log.add_task(text, due_date, priority)?;
    if let Some(id) = &outcome.task_id {
        println!("Added quest {}", short_id(id));
    }
    print_events(&outcome.events);
    Ok(())
}

pub fn list_command(ctx: &Context, filter: TaskFilter, json: bool) -> Result<()> {
    let log = ctx.quest_log()?;
    let tasks = log.list(filter)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No quests in progress.");
        return Ok(());
    }

    println!("Quests ({}, {}):\n", tasks.len(), filter.as_str());
    for task in &tasks {
        print_task(task);
    }
    Ok(())
}

pub fn done_command(ctx: &Context, id: &str) -> Result<()> {
    let log = ctx.quest_log()?;
    let outcome = log.complete_task(id)?;
    let profile = &outcome.state.profile;
    println!(
        "Quest complete! +{} XP (level {}, {} XP)",
        outcome.xp_awarded, profile.level, profile.xp
    );
    print_events(&outcome.events);
    Ok(())
}

pub fn undo_command(ctx: &Context, id: &str) -> Result<()> {
    let log = ctx.quest_log()?;
    let outcome = log.reopen_task(id)?;
    if let Some(id) = &outcome.task_id {
        println!("Reopened quest {}", short_id(id));
    }
    Ok(())
}

pub fn edit_command(ctx: &Context, id: &str, text: &str) -> Result<()> {
    let log = ctx.quest_log()?;
    let outcome = log.edit_task(id, text)?;
    if let Some(id) = &outcome.task_id {
        println!("Updated quest {}", short_id(id));
    }
    Ok(())
}

pub fn delete_command(ctx: &Context, id: &str) -> Result<()> {
    let log = ctx.quest_log()?;
    let outcome = log.delete_task(id)?;
    if let Some(id) = &outcome.task_id {
        println!("Deleted quest {}", short_id(id));
    }
    Ok(())
}
