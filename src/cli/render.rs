//! Terminal output helpers shared by commands

use questlog::engine::{Achievement, GamificationEvent, XpRewards};
use questlog::{Task, DUE_DATE_FORMAT};

/// Short id shown in listings
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

pub fn print_task(task: &Task) {
    let mark = if task.completed { "x" } else { " " };
    let mut line = format!(
        "  [{}] {}  {:<6} +{}XP  {}",
        mark,
        short_id(&task.id),
        task.priority,
        XpRewards::for_priority(task.priority),
        task.text
    );
    if let Some(due) = task.due_date {
        line.push_str(&format!("  (due {})", due.format(DUE_DATE_FORMAT)));
    }
    println!("{}", line);
}

pub fn print_events(events: &[GamificationEvent]) {
    for event in events {
        match event {
            GamificationEvent::LevelUp(level_up) => {
                println!("*** Level up! You are now level {} ***", level_up.new_level);
            }
            GamificationEvent::AchievementUnlocked { id } => {
                let name = Achievement::find(id).map(|a| a.name).unwrap_or(*id);
                println!("*** Achievement unlocked: {} ***", name);
            }
        }
    }
}
