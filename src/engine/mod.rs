//! Gamification system: XP, levels, achievements and quest ordering
//!
//! Pure functions over an in-memory profile and task list. Nothing in this
//! module performs I/O; the shell supplies state and persists the results.

mod checker;
mod dashboard;
mod definitions;
mod levels;
mod manager;
mod ordering;

pub use checker::{evaluate_achievements, AchievementCheck};
pub use dashboard::{incomplete_count, xp_fraction, BadgeView, Dashboard};
pub use definitions::{Achievement, Condition, ACHIEVEMENTS};
pub use levels::{apply_xp, apply_xp_amount, xp_required_for_level, LevelUp, XpGain, XpRewards, XP_PER_LEVEL};
pub use manager::{Completion, GamificationEngine, GamificationEvent};
pub use ordering::{compare_tasks, sort_tasks, sort_tasks_in_place};
