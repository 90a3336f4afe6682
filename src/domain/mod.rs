//! Core domain types for questlog

mod profile;
mod task;

pub use profile::{resolve_avatar, UserProfile, AVATARS, DEFAULT_AVATAR};
pub use task::{parse_due_date, Priority, Task, TaskFilter, TaskId, DUE_DATE_FORMAT};
