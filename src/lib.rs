//! questlog - Productivity Quest
//!
//! A personal quest (task) tracker with light gamification: completing
//! quests earns XP, XP earns levels, and milestones unlock achievements.
//!
//! ## Layout
//!
//! - [`engine`]: pure gamification rules (XP, levels, achievements, ordering).
//! - [`shell`]: user actions that load state, run the engine and persist.
//! - [`store`]: SQLite persistence and the local sign-in registry.
//! - [`config`]: `~/.questlog/config.toml`.

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod shell;
pub mod store;

pub use domain::*;
pub use error::QuestError;
