//! Domain errors raised by the application shell
//!
//! The gamification engine itself is total and never fails; these errors
//! cover user input the shell rejects before touching the engine or store.

use crate::domain::TaskId;

/// Error type for rejected quest operations
#[derive(Debug, thiserror::Error)]
pub enum QuestError {
    #[error("Not signed in. Run `questlog login <name>` first")]
    NotSignedIn,

    #[error("Quest not found: {0}")]
    TaskNotFound(TaskId),

    #[error("Quest text must not be empty")]
    EmptyTaskText,

    #[error("Quest id prefix '{0}' matches more than one quest")]
    AmbiguousTaskId(String),

    #[error("Quest {0} is already completed")]
    AlreadyCompleted(TaskId),

    #[error("Quest {0} is not completed")]
    NotCompleted(TaskId),

    #[error("Quest {0} is completed and can no longer be edited")]
    TaskCompleted(TaskId),

    #[error("Unknown avatar '{0}'")]
    UnknownAvatar(String),

    #[error("User name must not be empty")]
    EmptyUserName,
}
