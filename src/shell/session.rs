//! Sign-in state kept in the config file

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::error::QuestError;
use crate::store::QuestDb;

/// Sign in as `display_name` and remember the session in `config`.
///
/// The caller saves the config.
pub fn sign_in(db: &QuestDb, config: &mut Config, display_name: &str) -> Result<String> {
    let user_id = db.sign_in(display_name)?;
    config.session.user_id = Some(user_id.clone());
    config.session.display_name = Some(display_name.trim().to_string());
    info!("Signed in as {}", display_name.trim());
    Ok(user_id)
}

/// Forget the active session. Returns the name that was signed in, if any.
pub fn sign_out(config: &mut Config) -> Option<String> {
    let name = config.session.display_name.clone();
    config.session.clear();
    name
}

/// The signed-in user's id
pub fn current_user(config: &Config) -> Result<&str, QuestError> {
    config
        .session
        .user_id
        .as_deref()
        .ok_or(QuestError::NotSignedIn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_and_out() {
        let db = QuestDb::open_in_memory().unwrap();
        let mut config = Config::default();
        assert!(matches!(current_user(&config), Err(QuestError::NotSignedIn)));

        let id = sign_in(&db, &mut config, " ada ").unwrap();
        assert_eq!(current_user(&config).unwrap(), id);
        assert_eq!(config.session.display_name.as_deref(), Some("ada"));

        assert_eq!(sign_out(&mut config).as_deref(), Some("ada"));
        assert!(current_user(&config).is_err());
        assert_eq!(sign_out(&mut config), None);
    }
}
