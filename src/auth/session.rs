use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::UserProfile;

/// Session file name in the cache directory
const SESSION_FILE: &str = "session.json";

/// Token time-to-live in seconds. The backend issues 15-minute tokens with
/// no refresh; expiry is absolute from the last `set_session`.
const SESSION_TTL_SECS: i64 = 900;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredToken {
    token: String,
    issued_at: DateTime<Utc>,
}

impl StoredToken {
    fn new(token: String) -> Self {
        Self {
            token,
            issued_at: Utc::now(),
        }
    }

    fn is_expired(&self) -> bool {
        Utc::now() > self.issued_at + Duration::seconds(SESSION_TTL_SECS)
    }
}

/// Holder of the current bearer token and user profile.
///
/// The token is written to `session.json` under the cache directory so a
/// restart within the 15-minute window stays logged in. The profile is kept
/// in memory only. No token-shape validation is done here; an expired token
/// is simply reported as absent.
pub struct SessionStore {
    cache_dir: PathBuf,
    token: Option<StoredToken>,
    user_data: Option<UserProfile>,
}

impl SessionStore {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            cache_dir,
            token: None,
            user_data: None,
        }
    }

    /// Load a persisted token from disk. Returns true if a live session was
    /// found; expired records are discarded.
    pub fn load(&mut self) -> Result<bool> {
        let path = self.session_path();
        if path.exists() {
            let contents =
                std::fs::read_to_string(&path).context("Failed to read session file")?;
            let stored: StoredToken =
                serde_json::from_str(&contents).context("Failed to parse session file")?;

            if !stored.is_expired() {
                self.token = Some(stored);
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Record a freshly issued token and persist it. The 15-minute clock
    /// starts now.
    pub fn set_session(&mut self, token: impl Into<String>) -> Result<()> {
        let stored = StoredToken::new(token.into());
        let path = self.session_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create session directory")?;
        }
        let contents = serde_json::to_string_pretty(&stored)?;
        std::fs::write(&path, contents).context("Failed to write session file")?;
        self.token = Some(stored);
        Ok(())
    }

    /// The current bearer token, or `None` when unset or expired.
    pub fn get_session(&self) -> Option<&str> {
        self.token
            .as_ref()
            .filter(|stored| !stored.is_expired())
            .map(|stored| stored.token.as_str())
    }

    /// Remember the last-fetched profile. In memory only - lost on drop.
    pub fn set_user_data(&mut self, profile: UserProfile) {
        self.user_data = Some(profile);
    }

    pub fn get_user_data(&self) -> Option<&UserProfile> {
        self.user_data.as_ref()
    }

    /// Clear the token and profile. Safe to call when already logged out.
    pub fn logout(&mut self) -> Result<()> {
        self.token = None;
        self.user_data = None;
        let path = self.session_path();
        if path.exists() {
            std::fs::remove_file(path).context("Failed to remove session file")?;
        }
        Ok(())
    }

    fn session_path(&self) -> PathBuf {
        self.cache_dir.join(SESSION_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SessionStore {
        let dir = std::env::temp_dir()
            .join("feedapp-client-tests")
            .join(format!("{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        SessionStore::new(dir)
    }

    #[test]
    fn test_set_then_get_session() {
        let mut store = temp_store("set-get");
        store.set_session("tok123").expect("set_session should succeed");
        assert_eq!(store.get_session(), Some("tok123"));
    }

    #[test]
    fn test_expired_token_reported_absent() {
        let mut store = temp_store("expired");
        store.set_session("tok123").expect("set_session should succeed");
        // Backdate past the TTL
        store.token.as_mut().unwrap().issued_at =
            Utc::now() - Duration::seconds(SESSION_TTL_SECS + 1);
        assert_eq!(store.get_session(), None);
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut store = temp_store("logout");
        store.set_session("tok123").expect("set_session should succeed");
        store.set_user_data(UserProfile {
            user_id: Some(1),
            ..Default::default()
        });

        store.logout().expect("logout should succeed");
        assert_eq!(store.get_session(), None);
        assert!(store.get_user_data().is_none());

        // Idempotent
        store.logout().expect("second logout should succeed");
    }

    #[test]
    fn test_load_sees_persisted_token() {
        let mut store = temp_store("persist");
        store.set_session("tok123").expect("set_session should succeed");

        let mut reopened = SessionStore::new(store.cache_dir.clone());
        assert!(reopened.load().expect("load should succeed"));
        assert_eq!(reopened.get_session(), Some("tok123"));
    }

    #[test]
    fn test_load_discards_expired_record() {
        let mut store = temp_store("persist-expired");
        store.set_session("tok123").expect("set_session should succeed");

        // Rewrite the record with a backdated timestamp
        let stale = StoredToken {
            token: "tok123".to_string(),
            issued_at: Utc::now() - Duration::seconds(SESSION_TTL_SECS + 60),
        };
        std::fs::write(
            store.session_path(),
            serde_json::to_string(&stale).unwrap(),
        )
        .unwrap();

        let mut reopened = SessionStore::new(store.cache_dir.clone());
        assert!(!reopened.load().expect("load should succeed"));
        assert_eq!(reopened.get_session(), None);
    }

    #[test]
    fn test_user_data_is_volatile() {
        let mut store = temp_store("volatile");
        store.set_session("tok123").expect("set_session should succeed");
        store.set_user_data(UserProfile {
            username: Some("alice".to_string()),
            ..Default::default()
        });

        let mut reopened = SessionStore::new(store.cache_dir.clone());
        reopened.load().expect("load should succeed");
        assert!(reopened.get_user_data().is_none());
    }
}
