use anyhow::{Context, Result};
use keyring::Entry;

use crate::config::Config;

/// Keychain service prefix; the backend base URL is appended per store.
const SERVICE_PREFIX: &str = "feedapp";

/// Optional "remember me" storage for login passwords, backed by the OS
/// keychain. Independent of the session store - tokens expire after 15
/// minutes, remembered passwords do not.
///
/// Entries are scoped to the backend they were used against, so a password
/// remembered for a local dev server is never offered when logging in to a
/// different deployment.
pub struct CredentialStore {
    service: String,
}

impl CredentialStore {
    /// Credential store for one backend deployment
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            service: format!("{}:{}", SERVICE_PREFIX, base_url.as_ref()),
        }
    }

    /// Remember the password for a username on this backend
    pub fn store(&self, username: &str, password: &str) -> Result<()> {
        self.entry(username)?
            .set_password(password)
            .context("Failed to store password in keychain")?;
        Ok(())
    }

    /// Retrieve the remembered password for a username on this backend
    pub fn get_password(&self, username: &str) -> Result<String> {
        self.entry(username)?
            .get_password()
            .context("Failed to retrieve password from keychain")
    }

    /// Forget the remembered password for a username on this backend
    pub fn delete(&self, username: &str) -> Result<()> {
        self.entry(username)?
            .delete_credential()
            .context("Failed to delete credential from keychain")?;
        Ok(())
    }

    /// Check if a password is remembered for a username on this backend
    pub fn has_credentials(&self, username: &str) -> bool {
        self.entry(username)
            .map(|entry| entry.get_password().is_ok())
            .unwrap_or(false)
    }

    /// Credentials for the account named in the config, if one was
    /// remembered on this backend. Feeds the login form's pre-fill.
    pub fn remembered_login(&self, config: &Config) -> Option<(String, String)> {
        let username = config.last_username.clone()?;
        let password = self.get_password(&username).ok()?;
        Some((username, password))
    }

    fn entry(&self, username: &str) -> Result<Entry> {
        Entry::new(&self.service, username).context("Failed to create keyring entry")
    }
}
