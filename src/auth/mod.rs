//! Authentication module for managing user sessions and credentials.
//!
//! This module provides:
//! - `SessionStore`: the bearer token (fixed 15-minute expiry) plus the
//!   in-memory user profile
//! - `CredentialStore`: secure OS-level credential storage via keyring
//!
//! The token is persisted to disk; the profile is volatile and lost when the
//! store is dropped.

pub mod credentials;
pub mod session;

pub use credentials::CredentialStore;
pub use session::SessionStore;
