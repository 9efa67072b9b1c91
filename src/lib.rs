//! Client library for the FeedApp social feed backend.
//!
//! This crate wraps the FeedApp REST API in a typed client facade. Every
//! operation resolves to an [`ApiResponse`] instead of returning an error,
//! so callers get exactly one of: the decoded payload, a backend-supplied
//! rejection message, or a generic failure they can show to the user.
//!
//! Alongside the client it provides:
//! - [`SessionStore`]: holder of the bearer token (fixed 15-minute expiry)
//!   and the last-known user profile
//! - `CredentialStore`: optional OS-keychain storage for remembered logins
//! - `Config`: base URL and last-used username, persisted to disk

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError, ApiResponse};
pub use auth::SessionStore;
pub use config::Config;
