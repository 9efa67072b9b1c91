//! Data models for FeedApp entities.
//!
//! Request bodies are exact (the backend validates them); response structs
//! are deliberately lenient - optional fields with defaults - so a backend
//! that omits or adds fields never breaks decoding.

pub mod feed;
pub mod user;

pub use feed::{Feed, FeedMetadata, FeedPage, NewFeed};
pub use user::{AccountUpdate, LoginSession, PublicProfileUpdate, SignupRequest, UserProfile};
