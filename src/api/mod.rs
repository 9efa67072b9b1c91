//! REST API client module for the FeedApp backend.
//!
//! This module provides the `ApiClient` for communicating with the FeedApp
//! API: account signup and login, profile management, and feed CRUD.
//!
//! Protected endpoints use bearer token authentication; the token is issued
//! by the login endpoint in its `Authorization` response header and must be
//! passed explicitly to each protected call.

pub mod client;
pub mod error;
pub mod response;

pub use client::ApiClient;
pub use error::ApiError;
pub use response::ApiResponse;
