//! API client for communicating with the FeedApp REST API.
//!
//! This module provides the `ApiClient` struct for account, profile, and
//! feed operations. Every public operation resolves to an [`ApiResponse`]
//! and never returns an error - wire failures are logged and collapsed into
//! the normalized contract.

use reqwest::{header, Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::models::{
    AccountUpdate, Feed, FeedMetadata, FeedPage, LoginSession, NewFeed, PublicProfileUpdate,
    SignupRequest, UserProfile,
};

use super::{ApiError, ApiResponse};

// ============================================================================
// Constants
// ============================================================================

/// Default base URL for a locally running backend
const DEFAULT_BASE_URL: &str = "http://localhost:8081";

/// HTTP request timeout in seconds.
/// 30s allows for slow responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fixed page size for feed listing endpoints. The size is embedded in the
/// request path; the backend paginates accordingly.
const FEED_PAGE_SIZE: u32 = 5;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct PasswordReset<'a> {
    password: &'a str,
}

/// API client for the FeedApp backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
///
/// Protected operations take the bearer token as an explicit parameter; the
/// client never reads it from ambient state.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the default base URL
    pub fn new() -> anyhow::Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a specific backend base URL
    pub fn with_base_url(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    // ===== Account Operations =====

    /// Create a new account. `POST /user/signup`, acknowledgement only.
    pub async fn register(&self, signup: &SignupRequest) -> ApiResponse<()> {
        let request = self.request(Method::POST, "/user/signup", None).json(signup);
        Self::normalize("register", Self::dispatch_ack(request).await)
    }

    /// Confirm the account email. Protected; returns the updated account.
    pub async fn verify_email(&self, token: &str) -> ApiResponse<UserProfile> {
        let request = self.request(Method::GET, "/user/verify/email", Some(token));
        Self::normalize("verify_email", Self::dispatch(request).await)
    }

    /// Authenticate. The profile comes from the response body; the bearer
    /// token comes from the `Authorization` response header.
    pub async fn login(&self, username: &str, password: &str) -> ApiResponse<LoginSession> {
        Self::normalize("login", self.try_login(username, password).await)
    }

    async fn try_login(&self, username: &str, password: &str) -> Result<LoginSession, ApiError> {
        let response = self
            .request(Method::POST, "/user/login", None)
            .json(&LoginRequest { username, password })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }

        // Some backends frame the header value as "Bearer <token>"; store the
        // bare token either way.
        let token = response
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(|raw| raw.strip_prefix("Bearer ").unwrap_or(raw).to_string())
            .ok_or(ApiError::MissingToken)?;

        let user_data: UserProfile = response.json().await?;
        Ok(LoginSession { user_data, token })
    }

    /// Trigger a password-reset email. `GET /user/reset/{email}`, unprotected.
    pub async fn forgot_password(&self, email: &str) -> ApiResponse<()> {
        let request = self.request(Method::GET, &format!("/user/reset/{}", email), None);
        Self::normalize("forgot_password", Self::dispatch_ack(request).await)
    }

    /// Set a new password using the token from the reset email.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> ApiResponse<()> {
        let request = self
            .request(Method::POST, "/user/reset", Some(token))
            .json(&PasswordReset {
                password: new_password,
            });
        Self::normalize("reset_password", Self::dispatch_ack(request).await)
    }

    /// Fetch the profile for the current session. `GET /user/get`, protected.
    pub async fn fetch_profile(&self, token: &str) -> ApiResponse<UserProfile> {
        let request = self.request(Method::GET, "/user/get", Some(token));
        Self::normalize("fetch_profile", Self::dispatch(request).await)
    }

    /// Update the public-facing profile fields; returns the updated account.
    pub async fn update_public_profile(
        &self,
        token: &str,
        update: &PublicProfileUpdate,
    ) -> ApiResponse<UserProfile> {
        let request = self
            .request(Method::POST, "/user/update/profile", Some(token))
            .json(update);
        Self::normalize("update_public_profile", Self::dispatch(request).await)
    }

    /// Update basic account fields; returns the updated account.
    pub async fn update_account(
        &self,
        token: &str,
        update: &AccountUpdate,
    ) -> ApiResponse<UserProfile> {
        let request = self
            .request(Method::POST, "/user/update", Some(token))
            .json(update);
        Self::normalize("update_account", Self::dispatch(request).await)
    }

    // ===== Feed Operations =====

    /// Fetch one page of other users' posts (5 per page)
    pub async fn fetch_other_feeds(&self, token: &str, page: u32) -> ApiResponse<FeedPage> {
        let path = format!("/feeds/other/{}/{}", page, FEED_PAGE_SIZE);
        let request = self.request(Method::GET, &path, Some(token));
        Self::normalize("fetch_other_feeds", Self::dispatch(request).await)
    }

    /// Fetch one page of the caller's own posts (5 per page)
    pub async fn fetch_my_feeds(&self, token: &str, page: u32) -> ApiResponse<FeedPage> {
        let path = format!("/feeds/user/{}/{}", page, FEED_PAGE_SIZE);
        let request = self.request(Method::GET, &path, Some(token));
        Self::normalize("fetch_my_feeds", Self::dispatch(request).await)
    }

    /// Publish a new post; returns the stored post.
    pub async fn create_feed(&self, token: &str, draft: &NewFeed) -> ApiResponse<Feed> {
        let request = self.request(Method::POST, "/feeds", Some(token)).json(draft);
        Self::normalize("create_feed", Self::dispatch(request).await)
    }

    /// Attach a like or comment to a post. Acknowledgement only.
    pub async fn add_feed_metadata(
        &self,
        token: &str,
        feed_id: i64,
        metadata: &FeedMetadata,
    ) -> ApiResponse<()> {
        let request = self
            .request(Method::POST, &format!("/feeds/meta/{}", feed_id), Some(token))
            .json(metadata);
        Self::normalize("add_feed_metadata", Self::dispatch_ack(request).await)
    }

    /// Delete one of the caller's posts. Acknowledgement only.
    pub async fn delete_feed(&self, token: &str, feed_id: i64) -> ApiResponse<()> {
        let request = self.request(Method::DELETE, &format!("/feeds/{}", feed_id), Some(token));
        Self::normalize("delete_feed", Self::dispatch_ack(request).await)
    }

    // ===== Request Plumbing =====

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "dispatching request");
        let mut request = self.client.request(method, url);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Perform the exchange and decode the body on success
    async fn dispatch<T: DeserializeOwned>(
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response.json().await?)
    }

    /// Perform the exchange, discarding the body on success
    async fn dispatch_ack(request: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(())
    }

    /// Single normalization point: log the failure with the operation name,
    /// then collapse into the [`ApiResponse`] contract.
    fn normalize<T>(op: &'static str, outcome: Result<T, ApiError>) -> ApiResponse<T> {
        if let Err(ref err) = outcome {
            warn!(op, error = %err, "request failed");
        }
        ApiResponse::from_outcome(outcome)
    }
}
