use serde::{Deserialize, Serialize};

/// Body for `POST /user/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    #[serde(rename = "emailId")]
    pub email_id: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub phone: String,
}

/// A user account as the backend reports it.
///
/// Everything is optional: the verify/login/profile endpoints return
/// different subsets of these fields depending on account state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(rename = "userId", default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(rename = "emailId", default)]
    pub email_id: Option<String>,
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "emailVerified", default)]
    pub email_verified: Option<bool>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// What a successful login yields: the profile from the response body plus
/// the bearer token from the `Authorization` response header.
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    pub user_data: UserProfile,
    pub token: String,
}

/// Body for `POST /user/update/profile` - the public-facing profile fields.
/// Fields left as `None` are omitted from the request, same as
/// [`AccountUpdate`].
#[derive(Debug, Clone, Serialize, Default)]
pub struct PublicProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Body for `POST /user/update` - basic account fields. Fields left as
/// `None` are omitted from the request so the backend keeps their current
/// values.
#[derive(Debug, Clone, Serialize, Default)]
pub struct AccountUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "emailId", skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
