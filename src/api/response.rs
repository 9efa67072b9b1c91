use super::ApiError;

/// Message shown to users when the backend gave us nothing better.
pub const FALLBACK_MESSAGE: &str = "Invalid request. Please try again later.";

/// Normalized outcome of an API call.
///
/// Every `ApiClient` operation resolves to one of these three cases instead
/// of returning a `Result` - the facade never propagates transport errors to
/// its callers. UI code matches on the variant: render the payload, show the
/// backend's own message, or show [`FALLBACK_MESSAGE`].
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    /// HTTP 200; carries the decoded response body (`()` for endpoints that
    /// only acknowledge).
    Success(T),
    /// The backend answered with a structured error; the message is surfaced
    /// verbatim.
    Rejected(String),
    /// Transport failure, or an error body without a usable message.
    Failed,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    /// Human-readable error message, or `None` on success.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Rejected(message) => Some(message),
            ApiResponse::Failed => Some(FALLBACK_MESSAGE),
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            ApiResponse::Success(payload) => Some(payload),
            _ => None,
        }
    }

    /// Collapse a dispatch outcome into the normalized contract. A backend
    /// error keeps its message; everything else becomes the generic failure.
    pub fn from_outcome(outcome: Result<T, ApiError>) -> Self {
        match outcome {
            Ok(payload) => ApiResponse::Success(payload),
            Err(ApiError::Backend {
                message: Some(message),
                ..
            }) => ApiResponse::Rejected(message),
            Err(_) => ApiResponse::Failed,
        }
    }
}
