use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Backend rejected request ({status}): {message:?}")]
    Backend {
        status: reqwest::StatusCode,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Login response carried no authorization header")]
    MissingToken,
}

/// Shape of a structured backend error body
#[derive(Debug, Deserialize)]
struct BackendMessage {
    message: String,
}

impl ApiError {
    /// Extract the `message` field from a structured error body, if any.
    fn backend_message(body: &str) -> Option<String> {
        serde_json::from_str::<BackendMessage>(body)
            .ok()
            .map(|m| m.message)
    }

    /// Consume a non-success response, keeping the backend message when the
    /// body parses as `{"message": ...}`.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| Self::backend_message(&body));
        ApiError::Backend { status, message }
    }
}
