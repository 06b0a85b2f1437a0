use contracts::shared::api_error::ApiErrorBody;
use thiserror::Error;

/// Failure of one HTTP round trip
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed with status code {status}")]
    Status { status: u16, body: ApiErrorBody },

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message for a failed mutation: server message, details, transport
    /// text, server error code, then `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        let transport = self.to_string();
        match self {
            ApiError::Status { body, .. } => body.user_message(Some(&transport), fallback),
            _ => ApiErrorBody::default().user_message(Some(&transport), fallback),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
