use serde::{Deserialize, Serialize};

use crate::shared::serde_utils::text;

/// Error body returned by the backend on a failed request.
///
/// Any of the fields may be missing; the backend is not consistent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiErrorBody {
    #[serde(deserialize_with = "text")]
    pub message: Option<String>,
    #[serde(deserialize_with = "text")]
    pub details: Option<String>,
    #[serde(deserialize_with = "text")]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Picks the message shown to the user.
    ///
    /// Order: `message`, `details`, the transport error text, `error`,
    /// then `fallback`. Empty strings are skipped.
    pub fn user_message(&self, transport: Option<&str>, fallback: &str) -> String {
        [
            self.message.as_deref(),
            self.details.as_deref(),
            transport,
            self.error.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty())
        .unwrap_or(fallback)
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wins() {
        let body = ApiErrorBody {
            message: Some("Guest not found".into()),
            details: Some("id=7".into()),
            error: Some("NotFound".into()),
        };
        assert_eq!(body.user_message(Some("HTTP 404"), "oops"), "Guest not found");
    }

    #[test]
    fn test_fallback_chain() {
        let body = ApiErrorBody {
            message: Some(String::new()),
            details: None,
            error: Some("Conflict".into()),
        };
        assert_eq!(body.user_message(Some("HTTP 409"), "oops"), "HTTP 409");
        assert_eq!(body.user_message(None, "oops"), "Conflict");
        assert_eq!(ApiErrorBody::default().user_message(None, "oops"), "oops");
    }

    #[test]
    fn test_parses_partial_body() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"details": "room full"}"#).unwrap();
        assert_eq!(body.user_message(None, "oops"), "room full");
    }

    #[test]
    fn test_odd_message_keeps_other_fields() {
        let body: ApiErrorBody = serde_json::from_str(
            r#"{"message": ["name is required"], "details": "validation failed", "error": 400}"#,
        )
        .unwrap();
        assert_eq!(body.message, None);
        assert_eq!(body.error.as_deref(), Some("400"));
        assert_eq!(body.user_message(None, "oops"), "validation failed");
    }
}
