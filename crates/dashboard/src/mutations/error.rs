use thiserror::Error;

use super::kind::MutationKind;
use super::notification::Notification;
use crate::api::ApiError;

#[derive(Debug, Error)]
pub enum MutationError {
    /// Rejected before any request was sent
    #[error("{message}")]
    Invalid { title: &'static str, message: String },

    #[error("{0} is already in progress")]
    Pending(MutationKind),

    #[error("{kind} failed: {source}")]
    Api {
        kind: MutationKind,
        #[source]
        source: ApiError,
    },
}

impl MutationError {
    pub fn invalid(title: &'static str, message: impl Into<String>) -> Self {
        MutationError::Invalid {
            title,
            message: message.into(),
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            MutationError::Invalid { title, message } => Notification::failure(*title, message.clone()),
            MutationError::Pending(kind) => {
                Notification::failure("Please wait", format!("{} is already in progress", kind))
            }
            MutationError::Api { kind, source } => Notification::failure(
                kind.failure_title(),
                source.user_message(kind.fallback_message()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::api_error::ApiErrorBody;

    #[test]
    fn test_api_failure_notification() {
        let err = MutationError::Api {
            kind: MutationKind::ResolveIncident,
            source: ApiError::Status {
                status: 422,
                body: ApiErrorBody {
                    message: Some("Incident already closed".into()),
                    ..ApiErrorBody::default()
                },
            },
        };
        let n = err.notification();
        assert_eq!(n.title, "Update Failed");
        assert_eq!(n.description, "Incident already closed");
        assert!(n.is_destructive());
    }
}
