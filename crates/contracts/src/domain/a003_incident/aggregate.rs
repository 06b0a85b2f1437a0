use serde::{Deserialize, Serialize};

use crate::domain::common::{Branch, GuestRef, ImagePaths, Reference, User};
use crate::shared::serde_utils::{lenient, text};

/// Инцидент as stored by the backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Incident {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "text")]
    pub severity: Option<String>,
    #[serde(deserialize_with = "text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "text")]
    pub category: Option<String>,
    #[serde(rename = "type", deserialize_with = "text")]
    pub incident_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub reported_by: Option<Reference<User>>,
    #[serde(deserialize_with = "lenient")]
    pub assigned_to: Option<Reference<User>>,
    #[serde(deserialize_with = "lenient")]
    pub branch_id: Option<Reference<Branch>>,
    #[serde(deserialize_with = "text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub guest_id: Option<Reference<GuestRef>>,
    #[serde(deserialize_with = "lenient")]
    pub evidence: Option<ImagePaths>,
    #[serde(deserialize_with = "text")]
    pub actions_taken: Option<String>,
    #[serde(deserialize_with = "text")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "text")]
    pub resolved_at: Option<String>,
}

/// Target status of the resolve action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveStatus {
    Resolved,
    Closed,
}

impl ResolveStatus {
    pub const ALL: [ResolveStatus; 2] = [ResolveStatus::Resolved, ResolveStatus::Closed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveStatus::Resolved => "Resolved",
            ResolveStatus::Closed => "Closed",
        }
    }

    /// Case-insensitive parse of a user choice.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

impl std::fmt::Display for ResolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `PATCH /incident/{id}/resolve`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveIncidentRequest {
    pub status: ResolveStatus,
    pub resolution_notes: String,
}

impl ResolveIncidentRequest {
    pub const DEFAULT_NOTES: &'static str = "Issue resolved";

    pub fn new(status: ResolveStatus) -> Self {
        Self {
            status,
            resolution_notes: Self::DEFAULT_NOTES.to_string(),
        }
    }
}
