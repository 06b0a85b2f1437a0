use serde::{Deserialize, Serialize};

use crate::domain::common::{Attachment, Branch, Company, GuestRef, Reference};
use crate::shared::serde_utils::{lenient, text};

/// Заявка на выселение / перевод резидента
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemovalRequest {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub guest_id: Option<Reference<GuestRef>>,
    #[serde(deserialize_with = "lenient")]
    pub branch_id: Option<Reference<Branch>>,
    #[serde(deserialize_with = "lenient")]
    pub company_id: Option<Reference<Company>>,
    #[serde(deserialize_with = "text")]
    pub removal_status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub removal_attachment_file: Option<Attachment>,
    #[serde(deserialize_with = "text")]
    pub created_at: Option<String>,
}

/// The two removal queues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RemovalKind {
    /// Inter-branch transfers (in transit)
    Transfer,
    /// Evictions and other removals
    Other,
}

impl RemovalKind {
    /// Status in which a request still awaits a decision.
    pub fn reviewable_status(&self) -> &'static str {
        match self {
            RemovalKind::Transfer => "pending",
            RemovalKind::Other => "requested",
        }
    }

    pub fn default_approval_notes(&self) -> &'static str {
        match self {
            RemovalKind::Transfer => "Transfer approved - guest moving to new location",
            RemovalKind::Other => "Approved for eviction due to rule violations",
        }
    }

    pub fn default_rejection_reason(&self) -> &'static str {
        match self {
            RemovalKind::Transfer => {
                "Transfer request rejected - insufficient documentation provided"
            }
            RemovalKind::Other => "Request Rejected - insufficient documentation provided",
        }
    }
}
