use serde::{Deserialize, Serialize};

use super::aggregate::RemovalKind;

/// Body of `POST /su-removal/approve-transfer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveTransferRequest {
    pub guest_ids: Vec<String>,
    pub target_company_id: String,
    pub target_branch_id: String,
    pub target_location_id: String,
    pub target_room_id: String,
    pub approval_notes: String,
}

/// Body of the approve-other-removals call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApproveRemovalRequest {
    pub guest_ids: Vec<String>,
    pub approval_notes: String,
}

impl ApproveRemovalRequest {
    pub fn new(guest_id: impl Into<String>, notes: Option<String>) -> Self {
        Self {
            guest_ids: vec![guest_id.into()],
            approval_notes: notes
                .unwrap_or_else(|| RemovalKind::Other.default_approval_notes().to_string()),
        }
    }
}

/// Body of both reject calls
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectRemovalRequest {
    pub guest_ids: Vec<String>,
    pub rejection_reason: String,
}

impl RejectRemovalRequest {
    pub fn new(kind: RemovalKind, guest_id: impl Into<String>, reason: Option<String>) -> Self {
        Self {
            guest_ids: vec![guest_id.into()],
            rejection_reason: reason
                .unwrap_or_else(|| kind.default_rejection_reason().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reject_body() {
        let body = serde_json::to_value(RejectRemovalRequest::new(RemovalKind::Transfer, "g1", None))
            .unwrap();
        assert_eq!(
            body,
            json!({
                "guestIds": ["g1"],
                "rejectionReason": "Transfer request rejected - insufficient documentation provided"
            })
        );
    }

    #[test]
    fn test_approve_removal_body_with_notes() {
        let body = serde_json::to_value(ApproveRemovalRequest::new("g2", Some("Left voluntarily".into())))
            .unwrap();
        assert_eq!(body, json!({"guestIds": ["g2"], "approvalNotes": "Left voluntarily"}));
    }
}
