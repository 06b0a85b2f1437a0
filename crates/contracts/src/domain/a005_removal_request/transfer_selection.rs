use super::aggregate::RemovalKind;
use super::requests::ApproveTransferRequest;
use crate::domain::a007_room::CapacityRoom;
use crate::domain::common::{destination_branches, Branch};

/// Destination picker of the approve-transfer dialog.
///
/// Opened for one resident with their company and current branch; the
/// destination branch must differ from the current one. Choosing a branch
/// clears any room already picked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransferSelection {
    user_id: Option<String>,
    company_id: Option<String>,
    current_branch_id: Option<String>,
    branch_id: Option<String>,
    room_id: Option<String>,
    location_id: Option<String>,
}

fn present(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|v| !v.is_empty())
}

impl TransferSelection {
    pub fn open(
        user_id: impl Into<String>,
        company_id: impl Into<String>,
        current_branch_id: impl Into<String>,
    ) -> Self {
        Self {
            user_id: present(user_id),
            company_id: present(company_id),
            current_branch_id: present(current_branch_id),
            ..Self::default()
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn company_id(&self) -> Option<&str> {
        self.company_id.as_deref()
    }

    pub fn branch_id(&self) -> Option<&str> {
        self.branch_id.as_deref()
    }

    pub fn room_id(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    pub fn location_id(&self) -> Option<&str> {
        self.location_id.as_deref()
    }

    /// Branches of the company, minus the resident's current branch.
    pub fn candidate_branches<'a>(&self, branches: &'a [Branch]) -> Vec<&'a Branch> {
        destination_branches(branches, self.current_branch_id.as_deref())
    }

    pub fn select_branch(&mut self, branch_id: impl Into<String>) {
        self.branch_id = present(branch_id);
        self.room_id = None;
        self.location_id = None;
    }

    /// Picks a room; its location comes with it.
    pub fn select_room(&mut self, room: &CapacityRoom) {
        self.room_id = present(room.id.clone());
        self.location_id = present(room.location_id.clone());
    }

    pub fn is_complete(&self) -> bool {
        self.user_id.is_some()
            && self.company_id.is_some()
            && self.branch_id.is_some()
            && self.room_id.is_some()
            && self.location_id.is_some()
    }

    /// Request body, or `None` while a part of the selection is missing.
    pub fn request(&self, notes: Option<String>) -> Option<ApproveTransferRequest> {
        Some(ApproveTransferRequest {
            guest_ids: vec![self.user_id.clone()?],
            target_company_id: self.company_id.clone()?,
            target_branch_id: self.branch_id.clone()?,
            target_location_id: self.location_id.clone()?,
            target_room_id: self.room_id.clone()?,
            approval_notes: notes.unwrap_or_else(|| {
                RemovalKind::Transfer.default_approval_notes().to_string()
            }),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn branches() -> Vec<Branch> {
        serde_json::from_value(json!([
            {"_id": "b1", "name": "North"},
            {"_id": "b2", "name": "South"},
            {"_id": "b3", "name": "East"}
        ]))
        .unwrap()
    }

    fn room(id: &str, location: &str) -> CapacityRoom {
        CapacityRoom {
            id: id.into(),
            location_id: location.into(),
            ..CapacityRoom::default()
        }
    }

    #[test]
    fn test_current_branch_is_excluded() {
        let sel = TransferSelection::open("g1", "c1", "b2");
        let all = branches();
        let names: Vec<_> = sel
            .candidate_branches(&all)
            .iter()
            .map(|b| b.name.clone().unwrap_or_default())
            .collect();
        assert_eq!(names, vec!["North", "East"]);
    }

    #[test]
    fn test_branch_change_clears_room_and_location() {
        let mut sel = TransferSelection::open("g1", "c1", "b2");
        sel.select_branch("b1");
        sel.select_room(&room("r1", "l1"));
        assert!(sel.is_complete());
        sel.select_branch("b3");
        assert_eq!(sel.room_id(), None);
        assert_eq!(sel.location_id(), None);
        assert!(!sel.is_complete());
        assert!(sel.request(None).is_none());
    }

    #[test]
    fn test_request_body() {
        let mut sel = TransferSelection::open("g1", "c1", "b2");
        sel.select_branch("b1");
        sel.select_room(&room("r1", "l1"));
        let body = serde_json::to_value(sel.request(None).unwrap()).unwrap();
        assert_eq!(
            body,
            json!({
                "guestIds": ["g1"],
                "targetCompanyId": "c1",
                "targetBranchId": "b1",
                "targetLocationId": "l1",
                "targetRoomId": "r1",
                "approvalNotes": "Transfer approved - guest moving to new location"
            })
        );
        sel.reset();
        assert_eq!(sel, TransferSelection::default());
    }
}
