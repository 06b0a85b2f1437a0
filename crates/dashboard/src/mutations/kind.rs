use crate::queries::QueryKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MutationKind {
    ApproveTransfer,
    RejectTransfer,
    ApproveRemoval,
    RejectRemoval,
    ResolveIncident,
    Relocate,
    UpdateRoom,
    SaveSignature,
}

impl MutationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationKind::ApproveTransfer => "approve-transfer",
            MutationKind::RejectTransfer => "reject-transfer",
            MutationKind::ApproveRemoval => "approve-removal",
            MutationKind::RejectRemoval => "reject-removal",
            MutationKind::ResolveIncident => "resolve-incident",
            MutationKind::Relocate => "relocate",
            MutationKind::UpdateRoom => "update-room",
            MutationKind::SaveSignature => "save-signature",
        }
    }

    /// Query names refetched after success.
    pub fn invalidates(&self) -> &'static [&'static str] {
        match self {
            MutationKind::ApproveTransfer | MutationKind::RejectTransfer => &["inTransitUsers"],
            MutationKind::ApproveRemoval | MutationKind::RejectRemoval => &["otherRemovals"],
            MutationKind::ResolveIncident => &["incidents"],
            MutationKind::Relocate | MutationKind::SaveSignature => &["guests"],
            MutationKind::UpdateRoom => &["companies"],
        }
    }

    pub fn failure_title(&self) -> &'static str {
        match self {
            MutationKind::ResolveIncident => "Update Failed",
            _ => "Error",
        }
    }

    pub fn fallback_message(&self) -> &'static str {
        match self {
            MutationKind::ApproveTransfer => "Failed to approve transfer. Please try again.",
            MutationKind::RejectTransfer => "Failed to reject transfer. Please try again.",
            MutationKind::ApproveRemoval => "Failed to approve removal. Please try again.",
            MutationKind::RejectRemoval => "Failed to reject removal. Please try again.",
            MutationKind::ResolveIncident => "Something went wrong.",
            MutationKind::Relocate => "Failed to relocate guest. Please try again.",
            MutationKind::UpdateRoom => "Failed to update room. Please try again.",
            MutationKind::SaveSignature => "Failed to save signature. Please try again.",
        }
    }

    pub fn is_affected(&self, key: &QueryKey) -> bool {
        self.invalidates().contains(&key.name())
    }
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
