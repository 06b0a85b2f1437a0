use contracts::domain::a003_incident::{ResolveIncidentRequest, ResolveStatus};
use contracts::domain::a005_removal_request::{
    ApproveRemovalRequest, RejectRemovalRequest, RemovalKind, TransferSelection,
};
use contracts::domain::a007_room::{room_update_payload, CapacityRoom, RelocationSelection};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::error::MutationError;
use super::kind::MutationKind;
use super::notification::Notification;
use super::signature::{decode_data_url, SignatureRole};
use crate::api::{HttpMethod, Transport, UploadFile};
use crate::session::Session;

enum Payload {
    Json(HttpMethod, Value),
    File(UploadFile),
}

fn to_body<S: Serialize>(request: &S) -> Result<Value, MutationError> {
    serde_json::to_value(request).map_err(|e| MutationError::invalid("Error", e.to_string()))
}

fn require_id(id: &str, what: &str) -> Result<String, MutationError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(MutationError::invalid(
            "Incomplete Selection",
            format!("Please select a {}.", what),
        ));
    }
    Ok(urlencoding::encode(id).into_owned())
}

impl<T: Transport> Session<T> {
    async fn run(
        &self,
        kind: MutationKind,
        path: &str,
        payload: Payload,
    ) -> Result<Value, MutationError> {
        let _token = self
            .pending
            .try_begin(kind)
            .ok_or(MutationError::Pending(kind))?;
        let request_id = Uuid::new_v4();
        tracing::info!("[{}] {} -> {}", request_id, kind, path);

        let result = match payload {
            Payload::Json(method, body) => self.transport.send_json(method, path, body).await,
            Payload::File(file) => self.transport.upload(path, file).await,
        };

        match result {
            Ok(response) => {
                for name in kind.invalidates() {
                    self.cache.invalidate(name);
                }
                tracing::info!("[{}] {} succeeded", request_id, kind);
                Ok(response)
            }
            Err(source) => {
                tracing::warn!("[{}] {} failed: {}", request_id, kind, source);
                Err(MutationError::Api { kind, source })
            }
        }
    }

    /// Approves a transfer to the selected branch and room; resets the
    /// selection on success.
    pub async fn approve_transfer(
        &self,
        selection: &mut TransferSelection,
        notes: Option<String>,
    ) -> Result<Notification, MutationError> {
        let request = selection.request(notes).ok_or_else(|| {
            MutationError::invalid(
                "Incomplete Selection",
                "Please select a destination branch and room.",
            )
        })?;
        let body = to_body(&request)?;
        self.run(
            MutationKind::ApproveTransfer,
            "/su-removal/approve-transfer",
            Payload::Json(HttpMethod::Post, body),
        )
        .await?;
        selection.reset();
        Ok(Notification::success(
            "Transfer Approved",
            "The service user is moving to the selected branch.",
        ))
    }

    pub async fn reject_transfer(
        &self,
        guest_id: &str,
        reason: Option<String>,
    ) -> Result<Notification, MutationError> {
        require_id(guest_id, "service user")?;
        let body = to_body(&RejectRemovalRequest::new(
            RemovalKind::Transfer,
            guest_id.trim(),
            reason,
        ))?;
        self.run(
            MutationKind::RejectTransfer,
            "/su-removal/reject-removal",
            Payload::Json(HttpMethod::Post, body),
        )
        .await?;
        Ok(Notification::success("Transfer Rejected", "The transfer request was rejected."))
    }

    pub async fn approve_removal(
        &self,
        guest_id: &str,
        notes: Option<String>,
    ) -> Result<Notification, MutationError> {
        require_id(guest_id, "service user")?;
        let body = to_body(&ApproveRemovalRequest::new(guest_id.trim(), notes))?;
        self.run(
            MutationKind::ApproveRemoval,
            "/su-removal/approve-other-removals",
            Payload::Json(HttpMethod::Post, body),
        )
        .await?;
        Ok(Notification::success("Removal Approved", "The removal request was approved."))
    }

    pub async fn reject_removal(
        &self,
        guest_id: &str,
        reason: Option<String>,
    ) -> Result<Notification, MutationError> {
        require_id(guest_id, "service user")?;
        let body = to_body(&RejectRemovalRequest::new(RemovalKind::Other, guest_id.trim(), reason))?;
        self.run(
            MutationKind::RejectRemoval,
            "/su-removal/reject-other-removals",
            Payload::Json(HttpMethod::Post, body),
        )
        .await?;
        Ok(Notification::success("Removal Rejected", "The removal request was rejected."))
    }

    /// A status must be chosen; without one nothing is sent.
    pub async fn resolve_incident(
        &self,
        incident_id: &str,
        status: Option<ResolveStatus>,
    ) -> Result<Notification, MutationError> {
        let id = require_id(incident_id, "incident")?;
        let status = status.ok_or_else(|| {
            MutationError::invalid("Incomplete Selection", "Please choose a new status.")
        })?;
        let body = to_body(&ResolveIncidentRequest::new(status))?;
        self.run(
            MutationKind::ResolveIncident,
            &format!("/incident/{}/resolve", id),
            Payload::Json(HttpMethod::Patch, body),
        )
        .await?;
        Ok(Notification::success(
            "Status Updated",
            format!("Incident marked as {}", status),
        ))
    }

    /// Moves a resident to another room of their branch; resets the
    /// selection on success.
    pub async fn relocate(
        &self,
        guest_id: &str,
        guest_name: &str,
        selection: &mut RelocationSelection,
        rooms: &[CapacityRoom],
    ) -> Result<Notification, MutationError> {
        let id = require_id(guest_id, "service user")?;
        let request = selection
            .request(rooms)
            .map_err(|e| MutationError::invalid(e.title(), e.to_string()))?;
        let body = to_body(&request)?;
        self.run(
            MutationKind::Relocate,
            &format!("/guest/{}/relocate", id),
            Payload::Json(HttpMethod::Patch, body),
        )
        .await?;
        selection.reset();
        Ok(Notification::success(
            "Success",
            format!("{} has been successfully relocated.", guest_name),
        ))
    }

    /// Sends the room document without its server-managed fields.
    pub async fn update_room(&self, room_id: &str, room: &Value) -> Result<Notification, MutationError> {
        let id = require_id(room_id, "room")?;
        self.run(
            MutationKind::UpdateRoom,
            &format!("/room/{}", id),
            Payload::Json(HttpMethod::Patch, room_update_payload(room)),
        )
        .await?;
        Ok(Notification::success("Room Updated", "Room details were saved."))
    }

    pub async fn save_signature(
        &self,
        guest_id: &str,
        role: SignatureRole,
        data_url: &str,
    ) -> Result<Notification, MutationError> {
        let id = require_id(guest_id, "service user")?;
        let (mime, bytes) = decode_data_url(data_url)?;
        let file = UploadFile {
            field: "signature".to_string(),
            file_name: role.file_name().to_string(),
            mime,
            bytes,
        };
        self.run(
            MutationKind::SaveSignature,
            &format!("/guest/{}/signature", id),
            Payload::File(file),
        )
        .await?;
        Ok(Notification::success("Signature Saved", "The signature was uploaded."))
    }
}
