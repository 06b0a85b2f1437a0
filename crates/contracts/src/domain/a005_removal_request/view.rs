use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::{RemovalKind, RemovalRequest};
use crate::domain::common::{populated, referenced_id, Attachment};
use crate::shared::date_utils::parse_optional;
use crate::shared::list_query::{Categorized, Dated, ListRecord, Searchable};
use crate::shared::normalize::Normalize;
use crate::shared::serde_utils::non_empty;
use crate::shared::tone::{removal_status_tone, Tone};

pub const NO_PHONE: &str = "No Phone Number Provided";

/// "in_transit" -> "In Transit". Only the first underscore is replaced.
pub fn status_label(status: &str) -> String {
    let spaced = status.replacen('_', " ", 1);
    let mut label = String::with_capacity(spaced.len());
    let mut word_start = true;
    for ch in spaced.chars() {
        if word_start && ch.is_alphanumeric() {
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
        word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    label
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovalRecord {
    pub request_id: String,
    pub guest_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub room_number: Option<String>,
    pub location: Option<String>,
    pub branch: Option<String>,
    pub branch_id: Option<String>,
    pub company_id: Option<String>,
    pub reason: Option<String>,
    pub attachment: Option<Attachment>,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Normalize for RemovalRecord {
    type Raw = RemovalRequest;

    fn from_raw(raw: &RemovalRequest) -> Self {
        let guest = populated(&raw.guest_id);
        let user = guest.and_then(|g| g.user());
        let room = guest.and_then(|g| g.first_room());

        Self {
            request_id: raw.id.clone().unwrap_or_default(),
            guest_name: guest.and_then(|g| g.full_name()).unwrap_or_default().to_string(),
            phone: user.and_then(|u| non_empty(u.phone_number.as_ref())),
            email: user.and_then(|u| non_empty(u.email_address.as_ref())),
            room_number: room
                .and_then(|r| populated(&r.room_id))
                .and_then(|r| r.room_number.clone()),
            location: room
                .and_then(|r| populated(&r.location_id))
                .and_then(|l| l.name.clone()),
            branch: populated(&raw.branch_id).and_then(|b| b.name.clone()),
            branch_id: referenced_id(&raw.branch_id).map(str::to_string),
            company_id: referenced_id(&raw.company_id).map(str::to_string),
            reason: guest
                .and_then(|g| g.removal.as_ref())
                .and_then(|r| non_empty(r.reason.as_ref())),
            attachment: raw
                .removal_attachment_file
                .clone()
                .filter(|a| a.view_url.as_deref().is_some_and(|u| !u.is_empty())),
            status: raw.removal_status.clone().unwrap_or_default(),
            created_at: parse_optional(raw.created_at.as_ref()),
        }
    }
}

impl RemovalRecord {
    pub fn phone_display(&self) -> &str {
        self.phone.as_deref().unwrap_or(NO_PHONE)
    }

    pub fn reason_display(&self) -> &str {
        self.reason.as_deref().unwrap_or("N/A")
    }

    pub fn status_label(&self) -> String {
        status_label(&self.status)
    }

    pub fn status_tone(&self) -> Tone {
        removal_status_tone(&self.status)
    }

    /// Approve/reject actions are offered only in this state.
    pub fn is_reviewable(&self, kind: RemovalKind) -> bool {
        self.status == kind.reviewable_status()
    }
}

impl Searchable for RemovalRecord {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.guest_name.as_str()];
        fields.extend(self.email.as_deref());
        fields.extend(self.phone.as_deref());
        fields
    }
}

impl Categorized for RemovalRecord {
    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(&self.status),
            "branch" => self.branch_id.as_deref(),
            "company" => self.company_id.as_deref(),
            _ => None,
        }
    }
}

impl Dated for RemovalRecord {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl ListRecord for RemovalRecord {
    fn id(&self) -> &str {
        &self.request_id
    }
}
