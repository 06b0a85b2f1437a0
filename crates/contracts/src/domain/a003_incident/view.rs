use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::Incident;
use crate::domain::common::{populated, referenced_id, user_name};
use crate::shared::date_utils::{format_date, format_time, parse_optional};
use crate::shared::list_query::{Categorized, Dated, ListRecord, Searchable};
use crate::shared::normalize::Normalize;
use crate::shared::serde_utils::non_empty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub incident_id: String,
    pub title: String,
    pub description: String,
    pub severity: String,
    pub status: String,
    pub category: String,
    pub incident_type: String,
    pub reported_by: String,
    pub assigned_to: String,
    pub branch: String,
    pub branch_id: Option<String>,
    pub location: String,
    pub resident: String,
    pub port_number: String,
    pub reported_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub evidence: Option<String>,
    pub actions_taken: String,
}

impl Normalize for IncidentRecord {
    type Raw = Incident;

    fn from_raw(raw: &Incident) -> Self {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let guest = populated(&raw.guest_id);
        let branch = populated(&raw.branch_id);

        Self {
            incident_id: text(&raw.id),
            title: text(&raw.title),
            description: text(&raw.description),
            severity: text(&raw.severity),
            status: text(&raw.status),
            category: text(&raw.category),
            incident_type: text(&raw.incident_type),
            reported_by: user_name(&raw.reported_by).unwrap_or_default(),
            assigned_to: user_name(&raw.assigned_to).unwrap_or_default(),
            branch: branch.and_then(|b| b.name.clone()).unwrap_or_default(),
            branch_id: referenced_id(&raw.branch_id).map(str::to_string),
            location: text(&raw.location),
            resident: guest.and_then(|g| g.full_name()).unwrap_or_default().to_string(),
            port_number: guest.and_then(|g| g.port_number()).unwrap_or_default().to_string(),
            reported_at: parse_optional(raw.created_at.as_ref()),
            resolved_at: parse_optional(raw.resolved_at.as_ref()),
            evidence: raw
                .evidence
                .as_ref()
                .and_then(|e| e.first())
                .map(str::to_string),
            actions_taken: non_empty(raw.actions_taken.as_ref()).unwrap_or_default(),
        }
    }
}

impl IncidentRecord {
    /// Initial value of the status editor: "open" -> "Open".
    pub fn status_choice(&self) -> String {
        let mut chars = self.status.chars();
        match chars.next() {
            Some(first) => {
                let head: String = first.to_uppercase().collect();
                head + &chars.as_str().to_lowercase()
            }
            None => String::new(),
        }
    }

    pub fn date_reported(&self) -> Option<String> {
        self.reported_at.as_ref().map(format_date)
    }

    pub fn time_reported(&self) -> Option<String> {
        self.reported_at.as_ref().map(format_time)
    }

    pub fn date_resolved(&self) -> Option<String> {
        self.resolved_at.as_ref().map(format_date)
    }

    pub fn time_resolved(&self) -> Option<String> {
        self.resolved_at.as_ref().map(format_time)
    }
}

impl Searchable for IncidentRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description, &self.resident, &self.port_number]
    }
}

impl Categorized for IncidentRecord {
    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(&self.status),
            "severity" => Some(&self.severity),
            "branch" => self.branch_id.as_deref(),
            _ => None,
        }
    }
}

impl Dated for IncidentRecord {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.reported_at
    }
}

impl ListRecord for IncidentRecord {
    fn id(&self) -> &str {
        &self.incident_id
    }
}
