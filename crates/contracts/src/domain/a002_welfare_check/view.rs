use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::{Assessment, WelfareCheck};
use crate::domain::common::{populated, user_name};
use crate::shared::date_utils::parse_optional;
use crate::shared::history::History;
use crate::shared::list_query::{Categorized, DateInterval, Dated, ListRecord, Searchable};
use crate::shared::normalize::Normalize;
use crate::shared::serde_utils::non_empty;
use crate::shared::tone::{health_tone, mental_state_tone, welfare_status_tone, Tone};

pub const NO_COMMENTS: &str = "No comments";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WelfareRecord {
    pub check_id: String,
    pub name: String,
    pub port_number: Option<String>,
    pub staff: Option<String>,
    pub week_start: Option<DateTime<Utc>>,
    pub week_end: Option<DateTime<Utc>>,
    pub physical_health: Option<String>,
    pub mental_health: Option<String>,
    pub emotional_wellbeing: Option<String>,
    pub social_support: Option<String>,
    pub overall_assessment: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

fn status_of(assessment: Option<&Assessment>) -> Option<String> {
    assessment.and_then(|a| non_empty(a.status.as_ref()))
}

impl Normalize for WelfareRecord {
    type Raw = WelfareCheck;

    fn from_raw(raw: &WelfareCheck) -> Self {
        let latest = raw.latest();
        let guest = populated(&raw.guest_id);

        Self {
            check_id: raw.id.clone().unwrap_or_default(),
            name: guest.and_then(|g| g.full_name()).unwrap_or_default().to_string(),
            port_number: guest.and_then(|g| g.port_number()).map(str::to_string),
            staff: user_name(&raw.staff_id),
            week_start: latest.and_then(|d| parse_optional(d.week_start_date.as_ref())),
            week_end: latest.and_then(|d| parse_optional(d.week_end_date.as_ref())),
            physical_health: status_of(latest.and_then(|d| d.physical_health.as_ref())),
            mental_health: status_of(latest.and_then(|d| d.mental_health.as_ref())),
            emotional_wellbeing: status_of(latest.and_then(|d| d.emotional_wellbeing.as_ref())),
            social_support: status_of(latest.and_then(|d| d.social_support.as_ref())),
            overall_assessment: latest.and_then(|d| non_empty(d.overall_assessment.as_ref())),
            status: latest.and_then(|d| non_empty(d.status.as_ref())),
            notes: latest.and_then(|d| non_empty(d.notes.as_ref())),
            image: latest
                .and_then(|d| d.images.as_ref())
                .and_then(|i| i.first())
                .map(str::to_string),
            created_at: parse_optional(raw.created_at.as_ref()),
        }
    }
}

impl WelfareRecord {
    pub fn notes_display(&self) -> &str {
        self.notes.as_deref().unwrap_or(NO_COMMENTS)
    }

    pub fn status_tone(&self) -> Tone {
        welfare_status_tone(self.status.as_deref().unwrap_or_default())
    }

    /// Tones of physical, mental, emotional, social and overall columns.
    pub fn assessment_tones(&self) -> [Tone; 5] {
        let tone = |v: &Option<String>| health_tone(v.as_deref().unwrap_or_default());
        [
            tone(&self.physical_health),
            mental_state_tone(self.mental_health.as_deref().unwrap_or_default()),
            tone(&self.emotional_wellbeing),
            tone(&self.social_support),
            tone(&self.overall_assessment),
        ]
    }
}

impl Searchable for WelfareRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl Categorized for WelfareRecord {
    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "status" => self.status.as_deref(),
            _ => None,
        }
    }
}

impl Dated for WelfareRecord {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn interval(&self) -> DateInterval {
        DateInterval::new(self.week_start, self.week_end)
    }
}

impl ListRecord for WelfareRecord {
    fn id(&self) -> &str {
        &self.check_id
    }
}
