use serde::{Deserialize, Serialize};

use crate::domain::common::{GuestRef, ImagePaths, Reference, User};
use crate::shared::history::History;
use crate::shared::serde_utils::{items, lenient, text};

/// Еженедельная проверка благополучия резидента
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WelfareCheck {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub guest_id: Option<Reference<GuestRef>>,
    #[serde(deserialize_with = "lenient")]
    pub staff_id: Option<Reference<User>>,
    #[serde(deserialize_with = "items")]
    pub details: Vec<WelfareCheckDetail>,
    #[serde(deserialize_with = "text")]
    pub created_at: Option<String>,
}

/// One week of assessments
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WelfareCheckDetail {
    #[serde(deserialize_with = "text")]
    pub week_start_date: Option<String>,
    #[serde(deserialize_with = "text")]
    pub week_end_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub physical_health: Option<Assessment>,
    #[serde(deserialize_with = "lenient")]
    pub mental_health: Option<Assessment>,
    #[serde(deserialize_with = "lenient")]
    pub emotional_wellbeing: Option<Assessment>,
    #[serde(deserialize_with = "lenient")]
    pub social_support: Option<Assessment>,
    #[serde(deserialize_with = "text")]
    pub overall_assessment: Option<String>,
    #[serde(deserialize_with = "text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "text")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub images: Option<ImagePaths>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessment {
    #[serde(deserialize_with = "text")]
    pub status: Option<String>,
}

impl History for WelfareCheck {
    type Entry = WelfareCheckDetail;

    fn history(&self) -> &[WelfareCheckDetail] {
        &self.details
    }
}
