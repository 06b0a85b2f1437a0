use serde::{Deserialize, Serialize};

use crate::domain::common::{Branch, GuestRef, Reference, User};
use crate::shared::history::History;
use crate::shared::serde_utils::{count, items, lenient, text};

/// Отметка питания: one document per resident, one detail entry per day
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealMarking {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub guest_id: Option<Reference<GuestRef>>,
    #[serde(deserialize_with = "lenient")]
    pub branch_id: Option<Reference<Branch>>,
    /// Staff member who marked the meals
    #[serde(deserialize_with = "lenient")]
    pub staff_id: Option<Reference<User>>,
    #[serde(deserialize_with = "items")]
    pub details: Vec<MealMarkingDetail>,
    #[serde(deserialize_with = "text")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealMarkingDetail {
    #[serde(deserialize_with = "text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub meals: Option<DailyMeals>,
    #[serde(deserialize_with = "count")]
    pub total_meals_taken: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DailyMeals {
    #[serde(deserialize_with = "lenient")]
    pub breakfast: Option<MealEntry>,
    #[serde(deserialize_with = "lenient")]
    pub lunch: Option<MealEntry>,
    #[serde(deserialize_with = "lenient")]
    pub dinner: Option<MealEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealEntry {
    #[serde(deserialize_with = "lenient")]
    pub taken: Option<bool>,
    #[serde(deserialize_with = "text")]
    pub time: Option<String>,
    #[serde(deserialize_with = "text")]
    pub reason_if_not_taken: Option<String>,
    #[serde(deserialize_with = "text")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "text")]
    pub marked_at: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_editable: Option<bool>,
}

impl History for MealMarking {
    type Entry = MealMarkingDetail;

    fn history(&self) -> &[MealMarkingDetail] {
        &self.details
    }
}
