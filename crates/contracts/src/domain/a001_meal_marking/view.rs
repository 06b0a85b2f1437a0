use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::{MealEntry, MealMarking};
use crate::domain::common::{populated, referenced_id, user_name};
use crate::shared::date_utils::parse_optional;
use crate::shared::history::History;
use crate::shared::list_query::{Categorized, Dated, ListRecord, Searchable};
use crate::shared::normalize::Normalize;
use crate::shared::serde_utils::non_empty;

/// One meal slot as the meal table shows it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealDetail {
    pub marked: bool,
    pub time: Option<String>,
    pub staff: Option<String>,
    pub reason_if_not_taken: Option<String>,
    pub notes: Option<String>,
    pub marked_at: Option<String>,
    pub is_editable: bool,
}

impl MealDetail {
    /// Missing entry: not marked, still editable.
    pub fn from_entry(entry: Option<&MealEntry>, staff: Option<&str>) -> Self {
        Self {
            marked: entry.and_then(|e| e.taken).unwrap_or(false),
            time: entry.and_then(|e| non_empty(e.time.as_ref())),
            staff: staff.filter(|s| !s.is_empty()).map(str::to_string),
            reason_if_not_taken: entry.and_then(|e| non_empty(e.reason_if_not_taken.as_ref())),
            notes: entry.and_then(|e| non_empty(e.notes.as_ref())),
            marked_at: entry.and_then(|e| non_empty(e.marked_at.as_ref())),
            is_editable: entry.and_then(|e| e.is_editable).unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealsOfDay {
    pub breakfast: MealDetail,
    pub lunch: MealDetail,
    pub dinner: MealDetail,
}

impl MealsOfDay {
    pub fn slots(&self) -> [&MealDetail; 3] {
        [&self.breakfast, &self.lunch, &self.dinner]
    }

    pub fn served(&self) -> usize {
        self.slots().iter().filter(|m| m.marked).count()
    }
}

/// Resident row of the meal tracking table (latest day only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidentMeals {
    pub marking_id: String,
    pub name: String,
    pub port_number: Option<String>,
    pub room: Option<String>,
    pub branch: Option<String>,
    pub branch_id: Option<String>,
    pub company_id: Option<String>,
    pub meals: MealsOfDay,
    pub total_meals_taken: u32,
    pub meal_date: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Normalize for ResidentMeals {
    type Raw = MealMarking;

    fn from_raw(raw: &MealMarking) -> Self {
        let latest = raw.latest();
        let meals = latest.and_then(|d| d.meals.as_ref());
        let staff = user_name(&raw.staff_id);
        let staff = staff.as_deref();
        let guest = populated(&raw.guest_id);
        let branch = populated(&raw.branch_id);

        Self {
            marking_id: raw.id.clone().unwrap_or_default(),
            name: guest
                .and_then(|g| g.full_name())
                .map(|n| n.trim().to_string())
                .unwrap_or_default(),
            port_number: guest.and_then(|g| g.port_number()).map(str::to_string),
            room: guest.and_then(|g| non_empty(g.family_id.as_ref())),
            branch: branch.and_then(|b| b.name.clone()),
            branch_id: referenced_id(&raw.branch_id).map(str::to_string),
            company_id: branch
                .and_then(|b| b.company_ref())
                .and_then(|c| c.id())
                .map(str::to_string),
            meals: MealsOfDay {
                breakfast: MealDetail::from_entry(meals.and_then(|m| m.breakfast.as_ref()), staff),
                lunch: MealDetail::from_entry(meals.and_then(|m| m.lunch.as_ref()), staff),
                dinner: MealDetail::from_entry(meals.and_then(|m| m.dinner.as_ref()), staff),
            },
            total_meals_taken: latest.and_then(|d| d.total_meals_taken).unwrap_or(0),
            meal_date: latest.and_then(|d| non_empty(d.date.as_ref())),
            created_at: parse_optional(raw.created_at.as_ref()),
        }
    }
}

impl Searchable for ResidentMeals {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.name]
    }
}

impl Categorized for ResidentMeals {
    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "branch" => self.branch_id.as_deref(),
            "company" => self.company_id.as_deref(),
            _ => None,
        }
    }
}

impl Dated for ResidentMeals {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl ListRecord for ResidentMeals {
    fn id(&self) -> &str {
        &self.marking_id
    }
}
