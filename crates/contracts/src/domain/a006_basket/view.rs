use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::aggregate::{Basket, BasketItem};
use crate::domain::common::{populated, user_name};
use crate::shared::date_utils::parse_optional;
use crate::shared::list_query::{Categorized, Dated, ListRecord, Searchable, ALL};
use crate::shared::normalize::Normalize;
use crate::shared::serde_utils::non_empty;
use crate::shared::tone::{basket_status_tone, Tone};

/// Choices of the status filter
pub const STATUS_OPTIONS: [&str; 4] = [ALL, "Out Of Stock", "Requested", "In Progress"];

const DELIVERED: &str = "Delivered";
const NOT_ASSIGNED: &str = "Not Assigned";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketItemView {
    pub name: String,
    pub status: String,
    /// Only kept for delivered items
    pub proof_of_delivery: Option<String>,
}

impl BasketItemView {
    fn from_raw(raw: &BasketItem) -> Self {
        let status = raw.status.clone().unwrap_or_default();
        let proof_of_delivery = if status == DELIVERED {
            non_empty(raw.proof_of_delivery.as_ref())
        } else {
            None
        };
        Self {
            name: raw.item_name.clone().unwrap_or_default(),
            status,
            proof_of_delivery,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketRecord {
    pub basket_id: String,
    pub resident: String,
    pub port_number: Option<String>,
    pub branch: Option<String>,
    pub staff: Option<String>,
    pub notes: String,
    pub status: String,
    pub items: Vec<BasketItemView>,
    pub delivered_items: u32,
    pub total_items: u32,
    pub created_at: Option<DateTime<Utc>>,
}

impl Normalize for BasketRecord {
    type Raw = Basket;

    fn from_raw(raw: &Basket) -> Self {
        let guest = populated(&raw.guest_id);
        Self {
            basket_id: raw.id.clone().unwrap_or_default(),
            resident: guest.and_then(|g| g.full_name()).unwrap_or_default().to_string(),
            port_number: guest.and_then(|g| g.port_number()).map(str::to_string),
            branch: populated(&raw.branch_id).and_then(|b| non_empty(b.name.as_ref())),
            staff: user_name(&raw.staff_id),
            notes: raw.notes.clone().unwrap_or_default(),
            status: raw.status.clone().unwrap_or_default(),
            items: raw.basket.iter().map(BasketItemView::from_raw).collect(),
            delivered_items: raw.delivered_items.unwrap_or(0),
            total_items: raw.total_items.unwrap_or(0),
            created_at: parse_optional(raw.created_at.as_ref()),
        }
    }
}

impl BasketRecord {
    /// round(delivered / max(total, 1) * 100)
    pub fn completion_percent(&self) -> u32 {
        let total = self.total_items.max(1);
        (f64::from(self.delivered_items) / f64::from(total) * 100.0).round() as u32
    }

    pub fn branch_display(&self) -> &str {
        self.branch.as_deref().unwrap_or(NOT_ASSIGNED)
    }

    pub fn staff_display(&self) -> &str {
        self.staff.as_deref().unwrap_or(NOT_ASSIGNED)
    }

    pub fn status_tone(&self) -> Tone {
        basket_status_tone(&self.status)
    }
}

/// Distinct non-empty branch names, in first-seen order.
pub fn branch_options(records: &[BasketRecord]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    records
        .iter()
        .filter_map(|r| r.branch.as_deref())
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

impl Searchable for BasketRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.resident, &self.notes]
    }
}

impl Categorized for BasketRecord {
    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "branch" => self.branch.as_deref(),
            "status" => Some(&self.status),
            _ => None,
        }
    }
}

impl Dated for BasketRecord {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl ListRecord for BasketRecord {
    fn id(&self) -> &str {
        &self.basket_id
    }
}
