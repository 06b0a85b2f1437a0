use serde::{Deserialize, Serialize};

use crate::domain::common::{Branch, GuestRef, Reference, User};
use crate::shared::serde_utils::{count, items, lenient, text};

/// Корзина (supply basket) of one resident
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Basket {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub guest_id: Option<Reference<GuestRef>>,
    #[serde(deserialize_with = "lenient")]
    pub branch_id: Option<Reference<Branch>>,
    #[serde(deserialize_with = "lenient")]
    pub staff_id: Option<Reference<User>>,
    #[serde(deserialize_with = "items")]
    pub basket: Vec<BasketItem>,
    #[serde(deserialize_with = "text")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "count")]
    pub delivered_items: Option<u32>,
    #[serde(deserialize_with = "count")]
    pub total_items: Option<u32>,
    #[serde(deserialize_with = "text")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasketItem {
    #[serde(deserialize_with = "text")]
    pub item_name: Option<String>,
    #[serde(deserialize_with = "text")]
    pub status: Option<String>,
    #[serde(deserialize_with = "text")]
    pub proof_of_delivery: Option<String>,
}
