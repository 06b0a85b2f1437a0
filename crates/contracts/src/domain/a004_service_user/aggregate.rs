use serde::{Deserialize, Serialize};

use crate::domain::common::{Branch, RoomRef, User};
use crate::shared::serde_utils::{items, lenient, text};

/// Резидент (guest) as returned by `GET /guest`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceUser {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub user: Option<User>,
    #[serde(deserialize_with = "text")]
    pub port_number: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub family: Option<Family>,
    #[serde(deserialize_with = "lenient")]
    pub medic: Option<Practitioner>,
    #[serde(deserialize_with = "lenient")]
    pub dentist: Option<Practitioner>,
    #[serde(deserialize_with = "lenient")]
    pub branch: Option<Branch>,
    #[serde(deserialize_with = "lenient")]
    pub profile: Option<Profile>,
    #[serde(deserialize_with = "lenient")]
    pub case_worker: Option<User>,
    #[serde(deserialize_with = "items")]
    pub assigned_rooms: Vec<RoomRef>,
    #[serde(deserialize_with = "text")]
    pub check_in_date: Option<String>,
    #[serde(deserialize_with = "text")]
    pub check_out_date: Option<String>,
    #[serde(deserialize_with = "text")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Family {
    #[serde(deserialize_with = "lenient")]
    pub is_primary: Option<bool>,
    #[serde(deserialize_with = "items")]
    pub dependants: Vec<Dependant>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dependant {
    #[serde(deserialize_with = "text")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "text")]
    pub port_number: Option<String>,
}

/// GP or dentist registered for the resident
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Practitioner {
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "text")]
    pub phone_number: Option<String>,
    #[serde(deserialize_with = "text")]
    pub email_address: Option<String>,
    #[serde(deserialize_with = "text")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    #[serde(deserialize_with = "text")]
    pub date_of_birth: Option<String>,
    #[serde(deserialize_with = "text")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "text")]
    pub nationality: Option<String>,
    #[serde(deserialize_with = "text")]
    pub language: Option<String>,
}
