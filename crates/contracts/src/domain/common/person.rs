use serde::{Deserialize, Serialize};

use super::organization::Location;
use super::reference::{populated, Document, Reference};
use crate::shared::serde_utils::{items, lenient, text};

/// Account of a resident or a staff member
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "text")]
    pub port_number: Option<String>,
    #[serde(deserialize_with = "text")]
    pub email_address: Option<String>,
    #[serde(deserialize_with = "text")]
    pub phone_number: Option<String>,
}

/// Guest (resident) as embedded in meal, welfare, basket and removal payloads
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestRef {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub user_id: Option<Reference<User>>,
    #[serde(deserialize_with = "text")]
    pub family_id: Option<String>,
    #[serde(deserialize_with = "items")]
    pub family_rooms: Vec<FamilyRoom>,
    #[serde(deserialize_with = "lenient")]
    pub removal: Option<RemovalInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemovalInfo {
    #[serde(deserialize_with = "text")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyRoom {
    #[serde(deserialize_with = "lenient")]
    pub room_id: Option<Reference<RoomRef>>,
    #[serde(deserialize_with = "lenient")]
    pub location_id: Option<Reference<Location>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomRef {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text")]
    pub room_number: Option<String>,
}

/// Uploaded file as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Attachment {
    #[serde(deserialize_with = "text")]
    pub view_url: Option<String>,
    #[serde(deserialize_with = "text")]
    pub original_name: Option<String>,
}

/// Image field sent either as one path or as a list of paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImagePaths {
    One(String),
    Many(#[serde(deserialize_with = "items")] Vec<String>),
}

impl ImagePaths {
    pub fn first(&self) -> Option<&str> {
        let path = match self {
            ImagePaths::One(path) => Some(path.as_str()),
            ImagePaths::Many(paths) => paths.first().map(String::as_str),
        };
        path.filter(|p| !p.is_empty())
    }
}

impl Document for User {
    fn doc_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Document for GuestRef {
    fn doc_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Document for RoomRef {
    fn doc_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl GuestRef {
    pub fn user(&self) -> Option<&User> {
        populated(&self.user_id)
    }

    pub fn full_name(&self) -> Option<&str> {
        self.user().and_then(|u| u.full_name.as_deref())
    }

    pub fn port_number(&self) -> Option<&str> {
        self.user().and_then(|u| u.port_number.as_deref())
    }

    pub fn first_room(&self) -> Option<&FamilyRoom> {
        self.family_rooms.first()
    }
}

/// Full name of a populated user reference (staff, reporter...).
pub fn user_name(reference: &Option<Reference<User>>) -> Option<String> {
    populated(reference).and_then(|u| u.full_name.clone())
}
