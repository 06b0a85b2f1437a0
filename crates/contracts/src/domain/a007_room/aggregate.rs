use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::envelope::collection_of;
use crate::shared::serde_utils::{count, items, text};

/// Room with free capacity, as returned by `GET /guest/rooms/capacity`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CapacityRoom {
    #[serde(deserialize_with = "text")]
    pub id: String,
    #[serde(deserialize_with = "text")]
    pub room_number: String,
    #[serde(deserialize_with = "count")]
    pub capacity: u32,
    #[serde(deserialize_with = "count")]
    pub current_occupancy: u32,
    #[serde(deserialize_with = "count")]
    pub current_kids: u32,
    #[serde(deserialize_with = "count")]
    pub available_adult_space: u32,
    #[serde(deserialize_with = "count")]
    pub available_kid_space: u32,
    #[serde(deserialize_with = "count")]
    pub total_available_space: u32,
    #[serde(deserialize_with = "text")]
    pub location_id: String,
    #[serde(deserialize_with = "text")]
    pub location: String,
    #[serde(deserialize_with = "text")]
    pub branch: String,
    #[serde(deserialize_with = "text")]
    pub status: String,
    #[serde(deserialize_with = "text")]
    pub room_type: String,
    #[serde(deserialize_with = "items")]
    pub amenities: Vec<String>,
    #[serde(deserialize_with = "count")]
    pub max_adults_can_fit: u32,
    #[serde(deserialize_with = "count")]
    pub max_kids_can_fit: u32,
    #[serde(deserialize_with = "text")]
    pub recommended_for: String,
    #[serde(deserialize_with = "text")]
    pub special_note: Option<String>,
}

/// Query string of the capacity lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityQuery {
    pub capacity: u32,
    pub kids: u32,
    pub branch_id: String,
}

impl CapacityQuery {
    /// One adult, no children: what transfers and relocations ask for.
    pub fn single_adult(branch_id: impl Into<String>) -> Self {
        Self {
            capacity: 1,
            kids: 0,
            branch_id: branch_id.into(),
        }
    }
}

/// Rooms of a capacity response; `success: false` means no rooms.
pub fn capacity_rooms(body: Value) -> Vec<CapacityRoom> {
    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Vec::new();
    }
    collection_of(body)
}

// Server-managed fields, rejected by PATCH /room/{id}
const READ_ONLY_ROOM_FIELDS: [&str; 4] = ["_id", "currentOccupancy", "currentKids", "status"];

/// Room document with the server-managed fields removed.
pub fn room_update_payload(room: &Value) -> Value {
    match room {
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .filter(|(key, _)| !READ_ONLY_ROOM_FIELDS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_payload_strips_managed_fields() {
        let payload = room_update_payload(&json!({
            "_id": "r1", "roomNumber": "12", "capacity": 4,
            "currentOccupancy": 2, "currentKids": 1, "status": "Full",
            "amenities": ["tv"]
        }));
        assert_eq!(payload, json!({"roomNumber": "12", "capacity": 4, "amenities": ["tv"]}));
    }

    #[test]
    fn test_capacity_rooms() {
        let rooms = capacity_rooms(json!({"success": true, "data": [
            {"id": "r1", "roomNumber": "1", "locationId": "l1", "totalAvailableSpace": 2},
            {"id": "r2", "roomNumber": "2", "locationId": "l2", "amenities": null}
        ]}));
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].total_available_space, 2);
        assert_eq!(rooms[1].id, "r2");
        assert!(rooms[1].amenities.is_empty());
    }

    #[test]
    fn test_odd_room_fields_keep_the_room() {
        let rooms = capacity_rooms(json!({"data": [
            {"id": "r3", "roomNumber": 104, "capacity": "4", "totalAvailableSpace": "two",
             "amenities": ["tv", null], "specialNote": {"text": "quiet"}}
        ]}));
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].id, "r3");
        assert_eq!(rooms[0].room_number, "104");
        assert_eq!(rooms[0].capacity, 4);
        assert_eq!(rooms[0].total_available_space, 0);
        assert_eq!(rooms[0].amenities, vec!["tv".to_string()]);
        assert_eq!(rooms[0].special_note, None);
    }

    #[test]
    fn test_unsuccessful_capacity_response() {
        let rooms = capacity_rooms(json!({"success": false, "data": [{"id": "r1"}]}));
        assert!(rooms.is_empty());
    }
}
