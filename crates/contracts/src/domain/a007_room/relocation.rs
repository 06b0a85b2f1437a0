//! Relocation of a resident to another room of the same branch

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::CapacityRoom;
use crate::domain::common::{branch_locations, Location};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelocationError {
    #[error("Please select both a location and a room.")]
    Incomplete,
    #[error("Selected room not found. Please try again.")]
    RoomNotFound,
}

impl RelocationError {
    pub fn title(&self) -> &'static str {
        match self {
            RelocationError::Incomplete => "Incomplete Selection",
            RelocationError::RoomNotFound => "Error",
        }
    }
}

/// Body of `PATCH /guest/{id}/relocate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelocateRequest {
    pub new_location_id: String,
    pub new_room_id: String,
}

/// Location/room picker state of the relocate dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelocationSelection {
    pub branch_id: String,
    pub current_room_id: Option<String>,
    location_id: Option<String>,
    room_id: Option<String>,
}

impl RelocationSelection {
    pub fn new(branch_id: impl Into<String>, current_room_id: Option<String>) -> Self {
        Self {
            branch_id: branch_id.into(),
            current_room_id,
            ..Self::default()
        }
    }

    pub fn location_id(&self) -> Option<&str> {
        self.location_id.as_deref()
    }

    pub fn room_id(&self) -> Option<&str> {
        self.room_id.as_deref()
    }

    /// Locations of the resident's current branch.
    pub fn locations<'a>(&self, all: &'a [Location]) -> Vec<&'a Location> {
        branch_locations(all, &self.branch_id)
    }

    /// Picking a location clears the room.
    pub fn select_location(&mut self, location_id: impl Into<String>) {
        let location_id = location_id.into();
        self.room_id = None;
        self.location_id = Some(location_id).filter(|l| !l.is_empty());
    }

    pub fn select_room(&mut self, room_id: impl Into<String>) {
        self.room_id = Some(room_id.into()).filter(|r| !r.is_empty());
    }

    /// Rooms of the selected location, minus the current room.
    pub fn candidate_rooms<'a>(&self, rooms: &'a [CapacityRoom]) -> Vec<&'a CapacityRoom> {
        let Some(location_id) = self.location_id.as_deref() else {
            return Vec::new();
        };
        rooms
            .iter()
            .filter(|r| r.location_id == location_id)
            .filter(|r| self.current_room_id.as_deref() != Some(r.id.as_str()))
            .collect()
    }

    pub fn can_complete(&self) -> bool {
        self.location_id.is_some() && self.room_id.is_some()
    }

    /// Request body; the location comes from the chosen room itself.
    pub fn request(&self, rooms: &[CapacityRoom]) -> Result<RelocateRequest, RelocationError> {
        let room_id = match (&self.location_id, &self.room_id) {
            (Some(_), Some(room_id)) => room_id,
            _ => return Err(RelocationError::Incomplete),
        };
        let room = self
            .candidate_rooms(rooms)
            .into_iter()
            .find(|r| &r.id == room_id)
            .ok_or(RelocationError::RoomNotFound)?;
        Ok(RelocateRequest {
            new_location_id: room.location_id.clone(),
            new_room_id: room.id.clone(),
        })
    }

    pub fn reset(&mut self) {
        self.location_id = None;
        self.room_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, location: &str) -> CapacityRoom {
        CapacityRoom {
            id: id.into(),
            room_number: id.to_uppercase(),
            location_id: location.into(),
            ..CapacityRoom::default()
        }
    }

    fn rooms() -> Vec<CapacityRoom> {
        vec![room("r1", "l1"), room("r2", "l1"), room("r3", "l2")]
    }

    #[test]
    fn test_candidates_exclude_current_room() {
        let mut sel = RelocationSelection::new("b1", Some("r1".into()));
        let all = rooms();
        assert!(sel.candidate_rooms(&all).is_empty());
        sel.select_location("l1");
        let ids: Vec<&str> = sel.candidate_rooms(&all).iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r2"]);
    }

    #[test]
    fn test_location_change_clears_room() {
        let mut sel = RelocationSelection::new("b1", None);
        sel.select_location("l1");
        sel.select_room("r2");
        assert!(sel.can_complete());
        sel.select_location("l2");
        assert_eq!(sel.room_id(), None);
        assert!(!sel.can_complete());
    }

    #[test]
    fn test_request_validation() {
        let mut sel = RelocationSelection::new("b1", Some("r1".into()));
        assert_eq!(sel.request(&rooms()), Err(RelocationError::Incomplete));
        assert_eq!(
            RelocationError::Incomplete.to_string(),
            "Please select both a location and a room."
        );

        sel.select_location("l1");
        sel.select_room("r3");
        let err = sel.request(&rooms()).unwrap_err();
        assert_eq!(err.to_string(), "Selected room not found. Please try again.");

        sel.select_room("r2");
        assert_eq!(
            sel.request(&rooms()),
            Ok(RelocateRequest {
                new_location_id: "l1".into(),
                new_room_id: "r2".into()
            })
        );
    }
}
