use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::aggregate::{Dependant, Practitioner, ServiceUser};
use crate::shared::date_utils::parse_optional;
use crate::shared::envelope::collection_items;
use crate::shared::list_query::{Categorized, Dated, ListRecord, Searchable};
use crate::shared::normalize::Normalize;

const INACTIVE: &str = "Inactive";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PractitionerInfo {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub status: String,
}

impl PractitionerInfo {
    fn from_raw(raw: Option<&Practitioner>) -> Self {
        let Some(p) = raw else {
            return Self::default();
        };
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        Self {
            name: text(&p.name),
            phone: text(&p.phone_number),
            email: text(&p.email_address),
            status: text(&p.status),
        }
    }

    pub fn is_inactive(&self) -> bool {
        self.status == INACTIVE
    }
}

/// Строка справочника резидентов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceUserRecord {
    pub guest_id: String,
    pub full_name: String,
    pub port_number: String,
    pub email: String,
    pub phone: String,
    pub is_primary: bool,
    /// Empty unless the resident is the family's primary member
    pub dependants: Vec<Dependant>,
    pub medic: PractitionerInfo,
    pub dentist: PractitionerInfo,
    pub branch: String,
    pub branch_id: Option<String>,
    pub location: String,
    pub company: String,
    pub company_id: Option<String>,
    pub date_of_birth: Option<DateTime<Utc>>,
    pub gender: String,
    pub nationality: String,
    pub languages: Vec<String>,
    pub case_worker: String,
    pub room: String,
    pub arrival_date: Option<DateTime<Utc>>,
    pub departure_date: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Normalize for ServiceUserRecord {
    type Raw = ServiceUser;

    fn from_raw(raw: &ServiceUser) -> Self {
        let user = raw.user.as_ref();
        let profile = raw.profile.as_ref();
        let branch = raw.branch.as_ref();
        let company = branch.and_then(|b| b.company_ref());
        let is_primary = raw.family.as_ref().and_then(|f| f.is_primary).unwrap_or(false);

        Self {
            guest_id: raw.id.clone().unwrap_or_default(),
            full_name: user.and_then(|u| u.full_name.clone()).unwrap_or_default(),
            port_number: raw
                .port_number
                .clone()
                .filter(|p| !p.is_empty())
                .or_else(|| user.and_then(|u| u.port_number.clone()))
                .unwrap_or_default(),
            email: user.and_then(|u| u.email_address.clone()).unwrap_or_default(),
            phone: user.and_then(|u| u.phone_number.clone()).unwrap_or_default(),
            is_primary,
            dependants: match (&raw.family, is_primary) {
                (Some(family), true) => family.dependants.clone(),
                _ => Vec::new(),
            },
            medic: PractitionerInfo::from_raw(raw.medic.as_ref()),
            dentist: PractitionerInfo::from_raw(raw.dentist.as_ref()),
            branch: branch.and_then(|b| b.name.clone()).unwrap_or_default(),
            branch_id: branch.and_then(|b| b.id.clone()),
            location: branch.and_then(|b| b.address.clone()).unwrap_or_default(),
            company: company
                .and_then(|c| c.doc())
                .and_then(|c| c.name.clone())
                .unwrap_or_default(),
            company_id: company.and_then(|c| c.id()).map(str::to_string),
            date_of_birth: parse_optional(profile.and_then(|p| p.date_of_birth.as_ref())),
            gender: profile.and_then(|p| p.gender.clone()).unwrap_or_default(),
            nationality: profile.and_then(|p| p.nationality.clone()).unwrap_or_default(),
            languages: profile
                .and_then(|p| p.language.clone())
                .filter(|l| !l.is_empty())
                .into_iter()
                .collect(),
            case_worker: raw
                .case_worker
                .as_ref()
                .and_then(|c| c.full_name.clone())
                .unwrap_or_default(),
            room: raw
                .assigned_rooms
                .first()
                .and_then(|r| r.room_number.clone())
                .unwrap_or_default(),
            arrival_date: parse_optional(raw.check_in_date.as_ref()),
            departure_date: parse_optional(raw.check_out_date.as_ref()),
            created_at: parse_optional(raw.created_at.as_ref()),
        }
    }

    /// Residents without an `_id` get their position as id.
    fn from_response(body: Value) -> Vec<Self> {
        collection_items(body)
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                let mut record = Self::from_value(value);
                if record.guest_id.is_empty() {
                    record.guest_id = index.to_string();
                }
                record
            })
            .collect()
    }
}

/// Distinct non-empty nationalities for the nationality filter, sorted.
pub fn nationalities(records: &[ServiceUserRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.nationality.as_str())
        .filter(|n| !n.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl Searchable for ServiceUserRecord {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.full_name, &self.port_number]
    }
}

impl Categorized for ServiceUserRecord {
    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "branch" => self.branch_id.as_deref(),
            "company" => self.company_id.as_deref(),
            "nationality" => Some(&self.nationality),
            _ => None,
        }
    }
}

impl Dated for ServiceUserRecord {
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl ListRecord for ServiceUserRecord {
    fn id(&self) -> &str {
        &self.guest_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{CategoryFilter, ListState};
    use serde_json::json;

    fn guest(name: &str, nationality: &str, created: &str) -> Value {
        json!({
            "_id": format!("g-{name}"),
            "user": {"fullName": name, "portNumber": format!("U-{name}")},
            "profile": {"nationality": nationality, "language": "English"},
            "branch": {"_id": "b1", "name": "North", "address": "1 High St",
                       "company": {"_id": "c1", "name": "Acme Care"}},
            "createdAt": created
        })
    }

    #[test]
    fn test_flatten() {
        let r = ServiceUserRecord::from_value(json!({
            "_id": "g1",
            "portNumber": "P-1",
            "user": {"fullName": "Jane", "portNumber": "U-1", "emailAddress": "j@x.org"},
            "family": {"isPrimary": true, "dependants": [{"fullName": "Kid", "portNumber": null}]},
            "medic": {"name": "Dr Who", "status": "Inactive"},
            "dentist": {"name": "Dr Tooth", "status": "Active"},
            "branch": {"_id": "b1", "name": "North", "address": "1 High St",
                       "company": {"_id": "c1", "name": "Acme Care"}},
            "profile": {"dateOfBirth": "1990-04-02", "gender": "F", "language": "Arabic"},
            "caseWorker": {"fullName": "Cara"},
            "assignedRooms": [{"roomNumber": "12"}, {"roomNumber": "14"}],
            "checkInDate": "2024-01-10T12:00:00Z"
        }));
        assert_eq!(r.port_number, "P-1");
        assert_eq!(r.dependants.len(), 1);
        assert!(r.medic.is_inactive());
        assert!(!r.dentist.is_inactive());
        assert_eq!(r.company, "Acme Care");
        assert_eq!(r.company_id.as_deref(), Some("c1"));
        assert_eq!(r.location, "1 High St");
        assert_eq!(r.languages, vec!["Arabic".to_string()]);
        assert_eq!(r.room, "12");
        assert_eq!(r.case_worker, "Cara");
        assert!(r.date_of_birth.is_some());
        assert_eq!(r.departure_date, None);
    }

    #[test]
    fn test_port_falls_back_to_user_and_dependants_need_primary() {
        let r = ServiceUserRecord::from_value(json!({
            "user": {"fullName": "Tom", "portNumber": "U-2"},
            "family": {"isPrimary": false, "dependants": [{"fullName": "Kid"}]}
        }));
        assert_eq!(r.port_number, "U-2");
        assert!(r.dependants.is_empty());
        assert!(r.languages.is_empty());
    }

    #[test]
    fn test_odd_field_types_keep_the_service_user() {
        let r = ServiceUserRecord::from_value(json!({
            "_id": "g7",
            "portNumber": 90210,
            "user": {"fullName": "Jane", "phoneNumber": 7700900},
            "family": {"isPrimary": "yes", "dependants": [null, {"fullName": "Kid"}]},
            "medic": 42,
            "assignedRooms": {"roomNumber": "12"}
        }));
        assert_eq!(r.guest_id, "g7");
        assert_eq!(r.full_name, "Jane");
        assert_eq!(r.port_number, "90210");
        assert_eq!(r.phone, "7700900");
        assert!(!r.is_primary);
        assert_eq!(r.medic, PractitionerInfo::default());
        assert_eq!(r.room, "");
    }

    #[test]
    fn test_missing_ids_use_position() {
        let rows = ServiceUserRecord::from_response(json!([{"user": {"fullName": "A"}}, {"_id": "x"}]));
        assert_eq!(rows[0].guest_id, "0");
        assert_eq!(rows[1].guest_id, "x");
    }

    #[test]
    fn test_filters_and_highlight() {
        let body = json!({"data": (0..15)
            .map(|i| guest(&format!("Person {i:02}"), if i < 5 { "Syrian" } else { "Afghan" },
                           &format!("2024-01-01T00:{i:02}:00Z")))
            .collect::<Vec<_>>()});
        let mut state = ListState::new(10)
            .with_filter("company", CategoryFilter::exact("all"))
            .with_filter("branch", CategoryFilter::exact("all"))
            .with_filter("nationality", CategoryFilter::folded("all"))
            .with_dependent("company", "branch");
        state.replace_records(ServiceUserRecord::from_response(body));

        assert_eq!(nationalities(state.records()), vec!["Afghan", "Syrian"]);
        // newest first: Person 14 .. Person 00
        assert_eq!(state.locate(|r| r.full_name == "Person 02"), Some(2));
        assert_eq!(state.locate(|r| r.full_name == "Nobody"), None);

        state.set_search_term("u-person 1");
        assert_eq!(state.view().info.total_count, 5);
        state.set_search_term("");
        state.set_category("nationality", "syrian");
        assert_eq!(state.view().info.total_count, 5);
    }
}
