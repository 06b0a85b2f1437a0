use serde::{Deserialize, Serialize};

use super::reference::{Document, Reference};
use crate::shared::serde_utils::{items, lenient, text};

/// Компания (operator of one or more branches)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Company {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "items")]
    pub branches: Vec<Branch>,
}

/// Care facility branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Branch {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "text")]
    pub address: Option<String>,
    /// Populated as `company` on guest payloads
    #[serde(deserialize_with = "lenient")]
    pub company: Option<Reference<Company>>,
    #[serde(deserialize_with = "lenient")]
    pub company_id: Option<Reference<Company>>,
    #[serde(deserialize_with = "items")]
    pub locations: Vec<Location>,
}

/// Location (building/floor) inside a branch
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    #[serde(rename = "_id", deserialize_with = "text")]
    pub id: Option<String>,
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub branch_id: Option<Reference<Branch>>,
}

impl Document for Company {
    fn doc_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Document for Branch {
    fn doc_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Document for Location {
    fn doc_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Branch {
    /// Owning company, whichever of `company`/`companyId` is present.
    pub fn company_ref(&self) -> Option<&Reference<Company>> {
        self.company.as_ref().or(self.company_id.as_ref())
    }
}

/// A selectable option: id and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub name: String,
}

/// Branch choices for the company filter; empty while no company is picked.
pub fn branch_choices(companies: &[Company], selected_company: &str) -> Vec<Choice> {
    companies
        .iter()
        .find(|c| c.id.as_deref() == Some(selected_company))
        .map(|c| {
            c.branches
                .iter()
                .filter_map(|b| {
                    Some(Choice {
                        id: b.id.clone()?,
                        name: b.name.clone().unwrap_or_default(),
                    })
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Transfer destinations: every branch except the current one.
pub fn destination_branches<'a>(branches: &'a [Branch], current: Option<&str>) -> Vec<&'a Branch> {
    branches
        .iter()
        .filter(|b| b.id.is_some() && b.id.as_deref() != current)
        .collect()
}

/// Locations of one branch; the branch link may be an id or a document.
pub fn branch_locations<'a>(locations: &'a [Location], branch_id: &str) -> Vec<&'a Location> {
    if branch_id.is_empty() {
        return Vec::new();
    }
    locations
        .iter()
        .filter(|l| l.branch_id.as_ref().and_then(Reference::id) == Some(branch_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn companies() -> Vec<Company> {
        serde_json::from_value(json!([
            {"_id": "c1", "name": "Acme", "branches": [
                {"_id": "b1", "name": "North"},
                {"_id": "b2", "name": "South"},
                {"name": "no id"}
            ]},
            {"_id": "c2", "name": "Other", "branches": null}
        ]))
        .unwrap()
    }

    #[test]
    fn test_branch_choices() {
        let choices = branch_choices(&companies(), "c1");
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0].name, "North");
        assert!(branch_choices(&companies(), "all").is_empty());
        assert!(branch_choices(&companies(), "c2").is_empty());
    }

    #[test]
    fn test_destination_branches_exclude_current() {
        let c = companies();
        let dest = destination_branches(&c[0].branches, Some("b1"));
        assert_eq!(dest.len(), 1);
        assert_eq!(dest[0].id.as_deref(), Some("b2"));
    }

    #[test]
    fn test_branch_locations_accepts_id_or_document() {
        let locations: Vec<Location> = serde_json::from_value(json!([
            {"_id": "l1", "name": "Block A", "branchId": "b1"},
            {"_id": "l2", "name": "Block B", "branchId": {"_id": "b1"}},
            {"_id": "l3", "name": "Block C", "branchId": "b2"}
        ]))
        .unwrap();
        assert_eq!(branch_locations(&locations, "b1").len(), 2);
        assert!(branch_locations(&locations, "").is_empty());
    }

    #[test]
    fn test_odd_field_types_keep_the_company() {
        let companies: Vec<Company> = crate::shared::envelope::collection_of(json!({"data": [
            {"_id": "c3", "name": 2024, "branches": [
                {"_id": "b7", "name": "East", "address": ["1 Main St"], "companyId": 3},
                null
            ]}
        ]}));
        assert_eq!(companies[0].id.as_deref(), Some("c3"));
        assert_eq!(companies[0].name.as_deref(), Some("2024"));
        let branch = &companies[0].branches;
        assert_eq!(branch.len(), 1);
        assert_eq!(branch[0].name.as_deref(), Some("East"));
        assert_eq!(branch[0].address, None);
        assert!(branch[0].company_ref().is_none());
    }
}
