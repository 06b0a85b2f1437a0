use serde::{Deserialize, Serialize};

/// Documents with a backend `_id`.
pub trait Document {
    fn doc_id(&self) -> Option<&str>;
}

/// A link to another document: a bare id, or the populated document.
///
/// Which one arrives depends on whether the endpoint populates the field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Id(String),
    Doc(T),
}

impl<T: Document> Reference<T> {
    pub fn id(&self) -> Option<&str> {
        match self {
            Reference::Id(id) => Some(id.as_str()),
            Reference::Doc(doc) => doc.doc_id(),
        }
    }
}

impl<T> Reference<T> {
    pub fn doc(&self) -> Option<&T> {
        match self {
            Reference::Id(_) => None,
            Reference::Doc(doc) => Some(doc),
        }
    }
}

/// Populated document behind an optional reference.
pub fn populated<T>(reference: &Option<Reference<T>>) -> Option<&T> {
    reference.as_ref().and_then(Reference::doc)
}

/// Id behind an optional reference, bare or populated.
pub fn referenced_id<T: Document>(reference: &Option<Reference<T>>) -> Option<&str> {
    reference.as_ref().and_then(Reference::id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::Branch;

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "camelCase", default)]
    struct Holder {
        branch_id: Option<Reference<Branch>>,
    }

    #[test]
    fn test_bare_id() {
        let h: Holder = serde_json::from_str(r#"{"branchId": "b1"}"#).unwrap();
        assert_eq!(referenced_id(&h.branch_id), Some("b1"));
        assert!(populated(&h.branch_id).is_none());
    }

    #[test]
    fn test_populated_document() {
        let h: Holder =
            serde_json::from_str(r#"{"branchId": {"_id": "b1", "name": "North"}}"#).unwrap();
        assert_eq!(referenced_id(&h.branch_id), Some("b1"));
        assert_eq!(
            populated(&h.branch_id).and_then(|b| b.name.as_deref()),
            Some("North")
        );
    }

    #[test]
    fn test_null_reference() {
        let h: Holder = serde_json::from_str(r#"{"branchId": null}"#).unwrap();
        assert!(h.branch_id.is_none());
    }
}
