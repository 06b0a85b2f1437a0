//! Raw payload -> display record mapping

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::envelope::collection_items;

/// A display record built from one raw backend document.
///
/// `from_raw` must not fail: every missing field maps to its default.
/// Raw fields of the wrong JSON type default one by one (see
/// `serde_utils`), so only a document that is not an object at all is
/// treated as an empty document.
pub trait Normalize: Sized {
    type Raw: DeserializeOwned + Default;

    fn from_raw(raw: &Self::Raw) -> Self;

    fn from_value(value: Value) -> Self {
        let raw = serde_json::from_value::<Self::Raw>(value).unwrap_or_default();
        Self::from_raw(&raw)
    }

    /// Normalizes every item of a collection response body.
    fn from_response(body: Value) -> Vec<Self> {
        collection_items(body)
            .into_iter()
            .map(Self::from_value)
            .collect()
    }
}
