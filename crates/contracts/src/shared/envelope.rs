//! Unwrapping of collection responses
//!
//! List endpoints are not consistent about where the array lives:
//! `{ data: [...] }`, `{ results: [...] }`, `{ data: { data: [...] } }`,
//! `{ data: { results: [...] } }`, `{ branches: [...] }` or a bare array.

use serde::de::DeserializeOwned;
use serde_json::Value;

const ITEM_KEYS: [&str; 4] = ["data", "results", "branches", "items"];

/// Extracts the item list from a collection response.
///
/// Anything that does not match a known shape yields an empty list.
pub fn collection_items(body: Value) -> Vec<Value> {
    unwrap_level(body, 0)
}

/// Typed items of a collection response; an item that is not an object
/// becomes `T::default()`.
pub fn collection_of<T: DeserializeOwned + Default>(body: Value) -> Vec<T> {
    collection_items(body)
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect()
}

fn unwrap_level(body: Value, depth: usize) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) if depth < 2 => {
            for key in ITEM_KEYS {
                match map.remove(key) {
                    Some(Value::Array(items)) => return items,
                    Some(inner @ Value::Object(_)) => {
                        let items = unwrap_level(inner, depth + 1);
                        if !items.is_empty() {
                            return items;
                        }
                    }
                    _ => {}
                }
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}
