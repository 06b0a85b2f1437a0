//! Serde helpers for loosely shaped backend payloads
//!
//! The backend does not enforce a schema, so one record can carry a number
//! where a string is expected or a `null` inside an array. Each helper
//! defaults only the offending field and leaves the rest of the record
//! intact.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
}

/// Text field that also accepts numbers and booleans.
///
/// Works for `String` and `Option<String>` fields. Objects, arrays and
/// `null` fall back to the default.
pub fn text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String> + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match Scalar::deserialize(value) {
        Ok(Scalar::String(s)) => T::from(s),
        Ok(Scalar::Number(n)) => T::from(n.to_string()),
        Ok(Scalar::Bool(b)) => T::from(b.to_string()),
        Err(_) => T::default(),
    })
}

/// Counter field that also accepts numeric strings such as `"3"`.
pub fn count<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<u32> + Default,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match Scalar::deserialize(value) {
        Ok(Scalar::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Ok(Scalar::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    Ok(parsed.map(T::from).unwrap_or_default())
}

/// Any other field: a value of the wrong shape becomes the default.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// List field: `null` or a non-array becomes empty, and elements that do
/// not parse are dropped.
pub fn items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| T::deserialize(v).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Returns an owned copy of the string when it is present and not empty.
///
/// Mirrors the `value || null` defaulting used by the list views.
pub fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.is_empty()).cloned()
}
