//! Forgiving decoders for api payloads.
//!
//! The analytics api is not validated: a payload of the wrong shape must
//! turn into an empty chart, not an error panel.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use std::collections::BTreeMap;

/// Decode every well-formed element of an array. Non-arrays yield nothing.
pub fn list<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        other => {
            tracing::debug!("expected an array payload, got {other}");
            Vec::new()
        }
    }
}

/// Decode an object, falling back to `T::default()` on a shape mismatch.
/// Anything but a JSON object is a mismatch; arrays would otherwise fill
/// struct fields by position.
pub fn object<T: DeserializeOwned + Default>(value: Value) -> T {
    if !value.is_object() {
        tracing::debug!("expected an object payload, got {value}");
        return T::default();
    }
    serde_json::from_value(value).unwrap_or_else(|e| {
        tracing::debug!("unexpected object payload: {e}");
        T::default()
    })
}

/// A JSON number, or a string holding one.
fn as_number(value: &Value) -> Option<f64> {
    let number: f64 = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn as_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        as_number(value)
            .filter(|n| *n >= 0.0)
            .map(|n| n.round() as u64)
    })
}

// Field decoders for `#[serde(deserialize_with = ...)]`. A malformed field
// decodes as absent so it cannot take its siblings down with it.

/// Label to number map; entries that are not numbers are dropped.
pub fn number_map<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<String, f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries
            .into_iter()
            .filter_map(|(label, value)| Some((label, as_number(&value)?)))
            .collect(),
        _ => BTreeMap::new(),
    })
}

pub fn number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(as_number(&Value::deserialize(deserializer)?).unwrap_or_default())
}

/// A non-negative whole number; `12.0` is accepted as 12.
pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(as_count(&Value::deserialize(deserializer)?).unwrap_or_default())
}

pub fn optional_count<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<u64>, D::Error> {
    Ok(as_count(&Value::deserialize(deserializer)?))
}
