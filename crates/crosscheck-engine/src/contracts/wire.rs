//! Lenient decoding helpers for response fields.
//!
//! Backends disagree on how they encode empty and typed values. An explicit
//! `null` list decodes as an empty list, and a typed scalar that arrives in
//! another JSON shape keeps its raw form so it can still be compared.

use crosscheck_core::diff::ToScalar;
use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` as `T::default()`.
///
/// Use with `#[serde(default, deserialize_with = "null_as_empty")]` so a
/// missing field and a `null` field both end up empty.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A typed scalar, or the raw JSON value when it does not decode as `T`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Wire<T> {
    Typed(T),
    Raw(serde_json::Value),
}

impl<T> Wire<T> {
    pub fn typed(&self) -> Option<&T> {
        match self {
            Wire::Typed(value) => Some(value),
            Wire::Raw(_) => None,
        }
    }
}

impl<T: ToScalar> ToScalar for Wire<T> {
    fn to_scalar(&self) -> Option<String> {
        match self {
            Wire::Typed(value) => value.to_scalar(),
            Wire::Raw(serde_json::Value::Null) => None,
            Wire::Raw(serde_json::Value::String(raw)) => Some(raw.clone()),
            Wire::Raw(raw) => Some(raw.to_string()),
        }
    }
}
