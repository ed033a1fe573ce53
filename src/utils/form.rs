//! Helpers for JSON bodies posted straight from HTML forms, where an
//! untouched optional input arrives as `""` instead of being omitted.

use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Deserializes `null`, a missing field or a blank string as `None`.
/// Numeric strings such as `"12"` are accepted for number targets.
///
/// Use together with `#[serde(default)]`.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => from_form_string(s).map(Some).map_err(D::Error::custom),
        Some(v) => serde_json::from_value(v).map(Some).map_err(D::Error::custom),
    }
}

fn from_form_string<T: DeserializeOwned>(s: String) -> serde_json::Result<T> {
    let number = s.trim().parse::<Number>().ok();
    match serde_json::from_value(Value::String(s)) {
        Ok(v) => Ok(v),
        Err(e) => match number {
            Some(n) => serde_json::from_value(Value::Number(n)),
            None => Err(e),
        },
    }
}

/// `Some` only for strings with visible content.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
