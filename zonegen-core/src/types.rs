//! Domain types for zone data.
//!
//! A [`ZoneDict`] is whatever mapping the zone YAML decodes to. Its shape is
//! owned by the template that consumes it, so nothing here looks inside
//! individual entries.

use serde_json::{Map as JsonMap, Number as JsonNumber, Value as JsonValue};
use serde_yaml::{Mapping, Value};

use crate::error::ZoneError;

// ---------------------------------------------------------------------------
// ZoneDict
// ---------------------------------------------------------------------------

/// Decoded zone configuration: a YAML mapping with arbitrarily nested values.
///
/// Always a mapping. Documents whose top level is anything else decode to an
/// empty dictionary (see [`ZoneDict::from_value`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneDict(Mapping);

impl ZoneDict {
    /// An empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a decoded YAML document. Non-mapping documents become empty.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Mapping(mapping) => Self(mapping),
            other => {
                tracing::debug!(
                    kind = value_kind(&other),
                    "top-level zone yaml is not a mapping; using an empty dictionary"
                );
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a top-level entry by string key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow the underlying mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    /// Convert to the JSON shape the template engine consumes.
    ///
    /// Scalar keys become strings (`1` → `"1"`, `true` → `"true"`). Falsy
    /// scalar keys (null, `false`, `0`, `0.0`, `""`) all become `""` so a
    /// template's `{% if key %}` skips them; key order follows the document. Sequence or mapping keys are rejected
    /// with [`ZoneError::UnsupportedKey`].
    pub fn to_json(&self) -> Result<JsonValue, ZoneError> {
        mapping_to_json(&self.0)
    }
}

// ---------------------------------------------------------------------------
// YAML → JSON conversion
// ---------------------------------------------------------------------------

fn mapping_to_json(mapping: &Mapping) -> Result<JsonValue, ZoneError> {
    let mut out = JsonMap::with_capacity(mapping.len());
    for (key, value) in mapping {
        out.insert(key_to_string(key)?, yaml_to_json(value)?);
    }
    Ok(JsonValue::Object(out))
}

fn yaml_to_json(value: &Value) -> Result<JsonValue, ZoneError> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => number_to_json(n),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Sequence(items) => JsonValue::Array(
            items
                .iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Mapping(mapping) => mapping_to_json(mapping)?,
        Value::Tagged(tagged) => yaml_to_json(&tagged.value)?,
    })
}

fn number_to_json(n: &serde_yaml::Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::from(i)
    } else if let Some(u) = n.as_u64() {
        JsonValue::from(u)
    } else {
        // NaN and infinities have no JSON form.
        n.as_f64()
            .and_then(JsonNumber::from_f64)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null)
    }
}

fn key_to_string(key: &Value) -> Result<String, ZoneError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(String::new()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(true) => Ok("true".to_owned()),
        Value::Bool(false) | Value::Null => Ok(String::new()),
        Value::Tagged(tagged) => key_to_string(&tagged.value),
        other => Err(ZoneError::UnsupportedKey {
            key: format!("{other:?}"),
        }),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
