//! Input record for diagnostic checks.
//!
//! A record is a free-form mapping of field names to JSON values. Checks pick
//! the fields they need and ignore everything else.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::DiagnosticsError;

/// Raw diagnostic input: field name to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputRecord {
    fields: Map<String, Value>,
}

impl InputRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a record from JSON object text.
    ///
    /// # Errors
    /// Returns `DiagnosticsError::Json` for malformed text and
    /// `DiagnosticsError::NotAnObject` when the top-level value is not an object.
    pub fn from_json(text: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::try_from(value)
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Insert a field, returning the previous value if any.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Map<String, Value>> for InputRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl TryFrom<Value> for InputRecord {
    type Error = DiagnosticsError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(DiagnosticsError::NotAnObject(json_kind(&other))),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for InputRecord
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Reasons a field value could not be read as a number.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoercionError {
    #[error("{0} is not convertible to a number")]
    NotNumeric(&'static str),

    #[error("could not parse {0:?} as a number")]
    Unparsable(String),

    #[error("number is outside the f64 range")]
    OutOfRange,
}

/// Convert a field value to `f64`.
///
/// Numbers convert directly, booleans become `1.0`/`0.0`, strings are trimmed
/// and parsed as decimal floats (`_` allowed only between digits). `null`,
/// arrays and objects are rejected. `"nan"` converts to NaN, which compares
/// false against any limit.
///
/// # Errors
/// Returns a `CoercionError` describing why the value is not numeric.
pub fn coerce_f64(value: &Value) -> Result<f64, CoercionError> {
    match value {
        Value::Number(n) => n.as_f64().ok_or(CoercionError::OutOfRange),
        Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_decimal(s),
        other => Err(CoercionError::NotNumeric(json_kind(other))),
    }
}

fn parse_decimal(text: &str) -> Result<f64, CoercionError> {
    let trimmed = text.trim();
    let unparsable = || CoercionError::Unparsable(trimmed.to_string());

    let digits: Cow<'_, str> = if trimmed.contains('_') {
        if !separators_between_digits(trimmed) {
            return Err(unparsable());
        }
        Cow::Owned(trimmed.replace('_', ""))
    } else {
        Cow::Borrowed(trimmed)
    };

    digits.parse::<f64>().map_err(|_| unparsable())
}

/// Every `_` must sit between two ASCII digits.
fn separators_between_digits(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.iter().enumerate().all(|(i, &b)| {
        if b != b'_' {
            return true;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        matches!((before, after), (Some(p), Some(n)) if p.is_ascii_digit() && n.is_ascii_digit())
    })
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
