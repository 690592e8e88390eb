//! Uniform store responses and equality predicates.

use empresa_core::{EmpresaError, EmpresaResult, KeyValue};
use serde_json::Value;
use std::fmt;

/// Status reported for successful reads, updates and deletes.
pub const STATUS_OK: u16 = 200;

/// Status reported for successful inserts.
pub const STATUS_CREATED: u16 = 201;

/// Transport statuses a backend uses to acknowledge a delete.
pub const ACKNOWLEDGED_STATUSES: [u16; 2] = [200, 204];

/// Response body of a store call.
///
/// `Empty` (no body at all) is distinct from `Many(vec![])`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// No payload.
    Empty,
    /// A single mapping.
    Single(KeyValue),
    /// An ordered sequence of mappings.
    Many(Vec<KeyValue>),
}

impl Payload {
    /// Decodes a JSON body. Arrays must contain only objects.
    pub fn from_json(value: Value) -> EmpresaResult<Self> {
        match value {
            Value::Null => Ok(Self::Empty),
            Value::Object(map) => Ok(Self::Single(map)),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => Ok(map),
                    other => Err(EmpresaError::Serialization(format!(
                        "Expected an object in response array, got {}",
                        other
                    ))),
                })
                .collect::<EmpresaResult<Vec<_>>>()
                .map(Self::Many),
            other => Err(EmpresaError::Serialization(format!(
                "Unexpected response payload: {}",
                other
            ))),
        }
    }

    /// Checks if there is nothing in the payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Single(map) => map.is_empty(),
            Self::Many(rows) => rows.is_empty(),
        }
    }

    /// Normalises the payload into a sequence of rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<KeyValue> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(map) => vec![map],
            Self::Many(rows) => rows,
        }
    }
}

/// Where a response status came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusSource {
    /// Reported by a remote backend over its transport.
    Transport,
    /// Produced locally by an in-process store.
    Synthetic,
}

/// Payload plus status returned by every [`super::TableStore`] operation.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreResponse {
    /// Response body.
    pub payload: Payload,
    /// Success/failure indicator.
    pub status: u16,
    /// Origin of `status`.
    pub source: StatusSource,
}

impl StoreResponse {
    /// Creates a response produced by an in-process store.
    #[must_use]
    pub const fn synthetic(payload: Payload, status: u16) -> Self {
        Self {
            payload,
            status,
            source: StatusSource::Synthetic,
        }
    }

    /// Creates a response received from a remote backend.
    #[must_use]
    pub const fn transport(payload: Payload, status: u16) -> Self {
        Self {
            payload,
            status,
            source: StatusSource::Transport,
        }
    }

    /// Checks if the payload holds at least one value.
    #[must_use]
    pub fn has_payload(&self) -> bool {
        !self.payload.is_empty()
    }

    /// Checks if a remote backend acknowledged the call with an accepted
    /// status. Synthetic statuses never count.
    #[must_use]
    pub fn is_acknowledged(&self) -> bool {
        self.source == StatusSource::Transport && ACKNOWLEDGED_STATUSES.contains(&self.status)
    }

    /// Normalises the payload into a sequence of rows.
    #[must_use]
    pub fn into_rows(self) -> Vec<KeyValue> {
        self.payload.into_rows()
    }
}

/// Equality condition selecting rows for update and delete.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Column compared.
    pub field: String,
    /// Value the column must equal.
    pub value: Value,
}

impl Predicate {
    /// Creates a `field = value` predicate.
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Checks if a row satisfies the predicate. A missing column reads as null.
    #[must_use]
    pub fn matches(&self, row: &KeyValue) -> bool {
        values_equal(row.get(&self.field).unwrap_or(&Value::Null), &self.value)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.field, self.value)
    }
}

/// Numbers compare by value so that `7` equals `7.0`.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => match (a.as_i64(), b.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => a.as_f64() == b.as_f64(),
        },
        _ => left == right,
    }
}
