//! Core traits for the record model.

use serde_json::{Map, Value};

/// Key-value representation of a record: field name to scalar or null.
pub type KeyValue = Map<String, Value>;

/// A typed record stored in a table.
///
/// Implementations supply the two conversions the data access layer needs.
/// Both are total: `from_representation` substitutes defaults for missing
/// keys, accepts alias key names, and keeps unparseable date/time strings as
/// raw values instead of failing.
pub trait TableRecord: Send + Sync + Sized {
    /// Converts the record into its key-value representation.
    fn to_representation(&self) -> KeyValue;

    /// Rebuilds a record from a key-value representation.
    fn from_representation(data: &KeyValue) -> Self;
}
