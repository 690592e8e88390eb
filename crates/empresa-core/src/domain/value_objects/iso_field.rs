//! Lenient ISO-8601 date and timestamp fields.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;
use std::fmt;

/// Types that can be read from and written to an ISO-8601 string.
pub trait IsoFormat: Sized {
    /// Parses the value, returning `None` when the text is not understood.
    fn parse_iso(raw: &str) -> Option<Self>;

    /// Renders the value as ISO-8601 text.
    fn to_iso(&self) -> String;
}

impl IsoFormat for DateTime<FixedOffset> {
    /// Accepts RFC 3339, offset-less timestamps (read as UTC), and bare dates
    /// (midnight UTC).
    fn parse_iso(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
            return Some(parsed);
        }

        ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| naive.and_utc().fixed_offset())
    }

    fn to_iso(&self) -> String {
        self.to_rfc3339()
    }
}

impl IsoFormat for NaiveDate {
    /// Accepts `YYYY-MM-DD`, or a full timestamp whose date part is kept.
    fn parse_iso(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::<FixedOffset>::parse_iso(raw).map(|ts| ts.date_naive()))
    }

    fn to_iso(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

/// A date/time field that never fails to convert.
///
/// Text that does not parse is kept verbatim and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IsoField<T> {
    /// Successfully parsed value.
    Parsed(T),
    /// Text that could not be parsed, kept verbatim.
    Raw(String),
}

/// Timestamp columns such as `created_at`.
pub type Timestamp = IsoField<DateTime<FixedOffset>>;

/// Calendar date columns such as `data_nasc`.
pub type CalendarDate = IsoField<NaiveDate>;

impl<T: IsoFormat> IsoField<T> {
    /// Parses text, falling back to [`IsoField::Raw`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        T::parse_iso(raw).map_or_else(|| Self::Raw(raw.to_string()), Self::Parsed)
    }

    /// Reads a JSON value. Null yields `None`; non-string scalars are kept raw.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::parse(s)),
            other => Some(Self::Raw(other.to_string())),
        }
    }

    /// Renders the field for the wire.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }

    /// Returns the parsed value, if any.
    #[must_use]
    pub const fn parsed(&self) -> Option<&T> {
        match self {
            Self::Parsed(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Checks if the field holds a parsed value.
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

impl<T> From<T> for IsoField<T> {
    fn from(value: T) -> Self {
        Self::Parsed(value)
    }
}

impl<T: IsoFormat> fmt::Display for IsoField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(value) => f.write_str(&value.to_iso()),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}
