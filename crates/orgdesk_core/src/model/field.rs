//! Typed field values exposed by records for filtering, sorting and display.
//!
//! # Responsibility
//! - Give the query pipeline one value shape to compare across entity kinds.
//! - Normalize raw filter strings (`"true"`, `"2024-03-01"`, `"12"`) against
//!   the typed value they are matched with.
//!
//! # Invariants
//! - Values of different kinds never compare; `compare` returns `None`.
//! - Dates order chronologically, which matches zero-padded ISO text order.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Date format used for plain calendar dates on every boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One named field value read from a record.
///
/// Never serialized directly; it reaches the wire through
/// `to_wire_string`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Native ordering between two values of the same kind.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    /// Strict equality against a raw filter string.
    ///
    /// Stringified booleans are normalized before comparing, numbers and
    /// dates are parsed with the same formats the wire uses.
    pub fn matches_raw(&self, raw: &str) -> bool {
        let raw = raw.trim();
        match self {
            Self::Text(value) => value == raw,
            Self::Bool(value) => parse_bool(raw) == Some(*value),
            Self::Number(value) => raw.parse::<f64>().map(|parsed| parsed == *value).unwrap_or(false),
            Self::Date(value) => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .map(|parsed| parsed == *value)
                .unwrap_or(false),
            Self::Timestamp(value) => DateTime::parse_from_rfc3339(raw)
                .map(|parsed| parsed.with_timezone(&Utc) == *value)
                .unwrap_or(false),
        }
    }

    /// Returns the text payload for keyword matching.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Query-string form of this value.
    pub fn to_wire_string(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => format_number(*value),
            Self::Date(value) => value.format(DATE_FORMAT).to_string(),
            Self::Timestamp(value) => value.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "Yes"),
            Self::Bool(false) => write!(f, "No"),
            Self::Timestamp(value) => write!(f, "{}", value.format("%Y-%m-%d %H:%M:%S")),
            other => write!(f, "{}", other.to_wire_string()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

/// Parses `"true"` / `"false"` (any case, surrounding spaces allowed).
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_bool, FieldValue};
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::cmp::Ordering;

    #[test]
    fn stringified_booleans_match_real_booleans() {
        assert!(FieldValue::Bool(true).matches_raw("true"));
        assert!(FieldValue::Bool(false).matches_raw(" FALSE "));
        assert!(!FieldValue::Bool(true).matches_raw("yes"));
        assert_eq!(parse_bool("True"), Some(true));
    }

    #[test]
    fn mismatched_kinds_do_not_compare() {
        let text = FieldValue::text("10");
        let number = FieldValue::Number(10.0);
        assert_eq!(text.compare(&number), None);
        assert_eq!(number.compare(&FieldValue::Number(3.0)), Some(Ordering::Greater));
    }

    #[test]
    fn dates_compare_like_iso_text() {
        let earlier = NaiveDate::from_ymd_opt(2024, 2, 9).expect("valid date");
        let later = NaiveDate::from_ymd_opt(2024, 10, 1).expect("valid date");
        let by_value = FieldValue::Date(earlier).compare(&FieldValue::Date(later));
        let by_text = "2024-02-09".cmp("2024-10-01");
        assert_eq!(by_value, Some(by_text));
    }

    #[test]
    fn whole_numbers_encode_without_fraction() {
        assert_eq!(FieldValue::Number(40.0).to_wire_string(), "40");
        assert_eq!(FieldValue::Number(1.5).to_wire_string(), "1.5");
        assert!(FieldValue::Number(40.0).matches_raw("40"));
    }

    #[test]
    fn wire_strings_are_accepted_by_raw_matching() {
        let stamp = Utc
            .with_ymd_and_hms(2024, 3, 4, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date");
        assert_eq!(FieldValue::Timestamp(stamp).to_wire_string(), "2024-03-04T09:30:00Z");
        assert_eq!(FieldValue::Date(date).to_wire_string(), "2024-03-04");

        for value in [
            FieldValue::Timestamp(stamp),
            FieldValue::Date(date),
            FieldValue::Bool(false),
            FieldValue::Number(12.0),
        ] {
            assert!(value.matches_raw(&value.to_wire_string()), "{value:?}");
        }
    }
}
