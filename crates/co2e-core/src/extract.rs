//! Heuristic recovery of typed fields from arbitrary row records.
//!
//! For each field, candidate column names are tried in order. A candidate
//! resolves to a column by:
//!
//! 1. exact case-insensitive name equality, then
//! 2. substring containment in either direction.
//!
//! The first resolved column's value is checked; if it does not qualify the
//! next candidate is tried. Activity and amount then fall back to scanning
//! every column in order. Extraction never fails: missing fields are `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::record::{CellValue, Record};

pub const ACTIVITY_FIELDS: &[&str] = &[
    "activity",
    "type",
    "category",
    "description",
    "item",
    "service",
    "fuel_type",
    "transport_mode",
    "energy_source",
    "waste_type",
];

pub const AMOUNT_FIELDS: &[&str] = &[
    "amount",
    "quantity",
    "value",
    "volume",
    "distance",
    "consumption",
    "usage",
    "kwh",
    "liters",
    "litres",
    "km",
    "miles",
    "kg",
    "tonnes",
];

pub const DATE_FIELDS: &[&str] = &["date", "timestamp", "time", "created_at", "occurred_at"];

pub const LOCATION_FIELDS: &[&str] = &["location", "country", "region", "city", "site", "facility"];

/// Minimum trimmed length for a text column to serve as a fallback activity.
const FALLBACK_ACTIVITY_MIN_LEN: usize = 3;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%b %d %Y"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y/%m/%d %H:%M:%S"];

/// All fields recovered from one record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedFields {
    pub activity: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
}

pub fn extract_fields(record: &Record) -> ExtractedFields {
    ExtractedFields {
        activity: extract_activity(record),
        amount: extract_amount(record),
        date: extract_date(record),
        location: extract_location(record),
    }
}

// ---------------------------------------------------------------------------
// Column resolution
// ---------------------------------------------------------------------------

/// Resolve a candidate name to a column value using the two-tier key match.
pub fn find_field<'a>(record: &'a Record, candidate: &str) -> Option<&'a CellValue> {
    let candidate = candidate.to_lowercase();

    if let Some((_, value)) = record
        .iter()
        .find(|(name, _)| name.to_lowercase() == candidate)
    {
        return Some(value);
    }

    record
        .iter()
        .find(|(name, _)| {
            let name = name.to_lowercase();
            !name.is_empty() && (name.contains(&candidate) || candidate.contains(&name))
        })
        .map(|(_, value)| value)
}

fn first_candidate<T>(
    record: &Record,
    candidates: &[&str],
    accept: impl Fn(&CellValue) -> Option<T>,
) -> Option<T> {
    candidates
        .iter()
        .filter_map(|candidate| find_field(record, candidate))
        .find_map(accept)
}

fn non_empty_text(value: &CellValue) -> Option<String> {
    let text = value.as_text()?.trim();
    (!text.is_empty()).then(|| text.to_string())
}

fn positive_number(value: &CellValue) -> Option<f64> {
    value.as_number().filter(|n| *n > 0.0)
}

// ---------------------------------------------------------------------------
// Fields
// ---------------------------------------------------------------------------

/// Activity description, trimmed and lowercased.
pub fn extract_activity(record: &Record) -> Option<String> {
    first_candidate(record, ACTIVITY_FIELDS, non_empty_text)
        .or_else(|| {
            record.iter().find_map(|(_, value)| {
                let text = value.as_text()?.trim();
                let qualifies = text.chars().count() >= FALLBACK_ACTIVITY_MIN_LEN
                    && value.as_number().is_none();
                qualifies.then(|| text.to_string())
            })
        })
        .map(|text| text.to_lowercase())
}

/// Activity quantity, strictly positive.
pub fn extract_amount(record: &Record) -> Option<f64> {
    first_candidate(record, AMOUNT_FIELDS, positive_number)
        .or_else(|| record.iter().find_map(|(_, value)| positive_number(value)))
}

pub fn extract_date(record: &Record) -> Option<NaiveDate> {
    first_candidate(record, DATE_FIELDS, parse_date)
}

/// Location text, trimmed but case preserved.
pub fn extract_location(record: &Record) -> Option<String> {
    first_candidate(record, LOCATION_FIELDS, non_empty_text)
}

/// Calendar date from a cell. Numbers are epoch milliseconds.
pub fn parse_date(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Number(ms) if ms.is_finite() => {
            DateTime::from_timestamp_millis(*ms as i64).map(|dt| dt.date_naive())
        }
        CellValue::Text(text) => parse_date_text(text.trim()),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
        })
}
