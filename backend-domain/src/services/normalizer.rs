//! Turns loosely structured spreadsheet rows into insertable records.
//!
//! Header names differ between exports, so every field is resolved from an
//! ordered list of candidate headers. No field can make a row fail: anything
//! missing or malformed degrades to a default.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::entities::{ImportRow, NewEvent, NewToothbrushEvent};
use crate::services::classifier::{classify_event_type, classify_location};

pub const TIMESTAMP_HEADERS: &[&str] = &["Timestamp", "Time", "Date"];
pub const EVENT_TYPE_HEADERS: &[&str] = &["Event Type", "Event"];
pub const LOCATION_HEADERS: &[&str] = &["Location"];
pub const WHO_HEADERS: &[&str] = &["Who"];
pub const IRRIGATOR_HEADERS: &[&str] = &["Used Irrigator"];

const DEFAULT_LOCATION_TEXT: &str = "home";

// ISO-8601 without an offset; read as UTC
const NAIVE_ISO_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const SPREADSHEET_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Parses a timestamp cell, falling back to `now` when the cell is absent or
/// no supported format matches.
pub fn parse_timestamp(raw: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    raw.and_then(try_parse_timestamp).unwrap_or(now)
}

pub fn try_parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    if let Some(parsed) = parse_iso(value) {
        return Some(parsed);
    }
    NaiveDateTime::parse_from_str(value, SPREADSHEET_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn parse_iso(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    for format in NAIVE_ISO_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn parse_irrigator_flag(raw: Option<&str>) -> bool {
    raw.map(|value| matches!(value.trim().to_lowercase().as_str(), "true" | "yes" | "1"))
        .unwrap_or(false)
}

pub fn normalize_event_row(row: &ImportRow, now: DateTime<Utc>) -> NewEvent {
    let event_type = row.first_of(EVENT_TYPE_HEADERS).unwrap_or("");
    let location = row.first_of(LOCATION_HEADERS).unwrap_or(DEFAULT_LOCATION_TEXT);
    let who = row
        .first_of(WHO_HEADERS)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    NewEvent {
        event_type: classify_event_type(event_type),
        location: classify_location(location),
        who,
        timestamp: parse_timestamp(row.first_of(TIMESTAMP_HEADERS), now),
    }
}

pub fn normalize_toothbrush_row(row: &ImportRow, now: DateTime<Utc>) -> NewToothbrushEvent {
    NewToothbrushEvent {
        timestamp: parse_timestamp(row.first_of(TIMESTAMP_HEADERS), now),
        used_irrigator: parse_irrigator_flag(row.first_of(IRRIGATOR_HEADERS)),
    }
}

pub fn normalize_event_rows(rows: &[ImportRow], now: DateTime<Utc>) -> Vec<NewEvent> {
    rows.iter().map(|row| normalize_event_row(row, now)).collect()
}

pub fn normalize_toothbrush_rows(rows: &[ImportRow], now: DateTime<Utc>) -> Vec<NewToothbrushEvent> {
    rows.iter()
        .map(|row| normalize_toothbrush_row(row, now))
        .collect()
}
