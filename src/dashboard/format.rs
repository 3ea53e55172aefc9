//! Display helpers used by the renderers.

use crate::consts::cli_consts::PLACEHOLDER;
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};

// en-GB short month names; CLDR abbreviates September to four letters.
const EN_GB_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec",
];

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

fn parse_date(raw: &str) -> Option<NaiveDate> {
    // Instants with an offset are shown on the viewer's calendar day.
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
        .or_else(|| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}

/// `DD Mon YYYY`, `-` for empty input, the raw text when it is not a date.
pub fn format_date(date_str: &str) -> String {
    if date_str.is_empty() {
        return PLACEHOLDER.to_string();
    }
    match parse_date(date_str.trim()) {
        Some(date) => format!(
            "{:02} {} {:04}",
            date.day(),
            EN_GB_MONTHS[date.month0() as usize],
            date.year()
        ),
        None => date_str.to_string(),
    }
}

/// Same as [`format_date`] for an optional field.
pub fn format_optional_date(date_str: Option<&str>) -> String {
    format_date(date_str.unwrap_or_default())
}

/// Two decimals; a missing cost renders as `0.00`.
pub fn format_cost(cost: Option<f64>) -> String {
    match cost {
        Some(value) => format!("{:.2}", value),
        None => "0.00".to_string(),
    }
}
