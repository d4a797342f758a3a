/// Date and time display helpers for booking records
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub const INVALID_DATE: &str = "Invalid Date";

/// Format an API date as "March 5, 2024".
///
/// Accepts a plain `YYYY-MM-DD` date or an ISO 8601 date-time, in which case
/// the calendar date written in the string is used as-is. Anything else
/// renders as "Invalid Date".
pub fn format_booking_date(date: &str) -> String {
    match parse_calendar_date(date.trim()) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|datetime| datetime.date())
}

pub fn format_time_range(start_time: &str, end_time: &str) -> String {
    format!("{} - {}", start_time, end_time)
}
