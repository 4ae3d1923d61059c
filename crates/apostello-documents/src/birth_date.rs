//! Birth date plausibility.
//!
//! Dates are compared as calendar days in UTC. The age bound compares years
//! only, so anyone born in `today.year() - 150` is still accepted.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Oldest accepted age, in calendar years.
pub const MAX_AGE_YEARS: u32 = 150;

const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parse `YYYY-MM-DD`, an RFC 3339 timestamp, or a naive `YYYY-MM-DDTHH:MM[:SS]`.
///
/// Timestamps with an offset are converted to UTC before the date is taken.
#[must_use]
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }

    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|dt| dt.date())
}

/// Whether `input` is a plausible birth date relative to `today`.
#[must_use]
pub fn validate_birth_date_on(input: &str, today: NaiveDate) -> bool {
    is_plausible(input, today, MAX_AGE_YEARS)
}

/// Whether `input` is a plausible birth date relative to the current UTC date.
#[must_use]
pub fn validate_birth_date(input: &str) -> bool {
    validate_birth_date_on(input, Utc::now().date_naive())
}

/// Not in the future and at most `max_age_years` calendar years back.
pub(crate) fn is_plausible(input: &str, today: NaiveDate, max_age_years: u32) -> bool {
    let Some(date) = parse_date(input) else {
        return false;
    };

    if date > today {
        return false;
    }

    i64::from(today.year()) - i64::from(date.year()) <= i64::from(max_age_years)
}
