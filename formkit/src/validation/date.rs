//! Date field validation helpers.
//!
//! Pure helpers take `today` explicitly so rules stay deterministic under
//! test; the fluent builder supplies the current local date.

use chrono::NaiveDate;

/// Date format used by date inputs (`YYYY-MM-DD`).
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Parse a date input value. Returns `None` for anything that is not a
/// well-formed `YYYY-MM-DD` date.
pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

/// Whether `date` lies strictly after `today`.
pub fn is_future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Whether a person born on `dob` has reached at least `years` whole
/// years of age as of `today`. Whole-year arithmetic; a birthday falling
/// on `today` counts as reached.
pub fn meets_min_age(dob: NaiveDate, years: u32, today: NaiveDate) -> bool {
    today.years_since(dob).is_some_and(|age| age >= years)
}
