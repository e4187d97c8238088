//! Date parsing and rendering helpers
//!
//! The intake program exchanges all dates with the user in `YYYY-MM-DD`
//! form, both on prompts and on the receipt.

use chrono::NaiveDate;
use thiserror::Error;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors for date handling
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date {0:?}: expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Parses a date in strict `YYYY-MM-DD` form
///
/// # Errors
///
/// Returns `TemporalError::InvalidDate` if the text does not match the
/// pattern or names an impossible calendar date.
pub fn parse_iso_date(text: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(text.trim(), ISO_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(text.to_string()))
}

/// Renders a date as `YYYY-MM-DD`
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
