//! Wire date handling
//!
//! Found dates travel over the wire as ISO calendar dates (`YYYY-MM-DD`).
//! Everything timestamp-shaped (creation, submission) is `DateTime<Utc>` and
//! never crosses the wire in any other form than RFC 3339, so the only
//! parsing this system does is for the calendar-date fields.

use chrono::NaiveDate;
use thiserror::Error;

/// Format accepted for calendar dates on the wire
pub const WIRE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors from temporal parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Parses a wire date string into a calendar date.
///
/// Accepts exactly the `YYYY-MM-DD` format; anything else (including
/// out-of-range components such as month 13) is rejected.
pub fn parse_wire_date(raw: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(raw, WIRE_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let date = parse_wire_date("2024-03-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_reject_wrong_separator() {
        assert!(parse_wire_date("01/03/2024").is_err());
    }

    #[test]
    fn test_reject_out_of_range() {
        assert!(parse_wire_date("2024-13-40").is_err());
    }

    #[test]
    fn test_reject_empty() {
        assert!(parse_wire_date("").is_err());
    }
}
