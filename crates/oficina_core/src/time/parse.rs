//! Civil date/time text parsing.

use crate::time::civil::from_civil;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("date shape regex is valid"));
static TIME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}(:\d{2})?$").expect("time shape regex is valid"));

/// Input field that failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatField {
    Date,
    Time,
}

impl FormatField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Time => "time",
        }
    }

    /// Human-readable accepted shape.
    pub fn expected_shape(self) -> &'static str {
        match self {
            Self::Date => "YYYY-MM-DD",
            Self::Time => "HH:MM or HH:MM:SS (24-hour)",
        }
    }
}

impl Display for FormatField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Civil date or time text is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid civil {field} `{value}`; expected {}", .field.expected_shape())]
pub struct InvalidFormatError {
    pub field: FormatField,
    pub value: String,
}

impl InvalidFormatError {
    fn new(field: FormatField, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// Combines civil date and time text into an absolute instant.
///
/// Both inputs are read as wall-clock values in the civil timezone and the
/// fixed `-03:00` offset is applied through [`from_civil`], the same offset
/// used when formatting.
///
/// # Errors
/// - [`FormatField::Date`] when `date_text` is not a real `YYYY-MM-DD` date.
/// - [`FormatField::Time`] when `time_text` is not a real time of day.
pub fn parse_civil_date_time(
    date_text: &str,
    time_text: &str,
) -> Result<DateTime<Utc>, InvalidFormatError> {
    let date = parse_date(date_text).inspect_err(log_rejection)?;
    let time = parse_time(time_text).inspect_err(log_rejection)?;

    Ok(from_civil(NaiveDateTime::new(date, time)))
}

fn parse_date(value: &str) -> Result<NaiveDate, InvalidFormatError> {
    let trimmed = value.trim();
    if !DATE_SHAPE.is_match(trimmed) {
        return Err(InvalidFormatError::new(FormatField::Date, value));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| InvalidFormatError::new(FormatField::Date, value))
}

fn parse_time(value: &str) -> Result<NaiveTime, InvalidFormatError> {
    let trimmed = value.trim();
    if !TIME_SHAPE.is_match(trimmed) {
        return Err(InvalidFormatError::new(FormatField::Time, value));
    }
    let format = if trimmed.len() == 5 { "%H:%M" } else { "%H:%M:%S" };
    let time = NaiveTime::parse_from_str(trimmed, format)
        .map_err(|_| InvalidFormatError::new(FormatField::Time, value))?;
    // chrono encodes `:60` as a leap second; wall clocks never show it.
    if time.nanosecond() >= 1_000_000_000 {
        return Err(InvalidFormatError::new(FormatField::Time, value));
    }
    Ok(time)
}

fn log_rejection(err: &InvalidFormatError) {
    warn!(
        "event=civil_parse module=time status=rejected field={} input_len={}",
        err.field,
        err.value.len()
    );
}

#[cfg(test)]
mod tests {
    use super::{parse_civil_date_time, parse_date, parse_time, FormatField};
    use chrono::{TimeZone, Utc};

    #[test]
    fn applies_fixed_minus_three_offset() {
        let instant = parse_civil_date_time("2024-03-10", "14:30:00").expect("valid input");
        assert_eq!(instant, Utc.with_ymd_and_hms(2024, 3, 10, 17, 30, 0).unwrap());
    }

    #[test]
    fn late_evening_crosses_into_next_utc_day() {
        let instant = parse_civil_date_time("2024-12-31", "22:00").expect("valid input");
        assert_eq!(instant, Utc.with_ymd_and_hms(2025, 1, 1, 1, 0, 0).unwrap());
    }

    #[test]
    fn seconds_are_optional() {
        let time = parse_time("08:05").expect("HH:MM should parse");
        assert_eq!(time.to_string(), "08:05:00");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        parse_date(" 2024-03-10 ").expect("padded date should parse");
        parse_time("\t14:30:00\n").expect("padded time should parse");
    }

    #[test]
    fn rejects_wrong_date_shapes() {
        for input in ["10/03/2024", "2024-3-10", "24-03-10", "+2024-03-10", ""] {
            let err = parse_date(input).expect_err("bad shape must fail");
            assert_eq!(err.field, FormatField::Date, "input: {input:?}");
        }
    }

    #[test]
    fn rejects_impossible_dates() {
        for input in ["2023-02-29", "2024-13-01", "2024-04-31", "2024-00-10"] {
            let err = parse_date(input).expect_err("impossible date must fail");
            assert_eq!(err.field, FormatField::Date, "input: {input:?}");
        }
    }

    #[test]
    fn rejects_impossible_times() {
        for input in ["25:00:00", "24:00", "12:60:00", "23:59:60", "7:30", "noon"] {
            let err = parse_time(input).expect_err("bad time must fail");
            assert_eq!(err.field, FormatField::Time, "input: {input:?}");
        }
    }

    #[test]
    fn date_error_wins_over_time_error() {
        let err = parse_civil_date_time("10/03/2024", "25:00:00").expect_err("both invalid");
        assert_eq!(err.field, FormatField::Date);
    }

    #[test]
    fn error_message_names_field_and_shape() {
        let err = parse_civil_date_time("2024-03-10", "25:00:00").expect_err("invalid time");
        let message = err.to_string();
        assert!(message.contains("time"));
        assert!(message.contains("25:00:00"));
        assert!(message.contains("HH:MM"));
    }
}
