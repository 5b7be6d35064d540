//! Civil timestamp model and the UTC <-> civil conversions.

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, NaiveDate, NaiveDateTime, Timelike, Utc, Weekday,
};

/// IANA identifier of the civil timezone, for diagnostics.
pub const CIVIL_TIMEZONE_ID: &str = "America/Sao_Paulo";

/// Fixed civil offset (UTC-03:00) used in both conversion directions.
///
/// The zone currently observes no seasonal shift; historical offsets are
/// not modelled.
pub const CIVIL_TIMEZONE: FixedOffset = match FixedOffset::west_opt(3 * 3600) {
    Some(offset) => offset,
    None => panic!("civil offset out of range"),
};

/// [`CIVIL_TIMEZONE`] in seconds east of UTC.
pub const CIVIL_UTC_OFFSET_SECONDS: i32 = CIVIL_TIMEZONE.local_minus_utc();

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// An instant re-expressed with civil-timezone calendar and clock fields.
///
/// Field accessors read the civil calendar; [`CivilTimestamp::instant`] keeps
/// the absolute identity for arithmetic and storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilTimestamp {
    inner: DateTime<FixedOffset>,
}

/// Converts an absolute instant into civil form.
///
/// This is the only place where civil calendar fields are derived.
pub fn to_civil(instant: DateTime<Utc>) -> CivilTimestamp {
    CivilTimestamp {
        inner: instant.with_timezone(&CIVIL_TIMEZONE),
    }
}

/// Resolves a civil wall-clock value to its absolute instant.
///
/// Inverse of [`to_civil`]; both use [`CIVIL_TIMEZONE`].
pub fn from_civil(civil: NaiveDateTime) -> DateTime<Utc> {
    civil.and_utc() - Duration::seconds(i64::from(CIVIL_UTC_OFFSET_SECONDS))
}

/// Formats the civil calendar date of `instant` as `YYYY-MM-DD`.
pub fn format_civil_date(instant: DateTime<Utc>) -> String {
    to_civil(instant).date_string()
}

impl CivilTimestamp {
    pub fn year(&self) -> i32 {
        self.inner.year()
    }

    pub fn month(&self) -> u32 {
        self.inner.month()
    }

    pub fn day(&self) -> u32 {
        self.inner.day()
    }

    pub fn hour(&self) -> u32 {
        self.inner.hour()
    }

    pub fn minute(&self) -> u32 {
        self.inner.minute()
    }

    pub fn second(&self) -> u32 {
        self.inner.second()
    }

    pub fn weekday(&self) -> Weekday {
        self.inner.weekday()
    }

    /// Day-of-week index with Sunday = 0 through Saturday = 6.
    pub fn weekday_index(&self) -> u32 {
        self.inner.weekday().num_days_from_sunday()
    }

    /// Civil calendar date.
    pub fn date(&self) -> NaiveDate {
        self.inner.date_naive()
    }

    /// `YYYY-MM-DD`, zero-padded.
    pub fn date_string(&self) -> String {
        self.inner.format(DATE_FORMAT).to_string()
    }

    /// `HH:MM:SS`, 24-hour, zero-padded.
    pub fn time_string(&self) -> String {
        self.inner.format(TIME_FORMAT).to_string()
    }

    /// Absolute instant this value describes.
    pub fn instant(&self) -> DateTime<Utc> {
        self.inner.with_timezone(&Utc)
    }

    /// Returns a new timestamp `days` days later (negative moves back).
    pub fn plus_days(&self, days: i64) -> Self {
        to_civil(self.instant() + Duration::days(days))
    }

    /// Monday that begins this civil week.
    ///
    /// Sunday rolls back six days to the previous Monday.
    pub fn week_start_date(&self) -> NaiveDate {
        let day_index = self.weekday_index();
        let days_from_monday = if day_index == 0 { 6 } else { day_index - 1 };
        self.date() - Duration::days(i64::from(days_from_monday))
    }

    /// Week start formatted as `YYYY-MM-DD`.
    pub fn week_start_string(&self) -> String {
        self.week_start_date().format(DATE_FORMAT).to_string()
    }
}
