//! Civil-time use-case service.
//!
//! # Responsibility
//! - Answer "what is the civil date/time/week right now" for screen code.
//! - Route every "now" read through one [`Clock`].
//!
//! # Invariants
//! - All values derived from one call come from one clock read, so date,
//!   time and week start always describe the same instant.

use crate::time::civil::{format_civil_date, to_civil, CivilTimestamp};
use crate::time::clock::{Clock, SystemClock};
use crate::time::parse::{parse_civil_date_time, InvalidFormatError};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Civil-time operations over an injectable clock.
#[derive(Debug, Clone, Default)]
pub struct CivilTimeService<C: Clock = SystemClock> {
    clock: C,
}

/// Consistent view of one instant for display surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CivilSnapshot {
    /// `YYYY-MM-DD` in the civil timezone.
    pub date: String,
    /// `HH:MM:SS` in the civil timezone.
    pub time: String,
    /// Monday beginning the civil week, `YYYY-MM-DD`.
    pub week_start: String,
    /// Lowercase three-letter weekday, e.g. `mon`.
    pub weekday: String,
    /// Same instant as RFC 3339 in UTC.
    pub instant_utc: String,
}

impl CivilTimeService<SystemClock> {
    /// Service backed by the host wall clock.
    pub fn system() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> CivilTimeService<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Current instant with civil calendar/clock fields.
    pub fn current_civil_instant(&self) -> CivilTimestamp {
        to_civil(self.clock.now())
    }

    /// Current civil date as `YYYY-MM-DD`.
    pub fn current_date(&self) -> String {
        self.current_civil_instant().date_string()
    }

    /// Current civil time as `HH:MM:SS`.
    pub fn current_time(&self) -> String {
        self.current_civil_instant().time_string()
    }

    /// Current civil `YYYY-MM-DD HH:MM:SS`.
    pub fn current_date_time(&self) -> String {
        let now = self.current_civil_instant();
        format!("{} {}", now.date_string(), now.time_string())
    }

    /// Monday that begins the current civil week, as `YYYY-MM-DD`.
    pub fn week_start(&self) -> String {
        self.current_civil_instant().week_start_string()
    }

    /// Civil date of an arbitrary instant as `YYYY-MM-DD`.
    pub fn format_civil_date(&self, instant: DateTime<Utc>) -> String {
        format_civil_date(instant)
    }

    /// Combines civil date and time text into an absolute instant.
    ///
    /// # Errors
    /// Returns [`InvalidFormatError`] naming the malformed field.
    pub fn parse_civil_date_time(
        &self,
        date_text: &str,
        time_text: &str,
    ) -> Result<DateTime<Utc>, InvalidFormatError> {
        parse_civil_date_time(date_text, time_text)
    }

    pub fn snapshot(&self) -> CivilSnapshot {
        let now = self.current_civil_instant();
        CivilSnapshot {
            date: now.date_string(),
            time: now.time_string(),
            week_start: now.week_start_string(),
            weekday: now.weekday().to_string().to_ascii_lowercase(),
            instant_utc: now.instant().to_rfc3339(),
        }
    }
}

/// Current civil date from the host clock.
pub fn current_date() -> String {
    CivilTimeService::system().current_date()
}

/// Current civil time from the host clock.
pub fn current_time() -> String {
    CivilTimeService::system().current_time()
}

/// Current civil date and time from the host clock.
pub fn current_date_time() -> String {
    CivilTimeService::system().current_date_time()
}

/// Current civil instant from the host clock.
pub fn current_civil_instant() -> CivilTimestamp {
    CivilTimeService::system().current_civil_instant()
}

/// Current civil week start from the host clock.
pub fn week_start() -> String {
    CivilTimeService::system().week_start()
}
