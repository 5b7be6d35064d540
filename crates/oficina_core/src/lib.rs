//! Core utilities for the Oficina vehicle-service front-end.
//! Civil-time correctness and unsaved-work navigation guarding live here.

pub mod guard;
pub mod logging;
pub mod time;

pub use guard::{
    ConfirmationPrompt, GuardState, NavigationGuard, PromptChoice, PromptCopy, PromptRenderer,
};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use time::{
    current_civil_instant, current_date, current_date_time, current_time, format_civil_date,
    from_civil, parse_civil_date_time, to_civil, week_start, CivilSnapshot, CivilTimeService,
    CivilTimestamp, Clock, FixedClock, FormatField, InvalidFormatError, SystemClock,
    CIVIL_TIMEZONE, CIVIL_TIMEZONE_ID, CIVIL_UTC_OFFSET_SECONDS,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
