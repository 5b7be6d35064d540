//! Civil-time utilities pinned to the workshop's fixed timezone.
//!
//! # Responsibility
//! - Produce dates, clock times and week boundaries in `America/Sao_Paulo`.
//! - Parse caller-supplied civil date/time text into absolute instants.
//!
//! # Invariants
//! - Every calendar/clock field leaves this module through [`to_civil`] and
//!   every parsed instant enters through [`from_civil`]; both use the one
//!   fixed offset and host-local timezone settings are never consulted.
//! - Values are recomputed on every call and never mutated afterwards.

pub mod civil;
pub mod clock;
pub mod parse;
pub mod service;

pub use civil::{
    format_civil_date, from_civil, to_civil, CivilTimestamp, CIVIL_TIMEZONE, CIVIL_TIMEZONE_ID,
    CIVIL_UTC_OFFSET_SECONDS,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use parse::{parse_civil_date_time, FormatField, InvalidFormatError};
pub use service::{
    current_civil_instant, current_date, current_date_time, current_time, week_start,
    CivilSnapshot, CivilTimeService,
};
