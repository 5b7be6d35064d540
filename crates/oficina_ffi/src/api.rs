//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose civil-time values and logging bootstrap to Dart via FRB.
//! - Flatten core errors into simple response envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Dates and times are always civil-timezone strings.

use log::warn;
use oficina_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    parse_civil_date_time as parse_inner, ping as ping_inner, CivilTimeService,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Current civil date (`YYYY-MM-DD`).
#[flutter_rust_bridge::frb(sync)]
pub fn civil_today() -> String {
    CivilTimeService::system().current_date()
}

/// Current civil wall-clock time (`HH:MM:SS`).
#[flutter_rust_bridge::frb(sync)]
pub fn civil_now() -> String {
    CivilTimeService::system().current_time()
}

/// Monday that begins the current civil week (`YYYY-MM-DD`).
#[flutter_rust_bridge::frb(sync)]
pub fn civil_week_start() -> String {
    CivilTimeService::system().week_start()
}

/// Date, time and week start read from one clock sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivilSnapshotResponse {
    pub date: String,
    pub time: String,
    pub week_start: String,
    pub weekday: String,
}

/// Returns a consistent civil snapshot for dashboard headers.
#[flutter_rust_bridge::frb(sync)]
pub fn civil_snapshot() -> CivilSnapshotResponse {
    let snapshot = CivilTimeService::system().snapshot();
    CivilSnapshotResponse {
        date: snapshot.date,
        time: snapshot.time,
        week_start: snapshot.week_start,
        weekday: snapshot.weekday,
    }
}

/// Parse outcome for civil date/time form fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CivilParseResponse {
    /// Whether both inputs were well-formed.
    pub ok: bool,
    /// Parsed instant in Unix epoch milliseconds.
    pub epoch_ms: Option<i64>,
    /// Empty on success, error description otherwise.
    pub message: String,
}

/// Combines civil date and time form fields into an absolute instant.
///
/// # FFI contract
/// - Never panics.
/// - Invalid input yields `ok = false` with the rejected field in `message`.
#[flutter_rust_bridge::frb(sync)]
pub fn parse_civil_date_time(date: String, time: String) -> CivilParseResponse {
    match parse_inner(date.as_str(), time.as_str()) {
        Ok(instant) => CivilParseResponse {
            ok: true,
            epoch_ms: Some(instant.timestamp_millis()),
            message: String::new(),
        },
        Err(err) => {
            warn!("event=ffi_parse module=ffi status=rejected field={}", err.field);
            CivilParseResponse {
                ok: false,
                epoch_ms: None,
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        civil_snapshot, civil_today, civil_week_start, core_version, init_logging,
        parse_civil_date_time, ping,
    };

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(error.contains("empty"));
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/oficina-logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn parse_returns_epoch_millis_for_valid_input() {
        let response = parse_civil_date_time("2024-03-10".to_string(), "14:30:00".to_string());
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.epoch_ms, Some(1_710_091_800_000));
        assert!(response.message.is_empty());
    }

    #[test]
    fn parse_reports_rejected_field() {
        let response = parse_civil_date_time("10/03/2024".to_string(), "14:30".to_string());
        assert!(!response.ok);
        assert_eq!(response.epoch_ms, None);
        assert!(response.message.contains("date"));
    }

    #[test]
    fn civil_strings_are_well_formed() {
        assert_eq!(civil_today().len(), 10);
        assert_eq!(civil_week_start().len(), 10);
        let snapshot = civil_snapshot();
        assert_eq!(snapshot.time.len(), 8);
        assert!(snapshot.week_start <= snapshot.date);
    }
}
