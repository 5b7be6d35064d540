//! Operator CLI for Oficina civil-time utilities.
//!
//! # Responsibility
//! - Print civil date/time values exactly as the front-end would show them.
//! - Validate civil date/time text without launching the UI.

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use oficina_core::{
    default_log_level, init_logging, parse_civil_date_time, CivilTimeService, Clock, FixedClock,
    SystemClock,
};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "oficina", version, about = "Civil-time utilities for Oficina")]
struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, env = "OFICINA_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "OFICINA_LOG_DIR", global = true)]
    log_dir: Option<String>,

    /// Evaluate as if "now" were this RFC 3339 instant.
    #[arg(long, global = true, value_parser = parse_instant)]
    at: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Current civil date (YYYY-MM-DD).
    Today,
    /// Current civil time (HH:MM:SS).
    Now,
    /// Monday that begins the current civil week.
    WeekStart,
    /// Date, time and week start from one clock read.
    Snapshot {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Convert civil date and time text to a UTC instant.
    Parse {
        /// Civil date, YYYY-MM-DD.
        date: String,
        /// Civil time, HH:MM or HH:MM:SS.
        time: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match logging_plan(cli.log_level.as_deref(), cli.log_dir.as_deref()) {
        LoggingPlan::Off => {}
        LoggingPlan::LevelWithoutDir(level) => {
            eprintln!(
                "oficina: warning: log level `{level}` ignored; set --log-dir to enable logging"
            );
        }
        LoggingPlan::File { level, dir } => {
            if let Err(err) = init_logging(&level, &dir) {
                eprintln!("oficina: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let result = match cli.at {
        Some(instant) => run(cli.command, FixedClock::new(instant)),
        None => run(cli.command, SystemClock),
    };
    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("oficina: {message}");
            ExitCode::FAILURE
        }
    }
}

/// How the CLI should set up logging for one invocation.
#[derive(Debug, PartialEq, Eq)]
enum LoggingPlan {
    Off,
    /// A level was given without a directory, so nothing would be written.
    LevelWithoutDir(String),
    File { level: String, dir: String },
}

fn logging_plan(log_level: Option<&str>, log_dir: Option<&str>) -> LoggingPlan {
    match (log_level, log_dir) {
        (None, None) => LoggingPlan::Off,
        (Some(level), None) => LoggingPlan::LevelWithoutDir(level.to_string()),
        (level, Some(dir)) => LoggingPlan::File {
            level: level.map_or_else(|| default_log_level().to_string(), str::to_string),
            dir: dir.to_string(),
        },
    }
}

fn run<C: Clock>(command: Command, clock: C) -> Result<String, String> {
    let service = CivilTimeService::new(clock);
    match command {
        Command::Today => Ok(service.current_date()),
        Command::Now => Ok(service.current_time()),
        Command::WeekStart => Ok(service.week_start()),
        Command::Snapshot { json: true } => {
            serde_json::to_string_pretty(&service.snapshot()).map_err(|err| err.to_string())
        }
        Command::Snapshot { json: false } => {
            let snapshot = service.snapshot();
            Ok(format!(
                "date={} time={} weekday={} week_start={}",
                snapshot.date, snapshot.time, snapshot.weekday, snapshot.week_start
            ))
        }
        Command::Parse { date, time } => parse_civil_date_time(&date, &time)
            .map(|instant| instant.to_rfc3339())
            .map_err(|err| err.to_string()),
    }
}

fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| format!("expected RFC 3339 instant: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{logging_plan, parse_instant, run, Cli, Command, LoggingPlan};
    use clap::{CommandFactory, Parser};
    use oficina_core::{default_log_level, FixedClock};

    #[test]
    fn log_level_without_dir_is_reported_not_dropped() {
        assert_eq!(logging_plan(None, None), LoggingPlan::Off);
        assert_eq!(
            logging_plan(Some("debug"), None),
            LoggingPlan::LevelWithoutDir("debug".to_string())
        );
    }

    #[test]
    fn log_dir_enables_file_logging_with_default_level() {
        assert_eq!(
            logging_plan(None, Some("/var/log/oficina")),
            LoggingPlan::File {
                level: default_log_level().to_string(),
                dir: "/var/log/oficina".to_string(),
            }
        );
        assert_eq!(
            logging_plan(Some("warn"), Some("/var/log/oficina")),
            LoggingPlan::File {
                level: "warn".to_string(),
                dir: "/var/log/oficina".to_string(),
            }
        );
    }

    fn clock() -> FixedClock {
        FixedClock::new(parse_instant("2024-03-10T17:30:00Z").expect("valid instant"))
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn reports_civil_values_for_pinned_clock() {
        assert_eq!(run(Command::Today, clock()).unwrap(), "2024-03-10");
        assert_eq!(run(Command::Now, clock()).unwrap(), "14:30:00");
        assert_eq!(run(Command::WeekStart, clock()).unwrap(), "2024-03-04");
    }

    #[test]
    fn snapshot_text_lists_all_fields() {
        let output = run(Command::Snapshot { json: false }, clock()).unwrap();
        assert_eq!(
            output,
            "date=2024-03-10 time=14:30:00 weekday=sun week_start=2024-03-04"
        );
    }

    #[test]
    fn parse_command_prints_utc_instant_or_error() {
        let cli = Cli::try_parse_from(["oficina", "parse", "2024-03-10", "14:30"]).unwrap();
        assert_eq!(
            run(cli.command, clock()).unwrap(),
            "2024-03-10T17:30:00+00:00"
        );

        let err = run(
            Command::Parse {
                date: "2024-03-10".to_string(),
                time: "25:00:00".to_string(),
            },
            clock(),
        )
        .unwrap_err();
        assert!(err.contains("invalid civil time"));
    }

    #[test]
    fn at_flag_accepts_offsets() {
        let cli = Cli::try_parse_from(["oficina", "--at", "2024-03-10T23:30:00-03:00", "today"])
            .unwrap();
        let instant = cli.at.expect("at should be parsed");
        assert_eq!(instant.to_rfc3339(), "2024-03-11T02:30:00+00:00");
    }
}
