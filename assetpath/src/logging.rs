//! Logging infrastructure for the assetpath library.
//!
//! This module provides a simple stderr-based logger with configurable
//! levels, plus the one-line notification shown to a user when an asset
//! build finishes.

use std::env;
use std::fmt;

use crate::pipeline::Outcome;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "ASSETPATH_LOG_MODE";

/// Notification shown when a build pipeline succeeds.
pub const COMPLETE_NOTIFICATION: &str = "[OK] Complete!";

/// Prefix of the notification shown when a build pipeline fails.
pub const FAIL_PREFIX: &str = "[Fail] ";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use assetpath::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors, warnings and build notifications).
    Normal,
    /// Verbose output (adds info and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetpath::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// Render the notification for a finished build.
///
/// # Examples
///
/// ```
/// use assetpath::logging::notification;
/// use assetpath::Outcome;
///
/// assert_eq!(notification(&Outcome::ok(())), "[OK] Complete!");
/// assert_eq!(
///     notification(&Outcome::<()>::err("Target is not Humanoid-model")),
///     "[Fail] Target is not Humanoid-model"
/// );
/// ```
#[must_use]
pub fn notification<V>(outcome: &Outcome<V>) -> String {
    match outcome {
        Outcome::Ok(_) => COMPLETE_NOTIFICATION.to_string(),
        Outcome::Err(message) => format!("{FAIL_PREFIX}{message}"),
    }
}

/// A simple stderr-based logger.
///
/// The logger only writes messages at or below its configured verbosity.
///
/// # Examples
///
/// ```
/// use assetpath::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("could not read assetpath.yaml");
/// logger.info("not printed (requires Verbose)");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message.
    ///
    /// Error messages are displayed unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message.
    ///
    /// Info messages are only displayed at Verbose level.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }

    /// Reports the outcome of a build pipeline.
    ///
    /// Prints `[OK] Complete!` or `[Fail] <message>` unless the level is
    /// Quiet.
    pub fn report<V>(&self, outcome: &Outcome<V>) {
        if let Some(line) = self.report_line(outcome) {
            eprintln!("{line}");
        }
    }

    fn report_line<V>(&self, outcome: &Outcome<V>) -> Option<String> {
        (self.level >= LogLevel::Normal).then(|| notification(outcome))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `ASSETPATH_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use assetpath::{init_logger, LogLevel};
///
/// let logger = init_logger(true, false);
/// assert_eq!(logger.level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    if let Ok(env_value) = env::var(LOG_MODE_ENV) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    Logger::new(LogLevel::Normal)
}
