//! Environment variable handling for configuration overrides.
//!
//! `ASSETPATH_*` variables override values from configuration files.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Alternate separator override (a single character).
pub const ALT_SEPARATOR_ENV: &str = "ASSETPATH_ALT_SEPARATOR";

/// Turns sanitization of plain paths on or off.
pub const SANITIZE_ENV: &str = "ASSETPATH_SANITIZE";

/// Sanitizer pattern override.
pub const SANITIZE_PATTERN_ENV: &str = "ASSETPATH_SANITIZE_PATTERN";

/// Sanitizer replacement override.
pub const SANITIZE_REPLACEMENT_ENV: &str = "ASSETPATH_SANITIZE_REPLACEMENT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use assetpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable holds an invalid value (for example a
    /// multi-character separator or an unrecognized boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var(ALT_SEPARATOR_ENV) {
            config.alternate_separator = Some(Self::parse_char(ALT_SEPARATOR_ENV, &val)?);
        }

        if let Ok(val) = env::var(SANITIZE_ENV) {
            let enabled = Self::parse_bool(SANITIZE_ENV, &val)?;
            config.sanitize.get_or_insert_with(Default::default).enabled = Some(enabled);
        }

        if let Ok(pattern) = env::var(SANITIZE_PATTERN_ENV) {
            config.sanitize.get_or_insert_with(Default::default).pattern = Some(pattern);
        }

        if let Ok(replacement) = env::var(SANITIZE_REPLACEMENT_ENV) {
            config
                .sanitize
                .get_or_insert_with(Default::default)
                .replacement = Some(replacement);
        }

        Ok(())
    }

    /// Parse a value that must be exactly one character.
    fn parse_char(field: &str, s: &str) -> Result<char> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Expected exactly one character, got '{s}'"),
            }),
        }
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
