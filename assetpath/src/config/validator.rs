//! Configuration validation.
//!
//! Checks that a merged configuration can actually drive the normalizer
//! and sanitizer without producing surprising paths.

use crate::config::schema::{Config, SanitizeConfig};
use crate::error::{Error, Result};
use crate::path::Separators;
use regex::Regex;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use assetpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::with_defaults()).unwrap();
///
/// let bad = Config { alternate_separator: Some('.'), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(separator) = config.alternate_separator {
            Self::validate_separator(separator)?;
        }

        if let Some(ref sanitize) = config.sanitize {
            Self::validate_sanitize(sanitize, config.separators())?;
        }

        Ok(())
    }

    /// `'/'` is accepted and means "no alternate separator".
    fn validate_separator(separator: char) -> Result<()> {
        let problem = if separator == '.' {
            Some("'.' would make every dotted file name a path")
        } else if separator.is_whitespace() {
            Some("whitespace cannot be a separator")
        } else {
            None
        };

        match problem {
            Some(message) => Err(Error::Validation {
                field: "alternate_separator".into(),
                message: message.into(),
            }),
            None => Ok(()),
        }
    }

    fn validate_sanitize(sanitize: &SanitizeConfig, separators: Separators) -> Result<()> {
        if let Some(ref pattern) = sanitize.pattern {
            Regex::new(pattern).map_err(|e| Error::Validation {
                field: "sanitize.pattern".into(),
                message: format!("Invalid regular expression: {e}"),
            })?;
        }

        if let Some(ref replacement) = sanitize.replacement {
            Self::validate_replacement(replacement, separators)?;
        }

        Ok(())
    }

    /// A replacement must not reintroduce structure into a segment.
    fn validate_replacement(replacement: &str, separators: Separators) -> Result<()> {
        if replacement.chars().any(|c| separators.is_separator(c)) {
            return Err(Error::Validation {
                field: "sanitize.replacement".into(),
                message: "Cannot contain a path separator".into(),
            });
        }

        if replacement == "." || replacement == ".." {
            return Err(Error::Validation {
                field: "sanitize.replacement".into(),
                message: format!("Cannot be '{replacement}'"),
            });
        }

        Ok(())
    }
}
