//! Configuration schema definitions.
//!
//! This module defines the configuration structure for assetpath: which
//! alternate separator to recognize and how path segments are sanitized.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::sanitize::{DEFAULT_PATTERN, DEFAULT_REPLACEMENT};
use crate::path::{Normalizer, SegmentSanitizer, Separators};

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered on top of
/// each other. `None` means "not set by this source".
///
/// # Examples
///
/// ```
/// use assetpath::config::{Config, SanitizeConfig};
///
/// let config = Config {
///     alternate_separator: Some('\\'),
///     sanitize: Some(SanitizeConfig {
///         enabled: Some(true),
///         ..Default::default()
///     }),
/// };
/// assert!(config.normalizer().separators().is_separator('\\'));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Separator recognized in addition to `/`.
    ///
    /// When unset, the platform's alternate separator is used (`\` on
    /// Windows, none elsewhere).
    pub alternate_separator: Option<char>,

    /// Segment sanitization settings.
    pub sanitize: Option<SanitizeConfig>,
}

/// Segment sanitization settings.
///
/// # Examples
///
/// ```
/// use assetpath::config::SanitizeConfig;
///
/// let config = SanitizeConfig {
///     enabled: Some(true),
///     pattern: Some("[#%]".to_string()),
///     replacement: Some("-".to_string()),
/// };
/// assert!(config.is_enabled());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SanitizeConfig {
    /// Sanitize segments when normalizing plain paths.
    ///
    /// Asset paths are always sanitized; this only affects plain
    /// normalization.
    pub enabled: Option<bool>,

    /// Regular expression matching illegal characters.
    pub pattern: Option<String>,

    /// Text written in place of each match.
    pub replacement: Option<String>,
}

impl SanitizeConfig {
    /// Check whether sanitization of plain paths is turned on.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// The configured pattern, or the built-in one.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_PATTERN)
    }

    /// The configured replacement, or the built-in one.
    #[must_use]
    pub fn replacement(&self) -> &str {
        self.replacement.as_deref().unwrap_or(DEFAULT_REPLACEMENT)
    }
}

impl Config {
    /// Built-in defaults, the lowest-precedence layer.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            alternate_separator: None,
            sanitize: Some(SanitizeConfig {
                enabled: Some(false),
                pattern: Some(DEFAULT_PATTERN.to_string()),
                replacement: Some(DEFAULT_REPLACEMENT.to_string()),
            }),
        }
    }

    /// Parse a configuration from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`](crate::Error::Configuration) if the
    /// YAML is malformed or names an unknown field.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetpath::Config;
    ///
    /// let config = Config::from_yaml("alternate_separator: '\\'\n").unwrap();
    /// assert_eq!(config.alternate_separator, Some('\\'));
    /// assert!(Config::from_yaml("bogus: 1\n").is_err());
    /// ```
    pub fn from_yaml(contents: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Separators implied by this configuration.
    #[must_use]
    pub fn separators(&self) -> Separators {
        self.alternate_separator
            .map_or_else(Separators::platform, Separators::with_alternate)
    }

    /// A normalizer recognizing the configured separators.
    #[must_use]
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.separators())
    }

    /// The configured segment sanitizer, whether or not it is enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if the
    /// configured pattern does not compile.
    pub fn segment_sanitizer(&self) -> Result<SegmentSanitizer> {
        match &self.sanitize {
            Some(sanitize) => SegmentSanitizer::new(sanitize.pattern(), sanitize.replacement()),
            None => Ok(SegmentSanitizer::default()),
        }
    }

    /// The segment sanitizer to use for plain normalization, if enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if
    /// sanitization is enabled and the pattern does not compile.
    pub fn sanitizer(&self) -> Result<Option<SegmentSanitizer>> {
        match &self.sanitize {
            Some(sanitize) if sanitize.is_enabled() => self.segment_sanitizer().map(Some),
            _ => Ok(None),
        }
    }
}
