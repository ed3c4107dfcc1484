//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, SanitizeConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use assetpath::config::{Config, ConfigMerger};
///
/// let low = Config { alternate_separator: Some('|'), ..Default::default() };
/// let high = Config { alternate_separator: Some('\\'), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.alternate_separator, Some('\\'));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources on top of the built-in defaults.
    ///
    /// Sources should be provided from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::with_defaults();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Sanitize settings: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.alternate_separator.is_some() {
            target.alternate_separator = source.alternate_separator;
        }

        if let Some(ref source_sanitize) = source.sanitize {
            target.sanitize = Some(match &target.sanitize {
                Some(target_sanitize) => Self::merge_sanitize(target_sanitize, source_sanitize),
                None => source_sanitize.clone(),
            });
        }
    }

    fn merge_sanitize(target: &SanitizeConfig, source: &SanitizeConfig) -> SanitizeConfig {
        SanitizeConfig {
            enabled: source.enabled.or(target.enabled),
            pattern: source.pattern.clone().or_else(|| target.pattern.clone()),
            replacement: source
                .replacement
                .clone()
                .or_else(|| target.replacement.clone()),
        }
    }
}
