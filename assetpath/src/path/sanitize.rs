//! Per-segment sanitization of asset filenames.
//!
//! Asset databases reject a handful of characters in file and directory
//! names. A [`SegmentSanitizer`] replaces them segment by segment and is
//! meant to be handed to [`Normalizer::normalize_with`] so the replacement
//! happens before `.`/`..` are interpreted.
//!
//! [`Normalizer::normalize_with`]: super::Normalizer::normalize_with

use std::borrow::Cow;

use regex::Regex;

use crate::error::Result;

/// Characters that may not appear in an asset filename.
pub const DEFAULT_PATTERN: &str = r#"[/\\?|><:*"]"#;

/// Replacement written in place of each illegal character.
pub const DEFAULT_REPLACEMENT: &str = "_";

/// Replaces illegal characters within a single path segment.
///
/// # Examples
///
/// ```
/// use assetpath::path::{Normalizer, SegmentSanitizer, Separators};
///
/// let sanitizer = SegmentSanitizer::default();
/// assert_eq!(sanitizer.apply("what?.asset"), "what_.asset");
///
/// let normalizer = Normalizer::new(Separators::SLASH_ONLY);
/// let path = normalizer.normalize_with("Assets/a:b/c*d.prefab", |s| sanitizer.apply(s));
/// assert_eq!(path, "Assets/a_b/c_d.prefab");
/// ```
#[derive(Debug, Clone)]
pub struct SegmentSanitizer {
    pattern: Regex,
    replacement: String,
}

impl SegmentSanitizer {
    /// Creates a sanitizer from a regular expression and its replacement.
    ///
    /// The replacement is inserted literally; `$` has no special meaning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`](crate::Error::InvalidPattern) if the
    /// pattern does not compile.
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            replacement: replacement.into(),
        })
    }

    /// The pattern matching illegal characters.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement text.
    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Sanitize one segment. Borrows when nothing needed replacing.
    #[must_use]
    pub fn apply<'s>(&self, segment: &'s str) -> Cow<'s, str> {
        self.pattern
            .replace_all(segment, regex::NoExpand(&self.replacement))
    }
}

impl Default for SegmentSanitizer {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_PATTERN).expect("default sanitizer pattern is valid"),
            replacement: DEFAULT_REPLACEMENT.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::{Normalizer, Separators};

    #[test]
    fn test_default_replaces_illegal_characters() {
        let sanitizer = SegmentSanitizer::default();
        assert_eq!(sanitizer.apply(r#"a?b|c>d<e:f*g"h\i"#), "a_b_c_d_e_f_g_h_i");
    }

    #[test]
    fn test_clean_segment_is_borrowed() {
        let sanitizer = SegmentSanitizer::default();
        assert!(matches!(sanitizer.apply("model.prefab"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_custom_pattern() {
        let sanitizer = SegmentSanitizer::new(r"\s+", "-").unwrap();
        assert_eq!(sanitizer.apply("blend  shape clip"), "blend-shape-clip");
        assert_eq!(sanitizer.pattern(), r"\s+");
        assert_eq!(sanitizer.replacement(), "-");
    }

    #[test]
    fn test_replacement_is_literal() {
        let sanitizer = SegmentSanitizer::new("x", "$0").unwrap();
        assert_eq!(sanitizer.apply("axb"), "a$0b");
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(SegmentSanitizer::new("[", "_").is_err());
    }

    #[test]
    fn test_sanitized_backslash_is_not_a_separator() {
        let sanitizer = SegmentSanitizer::default();
        let normalizer = Normalizer::new(Separators::SLASH_ONLY);
        let path = normalizer.normalize_with(r"Assets/a\..\b", |s| sanitizer.apply(s));
        assert_eq!(path, "Assets/a_.._b");
    }

    #[test]
    fn test_sanitizer_runs_before_dot_interpretation() {
        // A segment that only becomes `..` after mapping is still resolved.
        let sanitizer = SegmentSanitizer::new("^up$", "..").unwrap();
        let normalizer = Normalizer::new(Separators::SLASH_ONLY);
        let path = normalizer.normalize_with("a/b/up/c", |s| sanitizer.apply(s));
        assert_eq!(path, "a/c");
    }
}
