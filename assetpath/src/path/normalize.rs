//! Lexical path normalization.
//!
//! This module canonicalizes slash-separated path strings without touching
//! the filesystem:
//! - Collapsing runs of separators and rewriting them as `/`
//! - Removing `.` segments
//! - Resolving `..` against preceding segments where possible
//! - Preserving absoluteness and a trailing separator
//!
//! A segment map can rewrite every segment before it is interpreted, which
//! lets callers sanitize characters that are illegal in asset filenames.

use std::borrow::Cow;

use super::separators::Separators;

const CURRENT: &str = ".";
const PARENT: &str = "..";

/// Canonicalizes path strings using a fixed set of separators.
///
/// # Examples
///
/// ```
/// use assetpath::path::{Normalizer, Separators};
///
/// let normalizer = Normalizer::new(Separators::with_alternate('\\'));
/// assert_eq!(normalizer.normalize(r"Assets\\Models\.\..\avatar.prefab"), "Assets/avatar.prefab");
/// assert_eq!(normalizer.normalize("/../../a"), "/a");
/// assert_eq!(normalizer.normalize("../../a"), "../../a");
/// assert_eq!(normalizer.normalize(""), ".");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Normalizer {
    separators: Separators,
}

impl Normalizer {
    /// Creates a normalizer recognizing the given separators.
    #[must_use]
    pub const fn new(separators: Separators) -> Self {
        Self { separators }
    }

    /// The separators this normalizer splits on.
    #[must_use]
    pub const fn separators(&self) -> Separators {
        self.separators
    }

    /// Normalize a path with the identity segment map.
    #[must_use]
    pub fn normalize(&self, path: &str) -> String {
        self.normalize_with(path, |segment| Cow::Borrowed(segment))
    }

    /// Normalize a path that may be missing. `None` canonicalizes to `.`.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetpath::path::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.normalize_optional(None), ".");
    /// assert_eq!(normalizer.normalize_optional(Some("a/")), "a/");
    /// ```
    #[must_use]
    pub fn normalize_optional(&self, path: Option<&str>) -> String {
        self.normalize(path.unwrap_or_default())
    }

    /// Normalize a path, mapping every non-empty segment before it is
    /// interpreted as `.`, `..` or a literal name.
    ///
    /// A segment mapped to the empty string is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetpath::path::Normalizer;
    /// use std::borrow::Cow;
    ///
    /// let normalizer = Normalizer::default();
    /// let up = normalizer.normalize_with("a/x/b", |s| {
    ///     if s == "x" { Cow::Borrowed("..") } else { Cow::Borrowed(s) }
    /// });
    /// assert_eq!(up, "b");
    /// ```
    pub fn normalize_with<F>(&self, path: &str, mut segment_map: F) -> String
    where
        F: for<'s> FnMut(&'s str) -> Cow<'s, str>,
    {
        let Some(first) = path.chars().next() else {
            return CURRENT.to_string();
        };

        let is_absolute = self.separators.is_separator(first);
        if is_absolute && path.len() == first.len_utf8() {
            return Separators::PRIMARY.to_string();
        }

        let has_trailing_separator = path
            .chars()
            .next_back()
            .is_some_and(|c| self.separators.is_separator(c));

        let mut stack: Vec<Cow<'_, str>> = Vec::new();
        let raw_segments = path
            .split(|c: char| self.separators.is_separator(c))
            .filter(|s| !s.is_empty());

        for raw in raw_segments {
            let segment = segment_map(raw);
            if segment.is_empty() || segment == CURRENT {
                continue;
            }

            if segment == PARENT {
                if is_absolute {
                    // Clamped at the root.
                    stack.pop();
                } else if stack.last().is_some_and(|top| *top != PARENT) {
                    stack.pop();
                } else {
                    stack.push(segment);
                }
            } else {
                stack.push(segment);
            }
        }

        if stack.is_empty() {
            return if is_absolute {
                "/".to_string()
            } else if has_trailing_separator {
                "./".to_string()
            } else {
                CURRENT.to_string()
            };
        }

        let mut result = String::with_capacity(path.len() + 1);
        if is_absolute {
            result.push(Separators::PRIMARY);
        }
        for (i, segment) in stack.iter().enumerate() {
            if i > 0 {
                result.push(Separators::PRIMARY);
            }
            result.push_str(segment);
        }
        if has_trailing_separator {
            result.push(Separators::PRIMARY);
        }
        result
    }

    /// Return the canonical parent directory of `path`.
    ///
    /// A trailing separator means the path already names a directory, so
    /// `/a/b/` has the parent `/a/b`. Roots, `./` and single relative
    /// segments have no parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetpath::path::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(normalizer.parent_of("/a/b").as_deref(), Some("/a"));
    /// assert_eq!(normalizer.parent_of("/a/b/").as_deref(), Some("/a/b"));
    /// assert_eq!(normalizer.parent_of("/a").as_deref(), Some("/"));
    /// assert_eq!(normalizer.parent_of("/"), None);
    /// assert_eq!(normalizer.parent_of("a"), None);
    /// ```
    #[must_use]
    pub fn parent_of(&self, path: &str) -> Option<String> {
        let canonical = self.normalize(path);

        if let Some(dir) = canonical.strip_suffix(Separators::PRIMARY) {
            return match dir {
                "" | CURRENT => None,
                _ => Some(dir.to_string()),
            };
        }

        match canonical.rfind(Separators::PRIMARY) {
            None => None,
            Some(0) => Some("/".to_string()),
            Some(index) => Some(canonical[..index].to_string()),
        }
    }
}

/// Normalize a path with the platform separators and the identity map.
///
/// # Examples
///
/// ```
/// use assetpath::path::normalize;
///
/// assert_eq!(normalize("a//./b/../c/"), "a/c/");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    Normalizer::default().normalize(path)
}

/// Normalize a path that may be missing with the platform separators.
#[must_use]
pub fn normalize_optional(path: Option<&str>) -> String {
    Normalizer::default().normalize_optional(path)
}

/// Normalize a path with the platform separators and a segment map.
pub fn normalize_with<F>(path: &str, segment_map: F) -> String
where
    F: for<'s> FnMut(&'s str) -> Cow<'s, str>,
{
    Normalizer::default().normalize_with(path, segment_map)
}

/// Canonical parent directory of `path` using the platform separators.
#[must_use]
pub fn parent_of(path: &str) -> Option<String> {
    Normalizer::default().parent_of(path)
}
