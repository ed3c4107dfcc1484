//! Facility matching between asset directories.
//!
//! Two directories belong to the same facility when the shorter one can be
//! reached from the longer one by walking up parent directories. The walk
//! is lexical: parents come from a [`ParentAccessor`], never from the
//! filesystem.
//!
//! The short and long roles are decided once, by character count, before
//! the walk starts and are not revisited as the long side shrinks. As a
//! consequence the test is not a nearest-common-ancestor check:
//!
//! ```
//! use assetpath::path::is_same_facility;
//!
//! assert!(is_same_facility("/a/b/c", "/a/b"));
//! assert!(!is_same_facility("/a", "/x/y/z"));
//!
//! // `/x/yyyyyy` shrinks to `/x`, shorter than `/x/y`, but only the long
//! // side is ever walked, so `/x/y` is never reduced to `/x`.
//! assert!(!is_same_facility("/x/y", "/x/yyyyyy"));
//! ```

use super::normalize::Normalizer;

/// Supplies the parent directory of a directory path.
///
/// `None` (or an empty string) means the path has no parent.
pub trait ParentAccessor {
    /// Parent of `dir`, if it has one.
    fn parent_of(&self, dir: &str) -> Option<String>;
}

impl ParentAccessor for Normalizer {
    fn parent_of(&self, dir: &str) -> Option<String> {
        Normalizer::parent_of(self, dir)
    }
}

impl<F> ParentAccessor for F
where
    F: Fn(&str) -> Option<String>,
{
    fn parent_of(&self, dir: &str) -> Option<String> {
        self(dir)
    }
}

/// Decides whether two directories denote the same facility.
///
/// # Examples
///
/// ```
/// use assetpath::path::{FacilityMatcher, Normalizer, Separators};
///
/// let matcher = FacilityMatcher::new(Normalizer::new(Separators::SLASH_ONLY));
/// assert!(matcher.is_same_facility("Assets/Textures", "Assets/Textures/Avatar"));
/// assert!(!matcher.is_same_facility("Assets/Textures", "Assets/Models/Avatar"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FacilityMatcher<P = Normalizer> {
    parents: P,
}

impl<P: ParentAccessor> FacilityMatcher<P> {
    /// Creates a matcher using the given parent accessor.
    #[must_use]
    pub const fn new(parents: P) -> Self {
        Self { parents }
    }

    /// Check whether `dir_a` and `dir_b` denote the same facility.
    ///
    /// Both inputs are compared as given, so callers should pass canonical
    /// directory paths. Identical strings always match; otherwise an empty
    /// input never matches. Every step walks the long side up one level
    /// until it equals the short side, or until either side has no parent.
    #[must_use]
    pub fn is_same_facility(&self, dir_a: &str, dir_b: &str) -> bool {
        if dir_a == dir_b {
            return true;
        }
        if dir_a.is_empty() || dir_b.is_empty() {
            return false;
        }

        let (short_dir, long_dir) = if dir_a.chars().count() < dir_b.chars().count() {
            (dir_a, dir_b)
        } else {
            (dir_b, dir_a)
        };

        let mut long_dir = long_dir.to_string();
        loop {
            if self.parent(short_dir).is_none() {
                log::debug!("facility check: {short_dir} has no parent");
                return false;
            }
            let Some(long_parent) = self.parent(&long_dir) else {
                log::debug!("facility check: {long_dir} has no parent");
                return false;
            };

            log::debug!("facility check: ascend {long_dir} -> {long_parent}");
            long_dir = long_parent;

            if short_dir == long_dir {
                return true;
            }
        }
    }

    fn parent(&self, dir: &str) -> Option<String> {
        self.parents.parent_of(dir).filter(|p| !p.is_empty())
    }
}

/// Check two directories with the platform normalizer as parent accessor.
#[must_use]
pub fn is_same_facility(dir_a: &str, dir_b: &str) -> bool {
    FacilityMatcher::new(Normalizer::default()).is_same_facility(dir_a, dir_b)
}
