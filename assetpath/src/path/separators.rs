//! Separator characters recognized when splitting a path string.

/// The set of characters treated as path separators.
///
/// `/` is always a separator and is the only separator ever written to a
/// canonical path. A host may additionally recognize one alternate
/// separator (for example `\` on Windows). An alternate equal to `/` is
/// the same as having none.
///
/// # Examples
///
/// ```
/// use assetpath::path::Separators;
///
/// let seps = Separators::with_alternate('\\');
/// assert!(seps.is_separator('/'));
/// assert!(seps.is_separator('\\'));
///
/// assert!(!Separators::SLASH_ONLY.is_separator('\\'));
/// assert_eq!(Separators::with_alternate('/'), Separators::SLASH_ONLY);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Separators {
    alternate: Option<char>,
}

impl Separators {
    /// The canonical separator.
    pub const PRIMARY: char = '/';

    /// Recognize only `/`.
    pub const SLASH_ONLY: Self = Self { alternate: None };

    /// Recognize `/` and the given alternate separator.
    #[must_use]
    pub const fn with_alternate(alternate: char) -> Self {
        if alternate == Self::PRIMARY {
            Self::SLASH_ONLY
        } else {
            Self {
                alternate: Some(alternate),
            }
        }
    }

    /// Separators of the platform this binary was built for.
    ///
    /// On Windows `\` is recognized in addition to `/`.
    #[must_use]
    pub const fn platform() -> Self {
        if cfg!(windows) {
            Self::with_alternate('\\')
        } else {
            Self::SLASH_ONLY
        }
    }

    /// The alternate separator, if one is recognized.
    #[must_use]
    pub const fn alternate(&self) -> Option<char> {
        self.alternate
    }

    /// Check whether `c` separates segments.
    #[must_use]
    pub fn is_separator(&self, c: char) -> bool {
        c == Self::PRIMARY || self.alternate == Some(c)
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::platform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_always_recognized() {
        assert!(Separators::SLASH_ONLY.is_separator('/'));
        assert!(Separators::with_alternate('\\').is_separator('/'));
        assert!(Separators::with_alternate(':').is_separator('/'));
    }

    #[test]
    fn test_alternate_recognized() {
        let seps = Separators::with_alternate(':');
        assert!(seps.is_separator(':'));
        assert!(!seps.is_separator('\\'));
        assert_eq!(seps.alternate(), Some(':'));
    }

    #[test]
    fn test_slash_alternate_collapses() {
        let seps = Separators::with_alternate('/');
        assert_eq!(seps.alternate(), None);
        assert_eq!(seps, Separators::SLASH_ONLY);
    }

    #[test]
    fn test_platform_default() {
        let seps = Separators::default();
        if cfg!(windows) {
            assert_eq!(seps.alternate(), Some('\\'));
        } else {
            assert_eq!(seps.alternate(), None);
        }
    }
}
