//! Asset locations and the sub-asset paths derived from them.

use std::fmt;

use super::normalize::Normalizer;
use super::sanitize::SegmentSanitizer;
use crate::error::{Error, Result};

/// A canonical, sanitized asset path split into its parts.
///
/// Building a composite asset (a prefab with its meta object and blend
/// shape clips, say) writes each sub-asset next to the main one, in a
/// directory named after it. [`AssetPath::child`] derives those locations.
///
/// # Examples
///
/// ```
/// use assetpath::path::AssetPath;
///
/// let prefab = AssetPath::parse("Assets//Models/./avatar.prefab").unwrap();
/// assert_eq!(prefab.path(), "Assets/Models/avatar.prefab");
/// assert_eq!(prefab.dir_name(), "Assets/Models");
/// assert_eq!(prefab.name(), "avatar");
/// assert_eq!(prefab.file_name(), "avatar.prefab");
/// assert_eq!(prefab.extension(), ".prefab");
///
/// let meta = prefab.child(".MetaObject/Meta.asset").unwrap();
/// assert_eq!(meta.path(), "Assets/Models/avatar.MetaObject/Meta.asset");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetPath {
    path: String,
    dir_name: String,
    name: String,
    file_name: String,
    extension: String,
    normalizer: Normalizer,
}

impl AssetPath {
    /// Canonicalize `raw`, sanitizing each segment, and split the result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `raw` is empty.
    pub fn new(raw: &str, normalizer: Normalizer, sanitizer: &SegmentSanitizer) -> Result<Self> {
        if raw.is_empty() {
            return Err(Error::InvalidPath {
                path: raw.to_string(),
                reason: "asset path must not be empty".to_string(),
            });
        }

        let path = normalizer.normalize_with(raw, |segment| sanitizer.apply(segment));
        let file_name = file_name_of(&path).to_string();
        let (name, extension) = split_extension(&file_name);
        let dir_name = normalizer.normalize_optional(normalizer.parent_of(&path).as_deref());

        Ok(Self {
            name: name.to_string(),
            extension: extension.to_string(),
            path,
            dir_name,
            file_name,
            normalizer,
        })
    }

    /// Parse with the platform separators and the default sanitizer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if `raw` is empty.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::new(raw, Normalizer::default(), &SegmentSanitizer::default())
    }

    /// Location of a sub-asset stored beside this one.
    ///
    /// The child lives at `{dir_name}/{name}{suffix}` and is canonicalized
    /// with the default sanitizer.
    ///
    /// # Errors
    ///
    /// Never fails for a valid receiver; the signature mirrors [`AssetPath::new`].
    pub fn child(&self, suffix: &str) -> Result<Self> {
        self.child_with(suffix, &SegmentSanitizer::default())
    }

    /// Like [`AssetPath::child`] with an explicit sanitizer.
    ///
    /// # Errors
    ///
    /// Never fails for a valid receiver; the signature mirrors [`AssetPath::new`].
    pub fn child_with(&self, suffix: &str, sanitizer: &SegmentSanitizer) -> Result<Self> {
        let raw = format!("{}/{}{}", self.dir_name, self.name, suffix);
        Self::new(&raw, self.normalizer, sanitizer)
    }

    /// The full canonical path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The canonical containing directory, `.` when there is none.
    #[must_use]
    pub fn dir_name(&self) -> &str {
        &self.dir_name
    }

    /// File name without its extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last segment of the path.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Extension including the leading dot, or empty.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

fn file_name_of(canonical: &str) -> &str {
    if canonical.ends_with('/') {
        return "";
    }
    canonical
        .rsplit_once('/')
        .map_or(canonical, |(_, last)| last)
}

/// Split `file_name` into stem and extension.
///
/// The extension starts at the last dot, so `.hidden` is all extension
/// with an empty stem. A dot at the very end yields no extension and is
/// dropped from the stem.
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(index) if index + 1 == file_name.len() => (&file_name[..index], ""),
        Some(index) => file_name.split_at(index),
        None => (file_name, ""),
    }
}
