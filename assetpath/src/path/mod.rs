//! Lexical path handling for asset locations.
//!
//! Nothing in this module touches the filesystem. Paths are plain strings
//! split on a configurable set of separators and rebuilt with `/`.
//!
//! # Normalization
//!
//! [`Normalizer`] canonicalizes a path string:
//! - Runs of separators collapse to a single `/`
//! - `.` segments disappear
//! - `..` pops the previous segment; at an absolute root it is a no-op, on
//!   a relative path it accumulates when there is nothing left to pop
//! - A leading and a trailing separator are preserved
//! - The empty path becomes `.`
//!
//! ```
//! use assetpath::path::normalize;
//!
//! assert_eq!(normalize("a//./b/../c/"), "a/c/");
//! assert_eq!(normalize("/../../a"), "/a");
//! assert_eq!(normalize("../../a"), "../../a");
//! ```
//!
//! # Sanitization
//!
//! A segment map runs on every segment before it is interpreted.
//! [`SegmentSanitizer`] is the usual one: it replaces characters that an
//! asset database refuses in filenames.
//!
//! # Facilities
//!
//! [`FacilityMatcher`] decides whether one directory can be reached from
//! another by walking up parents. See the [`facility`] module for the exact
//! rules.

pub mod asset;
pub mod facility;
pub mod normalize;
pub mod sanitize;
mod separators;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use asset::AssetPath;
pub use facility::{is_same_facility, FacilityMatcher, ParentAccessor};
pub use normalize::{normalize, normalize_optional, normalize_with, parent_of, Normalizer};
pub use sanitize::SegmentSanitizer;
pub use separators::Separators;
