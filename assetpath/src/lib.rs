#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # assetpath
//!
//! Lexical asset path handling for asset-pipeline tooling.
//!
//! This library canonicalizes slash-separated asset paths without touching
//! the filesystem, decides whether two asset directories belong to the same
//! "facility" (one is an ancestor of the other), and threads multi-step
//! asset construction through a short-circuiting pipeline.
//!
//! ## Core Types
//!
//! - [`Normalizer`] and [`Separators`]: Path canonicalization
//! - [`SegmentSanitizer`]: Per-segment rewriting of illegal filename characters
//! - [`AssetPath`]: A canonical asset path with its derived parts
//! - [`FacilityMatcher`]: Ancestor/descendant checks between directories
//! - [`Outcome`], [`Pipeline`] and [`Scoped`]: Short-circuiting construction
//! - [`Config`] and [`ConfigBuilder`]: Hierarchical configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use assetpath::{is_same_facility, normalize, AssetPath};
//!
//! assert_eq!(normalize("Assets/./Models//../Prefabs/"), "Assets/Prefabs/");
//! assert!(is_same_facility("/a/b", "/a/b/c/d"));
//!
//! let prefab = AssetPath::parse("Assets/model.prefab").unwrap();
//! let meta = prefab.child(".MetaObject/Meta.asset").unwrap();
//! assert_eq!(meta.path(), "Assets/model.MetaObject/Meta.asset");
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod pipeline;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{
    is_same_facility, normalize, normalize_optional, normalize_with, parent_of, AssetPath,
    FacilityMatcher, Normalizer, ParentAccessor, SegmentSanitizer, Separators,
};
pub use pipeline::{Outcome, Pipeline, PipelineReport, Scoped};
