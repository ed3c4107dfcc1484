//! Configuration system for assetpath.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `assetpath.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ASSETPATH_*`)
//! 3. Nearest project config (`assetpath.yaml`, searched upward)
//! 4. User config (`~/.assetpath/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use assetpath::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! let normalizer = config.normalizer();
//! println!("{}", normalizer.normalize("Assets\\Models\\..\\Prefabs"));
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use assetpath::config::{Config, ConfigBuilder, SanitizeConfig};
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(Config {
//!         sanitize: Some(SanitizeConfig {
//!             enabled: Some(true),
//!             ..Default::default()
//!         }),
//!         ..Default::default()
//!     })
//!     .build()
//!     .unwrap();
//!
//! let sanitizer = config.sanitizer().unwrap().unwrap();
//! assert_eq!(sanitizer.apply("a:b"), "a_b");
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at module root
pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, SanitizeConfig};
pub use validator::ConfigValidator;
