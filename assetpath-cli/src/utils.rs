//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across commands: global options,
//! configuration loading, and turning raw arguments into canonical paths.

use crate::error::CliError;
use assetpath::{Config, ConfigBuilder, Normalizer};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Alternate separator overriding every configuration source.
    pub alt_separator: Option<char>,

    /// Ignore configuration files.
    pub no_config: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files (unless `--no-config`)
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if global.no_config {
        builder = builder.skip_files();
    }

    if let Some(separator) = global.alt_separator {
        builder = builder.with_config(Config {
            alternate_separator: Some(separator),
            ..Default::default()
        });
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Canonical form of a directory argument.
///
/// Normalizes `raw` and drops a trailing separator so that `a/b/` and
/// `a/b` name the same directory. The root stays `/`.
pub fn directory_key(normalizer: &Normalizer, raw: &str) -> String {
    let normalized = normalizer.normalize(raw);
    match normalized.strip_suffix('/') {
        Some(trimmed) if !trimmed.is_empty() => trimmed.to_string(),
        _ => normalized,
    }
}
