//! Builder for assembling the effective configuration.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Builds a [`Config`] from defaults, files, environment and overrides.
///
/// # Examples
///
/// ```
/// use assetpath::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         alternate_separator: Some('\\'),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.alternate_separator, Some('\\'));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project discovery from `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Read the user configuration from `dir` instead of `~/.assetpath`.
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `ASSETPATH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge all sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable is malformed, or the merged configuration
    /// fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::with_defaults()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?;
            log::debug!("merging {} configuration file(s)", sources.len());
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
