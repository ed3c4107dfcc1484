//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading assetpath configuration
//! files from the user directory and the project tree.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "assetpath.yaml";

/// Name of the user configuration file inside the user directory.
pub const USER_CONFIG_FILE: &str = "config.yaml";

/// Name of the user directory under the home directory.
pub const USER_DIR_NAME: &str = ".assetpath";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use assetpath::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.assetpath/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use assetpath::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.assetpath/config.yaml` (precedence 1)
    /// 2. The nearest `assetpath.yaml` walking up from `working_dir`
    ///    (precedence 2)
    ///
    /// `user_dir` overrides the directory the user config is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join(USER_CONFIG_FILE),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => {
                    log::debug!("no home directory; skipping user configuration");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest project configuration by walking up directories.
    ///
    /// Stops at the first directory containing `assetpath.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.exists() {
                log::debug!("found project configuration at {}", candidate.display());
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.display().to_string(),
            reason: format!("failed to read configuration file: {e}"),
        })?;

        Config::from_yaml(&contents)
    }

    /// Default location of the user configuration file.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(USER_DIR_NAME).join(USER_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/assetpath.yaml"));
        assert!(matches!(result, Err(Error::InvalidPath { .. })));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(matches!(result, Err(Error::Configuration(_))));
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(PROJECT_CONFIG_FILE);
        fs::write(&config_path, "alternate_separator: '\\'\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.alternate_separator, Some('\\'));
    }

    #[test]
    fn test_discover_no_config() {
        let temp_dir = TempDir::new().unwrap();
        let found = ConfigLoader::discover_project_config(temp_dir.path()).unwrap();
        // A stray assetpath.yaml above the temp dir would be found; none is expected.
        assert!(found.map_or(true, |s| !s.path.starts_with(temp_dir.path())));
    }

    #[test]
    fn test_discover_in_start_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "sanitize:\n  enabled: true\n",
        )
        .unwrap();

        let source = ConfigLoader::discover_project_config(temp_dir.path())
            .unwrap()
            .unwrap();
        assert_eq!(source.precedence, 2);
        assert_eq!(source.config.sanitize.unwrap().enabled, Some(true));
    }

    #[test]
    fn test_discover_stops_at_nearest() {
        let temp_dir = TempDir::new().unwrap();
        let parent = temp_dir.path().join("Assets");
        let child = parent.join("Models");
        fs::create_dir_all(&child).unwrap();

        fs::write(
            temp_dir.path().join(PROJECT_CONFIG_FILE),
            "alternate_separator: '|'\n",
        )
        .unwrap();
        fs::write(parent.join(PROJECT_CONFIG_FILE), "alternate_separator: '\\'\n").unwrap();

        let source = ConfigLoader::discover_project_config(&child)
            .unwrap()
            .unwrap();
        assert_eq!(source.path, parent.join(PROJECT_CONFIG_FILE));
        assert_eq!(source.config.alternate_separator, Some('\\'));
    }

    #[test]
    fn test_load_all_orders_user_before_project() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(project.path().join(PROJECT_CONFIG_FILE), "alternate_separator: '\\'\n")
            .unwrap();
        fs::write(user.path().join(USER_CONFIG_FILE), "alternate_separator: '|'\n").unwrap();

        let sources = ConfigLoader::load_all(project.path(), Some(user.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].precedence, 2);
        assert_eq!(sources[1].config.alternate_separator, Some('\\'));
    }

    #[test]
    fn test_load_all_missing_user_config() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        let sources = ConfigLoader::load_all(project.path(), Some(user.path())).unwrap();
        assert!(sources.iter().all(|s| s.precedence != 1));
    }
}
