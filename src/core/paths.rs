//! Home directory resolution
//!
//! The home directory holds the config file and, by default, the quote file.

use std::path::PathBuf;
use tracing::warn;

use super::config::Config;

/// Environment variable for the home directory
pub const HOME_PATH_ENV: &str = "QUOTEMOOD_HOME";

/// Home directory paths combined with the loaded config
pub struct HomePaths {
    pub root: PathBuf,
    pub config_file: PathBuf,
    pub quotes: PathBuf,
    pub config: Config,
}

impl HomePaths {
    /// Create HomePaths from environment variable or current directory.
    /// Loads config from the home root.
    pub fn new() -> Self {
        Self::from_root(get_home_root())
    }

    /// Create HomePaths from a specific root directory
    pub fn from_root(root: PathBuf) -> Self {
        let config = Config::load(&root);
        Self::from_root_with_config(root, config)
    }

    /// Create HomePaths with explicit config
    pub fn from_root_with_config(root: PathBuf, config: Config) -> Self {
        let resolved = config.resolve_paths(&root);

        Self {
            config_file: resolved.config,
            quotes: resolved.quotes,
            root,
            config,
        }
    }
}

impl Default for HomePaths {
    fn default() -> Self {
        Self::new()
    }
}

/// Get home root from environment variable or current directory.
/// Priority: QUOTEMOOD_HOME env var > current directory
pub fn get_home_root() -> PathBuf {
    if let Ok(path) = std::env::var(HOME_PATH_ENV) {
        let home_path = PathBuf::from(&path);
        if home_path.exists() {
            return home_path;
        }
        warn!(
            "{} is set to '{}' but path does not exist. Falling back to current directory.",
            HOME_PATH_ENV, path
        );
    }
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_root_uses_config_quotes_file() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::default();
        config.quotes_file = "seed.json".to_string();

        let paths = HomePaths::from_root_with_config(dir.path().to_path_buf(), config);
        assert_eq!(paths.quotes, dir.path().join("seed.json"));
        assert_eq!(paths.config_file, dir.path().join(".quotemood.json"));
    }
}
