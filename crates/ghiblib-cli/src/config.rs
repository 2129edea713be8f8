use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::LoggingConfig;

/// Configuration for ghiblib.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (GHIBLIB_* prefix)
/// 3. Config file (~/.config/ghiblib/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default JSON library file.
    ///
    /// Offered by the save and load prompts when the filename is left blank.
    ///
    /// Can be set via:
    /// - CLI: --library /path/to/films.json
    /// - ENV: GHIBLIB_LIBRARY_PATH
    /// - Config: library_path = "/path/to/films.json"
    pub library_path: Option<PathBuf>,

    /// Load `library_path` when the menu starts, if the file exists.
    pub autoload: bool,

    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from `config_path` and the environment.
    ///
    /// A missing file is not an error; defaults and environment apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut builder = Confygery::new()
            .context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path.to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder.add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("ghiblib");
        builder.add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Override the library path, as the --library flag does.
    #[must_use]
    pub fn with_library_path(mut self, path: PathBuf) -> Self {
        self.library_path = Some(path);
        self
    }
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/ghiblib/config.toml
/// - macOS: ~/Library/Application Support/ghiblib/config.toml
/// - Windows: %APPDATA%\ghiblib\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ghiblib")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Ghiblib Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (GHIBLIB_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Default JSON library file, used by "Save to JSON" and "Load from JSON"
# when the filename prompt is left blank.
#
# Can also be set via:
# - CLI: ghiblib --library /path/to/films.json
# - Environment: GHIBLIB_LIBRARY_PATH=/path/to/films.json
#library_path = "/path/to/films.json"

# Load library_path automatically when the menu starts.
autoload = false

[logging]
# One of: trace, debug, info, warn, error
level = "warn"
coloured = true
"#
}

/// Create the config file at `config_path` if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context("Failed to create config directory")?;
    }

    std::fs::write(config_path, example_config())
        .context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LogLevel;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.library_path.is_none());
        assert!(!config.autoload);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_config_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = Config::load_from(&dir.path().join("config.toml"));
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "library_path = \"/tmp/films.json\"\nautoload = true\n\n[logging]\nlevel = \"debug\"\ncoloured = false\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.library_path, Some(PathBuf::from("/tmp/films.json")));
        assert!(config.autoload);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(!config.logging.coloured);
    }

    #[test]
    fn test_with_library_path_overrides() {
        let config = Config::default().with_library_path(PathBuf::from("films.json"));
        assert_eq!(config.library_path, Some(PathBuf::from("films.json")));
    }

    #[test]
    fn test_ensure_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ghiblib").join("config.toml");

        assert!(ensure_config_file(&path).unwrap());
        assert!(!ensure_config_file(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), example_config());
    }
}
