//! Harness configuration.
//!
//! Configuration is loaded in the following order (later overrides earlier):
//! 1. Default values
//! 2. YAML config file (if specified via `--config` or RDFA_CONFIG)
//! 3. Environment variables

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "RDFA_CONFIG";

/// Harness configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Logging configuration.
    pub log: LogConfig,
    /// Interactive menu configuration.
    pub menu: MenuConfig,
}

impl Config {
    /// Loads configuration from `path` (or RDFA_CONFIG), then applies
    /// environment variable overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e))?;
        Self::from_yaml(&content).map_err(|e| match e {
            ConfigError::ParseError(_, msg) => ConfigError::ParseError(path.to_path_buf(), msg),
            other => other,
        })
    }

    fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::ParseError(PathBuf::new(), e.to_string()))
    }

    fn apply_env_overrides(&mut self) {
        self.log.apply_env_overrides();
        self.menu.apply_env_overrides();
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when RUST_LOG is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl LogConfig {
    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("RDFA_LOG_LEVEL") {
            if !level.is_empty() {
                self.level = level;
            }
        }
    }
}

/// Interactive menu configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Prompt shown when reading a line.
    pub prompt: String,
    /// Colorize output.
    pub color: bool,
    /// History file. Defaults to `~/.rdfa_history`.
    pub history_file: Option<PathBuf>,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            prompt: "rdfa>".to_string(),
            color: true,
            history_file: None,
        }
    }
}

impl MenuConfig {
    fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var("RDFA_HISTORY") {
            self.history_file = Some(PathBuf::from(path));
        }

        if std::env::var_os("RDFA_NO_COLOR").is_some() {
            self.color = false;
        }
    }

    /// Returns the history file path.
    pub fn history_path(&self) -> PathBuf {
        self.history_file.clone().unwrap_or_else(|| {
            std::env::var("HOME")
                .map(|h| PathBuf::from(h).join(".rdfa_history"))
                .unwrap_or_else(|_| ".rdfa_history".into())
        })
    }
}

/// Configuration error.
#[derive(Debug)]
pub enum ConfigError {
    IoError(PathBuf, std::io::Error),
    ParseError(PathBuf, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(path, e) => {
                write!(f, "failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log.level, "warn");
        assert_eq!(config.menu.prompt, "rdfa>");
        assert!(config.menu.color);
        assert!(config.menu.history_file.is_none());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = Config::from_yaml("menu:\n  color: false\n").unwrap();
        assert!(!config.menu.color);
        assert_eq!(config.menu.prompt, "rdfa>");
        assert_eq!(config.log.level, "warn");
    }

    #[test]
    fn test_history_path_override() {
        let mut menu = MenuConfig::default();
        menu.history_file = Some(PathBuf::from("/tmp/hist"));
        assert_eq!(menu.history_path(), PathBuf::from("/tmp/hist"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rdfa.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "log:\n  level: debug\nmenu:\n  prompt: \"dfa$\"").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.menu.prompt, "dfa$");
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = Config::from_file(dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(ConfigError::IoError(..))));

        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "menu: [1, 2").unwrap();
        match Config::from_file(&path) {
            Err(ConfigError::ParseError(p, _)) => assert_eq!(p, path),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.menu.prompt, config.menu.prompt);
    }
}
