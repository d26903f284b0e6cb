//! # Configuration
//!
//! Configuration is loaded with [`confique`] from layered sources.
//!
//! ## Resolution Order
//!
//! 1. **Environment variables**: `ROSTER_SEED`, `ROSTER_LOG_LEVEL`, `ROSTER_COLOR`.
//! 2. **Explicit file**: passed with `--config <path>`; must exist.
//! 3. **User config**: `roster.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `seed_sample_records` | `true` | Start each session with the two sample employees |
//! | `log_level` | `"warn"` | Base `tracing` filter when `RUST_LOG` is unset |
//! | `color` | `true` | Colored output (never used when stdout is not a terminal) |

use crate::error::{Result, RosterError};
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "roster.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// Start each session with the sample employees (ids 1 and 2).
    #[config(env = "ROSTER_SEED", default = true)]
    pub seed_sample_records: bool,

    /// Base log filter, e.g. "warn", "info", "roster=debug".
    #[config(env = "ROSTER_LOG_LEVEL", default = "warn")]
    pub log_level: String,

    /// Colored terminal output.
    #[config(env = "ROSTER_COLOR", default = true)]
    pub color: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            seed_sample_records: true,
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

/// Location of the user-level config file, if the platform has one.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "roster", "roster").map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

impl RosterConfig {
    /// Loads the layered configuration. `explicit` must point to an existing file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut builder = RosterConfig::builder().env();
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(RosterError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.file(path);
        }
        if let Some(path) = user_config_path() {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| RosterError::Config(e.to_string()))
    }

    /// Loads only from `path` and compiled defaults, ignoring the environment.
    pub fn from_file(path: &Path) -> Result<Self> {
        RosterConfig::builder()
            .file(path)
            .load()
            .map_err(|e| RosterError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert!(config.seed_sample_records);
        assert_eq!(config.log_level, "warn");
        assert!(config.color);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "seed_sample_records = false\nlog_level = \"debug\"\n").unwrap();

        let config = RosterConfig::from_file(&path).unwrap();
        assert!(!config.seed_sample_records);
        assert_eq!(config.log_level, "debug");
        assert!(config.color);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RosterConfig::from_file(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let err = RosterConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, RosterError::Config(_)));
    }

    #[test]
    fn test_serialized_config_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        let config = RosterConfig {
            seed_sample_records: false,
            log_level: "info".to_string(),
            color: false,
        };
        fs::write(&path, toml::to_string(&config).unwrap()).unwrap();

        assert_eq!(RosterConfig::from_file(&path).unwrap(), config);
    }
}
