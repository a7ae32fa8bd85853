use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Quiz configuration, read from `<home>/english/config.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Word list location. Relative paths are resolved against the directory
    /// containing the config file, not the working directory.
    pub word_file: PathBuf,
    /// How many pairs to print per run. Missing or non-positive values are
    /// clamped to 1 by the sampler.
    #[serde(default)]
    pub count: i64,
}

impl Config {
    /// Load from the fixed per-user location.
    pub fn resolve() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Self::load(&home.join("english").join("config.json"))
    }

    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        let mut config: Config =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_owned(),
                source,
            })?;

        if config.word_file.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ConfigError::EmptyWordFile {
                path: path.to_owned(),
            });
        }

        if config.word_file.is_relative() {
            let dir = path.parent().unwrap_or_else(|| Path::new("."));
            config.word_file = dir.join(&config.word_file);
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("home directory could not be determined")]
    NoHomeDir,

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("word_file is empty in {}", .path.display())]
    EmptyWordFile { path: PathBuf },
}
