use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use wordgen_generate::GenerateOptions;
use wordgen_generate::estimate::DEFAULT_THROUGHPUT_BYTES_PER_SEC;
use wordgen_generate::model::DEFAULT_CONFIRM_THRESHOLD_BYTES;

/// Settings file picked up from the working directory when present.
pub const DEFAULT_SETTINGS_FILE: &str = "wordgen.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file '{0}' not found")]
    Missing(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub confirm_threshold_bytes: f64,
    pub assumed_throughput_bytes_per_sec: f64,
    /// Console filter used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Optional JSON log file, appended to.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            confirm_threshold_bytes: DEFAULT_CONFIRM_THRESHOLD_BYTES,
            assumed_throughput_bytes_per_sec: DEFAULT_THROUGHPUT_BYTES_PER_SEC,
            log_level: "warn".to_string(),
            log_file: None,
        }
    }
}

impl Settings {
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            confirm_threshold_bytes: self.confirm_threshold_bytes,
            assumed_throughput_bytes_per_sec: self.assumed_throughput_bytes_per_sec,
        }
    }
}

/// Load settings from an explicit path, or from `wordgen.toml` if it exists.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match path {
        Some(path) if !path.exists() => return Err(SettingsError::Missing(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => {
            let fallback = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !fallback.exists() {
                return Ok(Settings::default());
            }
            fallback
        }
    };

    let content = std::fs::read_to_string(&path)?;
    parse_settings(&content)
}

pub fn parse_settings(content: &str) -> Result<Settings, SettingsError> {
    Ok(toml::from_str(content)?)
}
