//! Configuration management infrastructure.
//!
//! Lets users persist the key comment, the default output file and the
//! fallback scan window instead of passing them on every invocation.

use crate::domain::constants::{DEFAULT_FALLBACK_WINDOW, DEFAULT_KEY_COMMENT, DEFAULT_OUTPUT_FILE};
use crate::infra::error::{ExtractError, ExtractResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest fallback window accepted from a configuration file, in bytes.
pub const MAX_FALLBACK_WINDOW: usize = 4096;

/// Extraction preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractConfiguration {
    /// Comment written after the base64 blob
    pub comment: String,

    /// Output file used when none is given on the command line
    pub default_output: PathBuf,

    /// Bytes after the algorithm identifier examined by the tolerant scan
    pub fallback_window: usize,
}

impl Default for ExtractConfiguration {
    fn default() -> Self {
        Self {
            comment: DEFAULT_KEY_COMMENT.to_string(),
            default_output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            fallback_window: DEFAULT_FALLBACK_WINDOW,
        }
    }
}

impl ExtractConfiguration {
    /// Validate configuration values
    pub fn validate(&self) -> ExtractResult<()> {
        if self.comment.contains(['\n', '\r']) {
            return Err(ExtractError::Configuration(
                "Comment must not contain line breaks".to_string(),
            ));
        }

        if self.default_output.as_os_str().is_empty() {
            return Err(ExtractError::Configuration(
                "Default output path must not be empty".to_string(),
            ));
        }

        if self.fallback_window == 0 || self.fallback_window > MAX_FALLBACK_WINDOW {
            return Err(ExtractError::Configuration(format!(
                "Fallback window must be between 1 and {MAX_FALLBACK_WINDOW} bytes, got {}",
                self.fallback_window
            )));
        }

        Ok(())
    }
}

/// Configuration manager for handling config files
pub struct ConfigManager {
    config_path: PathBuf,
    explicit: bool,
}

impl ConfigManager {
    /// Create a configuration manager for the per-user default path
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            explicit: false,
        }
    }

    /// Create a configuration manager with custom path; the file must exist on load
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
            explicit: true,
        }
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("ed25519-ssh-extract").join("config.toml")
        } else {
            // Fallback to current directory
            PathBuf::from("ed25519-ssh-extract.toml")
        }
    }

    /// Load configuration, falling back to defaults when the default file is absent
    pub fn load_or_default(&self) -> ExtractResult<ExtractConfiguration> {
        if self.explicit || self.config_path.exists() {
            self.load()
        } else {
            log::debug!(
                "No configuration file at {}, using defaults",
                self.config_path.display()
            );
            Ok(ExtractConfiguration::default())
        }
    }

    /// Load configuration from file
    pub fn load(&self) -> ExtractResult<ExtractConfiguration> {
        log::debug!("Loading configuration from: {}", self.config_path.display());

        let content = fs::read_to_string(&self.config_path).map_err(|e| {
            ExtractError::Configuration(format!(
                "Failed to read config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        let config: ExtractConfiguration = toml::from_str(&content).map_err(|e| {
            ExtractError::Configuration(format!("Failed to parse config file: {e}"))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, config: &ExtractConfiguration) -> ExtractResult<()> {
        config.validate()?;
        log::info!("Saving configuration to: {}", self.config_path.display());

        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ExtractError::Configuration(format!(
                        "Failed to create config directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let content = toml::to_string_pretty(config).map_err(|e| {
            ExtractError::Configuration(format!("Failed to serialize config: {e}"))
        })?;

        fs::write(&self.config_path, content).map_err(|e| {
            ExtractError::Configuration(format!(
                "Failed to write config file {}: {}",
                self.config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the configuration file path
    #[must_use]
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
