//! Waymark configuration management.
//!
//! Handles the configuration file at:
//! - Linux/macOS: ~/.config/waymark/config.toml
//! - Windows: %APPDATA%\waymark\config.toml

use crate::display::DEFAULT_MIN_PREFIX_LEN;
use crate::error::WaymarkError;
use crate::fs_utils;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log levels accepted by `logging.level`
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Waymark configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct WaymarkConfig {
    /// Registry storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Listing display settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Registry file path
    #[serde(default)]
    pub registry: Option<PathBuf>,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Shorten nested paths in listings
    #[serde(default = "default_compress")]
    pub compress: bool,

    /// Shortest enclosing path used for shortening
    #[serde(default = "default_min_prefix_len")]
    pub min_prefix_len: usize,
}

fn default_compress() -> bool {
    true
}

fn default_min_prefix_len() -> usize {
    DEFAULT_MIN_PREFIX_LEN
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            compress: default_compress(),
            min_prefix_len: default_min_prefix_len(),
        }
    }
}

impl DisplayConfig {
    /// Threshold to hand to the compressor, `None` when compression is off
    pub fn threshold(&self) -> Option<usize> {
        self.compress.then_some(self.min_prefix_len)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl WaymarkConfig {
    /// Load configuration from a specific path. A missing file yields the
    /// defaults.
    pub fn load_from(path: &Path) -> Result<Self, WaymarkError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(WaymarkError::ConfigError {
                    message: format!("Failed to read {}: {}", path.display(), e),
                })
            }
        };

        toml::from_str(&content).map_err(|e| WaymarkError::ConfigError {
            message: format!("Failed to parse config: {}", e),
        })
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<(), WaymarkError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| WaymarkError::ConfigError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        // Atomic write
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, &content)?;
        fs_utils::atomic_rename(&temp_path, path)?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }

    /// Registry file to use when no override is given
    pub fn registry_path(&self) -> PathBuf {
        self.storage
            .registry
            .clone()
            .unwrap_or_else(fs_utils::default_registry_path)
    }

    /// Get a configuration value by key path (e.g., "display.min_prefix_len")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["storage", "registry"] => self.storage.registry.as_ref().map(|p| p.display().to_string()),
            ["display", "compress"] => Some(self.display.compress.to_string()),
            ["display", "min_prefix_len"] => Some(self.display.min_prefix_len.to_string()),
            ["logging", "level"] => Some(self.logging.level.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key path
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), WaymarkError> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["storage", "registry"] => {
                if value.is_empty() {
                    self.storage.registry = None;
                } else {
                    self.storage.registry = Some(PathBuf::from(value));
                }
            }
            ["display", "compress"] => {
                self.display.compress = value.parse().map_err(|_| WaymarkError::ConfigError {
                    message: format!("Invalid boolean: {}. Must be true or false", value),
                })?;
            }
            ["display", "min_prefix_len"] => {
                self.display.min_prefix_len =
                    value.parse().map_err(|_| WaymarkError::ConfigError {
                        message: format!("Invalid length: {}. Must be a non-negative integer", value),
                    })?;
            }
            ["logging", "level"] => {
                if !LOG_LEVELS.contains(&value) {
                    return Err(WaymarkError::ConfigError {
                        message: format!(
                            "Invalid log level: {}. Must be one of: {}",
                            value,
                            LOG_LEVELS.join(", ")
                        ),
                    });
                }
                self.logging.level = value.to_string();
            }
            _ => {
                return Err(WaymarkError::ConfigError {
                    message: format!("Unknown configuration key: {}", key),
                });
            }
        }
        Ok(())
    }

    /// Reset configuration to defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Display configuration as formatted text
    pub fn display(&self) -> String {
        let mut output = String::new();

        output.push_str("[storage]\n");
        if let Some(registry) = &self.storage.registry {
            output.push_str(&format!("registry = \"{}\"\n", registry.display()));
        } else {
            output.push_str(&format!(
                "# registry = \"{}\" (default)\n",
                fs_utils::default_registry_path().display()
            ));
        }

        output.push_str("\n[display]\n");
        output.push_str(&format!("compress = {}\n", self.display.compress));
        output.push_str(&format!("min_prefix_len = {}\n", self.display.min_prefix_len));

        output.push_str("\n[logging]\n");
        output.push_str(&format!("level = \"{}\"\n", self.logging.level));

        output
    }
}
