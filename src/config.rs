//! Configuration file support.
//!
//! Settings are optional: a page that ships no config gets the `postinput`
//! element, no height ceiling and the default prompts. Natively the config
//! lives in the user config directory; in the browser it is a JSON string in
//! localStorage.

use postinput_ui::{Pixels, ResizeLimits};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SUBMIT_PROMPTS, ELEMENT_ID};

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Convert to log crate's Level (console_log takes a Level, not a filter).
    pub fn to_level(&self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Settings for the auto-resizing post field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResizeConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// DOM id of the textarea to resize
    #[serde(default = "default_element_id")]
    pub element_id: String,

    /// Stop growing past this height; content beyond it scrolls
    #[serde(default)]
    pub max_height_px: Option<Pixels>,

    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Placeholder prompts picked at random for an empty field
    #[serde(default = "default_prompts")]
    pub placeholder_prompts: Vec<String>,
}

fn default_element_id() -> String {
    ELEMENT_ID.to_string()
}

fn default_prompts() -> Vec<String> {
    DEFAULT_SUBMIT_PROMPTS.iter().map(|p| p.to_string()).collect()
}

impl ResizeConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            element_id: default_element_id(),
            max_height_px: None,
            log_level: LogLevel::default(),
            placeholder_prompts: default_prompts(),
        }
    }

    /// Limits handed to the resize handler.
    pub fn limits(&self) -> ResizeLimits {
        ResizeLimits {
            max_height: self.max_height_px,
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        if config.element_id.trim().is_empty() {
            return Err(ConfigError::EmptyElementId);
        }

        if let Some(max) = config.max_height_px {
            if !max.value().is_finite() || max.value() < 0.0 {
                return Err(ConfigError::InvalidMaxHeight(max.value()));
            }
        }

        Ok(config)
    }

    /// Get the default filename for the config file.
    pub fn default_filename() -> &'static str {
        "postinput-config.json"
    }

    /// Get the default config file path.
    /// Returns None on WASM (no filesystem access).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn default_path() -> Option<std::path::PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("postinput").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("postinput")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from `path`.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load_from_path(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {:?}", path);
                Some(config)
            }
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }

    /// LocalStorage key for WASM config persistence.
    #[cfg(target_arch = "wasm32")]
    const LOCALSTORAGE_KEY: &'static str = "postinput-config";

    /// Try to load configuration from localStorage (WASM only).
    /// Returns None if not found or can't be parsed.
    #[cfg(target_arch = "wasm32")]
    pub fn load_from_local_storage() -> Option<Self> {
        let window = web_sys::window()?;
        let storage = window.local_storage().ok()??;

        match storage.get_item(Self::LOCALSTORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded configuration from localStorage");
                    Some(config)
                }
                Err(e) => {
                    log::warn!("Failed to parse config from localStorage: {}", e);
                    None
                }
            },
            Ok(None) => {
                log::debug!("No config found in localStorage");
                None
            }
            Err(e) => {
                log::warn!("Failed to read from localStorage: {:?}", e);
                None
            }
        }
    }
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// The element id is blank
    #[error("Configuration element_id must not be empty")]
    EmptyElementId,

    /// Height ceiling is negative or not finite
    #[error("Configuration max_height_px must be a non-negative number, got {0}")]
    InvalidMaxHeight(f32),

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ResizeConfig::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.element_id, "postinput");
        assert_eq!(config.max_height_px, None);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.placeholder_prompts.len(), 4);
        assert_eq!(config.limits(), ResizeLimits::UNBOUNDED);
    }

    #[test]
    fn test_json_roundtrip_keeps_fields() {
        let mut config = ResizeConfig::new();
        config.max_height_px = Some(Pixels(240.0));
        config.log_level = LogLevel::Debug;

        let json = config.to_json().unwrap();
        assert!(json.contains("\"max_height_px\": 240.0"));
        assert!(json.contains("\"log_level\": \"debug\""));

        let loaded = ResizeConfig::from_json(&json).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(
            loaded.limits(),
            ResizeLimits::with_max_height(Pixels(240.0))
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let loaded = ResizeConfig::from_json(r#"{ "version": 1 }"#).unwrap();
        assert_eq!(loaded, ResizeConfig::default());
    }

    #[test]
    fn test_newer_version_rejected() {
        let err = ResizeConfig::from_json(r#"{ "version": 99 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VersionTooNew {
                file_version: 99,
                supported_version: CONFIG_VERSION
            }
        ));
    }

    #[test]
    fn test_blank_element_id_rejected() {
        let err = ResizeConfig::from_json(r#"{ "version": 1, "element_id": "  " }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyElementId));
    }

    #[test]
    fn test_negative_max_height_rejected() {
        let err = ResizeConfig::from_json(r#"{ "version": 1, "max_height_px": -40 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxHeight(v) if v == -40.0));
    }

    #[test]
    fn test_overflowing_max_height_rejected() {
        // Too large for f32: deserializes to infinity
        let err = ResizeConfig::from_json(r#"{ "version": 1, "max_height_px": 1e40 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxHeight(_)));
    }

    #[test]
    fn test_zero_max_height_accepted() {
        let config = ResizeConfig::from_json(r#"{ "version": 1, "max_height_px": 0 }"#).unwrap();
        assert_eq!(config.max_height_px, Some(Pixels(0.0)));
    }

    #[test]
    fn test_invalid_json() {
        let err = ResizeConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Warn.to_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_from_missing_path_is_io_error() {
        let path = std::env::temp_dir().join("postinput-does-not-exist.json");
        let err = ResizeConfig::load_from_path(&path).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
