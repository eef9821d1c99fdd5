//! Configuration management.
//!
//! This module handles:
//! - Built-in default tables (weights, method percentages, assistants)
//! - Partial user options and their deep merge over the defaults
//! - Environment variable loading for the command-line entry point
//! - Validation of options loaded from a file
//!
//! # Example
//!
//! ```
//! use ai_transparency::config::{EffectiveConfig, ModuleOptions};
//!
//! let options = ModuleOptions::default().with_weight("review", 0.5);
//! let config = EffectiveConfig::merge(&options);
//!
//! assert_eq!(config.weights["articleReview"], 0.5);
//! assert_eq!(config.component_prefix, "Ait");
//! ```

mod defaults;
mod merge;
mod options;
mod validation;

pub use defaults::{
    AssistantStyle, DEFAULT_ASSISTANTS, DEFAULT_COMPONENT_PREFIX, DEFAULT_LOCALE,
    DEFAULT_LOG_LEVEL, DEFAULT_PERCENTAGES, DEFAULT_WEIGHTS, FALLBACK_STAGE_WEIGHT,
};
pub use merge::{EffectiveConfig, MAX_PERCENTAGE};
pub use options::{AssistantOverride, ModuleOptions};
pub use validation::{validate_config, validate_options};

use std::path::Path;

use crate::error::ConfigError;

/// Command-line configuration.
///
/// Use [`Config::from_env`] to load it from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Path of the JSON options file, if one was configured.
    pub options_path: Option<String>,
    /// Log level (error, warn, info, debug, trace).
    pub log_level: String,
    /// Locale used to format dates.
    pub locale: String,
    /// Options read from `options_path`, or empty.
    pub options: ModuleOptions,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `AIT_CONFIG_PATH`: JSON file holding [`ModuleOptions`] (default: none)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `AIT_LOCALE`: Locale for date formatting (default: `en-US`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `AIT_CONFIG_PATH` is set but empty
    /// - the options file cannot be read or parsed
    /// - any value fails validation (see [`validate_config`])
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let options_path = std::env::var("AIT_CONFIG_PATH").ok();
        let options = match options_path.as_deref() {
            Some("") => {
                return Err(ConfigError::InvalidValue {
                    var: "AIT_CONFIG_PATH".into(),
                    reason: "must not be empty when set".into(),
                })
            }
            Some(path) => load_options(path)?,
            None => ModuleOptions::default(),
        };

        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());
        let locale = std::env::var("AIT_LOCALE").unwrap_or_else(|_| DEFAULT_LOCALE.into());

        let config = Self {
            options_path,
            log_level,
            locale,
            options,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Merge the loaded options over the defaults.
    #[must_use]
    pub fn effective(&self) -> EffectiveConfig {
        EffectiveConfig::merge(&self.options)
    }
}

/// Read [`ModuleOptions`] from a JSON file.
///
/// # Errors
///
/// Returns [`ConfigError::FileRead`] if the file cannot be read and
/// [`ConfigError::Parse`] if it is not a valid options document.
pub fn load_options(path: impl AsRef<Path>) -> Result<ModuleOptions, ConfigError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: shown.clone(),
        message: e.to_string(),
    })?;

    let options = serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: shown.clone(),
        message: e.to_string(),
    })?;

    tracing::info!(path = %shown, "Loaded transparency options");
    Ok(options)
}
