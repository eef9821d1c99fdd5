//! Error types for the AI transparency evaluator.
//!
//! Evaluation itself never fails: unknown stages, methods and assistants
//! resolve to documented fallbacks. Errors only surface at the edges:
//! - [`AppError`]: Top-level application errors
//! - [`ConfigError`]: Configuration loading and validation errors
//! - [`InputError`]: Methodology input errors (binary entry point)
//!
//! All errors implement `Send + Sync`.

use thiserror::Error;

/// Top-level application error.
///
/// Wraps the subsystem errors for unified handling in the binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input error.
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Report could not be serialized.
    #[error("Failed to serialize report: {message}")]
    Serialization {
        /// Serializer error message.
        message: String,
    },
}

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// Variable name.
        var: String,
        /// Reason for invalidity.
        reason: String,
    },

    /// Options file could not be read.
    #[error("Failed to read {path}: {message}")]
    FileRead {
        /// Path of the options file.
        path: String,
        /// Underlying I/O error message.
        message: String,
    },

    /// Options file is not valid JSON for the expected shape.
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// Path of the options file.
        path: String,
        /// Parser error message.
        message: String,
    },
}

/// Methodology input errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input could not be read.
    #[error("Failed to read methodology: {message}")]
    Read {
        /// Underlying I/O error message.
        message: String,
    },

    /// Input is not a valid methodology document.
    #[error("Invalid methodology document: {message}")]
    Parse {
        /// Parser error message.
        message: String,
    },
}

impl From<serde_json::Error> for InputError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for InputError {
    fn from(err: std::io::Error) -> Self {
        Self::Read {
            message: err.to_string(),
        }
    }
}
