//! Configuration validation.
//!
//! Checks applied to options loaded from a file. The evaluator itself never
//! rejects options; it clamps percentages and treats a zero total weight as
//! an average of 0.

use super::{Config, ModuleOptions, MAX_PERCENTAGE};
use crate::error::ConfigError;

/// Validate a loaded configuration.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `AIT_LOCALE` is empty
/// - any option fails [`validate_options`]
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.locale.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: "AIT_LOCALE".into(),
            reason: "must not be empty".into(),
        });
    }

    validate_options(&config.options)
}

/// Validate user options.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - a weight is negative, NaN or infinite
/// - a percentage is above 100
/// - `componentPrefix` is empty
#[must_use = "validation result should be checked"]
pub fn validate_options(options: &ModuleOptions) -> Result<(), ConfigError> {
    for (stage, weight) in &options.weights {
        if !weight.is_finite() || *weight < 0.0 {
            return Err(ConfigError::InvalidValue {
                var: format!("weights.{stage}"),
                reason: "must be a finite, non-negative number".into(),
            });
        }
    }

    for (stage, methods) in &options.percentages {
        for (method, pct) in methods {
            if *pct > u32::from(MAX_PERCENTAGE) {
                return Err(ConfigError::InvalidValue {
                    var: format!("percentages.{stage}.{method}"),
                    reason: format!("must be between 0 and {MAX_PERCENTAGE}"),
                });
            }
        }
    }

    if let Some(prefix) = &options.component_prefix {
        if prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "componentPrefix".into(),
                reason: "must not be empty".into(),
            });
        }
    }

    Ok(())
}
