//! AI transparency evaluator binary entry point.
//!
//! Reads a content methodology as JSON from stdin and writes the evaluation
//! report as JSON to stdout. All logs go to stderr.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::Read;

use ai_transparency::config::Config;
use ai_transparency::error::{AppError, InputError};
use ai_transparency::evaluator::{EvaluationReport, MethodologyEvaluator};
use ai_transparency::methodology::ContentMethodology;

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let effective = config.effective();
    tracing::info!(
        options = config.options_path.as_deref().unwrap_or("<defaults>"),
        locale = %config.locale,
        components = effective.components,
        badge_component = %effective.component_name("Badge"),
        "Configuration loaded"
    );

    let evaluator = MethodologyEvaluator::from_config(effective);
    match run(std::io::stdin().lock(), &evaluator, &config.locale) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn run(
    mut reader: impl Read,
    evaluator: &MethodologyEvaluator,
    locale: &str,
) -> Result<String, AppError> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(InputError::from)?;

    let methodology: ContentMethodology =
        serde_json::from_str(&input).map_err(InputError::from)?;

    let report: EvaluationReport = evaluator.report(&methodology, locale);
    for warning in &report.warnings {
        tracing::warn!("{warning}");
    }

    serde_json::to_string_pretty(&report).map_err(|e| AppError::Serialization {
        message: e.to_string(),
    })
}
