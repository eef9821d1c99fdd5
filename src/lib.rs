//! AI Transparency
//!
//! Computes how much AI was involved in producing a piece of content, from
//! a short description of its research, generation and review methods, and
//! provides the labels, icons, colors and CSS classes needed to render
//! transparency badges.
//!
//! # Features
//!
//! - Per-stage AI percentages with a weighted overall score
//! - Configurable weights, method percentages and assistant styles,
//!   deep-merged over built-in defaults
//! - Never fails on unknown stages, methods or assistants
//! - Advisory validation of undeclared stages
//!
//! # Quick Start
//!
//! ```bash
//! echo '{"researchMethod":"DeepSearch","contentGeneration":"AI-Assisted"}' | ./ait-evaluate
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   merge    ┌─────────────────┐
//! │ ModuleOptions│───────────▶│ EffectiveConfig │
//! └──────────────┘            └────────┬────────┘
//!                                      │
//! ┌────────────────────┐      ┌────────▼────────────┐
//! │ ContentMethodology │─────▶│ MethodologyEvaluator│──▶ breakdown, stats,
//! └────────────────────┘      └─────────────────────┘    badges, warnings
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod methodology;

#[cfg(test)]
mod test_utils;
