//! Workflow scenarios for the AI transparency evaluator.
//!
//! These tests exercise the public API the way a host does:
//! - Breakdown computation across typical publishing workflows
//! - Host option overrides, including custom stages and methods
//! - Backward-compatible assistant declarations

mod breakdown_workflow;
mod config_overrides;
mod legacy_assistants;
