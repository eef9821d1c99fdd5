//! Methodology evaluation.
//!
//! [`MethodologyEvaluator`] maps a [`ContentMethodology`] and an immutable
//! [`EffectiveConfig`] to a per-stage AI breakdown, summary stats, badges
//! and advisory warnings. Every query is a pure function: the evaluator
//! holds no mutable state and can be shared freely across threads.
//!
//! # Example
//!
//! ```
//! use ai_transparency::evaluator::MethodologyEvaluator;
//! use ai_transparency::methodology::{ContentMethodology, Stage};
//!
//! let evaluator = MethodologyEvaluator::default();
//! let methodology = ContentMethodology::default()
//!     .with_method(Stage::Research, "AI")
//!     .with_assistants(Stage::Research, ["Claude"]);
//!
//! let breakdown = evaluator.compute_breakdown(&methodology);
//! assert_eq!(breakdown.average_ai_percentage, 25);
//! assert_eq!(breakdown.assistants[0].icon, "🧠");
//!
//! let stats = evaluator.compute_stats(&methodology);
//! assert_eq!(stats.transparency_score, 100);
//! ```

// Averages are clamped to 0..=100 before narrowing.
#![allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]

mod types;

pub use types::{
    ElementAIPercentage, EvaluationReport, MethodologyAIBreakdown, MethodologyBadge,
    MethodologyStats, ResolvedAssistant,
};

use crate::catalog::{self, PercentageBucket};
use crate::config::{
    AssistantStyle, EffectiveConfig, ModuleOptions, FALLBACK_STAGE_WEIGHT, MAX_PERCENTAGE,
};
use crate::format::format_date;
use crate::methodology::{declared_assistants, stage_key, ContentMethodology, Stage, HUMAN_METHOD};

/// Transparency score when at least one stage discloses non-human work.
pub const DISCLOSED_TRANSPARENCY_SCORE: u8 = 100;

/// Transparency score when every stage is (or defaults to) human.
pub const ALL_HUMAN_TRANSPARENCY_SCORE: u8 = 50;

/// Pure evaluator over an immutable configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MethodologyEvaluator {
    config: EffectiveConfig,
}

impl MethodologyEvaluator {
    /// Create an evaluator from partial user options.
    #[must_use]
    pub fn new(options: &ModuleOptions) -> Self {
        Self::from_config(EffectiveConfig::merge(options))
    }

    /// Create an evaluator from an already merged configuration.
    #[must_use]
    pub const fn from_config(config: EffectiveConfig) -> Self {
        Self { config }
    }

    /// The effective configuration (read-only).
    #[must_use]
    pub const fn config(&self) -> &EffectiveConfig {
        &self.config
    }

    /// AI percentage attributed to a method for a stage.
    ///
    /// Returns 0 when the stage or the method is unknown.
    #[must_use]
    pub fn resolve_percentage(&self, stage: &str, method: &str) -> u8 {
        self.config
            .percentages
            .get(stage_key(stage))
            .and_then(|methods| methods.get(method))
            .map_or(0, |pct| (*pct).min(MAX_PERCENTAGE))
    }

    /// Weight of a stage, or [`FALLBACK_STAGE_WEIGHT`] when it has none.
    #[must_use]
    pub fn stage_weight(&self, stage: &str) -> f64 {
        self.config
            .weights
            .get(stage_key(stage))
            .copied()
            .unwrap_or(FALLBACK_STAGE_WEIGHT)
    }

    /// Resolve one assistant name to its presentation metadata.
    ///
    /// Names missing from the assistant table get the generic style.
    #[must_use]
    pub fn resolve_assistant(&self, name: &str) -> ResolvedAssistant {
        let style = self
            .config
            .assistants
            .get(name)
            .cloned()
            .unwrap_or_else(AssistantStyle::unknown);
        ResolvedAssistant {
            name: name.to_string(),
            icon: style.icon,
            color: style.color,
            class_name: style.class_name,
        }
    }

    /// Resolve a list of assistant names, keeping order and duplicates.
    #[must_use]
    pub fn resolve_assistants(&self, names: &[String]) -> Vec<ResolvedAssistant> {
        names.iter().map(|name| self.resolve_assistant(name)).collect()
    }

    /// All assistants declared by a methodology, resolved and deduplicated.
    ///
    /// Per-stage lists win; the deprecated fields are only consulted when
    /// no stage declares an assistant.
    #[must_use]
    pub fn collect_assistants(&self, methodology: &ContentMethodology) -> Vec<ResolvedAssistant> {
        declared_assistants(methodology)
            .names
            .into_iter()
            .map(|name| self.resolve_assistant(name))
            .collect()
    }

    fn element(&self, methodology: &ContentMethodology, stage: Stage) -> ElementAIPercentage {
        let method = methodology.effective_method(stage);
        let ai_percentage = self.resolve_percentage(stage.key(), method);
        let assistants = self.resolve_assistants(methodology.stage_assistants(stage));
        let display = catalog::stage_display(stage);

        ElementAIPercentage {
            element: stage.key().to_string(),
            label: display.label.to_string(),
            ai_percentage,
            human_percentage: MAX_PERCENTAGE - ai_percentage,
            method: method.to_string(),
            description: catalog::method_description(stage.key(), method).to_string(),
            icon: display.icon.to_string(),
            color: display.color.to_string(),
            weight: self.stage_weight(stage.key()),
            assistants: (!assistants.is_empty()).then_some(assistants),
        }
    }

    /// Compute the per-stage breakdown and the weighted average.
    ///
    /// The average is `round(Σ ai·w / Σ w)`; a zero total weight yields 0.
    #[must_use]
    pub fn compute_breakdown(&self, methodology: &ContentMethodology) -> MethodologyAIBreakdown {
        let elements: Vec<ElementAIPercentage> = Stage::ALL
            .into_iter()
            .map(|stage| self.element(methodology, stage))
            .collect();

        MethodologyAIBreakdown {
            average_ai_percentage: weighted_average(&elements),
            assistants: self.collect_assistants(methodology),
            elements,
        }
    }

    /// Summary scores for a methodology.
    ///
    /// Content claiming to be entirely human scores 50 for transparency;
    /// any disclosed non-human stage scores 100.
    #[must_use]
    pub fn compute_stats(&self, methodology: &ContentMethodology) -> MethodologyStats {
        let breakdown = self.compute_breakdown(methodology);
        let discloses_ai = breakdown
            .elements
            .iter()
            .any(|element| element.method != HUMAN_METHOD);

        MethodologyStats {
            ai_score: breakdown.average_ai_percentage,
            human_score: MAX_PERCENTAGE - breakdown.average_ai_percentage,
            transparency_score: if discloses_ai {
                DISCLOSED_TRANSPARENCY_SCORE
            } else {
                ALL_HUMAN_TRANSPARENCY_SCORE
            },
            total_fields: breakdown.elements.len() as u8,
        }
    }

    /// Advisory warnings for stages with no declared method.
    ///
    /// Only presence is checked: an explicit `"Human"` is not a warning.
    #[must_use]
    pub fn validate(&self, methodology: &ContentMethodology) -> Vec<String> {
        let warnings: Vec<String> = Stage::ALL
            .into_iter()
            .filter(|stage| methodology.method(*stage).is_none_or(str::is_empty))
            .map(|stage| stage.missing_warning().to_string())
            .collect();
        if !warnings.is_empty() {
            tracing::debug!(count = warnings.len(), "Methodology has undeclared stages");
        }
        warnings
    }

    /// One badge per stage, in stage order.
    #[must_use]
    pub fn badges(&self, methodology: &ContentMethodology) -> Vec<MethodologyBadge> {
        Stage::ALL
            .into_iter()
            .zip(1u8..)
            .map(|(stage, priority)| {
                let method = methodology.effective_method(stage);
                let pct = self.resolve_percentage(stage.key(), method);
                MethodologyBadge {
                    badge_type: stage.name().to_string(),
                    label: catalog::stage_display(stage).label.to_string(),
                    value: method.to_string(),
                    icon: catalog::method_icon(stage.key(), method).to_string(),
                    class_name: PercentageBucket::from_percentage(pct).class_name().to_string(),
                    description: catalog::method_description(stage.key(), method).to_string(),
                    priority,
                }
            })
            .collect()
    }

    /// Full report: breakdown, stats, warnings, badges and formatted date.
    #[must_use]
    pub fn report(&self, methodology: &ContentMethodology, locale: &str) -> EvaluationReport {
        EvaluationReport {
            breakdown: self.compute_breakdown(methodology),
            stats: self.compute_stats(methodology),
            warnings: self.validate(methodology),
            badges: self.badges(methodology),
            last_updated: methodology
                .last_updated
                .as_deref()
                .map(|date| format_date(date, locale)),
        }
    }

    /// Icon for a stage/method combination.
    #[must_use]
    pub fn method_icon(&self, stage: &str, method: &str) -> &'static str {
        catalog::method_icon(stage, method)
    }

    /// Description for a stage/method combination.
    #[must_use]
    pub fn method_description(&self, stage: &str, method: &str) -> &'static str {
        catalog::method_description(stage, method)
    }

    /// Label for a stage.
    #[must_use]
    pub fn stage_label<'a>(&self, stage: &'a str) -> &'a str {
        catalog::stage_label(stage)
    }

    /// Display color for an AI percentage.
    #[must_use]
    pub const fn percentage_color(&self, percentage: u8) -> &'static str {
        PercentageBucket::from_percentage(percentage).color()
    }

    /// CSS class for an AI percentage.
    #[must_use]
    pub const fn percentage_class(&self, percentage: u8) -> &'static str {
        PercentageBucket::from_percentage(percentage).class_name()
    }
}

fn weighted_average(elements: &[ElementAIPercentage]) -> u8 {
    let total_weight: f64 = elements.iter().map(|el| el.weight).sum();
    if !(total_weight > 0.0 && total_weight.is_finite()) {
        tracing::debug!(total_weight, "Degenerate stage weights, average is 0");
        return 0;
    }
    let weighted_sum: f64 = elements
        .iter()
        .map(|el| f64::from(el.ai_percentage) * el.weight)
        .sum();
    (weighted_sum / total_weight)
        .round()
        .clamp(0.0, f64::from(MAX_PERCENTAGE)) as u8
}
