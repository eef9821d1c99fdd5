//! Derived records produced by the evaluator.
//!
//! All records are created fresh per call and serialize to camelCase JSON.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::methodology::Stage;

/// An assistant name resolved to its presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAssistant {
    /// Assistant name as declared.
    pub name: String,
    /// Icon glyph.
    pub icon: String,
    /// Hex color.
    pub color: String,
    /// CSS class names.
    pub class_name: String,
}

/// AI involvement of a single stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ElementAIPercentage {
    /// Stage field key (`researchMethod`, ...).
    pub element: String,
    /// Display label.
    pub label: String,
    /// AI share, 0–100.
    pub ai_percentage: u8,
    /// Human share, `100 - ai_percentage`.
    pub human_percentage: u8,
    /// Method used for the evaluation.
    pub method: String,
    /// Description of the method.
    pub description: String,
    /// Stage icon.
    pub icon: String,
    /// Stage color.
    pub color: String,
    /// Weight applied in the overall average.
    pub weight: f64,
    /// Assistants declared for the stage, absent if none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistants: Option<Vec<ResolvedAssistant>>,
}

/// Per-stage breakdown with the weighted overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MethodologyAIBreakdown {
    /// One record per stage, in research, generation, review order.
    pub elements: Vec<ElementAIPercentage>,
    /// Weighted average AI share, rounded.
    #[serde(rename = "averageAIPercentage")]
    pub average_ai_percentage: u8,
    /// All declared assistants, deduplicated.
    pub assistants: Vec<ResolvedAssistant>,
}

impl MethodologyAIBreakdown {
    /// Record for a stage.
    #[must_use]
    pub fn element(&self, stage: Stage) -> Option<&ElementAIPercentage> {
        self.elements.iter().find(|el| el.element == stage.key())
    }
}

/// Summary scores of a methodology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MethodologyStats {
    /// Weighted AI share.
    pub ai_score: u8,
    /// `100 - ai_score`.
    pub human_score: u8,
    /// 100 when any stage discloses non-human involvement, else 50.
    pub transparency_score: u8,
    /// Number of stages evaluated.
    pub total_fields: u8,
}

/// Badge describing one stage of a methodology.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MethodologyBadge {
    /// Stage name (`research`, ...).
    #[serde(rename = "type")]
    pub badge_type: String,
    /// Stage label.
    pub label: String,
    /// Method used.
    pub value: String,
    /// Method icon.
    pub icon: String,
    /// CSS class for the stage's AI share.
    pub class_name: String,
    /// Method description.
    pub description: String,
    /// Display order, 1 first.
    pub priority: u8,
}

/// Everything the command-line entry point reports for a methodology.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    /// Per-stage breakdown.
    pub breakdown: MethodologyAIBreakdown,
    /// Summary scores.
    pub stats: MethodologyStats,
    /// Advisory validation warnings.
    pub warnings: Vec<String>,
    /// Stage badges.
    pub badges: Vec<MethodologyBadge>,
    /// Formatted `lastUpdated` date, if the methodology has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}
