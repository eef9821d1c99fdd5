//! Built-in configuration tables.
//!
//! These are the values every user override is merged over.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default locale for date formatting.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Default component name prefix.
pub const DEFAULT_COMPONENT_PREFIX: &str = "Ait";

/// Weight applied to a stage missing from the weight table.
pub const FALLBACK_STAGE_WEIGHT: f64 = 0.33;

/// Default weight per stage field key.
pub const DEFAULT_WEIGHTS: &[(&str, f64)] = &[
    ("researchMethod", 0.25),
    ("contentGeneration", 0.50),
    ("articleReview", 0.25),
];

/// Default AI percentage per stage field key and method.
pub const DEFAULT_PERCENTAGES: &[(&str, &[(&str, u8)])] = &[
    (
        "researchMethod",
        &[("AI", 100), ("DeepSearch", 60), ("Hybrid", 40), ("Human", 0)],
    ),
    (
        "contentGeneration",
        &[
            ("AI", 100),
            ("AI-Assisted", 60),
            ("Collaborative", 0),
            ("Human", 0),
        ],
    ),
    (
        "articleReview",
        &[
            ("AI", 100),
            ("AI-Assisted", 50),
            ("Peer-Review", 0),
            ("Human", 0),
        ],
    ),
];

/// Presentation metadata for an assistant badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssistantStyle {
    /// Icon glyph.
    pub icon: String,
    /// Hex color.
    pub color: String,
    /// CSS class names.
    pub class_name: String,
}

impl AssistantStyle {
    /// Create a style from its parts.
    #[must_use]
    pub fn new(
        icon: impl Into<String>,
        color: impl Into<String>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            color: color.into(),
            class_name: class_name.into(),
        }
    }

    /// Style for assistants missing from the assistant table.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(
            crate::catalog::UNKNOWN_ICON,
            "#6B7280",
            "ait-badge ait-badge--default",
        )
    }
}

/// Built-in assistant table: name, icon, color, class.
pub const DEFAULT_ASSISTANTS: &[(&str, &str, &str, &str)] = &[
    ("Claude", "🧠", "#8B5CF6", "ait-badge ait-badge--claude"),
    ("Gemini", "💎", "#059669", "ait-badge ait-badge--gemini"),
    ("ChatGPT", "⚡", "#0D9488", "ait-badge ait-badge--chatgpt"),
    ("Perplexity", "🌐", "#0891B2", "ait-badge ait-badge--perplexity"),
    ("Copilot", "🚀", "#0284C7", "ait-badge ait-badge--copilot"),
    ("None", "🚫", "#6B7280", "ait-badge ait-badge--none"),
];
