//! Static presentation tables.
//!
//! Icons, labels and descriptions for the known stage/method combinations.
//! Lookups are keyed by open string sets and fall back to a placeholder on
//! a miss instead of failing:
//!
//! | Lookup | Fallback |
//! |--------|----------|
//! | [`method_icon`] | [`UNKNOWN_ICON`] |
//! | [`method_description`] | [`UNKNOWN_DESCRIPTION`] |
//! | [`stage_label`] | the stage identifier itself |
//!
//! Stage identifiers may be given either as short names (`research`) or as
//! field keys (`researchMethod`).

mod bucket;

pub use bucket::PercentageBucket;

use crate::methodology::{stage_key, Stage};

/// Placeholder glyph for unknown methods and assistants.
pub const UNKNOWN_ICON: &str = "❓";

/// Placeholder description for unknown methods.
pub const UNKNOWN_DESCRIPTION: &str = "Description not available";

/// Display metadata for a stage's breakdown record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageDisplay {
    /// Human-readable label.
    pub label: &'static str,
    /// Icon glyph.
    pub icon: &'static str,
    /// Hex color.
    pub color: &'static str,
}

/// Display metadata for a built-in stage.
#[must_use]
pub const fn stage_display(stage: Stage) -> StageDisplay {
    match stage {
        Stage::Research => StageDisplay {
            label: "Research",
            icon: "🔍",
            color: "#3B82F6",
        },
        Stage::Generation => StageDisplay {
            label: "Generation",
            icon: "✍️",
            color: "#10B981",
        },
        Stage::Review => StageDisplay {
            label: "Review",
            icon: "👁️",
            color: "#F59E0B",
        },
    }
}

type MethodTable = &'static [(&'static str, &'static str)];

const METHOD_ICONS: &[(&str, MethodTable)] = &[
    (
        "researchMethod",
        &[
            ("DeepSearch", "🔍"),
            ("AI", "🤖"),
            ("Human", "👤"),
            ("Hybrid", "🤝"),
        ],
    ),
    (
        "contentGeneration",
        &[
            ("AI", "🤖"),
            ("Human", "✍️"),
            ("AI-Assisted", "🤖✍️"),
            ("Collaborative", "👥"),
        ],
    ),
    (
        "articleReview",
        &[
            ("AI", "🔄"),
            ("Human", "👁️"),
            ("AI-Assisted", "🔄👁️"),
            ("Peer-Review", "👥✅"),
        ],
    ),
];

const METHOD_DESCRIPTIONS: &[(&str, MethodTable)] = &[
    (
        "researchMethod",
        &[
            (
                "DeepSearch",
                "AI-powered research tools with human verification and source selection",
            ),
            (
                "AI",
                "Research conducted primarily with AI assistance for data collection and analysis",
            ),
            (
                "Human",
                "Traditional research conducted entirely by humans with verified sources",
            ),
            (
                "Hybrid",
                "Primarily human research with AI support to expand sources",
            ),
        ],
    ),
    (
        "contentGeneration",
        &[
            ("AI", "Content generated entirely by AI with human supervision"),
            (
                "Human",
                "Content written entirely by humans without AI assistance",
            ),
            (
                "AI-Assisted",
                "Content written by humans with AI support for suggestions and optimization",
            ),
            (
                "Collaborative",
                "Content written in collaboration between multiple human authors, no AI",
            ),
        ],
    ),
    (
        "articleReview",
        &[
            (
                "AI",
                "Review and quality control performed by advanced AI systems",
            ),
            (
                "Human",
                "Review and quality control performed by human editors",
            ),
            (
                "AI-Assisted",
                "Human review with AI support for grammar and typo checking",
            ),
            (
                "Peer-Review",
                "Review performed by other professionals in the field, no AI",
            ),
        ],
    ),
];

fn lookup(tables: &[(&str, MethodTable)], stage: &str, method: &str) -> Option<&'static str> {
    let key = stage_key(stage);
    tables
        .iter()
        .find(|(stage, _)| *stage == key)
        .and_then(|(_, methods)| methods.iter().find(|(name, _)| *name == method))
        .map(|(_, value)| *value)
}

/// Icon for a stage/method combination, or [`UNKNOWN_ICON`].
///
/// # Example
///
/// ```
/// use ai_transparency::catalog::{method_icon, UNKNOWN_ICON};
///
/// assert_eq!(method_icon("contentGeneration", "Collaborative"), "👥");
/// assert_eq!(method_icon("research", "Hybrid"), "🤝");
/// assert_eq!(method_icon("research", "Telepathy"), UNKNOWN_ICON);
/// ```
#[must_use]
pub fn method_icon(stage: &str, method: &str) -> &'static str {
    lookup(METHOD_ICONS, stage, method).unwrap_or(UNKNOWN_ICON)
}

/// Description for a stage/method combination, or [`UNKNOWN_DESCRIPTION`].
#[must_use]
pub fn method_description(stage: &str, method: &str) -> &'static str {
    lookup(METHOD_DESCRIPTIONS, stage, method).unwrap_or(UNKNOWN_DESCRIPTION)
}

/// Label for a stage; unknown stages are returned unchanged.
#[must_use]
pub fn stage_label(stage: &str) -> &str {
    Stage::parse(stage).map_or(stage, |known| stage_display(known).label)
}
