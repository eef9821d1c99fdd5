//! Resolution of the assistants declared by a methodology.
//!
//! Assistants can be declared three ways, checked in priority order:
//! 1. Per-stage lists (`researchAssistants`, ...)
//! 2. Deprecated `aiAssistants` array
//! 3. Deprecated `aiAssistant` single value
//!
//! The first source that yields at least one name wins.

use super::{ContentMethodology, Stage};

/// Sentinel value of the deprecated single-assistant field meaning "none".
pub const NO_ASSISTANT: &str = "None";

/// Where a methodology's assistant list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantSource {
    /// Union of the per-stage lists.
    Stages,
    /// Deprecated `aiAssistants` array.
    LegacyList,
    /// Deprecated `aiAssistant` field.
    LegacySingle,
    /// Nothing declared.
    Undeclared,
}

/// Assistant names declared by a methodology, deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredAssistants<'a> {
    /// Source the names were taken from.
    pub source: AssistantSource,
    /// Names in first-seen order, without duplicates (case-sensitive).
    pub names: Vec<&'a str>,
}

/// Collect the assistant names declared by a methodology.
///
/// # Example
///
/// ```
/// use ai_transparency::methodology::{declared_assistants, AssistantSource, ContentMethodology, Stage};
///
/// let methodology = ContentMethodology::default()
///     .with_assistants(Stage::Research, ["Claude", "Gemini"])
///     .with_assistants(Stage::Generation, ["Claude"]);
///
/// let declared = declared_assistants(&methodology);
/// assert_eq!(declared.source, AssistantSource::Stages);
/// assert_eq!(declared.names, ["Claude", "Gemini"]);
/// ```
#[must_use]
pub fn declared_assistants(methodology: &ContentMethodology) -> DeclaredAssistants<'_> {
    let per_stage = Stage::ALL
        .into_iter()
        .flat_map(|stage| methodology.stage_assistants(stage))
        .map(String::as_str);
    let names = unique(per_stage);
    if !names.is_empty() {
        return DeclaredAssistants {
            source: AssistantSource::Stages,
            names,
        };
    }

    let legacy = methodology.ai_assistants.as_deref().unwrap_or_default();
    if !legacy.is_empty() {
        return DeclaredAssistants {
            source: AssistantSource::LegacyList,
            names: unique(legacy.iter().map(String::as_str)),
        };
    }

    match methodology.ai_assistant.as_deref() {
        Some(name) if !name.is_empty() && name != NO_ASSISTANT => DeclaredAssistants {
            source: AssistantSource::LegacySingle,
            names: vec![name],
        },
        _ => DeclaredAssistants {
            source: AssistantSource::Undeclared,
            names: Vec::new(),
        },
    }
}

fn unique<'a>(names: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = Vec::new();
    for name in names {
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}
