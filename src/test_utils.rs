//! Test fixtures and factories.
//!
//! Only compiled for tests (`#[cfg(test)]`).

use crate::config::ModuleOptions;
use crate::methodology::{ContentMethodology, Stage};

/// A methodology with every stage declared and some assistants.
///
/// Research `DeepSearch` (60%), generation `AI-Assisted` (60%), review
/// `AI-Assisted` (50%): 58% overall with default weights.
#[must_use]
pub fn fully_declared() -> ContentMethodology {
    ContentMethodology {
        sources_count: Some(14),
        research_hours: Some(6.5),
        version: Some("2.0".into()),
        ..ContentMethodology::default()
    }
    .with_method(Stage::Research, "DeepSearch")
    .with_assistants(Stage::Research, ["Perplexity", "Claude"])
    .with_method(Stage::Generation, "AI-Assisted")
    .with_assistants(Stage::Generation, ["Claude"])
    .with_method(Stage::Review, "AI-Assisted")
}

/// Options overriding the three built-in stage weights.
#[must_use]
pub fn weights_options(research: f64, generation: f64, review: f64) -> ModuleOptions {
    ModuleOptions::default()
        .with_weight("research", research)
        .with_weight("generation", generation)
        .with_weight("review", review)
}
