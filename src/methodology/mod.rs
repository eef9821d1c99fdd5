//! Content methodology input records.
//!
//! A [`ContentMethodology`] describes how a piece of content was produced:
//! one method per [`Stage`], optional assistant tags per stage, and some
//! descriptive metadata that is carried along but never computed on.
//!
//! # Example
//!
//! ```
//! use ai_transparency::methodology::{ContentMethodology, Stage};
//!
//! let methodology: ContentMethodology = serde_json::from_str(
//!     r#"{"researchMethod": "DeepSearch", "researchAssistants": ["Claude"]}"#,
//! ).unwrap();
//!
//! assert_eq!(methodology.effective_method(Stage::Research), "DeepSearch");
//! assert_eq!(methodology.effective_method(Stage::Generation), "Human");
//! ```

mod assistants;

pub use assistants::{declared_assistants, AssistantSource, DeclaredAssistants, NO_ASSISTANT};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Method assumed for a stage that declares none.
pub const HUMAN_METHOD: &str = "Human";

/// A production stage of a piece of content.
///
/// Stages are evaluated in the order of [`Stage::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Stage {
    /// Research and source gathering.
    Research,
    /// Writing the content.
    Generation,
    /// Editing and quality control.
    Review,
}

impl Stage {
    /// All stages in evaluation order.
    pub const ALL: [Self; 3] = [Self::Research, Self::Generation, Self::Review];

    /// Methodology field key for this stage (`researchMethod`, ...).
    ///
    /// This is the key used for percentage tables, icons and descriptions,
    /// and the `element` value of a breakdown record.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Research => "researchMethod",
            Self::Generation => "contentGeneration",
            Self::Review => "articleReview",
        }
    }

    /// Short stage name used for weights (`research`, ...).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Generation => "generation",
            Self::Review => "review",
        }
    }

    /// Parse a stage from either its short name or its field key.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.name() == value || stage.key() == value)
    }

    /// Advisory text emitted by validation when the stage is not declared.
    #[must_use]
    pub const fn missing_warning(self) -> &'static str {
        match self {
            Self::Research => "Research method not specified",
            Self::Generation => "Content generation method not specified",
            Self::Review => "Review type not specified",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize a caller-supplied stage identifier to its field key.
///
/// Known short names map to their field key; anything else is returned
/// unchanged so custom stages keep their own identity.
#[must_use]
pub fn stage_key(value: &str) -> &str {
    Stage::parse(value).map_or(value, |stage| stage.key())
}

/// How a piece of content was produced.
///
/// Every field is optional. An empty record is valid and describes fully
/// human-made content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentMethodology {
    /// Research method (`AI`, `DeepSearch`, `Hybrid`, `Human`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_method: Option<String>,
    /// Assistants used during research.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_assistants: Option<Vec<String>>,
    /// Generation method (`AI`, `AI-Assisted`, `Collaborative`, `Human`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_generation: Option<String>,
    /// Assistants used during generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_assistants: Option<Vec<String>>,
    /// Review method (`AI`, `AI-Assisted`, `Peer-Review`, `Human`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_review: Option<String>,
    /// Assistants used during review.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_assistants: Option<Vec<String>>,
    /// Number of sources consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_count: Option<u32>,
    /// Hours spent on research.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_hours: Option<f64>,
    /// Last update date as supplied by the author.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Content version label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Deprecated: single assistant for the whole piece.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_assistant: Option<String>,
    /// Deprecated: assistants for the whole piece.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_assistants: Option<Vec<String>>,
}

impl ContentMethodology {
    /// Method declared for a stage, if any.
    #[must_use]
    pub fn method(&self, stage: Stage) -> Option<&str> {
        match stage {
            Stage::Research => self.research_method.as_deref(),
            Stage::Generation => self.content_generation.as_deref(),
            Stage::Review => self.article_review.as_deref(),
        }
    }

    /// Method used for evaluation: the declared one, or [`HUMAN_METHOD`]
    /// when absent or empty.
    #[must_use]
    pub fn effective_method(&self, stage: Stage) -> &str {
        self.method(stage)
            .filter(|method| !method.is_empty())
            .unwrap_or(HUMAN_METHOD)
    }

    /// Assistants declared for a stage; empty when absent.
    #[must_use]
    pub fn stage_assistants(&self, stage: Stage) -> &[String] {
        let list = match stage {
            Stage::Research => self.research_assistants.as_deref(),
            Stage::Generation => self.generation_assistants.as_deref(),
            Stage::Review => self.review_assistants.as_deref(),
        };
        list.unwrap_or_default()
    }

    /// Set the method for a stage.
    #[must_use]
    pub fn with_method(mut self, stage: Stage, method: impl Into<String>) -> Self {
        let method = Some(method.into());
        match stage {
            Stage::Research => self.research_method = method,
            Stage::Generation => self.content_generation = method,
            Stage::Review => self.article_review = method,
        }
        self
    }

    /// Set the assistants for a stage.
    #[must_use]
    pub fn with_assistants<I, S>(mut self, stage: Stage, assistants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let list = Some(assistants.into_iter().map(Into::into).collect());
        match stage {
            Stage::Research => self.research_assistants = list,
            Stage::Generation => self.generation_assistants = list,
            Stage::Review => self.review_assistants = list,
        }
        self
    }
}
