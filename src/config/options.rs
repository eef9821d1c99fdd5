//! User-facing partial configuration.
//!
//! [`ModuleOptions`] mirrors what a host hands over: every field is
//! optional and anything left out inherits the built-in default when the
//! options are merged (see [`EffectiveConfig::merge`]).
//!
//! [`EffectiveConfig::merge`]: super::EffectiveConfig::merge

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Partial configuration supplied by a host.
///
/// # Example
///
/// ```
/// use ai_transparency::config::ModuleOptions;
///
/// let options: ModuleOptions = serde_json::from_str(r#"{
///     "weights": { "generation": 0.6 },
///     "percentages": { "researchMethod": { "DeepSearch": 70 } },
///     "componentPrefix": "Transparency"
/// }"#).unwrap();
///
/// assert_eq!(options.weights.get("generation"), Some(&0.6));
/// assert_eq!(options.component_prefix.as_deref(), Some("Transparency"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ModuleOptions {
    /// Stage weight overrides, keyed by stage name or field key.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub weights: BTreeMap<String, f64>,
    /// AI percentage overrides: stage → method → percentage.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub percentages: BTreeMap<String, BTreeMap<String, u32>>,
    /// Assistant presentation overrides, keyed by assistant name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub assistants: BTreeMap<String, AssistantOverride>,
    /// Whether the host should register presentational components.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<bool>,
    /// Prefix for registered component names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_prefix: Option<String>,
}

impl ModuleOptions {
    /// Override one stage weight.
    #[must_use]
    pub fn with_weight(mut self, stage: impl Into<String>, weight: f64) -> Self {
        self.weights.insert(stage.into(), weight);
        self
    }

    /// Override one method percentage.
    #[must_use]
    pub fn with_percentage(
        mut self,
        stage: impl Into<String>,
        method: impl Into<String>,
        percentage: u32,
    ) -> Self {
        self.percentages
            .entry(stage.into())
            .or_default()
            .insert(method.into(), percentage);
        self
    }

    /// Override (or add) an assistant style.
    #[must_use]
    pub fn with_assistant(mut self, name: impl Into<String>, style: AssistantOverride) -> Self {
        self.assistants.insert(name.into(), style);
        self
    }
}

/// Partial assistant presentation override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssistantOverride {
    /// Icon glyph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Hex color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// CSS class names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document() {
        let options: ModuleOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ModuleOptions::default());
    }

    #[test]
    fn test_full_document() {
        let options: ModuleOptions = serde_json::from_str(
            r#"{
                "weights": { "research": 0.2, "illustration": 0.1 },
                "percentages": {
                    "contentGeneration": { "AI-Assisted": 70, "Ghostwritten": 90 }
                },
                "assistants": {
                    "Mistral": { "icon": "🌬️", "className": "ait-badge ait-badge--mistral" }
                },
                "components": false,
                "componentPrefix": "Disclosure"
            }"#,
        )
        .unwrap();

        assert_eq!(options.weights.len(), 2);
        assert_eq!(options.percentages["contentGeneration"]["Ghostwritten"], 90);
        assert_eq!(
            options.assistants["Mistral"],
            AssistantOverride {
                icon: Some("🌬️".into()),
                color: None,
                class_name: Some("ait-badge ait-badge--mistral".into()),
            }
        );
        assert_eq!(options.components, Some(false));
        assert_eq!(options.component_prefix.as_deref(), Some("Disclosure"));
    }

    #[test]
    fn test_builders() {
        let options = ModuleOptions::default()
            .with_weight("review", 0.4)
            .with_percentage("review", "AI-Assisted", 40)
            .with_percentage("review", "Robot", 100);

        assert_eq!(options.weights["review"], 0.4);
        assert_eq!(options.percentages["review"].len(), 2);
    }

    #[test]
    fn test_serialize_skips_empty() {
        let json = serde_json::to_string(&ModuleOptions::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
