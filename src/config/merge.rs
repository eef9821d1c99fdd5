//! Deep merge of user options over the built-in tables.
//!
//! Missing keys inherit the default; present keys replace it at the leaf.
//! Stage identifiers are normalized to their field key (`research` becomes
//! `researchMethod`), and stages or methods the defaults do not know about
//! are kept as additional entries.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::defaults::{
    AssistantStyle, DEFAULT_ASSISTANTS, DEFAULT_COMPONENT_PREFIX, DEFAULT_PERCENTAGES,
    DEFAULT_WEIGHTS,
};
use super::options::ModuleOptions;
use crate::methodology::{stage_key, Stage};

/// Highest AI percentage a method can be attributed.
pub const MAX_PERCENTAGE: u8 = 100;

/// Fully merged, immutable configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
    /// Stage weights, keyed by stage field key.
    pub weights: BTreeMap<String, f64>,
    /// AI percentage per stage field key and method.
    pub percentages: BTreeMap<String, BTreeMap<String, u8>>,
    /// Assistant presentation table.
    pub assistants: BTreeMap<String, AssistantStyle>,
    /// Whether presentational components are registered by the host.
    pub components: bool,
    /// Prefix for registered component names.
    pub component_prefix: String,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self::merge(&ModuleOptions::default())
    }
}

impl EffectiveConfig {
    /// Merge user options over the built-in defaults.
    ///
    /// Percentages above [`MAX_PERCENTAGE`] are clamped so the human share
    /// of a stage can never go negative.
    ///
    /// # Example
    ///
    /// ```
    /// use ai_transparency::config::{EffectiveConfig, ModuleOptions};
    ///
    /// let options = ModuleOptions::default()
    ///     .with_weight("generation", 0.6)
    ///     .with_percentage("research", "Interviews", 0);
    /// let config = EffectiveConfig::merge(&options);
    ///
    /// assert_eq!(config.weights["contentGeneration"], 0.6);
    /// assert_eq!(config.weights["researchMethod"], 0.25);
    /// assert_eq!(config.percentages["researchMethod"]["Interviews"], 0);
    /// assert_eq!(config.percentages["researchMethod"]["DeepSearch"], 60);
    /// ```
    #[must_use]
    pub fn merge(options: &ModuleOptions) -> Self {
        let mut weights: BTreeMap<String, f64> = DEFAULT_WEIGHTS
            .iter()
            .map(|(stage, weight)| ((*stage).to_string(), *weight))
            .collect();
        for (stage, weight) in &options.weights {
            note_custom_stage("weights", stage);
            weights.insert(stage_key(stage).to_string(), *weight);
        }

        let mut percentages: BTreeMap<String, BTreeMap<String, u8>> = DEFAULT_PERCENTAGES
            .iter()
            .map(|(stage, methods)| {
                let methods: BTreeMap<String, u8> = methods
                    .iter()
                    .map(|(method, pct)| ((*method).to_string(), *pct))
                    .collect();
                ((*stage).to_string(), methods)
            })
            .collect();
        for (stage, methods) in &options.percentages {
            note_custom_stage("percentages", stage);
            let table = percentages.entry(stage_key(stage).to_string()).or_default();
            for (method, pct) in methods {
                table.insert(method.clone(), clamp_percentage(*pct));
            }
        }

        let mut assistants: BTreeMap<String, AssistantStyle> = DEFAULT_ASSISTANTS
            .iter()
            .map(|(name, icon, color, class_name)| {
                ((*name).to_string(), AssistantStyle::new(*icon, *color, *class_name))
            })
            .collect();
        for (name, partial) in &options.assistants {
            let style = assistants
                .entry(name.clone())
                .or_insert_with(AssistantStyle::unknown);
            if let Some(icon) = &partial.icon {
                style.icon.clone_from(icon);
            }
            if let Some(color) = &partial.color {
                style.color.clone_from(color);
            }
            if let Some(class_name) = &partial.class_name {
                style.class_name.clone_from(class_name);
            }
        }

        tracing::debug!(
            weight_overrides = options.weights.len(),
            percentage_overrides = options.percentages.values().map(BTreeMap::len).sum::<usize>(),
            assistant_overrides = options.assistants.len(),
            "Merged transparency options over defaults"
        );

        Self {
            weights,
            percentages,
            assistants,
            components: options.components.unwrap_or(true),
            component_prefix: options
                .component_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_COMPONENT_PREFIX.to_string()),
        }
    }

    /// Name under which a host registers a presentational component.
    ///
    /// ```
    /// use ai_transparency::config::EffectiveConfig;
    ///
    /// assert_eq!(EffectiveConfig::default().component_name("Badge"), "AitBadge");
    /// ```
    #[must_use]
    pub fn component_name(&self, base: &str) -> String {
        format!("{}{base}", self.component_prefix)
    }
}

fn clamp_percentage(pct: u32) -> u8 {
    u8::try_from(pct).map_or(MAX_PERCENTAGE, |pct| pct.min(MAX_PERCENTAGE))
}

fn note_custom_stage(table: &str, stage: &str) {
    if Stage::parse(stage).is_none() {
        tracing::debug!(table, stage, "Keeping override for custom stage");
    }
}
