//! Host overrides: options → merged config → evaluation.

use ai_transparency::config::{AssistantOverride, EffectiveConfig, ModuleOptions};
use ai_transparency::evaluator::MethodologyEvaluator;
use ai_transparency::methodology::{ContentMethodology, Stage};
use pretty_assertions::assert_eq;

#[test]
fn test_override_one_method_keeps_the_rest() {
    let options = ModuleOptions::default().with_percentage("researchMethod", "DeepSearch", 75);
    let evaluator = MethodologyEvaluator::new(&options);

    assert_eq!(evaluator.resolve_percentage("research", "DeepSearch"), 75);
    assert_eq!(evaluator.resolve_percentage("research", "Hybrid"), 40);
    assert_eq!(evaluator.resolve_percentage("generation", "AI-Assisted"), 60);
}

#[test]
fn test_custom_method_is_evaluated() {
    let options = ModuleOptions::default().with_percentage("generation", "Ghostwritten", 90);
    let evaluator = MethodologyEvaluator::new(&options);
    let methodology = ContentMethodology::default().with_method(Stage::Generation, "Ghostwritten");

    let breakdown = evaluator.compute_breakdown(&methodology);
    let generation = breakdown
        .element(Stage::Generation)
        .expect("generation element");
    assert_eq!(generation.ai_percentage, 90);
    assert_eq!(generation.human_percentage, 10);
    // No catalog entry for the custom method.
    assert_eq!(generation.description, "Description not available");
    assert_eq!(breakdown.average_ai_percentage, 45);
}

#[test]
fn test_custom_stage_retained_but_not_evaluated() {
    let options = ModuleOptions::default()
        .with_weight("illustration", 5.0)
        .with_percentage("illustration", "Generated", 100);
    let evaluator = MethodologyEvaluator::new(&options);

    assert_eq!(evaluator.resolve_percentage("illustration", "Generated"), 100);
    assert_eq!(evaluator.stage_weight("illustration"), 5.0);
    assert_eq!(evaluator.stage_label("illustration"), "illustration");

    // Only the three built-in stages contribute to the average.
    let breakdown = evaluator.compute_breakdown(&ContentMethodology::default());
    assert_eq!(breakdown.elements.len(), 3);
    assert_eq!(breakdown.average_ai_percentage, 0);
}

#[test]
fn test_reweighted_generation() {
    let options = ModuleOptions::default()
        .with_weight("research", 0.0)
        .with_weight("generation", 1.0)
        .with_weight("review", 0.0);
    let evaluator = MethodologyEvaluator::new(&options);
    let methodology = ContentMethodology::default()
        .with_method(Stage::Research, "AI")
        .with_method(Stage::Generation, "AI-Assisted")
        .with_method(Stage::Review, "AI");

    assert_eq!(
        evaluator.compute_breakdown(&methodology).average_ai_percentage,
        60
    );
}

#[test]
fn test_assistant_restyle() {
    let options = ModuleOptions::default().with_assistant(
        "Gemini",
        AssistantOverride {
            class_name: Some("brand-gemini".into()),
            ..AssistantOverride::default()
        },
    );
    let evaluator = MethodologyEvaluator::new(&options);
    let assistant = evaluator.resolve_assistant("Gemini");

    assert_eq!(assistant.icon, "💎");
    assert_eq!(assistant.class_name, "brand-gemini");
}

#[test]
fn test_effective_config_is_exposed_read_only() {
    let evaluator = MethodologyEvaluator::default();
    assert_eq!(evaluator.config(), &EffectiveConfig::default());
    assert_eq!(evaluator.config().component_name("Stats"), "AitStats");
}
