//! Backward-compatible assistant declarations.

use ai_transparency::evaluator::MethodologyEvaluator;
use ai_transparency::methodology::ContentMethodology;
use pretty_assertions::assert_eq;

fn assistant_names(json: &str) -> Vec<String> {
    let methodology: ContentMethodology =
        serde_json::from_str(json).expect("Invalid methodology JSON");
    MethodologyEvaluator::default()
        .compute_breakdown(&methodology)
        .assistants
        .into_iter()
        .map(|a| a.name)
        .collect()
}

#[test]
fn test_per_stage_lists_win() {
    let names = assistant_names(
        r#"{
            "reviewAssistants": ["Claude"],
            "aiAssistants": ["Gemini"],
            "aiAssistant": "ChatGPT"
        }"#,
    );
    assert_eq!(names, vec!["Claude"]);
}

#[test]
fn test_legacy_list_used_when_stages_empty() {
    let names = assistant_names(
        r#"{
            "researchAssistants": [],
            "aiAssistants": ["Gemini", "Copilot"],
            "aiAssistant": "ChatGPT"
        }"#,
    );
    assert_eq!(names, vec!["Gemini", "Copilot"]);
}

#[test]
fn test_legacy_single_used_last() {
    assert_eq!(assistant_names(r#"{"aiAssistant": "ChatGPT"}"#), vec!["ChatGPT"]);
}

#[test]
fn test_legacy_none_sentinel_means_no_assistant() {
    assert!(assistant_names(r#"{"aiAssistant": "None"}"#).is_empty());
}

#[test]
fn test_none_in_stage_list_is_kept() {
    // The sentinel only applies to the deprecated single field.
    let methodology: ContentMethodology =
        serde_json::from_str(r#"{"generationAssistants": ["None"]}"#)
            .expect("Invalid methodology JSON");
    let breakdown = MethodologyEvaluator::default().compute_breakdown(&methodology);
    assert_eq!(breakdown.assistants.len(), 1);
    assert_eq!(breakdown.assistants[0].icon, "🚫");
}
