//! Breakdown workflow: declared methods → per-stage shares → weighted average.

use ai_transparency::evaluator::MethodologyEvaluator;
use ai_transparency::methodology::{ContentMethodology, Stage};
use pretty_assertions::assert_eq;

fn declared(research: &str, generation: &str, review: &str) -> ContentMethodology {
    ContentMethodology::default()
        .with_method(Stage::Research, research)
        .with_method(Stage::Generation, generation)
        .with_method(Stage::Review, review)
}

#[test]
fn test_traditional_newsroom_article() {
    let evaluator = MethodologyEvaluator::default();
    let methodology = declared("Human", "Collaborative", "Peer-Review");

    let breakdown = evaluator.compute_breakdown(&methodology);
    assert_eq!(breakdown.average_ai_percentage, 0);
    assert_eq!(
        evaluator.percentage_class(breakdown.average_ai_percentage),
        "ait-percentage--human"
    );

    // Non-human methods are disclosed even at 0% AI.
    let stats = evaluator.compute_stats(&methodology);
    assert_eq!(stats.transparency_score, 100);
    assert_eq!(stats.human_score, 100);
}

#[test]
fn test_fully_generated_article() {
    let evaluator = MethodologyEvaluator::default();
    let breakdown = evaluator.compute_breakdown(&declared("AI", "AI", "AI"));

    assert_eq!(breakdown.average_ai_percentage, 100);
    assert_eq!(
        evaluator.percentage_color(breakdown.average_ai_percentage),
        "#DC2626"
    );
    let shares: Vec<(u8, u8)> = breakdown
        .elements
        .iter()
        .map(|el| (el.ai_percentage, el.human_percentage))
        .collect();
    assert_eq!(shares, vec![(100, 0), (100, 0), (100, 0)]);
}

#[test]
fn test_assisted_article() {
    let evaluator = MethodologyEvaluator::default();
    let methodology = declared("Hybrid", "AI-Assisted", "Human")
        .with_assistants(Stage::Research, ["Perplexity"])
        .with_assistants(Stage::Generation, ["Claude", "Copilot"]);

    // 40*0.25 + 60*0.5 + 0*0.25 = 40
    let breakdown = evaluator.compute_breakdown(&methodology);
    assert_eq!(breakdown.average_ai_percentage, 40);
    assert_eq!(
        evaluator.percentage_class(breakdown.average_ai_percentage),
        "ait-percentage--medium"
    );

    let names: Vec<&str> = breakdown
        .assistants
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["Perplexity", "Claude", "Copilot"]);

    let review = breakdown.element(Stage::Review).expect("review element");
    assert_eq!(review.assistants, None);
    assert_eq!(review.icon, "👁️");
}

#[test]
fn test_partial_methodology_warns_and_defaults() {
    let evaluator = MethodologyEvaluator::default();
    let methodology = ContentMethodology::default().with_method(Stage::Generation, "AI");

    let warnings = evaluator.validate(&methodology);
    assert_eq!(
        warnings,
        vec!["Research method not specified", "Review type not specified"]
    );

    // Warnings never block evaluation: 100*0.5 = 50
    let breakdown = evaluator.compute_breakdown(&methodology);
    assert_eq!(breakdown.average_ai_percentage, 50);
    assert_eq!(
        breakdown.element(Stage::Research).map(|el| el.method.as_str()),
        Some("Human")
    );
}

#[test]
fn test_evaluator_shared_across_threads() {
    let evaluator = std::sync::Arc::new(MethodologyEvaluator::default());
    let handles: Vec<_> = ["AI", "DeepSearch", "Hybrid", "Human"]
        .into_iter()
        .map(|method| {
            let evaluator = std::sync::Arc::clone(&evaluator);
            std::thread::spawn(move || {
                let methodology = ContentMethodology::default().with_method(Stage::Research, method);
                evaluator.compute_breakdown(&methodology).average_ai_percentage
            })
        })
        .collect();

    let averages: Vec<u8> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();
    assert_eq!(averages, vec![25, 15, 10, 0]);
}
