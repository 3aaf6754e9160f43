use chrono::Local;
use mindscope::assessment::{
    catalog, AssessmentReport, AssessmentResult, Completion, DimensionKey, Recommendation,
};

/// Recommendations printed in full; the rest are listed by name only.
const EXPANDED_RECOMMENDATIONS: usize = 3;

pub(crate) fn render_questions(filter: Option<DimensionKey>) {
    let scale = catalog::answer_scale()
        .iter()
        .map(|option| format!("{}={}", option.value, option.label))
        .collect::<Vec<_>>()
        .join(", ");
    println!("Answer scale: {scale}");

    for dimension in catalog::dimensions() {
        if filter.is_some_and(|key| key != dimension.key) {
            continue;
        }

        println!("\n{} ({})", dimension.name, dimension.key);
        println!("  {}", dimension.description);
        for question in catalog::questions_for(dimension.key) {
            let marker = if question.reversed { " (reverse scored)" } else { "" };
            println!("  {:>2}. {}{}", question.id, question.text, marker);
        }
    }
}

pub(crate) fn render_completion(completion: &Completion) {
    if completion.is_complete() {
        return;
    }

    let missing = completion
        .missing
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "Note: {} of {} questions answered; unanswered items score zero (missing: {}).\n",
        completion.answered, completion.total, missing
    );
}

pub(crate) fn render_report(report: &AssessmentReport) {
    println!(
        "Assessment {} ({})",
        report.result_id,
        format_timestamp(report.timestamp)
    );
    println!(
        "Overall: {}/100 - {} ({})",
        report.overall_score, report.overall_level.label, report.overall_level.description
    );
    println!("{}", report.overall_summary);

    println!("\nDimension scores");
    for dimension in &report.dimensions {
        println!(
            "- {:<14} {:>3}%  {:>2}/{:<2}  {}",
            dimension.short_name,
            dimension.percentage,
            dimension.raw_score,
            dimension.max_score,
            dimension.level.label
        );
    }

    let focus = report.focus_areas(EXPANDED_RECOMMENDATIONS);
    if !focus.is_empty() {
        println!("\nWhere to focus first");
        for recommendation in focus {
            render_recommendation(recommendation);
        }
    }

    let remaining = &report.recommendations[focus.len()..];
    if !remaining.is_empty() {
        println!("\nAlso reviewed");
        for recommendation in remaining {
            println!(
                "- {} ({}%, {})",
                recommendation.dimension_name,
                recommendation.percentage,
                recommendation.level.label()
            );
        }
    }
}

fn render_recommendation(recommendation: &Recommendation) {
    println!(
        "\n{} - {}% ({})",
        recommendation.dimension_name,
        recommendation.percentage,
        recommendation.level.label()
    );
    println!("  {}", recommendation.summary);
    for suggestion in recommendation.suggestions {
        println!("  * {suggestion}");
    }
}

pub(crate) fn render_history(history: &[AssessmentResult]) {
    if history.is_empty() {
        println!("No saved assessments.");
        return;
    }

    println!("Saved assessments (newest first)");
    for (position, result) in history.iter().enumerate() {
        println!(
            "{:>2}. {}  {:>3}/100  {:<15}  {}",
            position + 1,
            format_timestamp(result.timestamp),
            result.overall_score,
            result.overall_level.label(),
            result.id
        );
    }
}

fn format_timestamp(millis: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(millis) {
        Some(at) => at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => format!("{millis} ms"),
    }
}
