mod recommendations;
mod summary;
pub mod views;

pub use recommendations::{generate, Recommendation};
pub use summary::summarize;
pub use views::{AssessmentReport, DimensionView, LevelView};

use super::catalog;
use super::result::AssessmentResult;

pub(crate) fn build_report(result: &AssessmentResult) -> AssessmentReport {
    let dimensions = result
        .dimension_scores
        .iter()
        .map(|score| DimensionView {
            key: score.key,
            name: score.name.clone(),
            short_name: catalog::dimension(score.key).short_name,
            raw_score: score.raw_score,
            max_score: score.max_score,
            percentage: score.percentage,
            level: LevelView::from(score.level),
        })
        .collect();

    AssessmentReport {
        result_id: result.id.clone(),
        timestamp: result.timestamp,
        overall_score: result.overall_score,
        overall_level: LevelView::from(result.overall_level),
        overall_summary: summarize(result.overall_level),
        dimensions,
        recommendations: generate(&result.dimension_scores),
    }
}
