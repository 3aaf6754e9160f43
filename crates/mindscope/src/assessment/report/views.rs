use serde::Serialize;

use super::super::domain::{DimensionKey, ScoreLevel};
use super::super::result::{AssessmentResult, ResultId};
use super::recommendations::Recommendation;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelView {
    pub level: ScoreLevel,
    pub label: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

impl From<ScoreLevel> for LevelView {
    fn from(level: ScoreLevel) -> Self {
        Self {
            level,
            label: level.label(),
            color: level.color(),
            description: level.description(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionView {
    pub key: DimensionKey,
    pub name: String,
    pub short_name: &'static str,
    pub raw_score: u32,
    pub max_score: u32,
    pub percentage: u8,
    pub level: LevelView,
}

/// Everything the presentation layer needs to render one result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub result_id: ResultId,
    pub timestamp: i64,
    pub overall_score: u8,
    pub overall_level: LevelView,
    pub overall_summary: &'static str,
    pub dimensions: Vec<DimensionView>,
    /// Worst dimension first.
    pub recommendations: Vec<Recommendation>,
}

impl AssessmentReport {
    pub fn from_result(result: &AssessmentResult) -> Self {
        super::build_report(result)
    }

    /// The leading `count` recommendations, i.e. the weakest dimensions.
    pub fn focus_areas(&self, count: usize) -> &[Recommendation] {
        let end = count.min(self.recommendations.len());
        &self.recommendations[..end]
    }
}
