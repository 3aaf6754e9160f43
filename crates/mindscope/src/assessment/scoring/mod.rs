mod level;
mod rules;

pub use level::{classify_level, level_floor};

use serde::{Deserialize, Serialize};

use super::catalog;
use super::domain::{AnswerSet, DimensionKey, ScoreLevel};
use super::result::{AssessmentResult, Clock, IdGenerator, SystemClock, UuidGenerator};
use rules::{round_half_up, score_dimension};

/// Score for a single dimension, normalized to a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub key: DimensionKey,
    pub name: String,
    pub raw_score: u32,
    pub max_score: u32,
    pub percentage: u8,
    pub level: ScoreLevel,
}

/// Unweighted overall score and its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallScore {
    pub score: u8,
    pub level: ScoreLevel,
}

/// Scores every dimension in catalog order.
///
/// Always yields one entry per dimension. A dimension with no usable answers scores
/// 0% and lands in `Critical`; that is a result, not an error.
pub fn score_dimensions(answers: &AnswerSet) -> Vec<DimensionScore> {
    catalog::dimensions()
        .iter()
        .map(|dimension| score_dimension(dimension, answers))
        .collect()
}

/// Mean of the dimension percentages, rounded half-up, then classified.
pub fn score_overall(dimension_scores: &[DimensionScore]) -> OverallScore {
    let total: u64 = dimension_scores
        .iter()
        .map(|score| u64::from(score.percentage))
        .sum();
    let score = round_half_up(total, dimension_scores.len() as u64).min(100) as u8;

    OverallScore {
        score,
        level: classify_level(score),
    }
}

/// Scores an answer set into a fresh result record.
///
/// Scores depend only on `answers`; the id and timestamp come from the injected sources
/// so every call models a new submission.
pub fn build_result<C, G>(answers: AnswerSet, clock: &C, ids: &G) -> AssessmentResult
where
    C: Clock + ?Sized,
    G: IdGenerator + ?Sized,
{
    let dimension_scores = score_dimensions(&answers);
    let overall = score_overall(&dimension_scores);

    AssessmentResult {
        id: ids.next_id(),
        timestamp: clock.now_millis(),
        answers,
        dimension_scores,
        overall_score: overall.score,
        overall_level: overall.level,
    }
}

/// Stateless scorer bundling the clock and id sources used to stamp results.
pub struct ScoringEngine<C = SystemClock, G = UuidGenerator> {
    clock: C,
    ids: G,
}

impl ScoringEngine {
    pub fn system() -> Self {
        Self::new(SystemClock, UuidGenerator)
    }
}

impl<C, G> ScoringEngine<C, G>
where
    C: Clock,
    G: IdGenerator,
{
    pub fn new(clock: C, ids: G) -> Self {
        Self { clock, ids }
    }

    pub fn score(&self, answers: AnswerSet) -> AssessmentResult {
        build_result(answers, &self.clock, &self.ids)
    }
}
