use tracing::debug;

use super::super::catalog::{self, SCALE_MAX, SCALE_MIN};
use super::super::domain::{AnswerSet, Dimension, Question};
use super::level::classify_level;
use super::DimensionScore;

/// Integer division rounding halves upward, so 2.5 becomes 3 on every platform.
pub(crate) fn round_half_up(numerator: u64, denominator: u64) -> u64 {
    if denominator == 0 {
        return 0;
    }
    (2 * numerator + denominator) / (2 * denominator)
}

/// Points an answer contributes after polarity is applied, or `None` when the value is
/// off the scale and must be ignored.
pub(crate) fn item_contribution(question: &Question, answer: i32) -> Option<u32> {
    if !catalog::is_on_scale(answer) {
        return None;
    }

    let points = if question.reversed {
        SCALE_MIN + SCALE_MAX - answer
    } else {
        answer
    };

    u32::try_from(points).ok()
}

pub(crate) fn percentage_of(raw_score: u32, max_score: u32) -> u8 {
    let pct = round_half_up(u64::from(raw_score) * 100, u64::from(max_score));
    pct.min(100) as u8
}

pub(crate) fn score_dimension(dimension: &Dimension, answers: &AnswerSet) -> DimensionScore {
    let mut raw_score: u32 = 0;
    let mut question_count: u32 = 0;

    for question in catalog::questions_for(dimension.key) {
        question_count += 1;

        let Some(answer) = answers.get(question.id) else {
            continue;
        };

        match item_contribution(question, answer) {
            Some(points) => raw_score += points,
            None => debug!(
                question_id = question.id,
                answer, "ignoring answer outside the 1-5 scale"
            ),
        }
    }

    // Unanswered items still count toward the maximum.
    let max_score = question_count * SCALE_MAX as u32;
    let percentage = percentage_of(raw_score, max_score);

    DimensionScore {
        key: dimension.key,
        name: dimension.name.to_string(),
        raw_score,
        max_score,
        percentage,
        level: classify_level(percentage),
    }
}
