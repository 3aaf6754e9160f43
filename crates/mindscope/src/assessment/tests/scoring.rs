use super::common::*;
use crate::assessment::domain::{AnswerSet, DimensionKey, ScoreLevel};
use crate::assessment::result::AssessmentResult;
use crate::assessment::scoring::{
    build_result, classify_level, level_floor, score_dimensions, score_overall,
};

fn emotion(answers: &AnswerSet) -> (u32, u8) {
    let scores = score_dimensions(answers);
    let emotion = scores
        .iter()
        .find(|score| score.key == DimensionKey::Emotion)
        .expect("emotion scored");
    (emotion.raw_score, emotion.percentage)
}

#[test]
fn best_answers_score_one_hundred_everywhere() {
    let scores = score_dimensions(&best_answers());

    assert_eq!(scores.len(), 6);
    for score in &scores {
        assert_eq!(score.raw_score, 25);
        assert_eq!(score.max_score, 25);
        assert_eq!(score.percentage, 100);
        assert_eq!(score.level, ScoreLevel::Excellent);
    }

    let overall = score_overall(&scores);
    assert_eq!(overall.score, 100);
    assert_eq!(overall.level, ScoreLevel::Excellent);
}

#[test]
fn worst_answers_score_the_floor_of_the_scale() {
    let scores = score_dimensions(&worst_answers());

    for score in &scores {
        assert_eq!(score.raw_score, 5);
        assert_eq!(score.percentage, 20);
        assert_eq!(score.level, ScoreLevel::Critical);
    }
    assert_eq!(score_overall(&scores).score, 20);
}

#[test]
fn empty_answers_score_zero_and_critical() {
    let scores = score_dimensions(&AnswerSet::new());

    let keys: Vec<DimensionKey> = scores.iter().map(|s| s.key).collect();
    assert_eq!(keys, DimensionKey::ordered().to_vec());
    for score in &scores {
        assert_eq!(score.raw_score, 0);
        assert_eq!(score.max_score, 25);
        assert_eq!(score.percentage, 0);
        assert_eq!(score.level, ScoreLevel::Critical);
    }

    let overall = score_overall(&scores);
    assert_eq!(overall.score, 0);
    assert_eq!(overall.level, ScoreLevel::Critical);
}

#[test]
fn reversed_item_inverts_the_raw_answer() {
    let low: AnswerSet = [(1, 1)].into_iter().collect();
    let high: AnswerSet = [(1, 5)].into_iter().collect();

    assert_eq!(emotion(&low).0, 5);
    assert_eq!(emotion(&high).0, 1);
}

#[test]
fn mixed_answers_follow_polarity() {
    // Contributions: 6-2, 4, 6-2, 3, 6-3 => 4 + 4 + 4 + 3 + 3 = 18 of 25.
    let answers: AnswerSet = [(1, 2), (2, 4), (3, 2), (4, 3), (5, 3)]
        .into_iter()
        .collect();

    assert_eq!(emotion(&answers), (18, 72));
    let scores = score_dimensions(&answers);
    assert_eq!(scores[0].level, ScoreLevel::Good);
}

#[test]
fn unanswered_items_still_count_toward_the_maximum() {
    let answers: AnswerSet = [(2, 5), (4, 5)].into_iter().collect();
    let scores = score_dimensions(&answers);

    assert_eq!(scores[0].raw_score, 10);
    assert_eq!(scores[0].max_score, 25);
    assert_eq!(scores[0].percentage, 40);
    assert_eq!(scores[0].level, ScoreLevel::Concern);
}

#[test]
fn partial_submission_depresses_the_overall_score() {
    let answers: AnswerSet = best_answers()
        .iter()
        .filter(|(id, _)| *id <= 5)
        .collect();
    let scores = score_dimensions(&answers);

    assert_eq!(scores[0].percentage, 100);
    assert!(scores[1..].iter().all(|score| score.percentage == 0));
    // 100 / 6 = 16.67
    assert_eq!(score_overall(&scores).score, 17);
}

#[test]
fn unknown_and_off_scale_answers_are_ignored_but_kept() {
    let answers: AnswerSet = [(1, 1), (2, 9), (4, 0), (5, -3), (99, 5)]
        .into_iter()
        .collect();

    assert_eq!(emotion(&answers).0, 5);

    let result = build_result(answers, &FixedClock(FIXED_TIMESTAMP), &SequentialIds::default());
    assert_eq!(result.answers.get(99), Some(5));
    assert_eq!(result.answers.get(2), Some(9));
    assert_eq!(result.answers.len(), 5);
}

#[test]
fn classify_level_boundaries() {
    let cases = [
        (100, ScoreLevel::Excellent),
        (85, ScoreLevel::Excellent),
        (84, ScoreLevel::Good),
        (70, ScoreLevel::Good),
        (69, ScoreLevel::Average),
        (55, ScoreLevel::Average),
        (54, ScoreLevel::Concern),
        (40, ScoreLevel::Concern),
        (39, ScoreLevel::Critical),
        (0, ScoreLevel::Critical),
    ];

    for (percentage, expected) in cases {
        assert_eq!(classify_level(percentage), expected, "{percentage}%");
    }
    assert_eq!(level_floor(ScoreLevel::Good), 70);
    assert_eq!(level_floor(ScoreLevel::Critical), 0);
}

#[test]
fn overall_score_rounds_halves_up() {
    // 3 / 6 = 0.5 and 15 / 6 = 2.5
    assert_eq!(score_overall(&scores_from([3, 0, 0, 0, 0, 0])).score, 1);
    assert_eq!(score_overall(&scores_from([15, 0, 0, 0, 0, 0])).score, 3);
    // 14 / 6 = 2.33
    assert_eq!(score_overall(&scores_from([14, 0, 0, 0, 0, 0])).score, 2);
    // 507 / 6 = 84.5 crosses into excellent
    let overall = score_overall(&scores_from([85, 85, 85, 84, 84, 84]));
    assert_eq!(overall.score, 85);
    assert_eq!(overall.level, ScoreLevel::Excellent);
}

#[test]
fn overall_of_no_dimensions_is_zero() {
    let overall = score_overall(&[]);
    assert_eq!(overall.score, 0);
    assert_eq!(overall.level, ScoreLevel::Critical);
}

#[test]
fn overall_level_uses_the_shared_thresholds() {
    let overall = score_overall(&scores_from([30, 90, 60, 60, 60, 95]));
    // 395 / 6 = 65.83
    assert_eq!(overall.score, 66);
    assert_eq!(overall.level, classify_level(66));
    assert_eq!(overall.level, ScoreLevel::Average);
}

#[test]
fn build_result_stamps_fresh_identity_each_call() {
    let engine = engine();
    let first = engine.score(best_answers());
    let second = engine.score(best_answers());

    assert_eq!(first.id.0, "result-000001");
    assert_eq!(second.id.0, "result-000002");
    assert_eq!(first.timestamp, FIXED_TIMESTAMP);
    assert_eq!(first.dimension_scores, second.dimension_scores);
    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(first.answers, best_answers());
}

#[test]
fn result_round_trips_through_json() {
    let result = engine().score(best_answers());

    let encoded = serde_json::to_string(&result).expect("serialize");
    let decoded: AssessmentResult = serde_json::from_str(&encoded).expect("deserialize");
    assert_eq!(decoded, result);

    let value: serde_json::Value = serde_json::from_str(&encoded).expect("json value");
    assert_eq!(value["id"], "result-000001");
    assert_eq!(value["timestamp"], FIXED_TIMESTAMP);
    assert_eq!(value["answers"]["1"], 1);
    assert_eq!(value["overallScore"], 100);
    assert_eq!(value["overallLevel"], "excellent");
    assert_eq!(value["dimensionScores"][1]["key"], "selfEsteem");
    assert_eq!(value["dimensionScores"][1]["rawScore"], 25);
    assert_eq!(value["dimensionScores"][1]["maxScore"], 25);
}

#[test]
fn recorded_at_converts_epoch_millis() {
    let result = engine().score(AnswerSet::new());
    let recorded = result.recorded_at().expect("valid timestamp");
    assert_eq!(recorded.timestamp_millis(), FIXED_TIMESTAMP);
}
