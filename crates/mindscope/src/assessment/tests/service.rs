use std::sync::Arc;

use super::common::*;
use crate::assessment::domain::{AnswerSet, ScoreLevel};
use crate::assessment::history::ResultStore;
use crate::assessment::service::AssessmentService;

#[test]
fn submit_scores_and_saves() {
    let (service, store) = build_service();

    let submission = service.submit(best_answers());

    assert!(submission.saved);
    assert_eq!(submission.result.overall_score, 100);
    assert_eq!(submission.report.result_id, submission.result.id);
    assert_eq!(store.latest().expect("latest"), Some(submission.result.clone()));
    assert_eq!(service.latest(), Some(submission.result));
}

#[test]
fn each_submission_is_a_new_history_entry() {
    let (service, _store) = build_service();

    let first = service.submit(best_answers());
    let second = service.submit(best_answers());

    assert_ne!(first.result.id, second.result.id);
    let history = service.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.result.id);
}

#[test]
fn unavailable_storage_still_returns_the_report() {
    let service = AssessmentService::with_engine(Arc::new(UnavailableStore), engine());

    let submission = service.submit(worst_answers());

    assert!(!submission.saved);
    assert_eq!(submission.result.overall_level, ScoreLevel::Critical);
    assert_eq!(submission.report.recommendations.len(), 6);
    assert!(service.latest().is_none());
    assert!(service.history().is_empty());
    assert!(!service.clear());
}

#[test]
fn preview_does_not_persist() {
    let (service, store) = build_service();

    let submission = service.preview(AnswerSet::new());

    assert!(!submission.saved);
    assert_eq!(submission.result.overall_score, 0);
    assert!(store.history().expect("history").is_empty());
}

#[test]
fn clear_empties_history() {
    let (service, _store) = build_service();
    service.submit(best_answers());

    assert!(service.clear());
    assert!(service.latest().is_none());
}
