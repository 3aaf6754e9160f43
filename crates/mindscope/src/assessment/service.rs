use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use super::domain::AnswerSet;
use super::history::ResultStore;
use super::report::AssessmentReport;
use super::result::{AssessmentResult, Clock, IdGenerator, SystemClock, UuidGenerator};
use super::scoring::ScoringEngine;

/// Outcome of scoring one answer set.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub result: AssessmentResult,
    pub report: AssessmentReport,
    /// False when the history store rejected the write; the scores are still valid.
    pub saved: bool,
}

/// Service composing the scoring engine with the result history.
///
/// Persistence is best effort: store failures are logged and reported through flags or
/// empty reads, never as errors that would hide a computed report.
pub struct AssessmentService<S, C = SystemClock, G = UuidGenerator> {
    store: Arc<S>,
    engine: Arc<ScoringEngine<C, G>>,
}

impl<S> AssessmentService<S>
where
    S: ResultStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self::with_engine(store, ScoringEngine::system())
    }
}

impl<S, C, G> AssessmentService<S, C, G>
where
    S: ResultStore + 'static,
    C: Clock,
    G: IdGenerator,
{
    pub fn with_engine(store: Arc<S>, engine: ScoringEngine<C, G>) -> Self {
        Self {
            store,
            engine: Arc::new(engine),
        }
    }

    /// Score the answers and append the result to the history.
    pub fn submit(&self, answers: AnswerSet) -> Submission {
        let submission = self.preview(answers);

        let saved = match self.store.append(submission.result.clone()) {
            Ok(()) => {
                info!(
                    result_id = %submission.result.id,
                    overall_score = submission.result.overall_score,
                    overall_level = %submission.result.overall_level,
                    "assessment result saved"
                );
                true
            }
            Err(err) => {
                warn!(
                    result_id = %submission.result.id,
                    error = %err,
                    "assessment result could not be saved"
                );
                false
            }
        };

        Submission { saved, ..submission }
    }

    /// Score the answers without touching the history.
    pub fn preview(&self, answers: AnswerSet) -> Submission {
        let completion = answers.completion();
        if !completion.is_complete() {
            info!(
                answered = completion.answered,
                total = completion.total,
                "scoring an incomplete answer set"
            );
        }

        let result = self.engine.score(answers);
        let report = AssessmentReport::from_result(&result);

        Submission {
            result,
            report,
            saved: false,
        }
    }

    /// Most recent stored result, if any can be read.
    pub fn latest(&self) -> Option<AssessmentResult> {
        match self.store.latest() {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, "assessment history unavailable");
                None
            }
        }
    }

    pub fn history(&self) -> Vec<AssessmentResult> {
        match self.store.history() {
            Ok(history) => history,
            Err(err) => {
                warn!(error = %err, "assessment history unavailable");
                Vec::new()
            }
        }
    }

    /// Remove every stored result, returning whether the store accepted the request.
    pub fn clear(&self) -> bool {
        match self.store.clear() {
            Ok(()) => {
                info!("assessment history cleared");
                true
            }
            Err(err) => {
                warn!(error = %err, "assessment history could not be cleared");
                false
            }
        }
    }
}
