//! Six-dimension wellbeing self-assessment: questionnaire catalog, scoring, guidance and
//! result history.
//!
//! Scoring is a pure function of the answer set. The only inputs that vary between calls
//! with the same answers are the injected clock and id sources used to stamp results.

pub mod catalog;
pub mod domain;
pub mod history;
pub mod report;
pub mod result;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerOption, AnswerSet, Completion, Dimension, DimensionKey, Question, ScoreLevel,
    UnknownDimension,
};
pub use history::{
    BackendError, FileBackend, HistoryError, HistoryStore, KeyValueBackend, MemoryBackend,
    ResultStore, HISTORY_CAPACITY, HISTORY_KEY,
};
pub use report::{generate, summarize, AssessmentReport, Recommendation};
pub use result::{AssessmentResult, Clock, IdGenerator, ResultId, SystemClock, UuidGenerator};
pub use scoring::{
    build_result, classify_level, score_dimensions, score_overall, DimensionScore, OverallScore,
    ScoringEngine,
};
pub use service::{AssessmentService, Submission};
