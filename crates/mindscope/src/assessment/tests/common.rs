use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::assessment::catalog;
use crate::assessment::domain::{AnswerSet, DimensionKey, ScoreLevel};
use crate::assessment::history::{
    BackendError, HistoryError, HistoryStore, MemoryBackend, ResultStore,
};
use crate::assessment::result::{AssessmentResult, Clock, IdGenerator, ResultId};
use crate::assessment::scoring::{classify_level, DimensionScore, ScoringEngine};
use crate::assessment::service::AssessmentService;

pub(super) const FIXED_TIMESTAMP: i64 = 1_760_000_000_000;

#[derive(Debug, Clone, Copy)]
pub(super) struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub(super) struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> ResultId {
        let id = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ResultId(format!("result-{id:06}"))
    }
}

pub(super) fn engine() -> ScoringEngine<FixedClock, SequentialIds> {
    ScoringEngine::new(FixedClock(FIXED_TIMESTAMP), SequentialIds::default())
}

/// Every item answered at its healthiest value once polarity is applied.
pub(super) fn best_answers() -> AnswerSet {
    catalog::questions()
        .iter()
        .map(|question| (question.id, if question.reversed { 1 } else { 5 }))
        .collect()
}

/// Every item answered at its least healthy value.
pub(super) fn worst_answers() -> AnswerSet {
    catalog::questions()
        .iter()
        .map(|question| (question.id, if question.reversed { 5 } else { 1 }))
        .collect()
}

pub(super) fn dimension_score(key: DimensionKey, percentage: u8) -> DimensionScore {
    DimensionScore {
        key,
        name: catalog::dimension(key).name.to_string(),
        raw_score: u32::from(percentage) / 4,
        max_score: 25,
        percentage,
        level: classify_level(percentage),
    }
}

pub(super) fn scores_from(percentages: [u8; 6]) -> Vec<DimensionScore> {
    DimensionKey::ordered()
        .into_iter()
        .zip(percentages)
        .map(|(key, pct)| dimension_score(key, pct))
        .collect()
}

pub(super) fn stored_result(label: &str) -> AssessmentResult {
    AssessmentResult {
        id: ResultId(label.to_string()),
        timestamp: FIXED_TIMESTAMP,
        answers: AnswerSet::new(),
        dimension_scores: scores_from([0; 6]),
        overall_score: 0,
        overall_level: ScoreLevel::Critical,
    }
}

pub(super) fn memory_store() -> Arc<HistoryStore<MemoryBackend>> {
    Arc::new(HistoryStore::new(MemoryBackend::default()))
}

pub(super) type TestService =
    AssessmentService<HistoryStore<MemoryBackend>, FixedClock, SequentialIds>;

pub(super) fn build_service() -> (TestService, Arc<HistoryStore<MemoryBackend>>) {
    let store = memory_store();
    let service = AssessmentService::with_engine(store.clone(), engine());
    (service, store)
}

/// Store whose every operation fails, standing in for unavailable local storage.
pub(super) struct UnavailableStore;

impl UnavailableStore {
    fn error() -> HistoryError {
        HistoryError::Backend(BackendError::Unavailable("quota exceeded".to_string()))
    }
}

impl ResultStore for UnavailableStore {
    fn append(&self, _result: AssessmentResult) -> Result<(), HistoryError> {
        Err(Self::error())
    }

    fn latest(&self) -> Result<Option<AssessmentResult>, HistoryError> {
        Err(Self::error())
    }

    fn history(&self) -> Result<Vec<AssessmentResult>, HistoryError> {
        Err(Self::error())
    }

    fn clear(&self) -> Result<(), HistoryError> {
        Err(Self::error())
    }
}
