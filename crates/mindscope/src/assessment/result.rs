use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::domain::{AnswerSet, ScoreLevel};
use super::scoring::DimensionScore;

/// Identifier wrapper for persisted results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultId(pub String);

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Output of one completed scoring pass. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub id: ResultId,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
    pub answers: AnswerSet,
    pub dimension_scores: Vec<DimensionScore>,
    pub overall_score: u8,
    pub overall_level: ScoreLevel,
}

impl AssessmentResult {
    pub fn recorded_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::from_timestamp_millis(self.timestamp)
    }
}

/// Time source used when stamping results.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Source of fresh result identifiers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> ResultId;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> ResultId {
        ResultId(Uuid::new_v4().to_string())
    }
}
