use std::fs;
use std::path::Path;
use std::sync::Arc;

use clap::ValueEnum;
use mindscope::assessment::{catalog, AnswerSet, AssessmentService, FileBackend, HistoryStore};
use mindscope::config::StorageConfig;
use mindscope::error::{AnswerInputError, AppError};

pub(crate) type FileService = AssessmentService<HistoryStore<FileBackend>>;

pub(crate) fn build_service(storage: &StorageConfig) -> FileService {
    AssessmentService::new(Arc::new(storage.history_store()))
}

/// Merges an optional answers file with `ID=VALUE` pairs; pairs win on conflict.
pub(crate) fn load_answers(file: Option<&Path>, pairs: &[String]) -> Result<AnswerSet, AppError> {
    let mut answers = match file {
        Some(path) => parse_answers_json(&fs::read_to_string(path)?)?,
        None => AnswerSet::new(),
    };

    for raw in pairs {
        let (id, value) = parse_pair(raw)?;
        answers.insert(id, value);
    }

    Ok(answers)
}

pub(crate) fn parse_answers_json(raw: &str) -> Result<AnswerSet, AnswerInputError> {
    serde_json::from_str(raw).map_err(AnswerInputError::Malformed)
}

/// Parses `ID=VALUE`. Values pass through unchecked; ids must fit a question id, so negative
/// ids are rejected here rather than stored.
pub(crate) fn parse_pair(raw: &str) -> Result<(u32, i32), AnswerInputError> {
    let invalid = || AnswerInputError::InvalidPair(raw.to_string());

    let (id, value) = raw.split_once('=').ok_or_else(invalid)?;
    let id = id.trim().parse::<u32>().map_err(|_| invalid())?;
    let value = value.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok((id, value))
}

/// Canned respondents for walkthroughs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub(crate) enum DemoProfile {
    Thriving,
    #[default]
    Steady,
    Struggling,
}

impl DemoProfile {
    // Healthy-direction answer per dimension, in catalog order.
    const fn healthy_values(self) -> [i32; 6] {
        match self {
            Self::Thriving => [5, 5, 4, 5, 5, 4],
            Self::Steady => [4, 4, 4, 3, 4, 3],
            Self::Struggling => [2, 1, 3, 2, 1, 2],
        }
    }

    pub(crate) fn answers(self) -> AnswerSet {
        let healthy = self.healthy_values();
        catalog::questions()
            .iter()
            .map(|question| {
                let value = healthy[question.dimension.index()];
                let raw = if question.reversed {
                    catalog::SCALE_MIN + catalog::SCALE_MAX - value
                } else {
                    value
                };
                (question.id, raw)
            })
            .collect()
    }
}
