use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The six constructs measured by the questionnaire, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DimensionKey {
    Emotion,
    SelfEsteem,
    Interpersonal,
    LifeSatisfaction,
    Resilience,
    PhysicalHealth,
}

impl DimensionKey {
    pub const COUNT: usize = 6;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Emotion,
            Self::SelfEsteem,
            Self::Interpersonal,
            Self::LifeSatisfaction,
            Self::Resilience,
            Self::PhysicalHealth,
        ]
    }

    /// Position in catalog order; also the row index of the recommendation table.
    pub const fn index(self) -> usize {
        match self {
            Self::Emotion => 0,
            Self::SelfEsteem => 1,
            Self::Interpersonal => 2,
            Self::LifeSatisfaction => 3,
            Self::Resilience => 4,
            Self::PhysicalHealth => 5,
        }
    }

    /// Stable wire form, identical to the serialized key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Emotion => "emotion",
            Self::SelfEsteem => "selfEsteem",
            Self::Interpersonal => "interpersonal",
            Self::LifeSatisfaction => "lifeSatisfaction",
            Self::Resilience => "resilience",
            Self::PhysicalHealth => "physicalHealth",
        }
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dimension '{0}'")]
pub struct UnknownDimension(pub String);

impl FromStr for DimensionKey {
    type Err = UnknownDimension;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Self::ordered()
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownDimension(raw.to_string()))
    }
}

/// Qualitative band derived from a percentage, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLevel {
    Critical,
    Concern,
    Average,
    Good,
    Excellent,
}

impl ScoreLevel {
    pub const COUNT: usize = 5;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Critical,
            Self::Concern,
            Self::Average,
            Self::Good,
            Self::Excellent,
        ]
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Critical => 0,
            Self::Concern => 1,
            Self::Average => 2,
            Self::Good => 3,
            Self::Excellent => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Concern => "concern",
            Self::Average => "average",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Needs Care",
            Self::Concern => "Needs Attention",
            Self::Average => "Fair",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Presentation token; the engine never interprets it.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critical => "hsl(350, 70%, 60%)",
            Self::Concern => "hsl(25, 85%, 55%)",
            Self::Average => "hsl(36, 90%, 55%)",
            Self::Good => "hsl(173, 58%, 39%)",
            Self::Excellent => "hsl(155, 60%, 45%)",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Critical => "Consider reaching out for help",
            Self::Concern => "Worth keeping an eye on",
            Self::Average => "Room to grow",
            Self::Good => "Doing well",
            Self::Excellent => "Thriving",
        }
    }
}

impl fmt::Display for ScoreLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog entry for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimension {
    pub key: DimensionKey,
    pub name: &'static str,
    pub short_name: &'static str,
    pub description: &'static str,
    pub color: &'static str,
}

/// A single questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u32,
    pub dimension: DimensionKey,
    pub text: &'static str,
    /// Higher raw answers indicate a worse outcome and are inverted before aggregation.
    pub reversed: bool,
}

/// One point on the shared answer scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: i32,
    pub label: &'static str,
}

/// Answers keyed by question id. Partial sets are allowed; ids and values are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<u32, i32>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, returning the value it replaced.
    pub fn insert(&mut self, question_id: u32, value: i32) -> Option<i32> {
        self.0.insert(question_id, value)
    }

    pub fn get(&self, question_id: u32) -> Option<i32> {
        self.0.get(&question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, i32)> + '_ {
        self.0.iter().map(|(id, value)| (*id, *value))
    }

    /// Progress through the catalog; only in-scale answers to known questions count.
    pub fn completion(&self) -> Completion {
        let questions = super::catalog::questions();
        let missing: Vec<u32> = questions
            .iter()
            .filter(|question| {
                !self
                    .get(question.id)
                    .map(super::catalog::is_on_scale)
                    .unwrap_or(false)
            })
            .map(|question| question.id)
            .collect();

        Completion {
            answered: questions.len() - missing.len(),
            total: questions.len(),
            missing,
        }
    }
}

impl From<BTreeMap<u32, i32>> for AnswerSet {
    fn from(value: BTreeMap<u32, i32>) -> Self {
        Self(value)
    }
}

impl FromIterator<(u32, i32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (u32, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// How much of the questionnaire an answer set covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub answered: usize,
    pub total: usize,
    pub missing: Vec<u32>,
}

impl Completion {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}
