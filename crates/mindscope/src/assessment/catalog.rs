//! The reference instrument: six dimensions, thirty items, one five-point scale.
//!
//! Everything here is immutable static data. Changing an entry changes the instrument,
//! not the scoring algorithm.

use super::domain::{AnswerOption, Dimension, DimensionKey, Question};

/// Items per dimension in the reference instrument.
pub const QUESTIONS_PER_DIMENSION: usize = 5;

pub const SCALE_MIN: i32 = 1;
pub const SCALE_MAX: i32 = 5;

static ANSWER_SCALE: [AnswerOption; 5] = [
    AnswerOption {
        value: 1,
        label: "Never",
    },
    AnswerOption {
        value: 2,
        label: "Rarely",
    },
    AnswerOption {
        value: 3,
        label: "Sometimes",
    },
    AnswerOption {
        value: 4,
        label: "Often",
    },
    AnswerOption {
        value: 5,
        label: "Always",
    },
];

static DIMENSIONS: [Dimension; DimensionKey::COUNT] = [
    Dimension {
        key: DimensionKey::Emotion,
        name: "Emotional State",
        short_name: "Emotion",
        description: "Your levels of anxiety, low mood and stress, and how your feelings shift from day to day.",
        color: "hsl(173, 58%, 39%)",
    },
    Dimension {
        key: DimensionKey::SelfEsteem,
        name: "Self-Perception & Self-Esteem",
        short_name: "Self-esteem",
        description: "Your sense of self-worth, confidence and self-acceptance.",
        color: "hsl(263, 70%, 58%)",
    },
    Dimension {
        key: DimensionKey::Interpersonal,
        name: "Relationships",
        short_name: "Relationships",
        description: "How at ease you are socially, how much you trust others, and the quality of your relationships.",
        color: "hsl(36, 90%, 55%)",
    },
    Dimension {
        key: DimensionKey::LifeSatisfaction,
        name: "Life Satisfaction & Wellbeing",
        short_name: "Wellbeing",
        description: "Your overall satisfaction with life and your everyday sense of happiness.",
        color: "hsl(350, 70%, 60%)",
    },
    Dimension {
        key: DimensionKey::Resilience,
        name: "Resilience & Coping",
        short_name: "Resilience",
        description: "How you bounce back from difficulty and the strategies you use to cope.",
        color: "hsl(210, 75%, 55%)",
    },
    Dimension {
        key: DimensionKey::PhysicalHealth,
        name: "Sleep & Physical Wellbeing",
        short_name: "Body",
        description: "The quality of your sleep and your physical and mental energy.",
        color: "hsl(155, 60%, 45%)",
    },
];

static QUESTIONS: [Question; DimensionKey::COUNT * QUESTIONS_PER_DIMENSION] = [
    Question {
        id: 1,
        dimension: DimensionKey::Emotion,
        text: "I feel nervous or anxious",
        reversed: true,
    },
    Question {
        id: 2,
        dimension: DimensionKey::Emotion,
        text: "I can stay calm when dealing with everyday matters",
        reversed: false,
    },
    Question {
        id: 3,
        dimension: DimensionKey::Emotion,
        text: "I feel low or down",
        reversed: true,
    },
    Question {
        id: 4,
        dimension: DimensionKey::Emotion,
        text: "I feel I can manage stress effectively",
        reversed: false,
    },
    Question {
        id: 5,
        dimension: DimensionKey::Emotion,
        text: "Small things make me irritable or restless",
        reversed: true,
    },
    Question {
        id: 6,
        dimension: DimensionKey::SelfEsteem,
        text: "I am satisfied with myself",
        reversed: false,
    },
    Question {
        id: 7,
        dimension: DimensionKey::SelfEsteem,
        text: "I feel that I am a person of worth",
        reversed: false,
    },
    Question {
        id: 8,
        dimension: DimensionKey::SelfEsteem,
        text: "I lack confidence in my own abilities",
        reversed: true,
    },
    Question {
        id: 9,
        dimension: DimensionKey::SelfEsteem,
        text: "I can accept my own imperfections",
        reversed: false,
    },
    Question {
        id: 10,
        dimension: DimensionKey::SelfEsteem,
        text: "I often feel that I am not as good as other people",
        reversed: true,
    },
    Question {
        id: 11,
        dimension: DimensionKey::Interpersonal,
        text: "I feel at ease in social situations",
        reversed: false,
    },
    Question {
        id: 12,
        dimension: DimensionKey::Interpersonal,
        text: "I can trust the friends and family around me",
        reversed: false,
    },
    Question {
        id: 13,
        dimension: DimensionKey::Interpersonal,
        text: "I feel lonely when I am with other people",
        reversed: true,
    },
    Question {
        id: 14,
        dimension: DimensionKey::Interpersonal,
        text: "When I run into trouble, I can ask others for help",
        reversed: false,
    },
    Question {
        id: 15,
        dimension: DimensionKey::Interpersonal,
        text: "I feel that other people find it hard to understand me",
        reversed: true,
    },
    Question {
        id: 16,
        dimension: DimensionKey::LifeSatisfaction,
        text: "Overall, I am satisfied with my life right now",
        reversed: false,
    },
    Question {
        id: 17,
        dimension: DimensionKey::LifeSatisfaction,
        text: "I feel my life is full of meaning",
        reversed: false,
    },
    Question {
        id: 18,
        dimension: DimensionKey::LifeSatisfaction,
        text: "I feel hopeful about the future",
        reversed: false,
    },
    Question {
        id: 19,
        dimension: DimensionKey::LifeSatisfaction,
        text: "I rarely feel joy in my daily activities",
        reversed: true,
    },
    Question {
        id: 20,
        dimension: DimensionKey::LifeSatisfaction,
        text: "I feel I am moving in the direction I want to go",
        reversed: false,
    },
    Question {
        id: 21,
        dimension: DimensionKey::Resilience,
        text: "When I suffer a setback, I recover quickly",
        reversed: false,
    },
    Question {
        id: 22,
        dimension: DimensionKey::Resilience,
        text: "When facing difficulties, I tend to avoid them rather than deal with them",
        reversed: true,
    },
    Question {
        id: 23,
        dimension: DimensionKey::Resilience,
        text: "I can learn and grow from failure",
        reversed: false,
    },
    Question {
        id: 24,
        dimension: DimensionKey::Resilience,
        text: "I have clear ways of coping with the stress in my life",
        reversed: false,
    },
    Question {
        id: 25,
        dimension: DimensionKey::Resilience,
        text: "In hard times I easily feel helpless and hopeless",
        reversed: true,
    },
    Question {
        id: 26,
        dimension: DimensionKey::PhysicalHealth,
        text: "I sleep well and wake up feeling refreshed",
        reversed: false,
    },
    Question {
        id: 27,
        dimension: DimensionKey::PhysicalHealth,
        text: "I often feel physically tired or unwell",
        reversed: true,
    },
    Question {
        id: 28,
        dimension: DimensionKey::PhysicalHealth,
        text: "I exercise regularly and keep healthy habits",
        reversed: false,
    },
    Question {
        id: 29,
        dimension: DimensionKey::PhysicalHealth,
        text: "My sleep schedule and daily routine are very irregular",
        reversed: true,
    },
    Question {
        id: 30,
        dimension: DimensionKey::PhysicalHealth,
        text: "I can keep up good physical and mental energy",
        reversed: false,
    },
];

/// Dimensions in catalog order, the order used for display and scoring.
pub fn dimensions() -> &'static [Dimension] {
    &DIMENSIONS
}

/// Questions in progression order.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

pub fn answer_scale() -> &'static [AnswerOption] {
    &ANSWER_SCALE
}

pub fn dimension(key: DimensionKey) -> &'static Dimension {
    &DIMENSIONS[key.index()]
}

pub fn questions_for(key: DimensionKey) -> impl Iterator<Item = &'static Question> {
    QUESTIONS
        .iter()
        .filter(move |question| question.dimension == key)
}

pub fn question(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|question| question.id == id)
}

pub fn is_on_scale(value: i32) -> bool {
    (SCALE_MIN..=SCALE_MAX).contains(&value)
}

pub fn scale_label(value: i32) -> Option<&'static str> {
    ANSWER_SCALE
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
}
