use std::collections::BTreeSet;

use crate::assessment::catalog::{self, QUESTIONS_PER_DIMENSION};
use crate::assessment::domain::{AnswerSet, DimensionKey};

#[test]
fn catalog_has_six_dimensions_in_display_order() {
    let keys: Vec<DimensionKey> = catalog::dimensions().iter().map(|d| d.key).collect();
    assert_eq!(keys, DimensionKey::ordered().to_vec());

    for key in DimensionKey::ordered() {
        assert_eq!(catalog::dimension(key).key, key);
    }
}

#[test]
fn each_dimension_owns_five_questions() {
    for key in DimensionKey::ordered() {
        assert_eq!(
            catalog::questions_for(key).count(),
            QUESTIONS_PER_DIMENSION,
            "{key} should own {QUESTIONS_PER_DIMENSION} questions"
        );
    }
}

#[test]
fn question_ids_are_unique_and_sequential() {
    let ids: Vec<u32> = catalog::questions().iter().map(|q| q.id).collect();
    let unique: BTreeSet<u32> = ids.iter().copied().collect();

    assert_eq!(ids, (1..=30).collect::<Vec<u32>>());
    assert_eq!(unique.len(), 30);
    assert_eq!(catalog::question(13).map(|q| q.dimension), Some(DimensionKey::Interpersonal));
    assert!(catalog::question(31).is_none());
}

#[test]
fn first_emotion_item_is_reverse_scored() {
    let question = catalog::question(1).expect("question 1 exists");
    assert_eq!(question.dimension, DimensionKey::Emotion);
    assert!(question.reversed);
    assert!(!catalog::question(2).expect("question 2 exists").reversed);
}

#[test]
fn answer_scale_runs_never_to_always() {
    let scale = catalog::answer_scale();
    assert_eq!(scale.len(), 5);
    assert_eq!(scale.first().map(|o| (o.value, o.label)), Some((1, "Never")));
    assert_eq!(scale.last().map(|o| (o.value, o.label)), Some((5, "Always")));
    assert_eq!(catalog::scale_label(3), Some("Sometimes"));
    assert_eq!(catalog::scale_label(6), None);
}

#[test]
fn dimension_keys_parse_from_wire_form() {
    assert_eq!("selfEsteem".parse::<DimensionKey>(), Ok(DimensionKey::SelfEsteem));
    assert_eq!("physicalhealth".parse::<DimensionKey>(), Ok(DimensionKey::PhysicalHealth));
    assert!("mood".parse::<DimensionKey>().is_err());
}

#[test]
fn completion_counts_only_on_scale_catalog_answers() {
    let mut answers = AnswerSet::new();
    answers.insert(1, 3);
    answers.insert(2, 9);
    answers.insert(77, 4);

    let completion = answers.completion();
    assert_eq!(completion.answered, 1);
    assert_eq!(completion.total, 30);
    assert_eq!(completion.missing.len(), 29);
    assert!(completion.missing.contains(&2));
    assert!(!completion.is_complete());
}
