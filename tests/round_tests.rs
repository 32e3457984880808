//! Round selection tests.
//!
//! These tests verify the exhaust-once contract and category selection:
//! - Every started question is handed out exactly once before exhaustion
//! - Random category picks are distinct members of the input, clamped
//! - Category counts group by id

use std::collections::HashSet;

use blame_game::core::GameRng;
use blame_game::questions::{select_random_categories, Question, QuestionPool};
use blame_game::rounds::{NextRound, RoundSequencer, SequencerState};
use proptest::prelude::*;

fn drain(seq: &mut RoundSequencer) -> Vec<String> {
    let mut texts = Vec::new();
    while let NextRound::Question(q) = seq.next() {
        texts.push(q.text);
    }
    texts
}

proptest! {
    #[test]
    fn every_question_exactly_once(
        texts in prop::collection::hash_set("[a-z ]{1,30}", 1..60),
        seed in any::<u64>(),
    ) {
        let questions: Vec<Question> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Question::new(t.clone(), format!("c{}", i % 4), "", ""))
            .collect();

        let mut seq = RoundSequencer::new();
        seq.start(questions, &mut GameRng::new(seed));

        let played = drain(&mut seq);
        prop_assert_eq!(played.len(), texts.len());
        let played_set: HashSet<String> = played.into_iter().collect();
        prop_assert_eq!(played_set, texts);
        prop_assert_eq!(seq.state(), SequencerState::Exhausted);
    }

    #[test]
    fn random_categories_are_distinct_and_clamped(
        ids in prop::collection::vec("[a-e]", 0..20),
        count in 0usize..8,
        seed in any::<u64>(),
    ) {
        let unique: HashSet<&String> = ids.iter().collect();
        let picked = select_random_categories(&ids, count, &mut GameRng::new(seed));

        prop_assert_eq!(picked.len(), count.min(unique.len()));
        let picked_set: HashSet<&String> = picked.iter().collect();
        prop_assert_eq!(picked_set.len(), picked.len());
        prop_assert!(picked.iter().all(|p| unique.contains(p)));
    }
}

/// Three questions come back as a permutation, then exhaustion.
#[test]
fn test_three_question_example() {
    let questions = vec![
        Question::new("q1", "a", "A", ""),
        Question::new("q2", "a", "A", ""),
        Question::new("q3", "b", "B", ""),
    ];
    let mut seq = RoundSequencer::new();
    seq.start(questions, &mut GameRng::from_entropy());

    let mut seen = HashSet::new();
    for _ in 0..3 {
        let q = seq.next().into_question().expect("question expected");
        assert!(seen.insert(q.text));
    }
    assert_eq!(seq.next(), NextRound::Exhausted);
    assert_eq!(seen, ["q1", "q2", "q3"].iter().map(|s| s.to_string()).collect());
}

/// Pool of five in categories A, A, B, B, C.
#[test]
fn test_category_counts_example() {
    let mut pool = QuestionPool::new();
    pool.load(vec![
        Question::new("1", "A", "Alpha", "🅰️"),
        Question::new("2", "A", "Alpha", "🅰️"),
        Question::new("3", "B", "Beta", "🅱️"),
        Question::new("4", "B", "Beta", "🅱️"),
        Question::new("5", "C", "", ""),
    ]);

    let counts: HashSet<(String, usize)> = pool
        .categories_with_counts()
        .into_iter()
        .map(|c| (c.id, c.question_count))
        .collect();

    let expected: HashSet<(String, usize)> = [("A", 2), ("B", 2), ("C", 1)]
        .iter()
        .map(|(id, n)| (id.to_string(), *n))
        .collect();
    assert_eq!(counts, expected);
}

/// Played texts filter the pool; with none played the full pool comes back.
#[test]
fn test_available_questions_follow_sequencer() {
    let mut pool = QuestionPool::new();
    pool.load((0..6).map(|i| Question::new(format!("q{i}"), "c", "C", "")).collect());

    let mut seq = RoundSequencer::new();
    seq.start(pool.questions().to_vec(), &mut GameRng::new(1));
    seq.next();
    seq.next();

    let played = seq.played().iter().cloned().collect();
    let available = pool.available_questions(&played);

    assert_eq!(available.len(), 4);
    assert!(available.iter().all(|q| !seq.has_played(&q.text)));
}
