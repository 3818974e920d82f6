//! Property-based tests for the scoring engine
//!
//! These verify invariants that should hold for all inputs:
//! - Every answer contribution stays within [0, weight]
//! - Scoring is deterministic
//! - Adding a positively-scored answer never lowers the overall score
//! - Compliance summaries are idempotent and keep their fixed order

use proptest::prelude::*;
use riskmap::catalog::builtin_catalog;
use riskmap::core::{Answer, AnswerValue, Framework, QuestionKind, ScoringDirection};
use riskmap::scoring::{compliance_scores, overall_score, score_answer};

/// Any value a UI could hand the engine, matched to the question or not.
fn any_answer_value() -> impl Strategy<Value = AnswerValue> {
    prop_oneof![
        any::<bool>().prop_map(AnswerValue::Bool),
        (0u8..=10).prop_map(AnswerValue::Scale),
        "[A-Za-z ]{0,20}".prop_map(AnswerValue::Choice),
    ]
}

/// An answer aimed at a random catalog question, with a value that may
/// or may not fit its kind.
fn any_catalog_answer() -> impl Strategy<Value = Answer> {
    let len = builtin_catalog().len();
    (0..len, any_answer_value()).prop_map(|(index, value)| {
        let question = &builtin_catalog().questions()[index];
        Answer::new(question.id.clone(), value)
    })
}

/// The best-scoring value for a catalog question.
fn best_value_for(index: usize) -> AnswerValue {
    let question = &builtin_catalog().questions()[index];
    match question.kind {
        QuestionKind::Boolean => AnswerValue::Bool(true),
        QuestionKind::Scale => AnswerValue::Scale(5),
        QuestionKind::Multiple => {
            let i = match question.direction {
                ScoringDirection::Forward => question.options.len() - 1,
                ScoringDirection::Reversed => 0,
            };
            AnswerValue::Choice(question.options[i].clone())
        }
        QuestionKind::Text => AnswerValue::Choice(String::new()),
    }
}

proptest! {
    /// Property: contributions never leave [0, weight], whatever the
    /// value looks like.
    #[test]
    fn prop_score_stays_within_question_weight(answer in any_catalog_answer()) {
        let question = builtin_catalog().get(&answer.question_id).unwrap();
        let score = score_answer(question, &answer.value);
        prop_assert!(score >= 0.0, "negative score {score}");
        prop_assert!(
            score <= question.weight,
            "score {score} above weight {}",
            question.weight
        );
    }

    /// Property: scoring the same answer twice gives bit-identical
    /// results.
    #[test]
    fn prop_scoring_is_deterministic(answer in any_catalog_answer()) {
        let question = builtin_catalog().get(&answer.question_id).unwrap();
        prop_assert_eq!(
            score_answer(question, &answer.value).to_bits(),
            score_answer(question, &answer.value).to_bits()
        );
    }

    /// Property: the overall score is always a percentage.
    #[test]
    fn prop_overall_score_is_a_percentage(
        answers in proptest::collection::vec(any_catalog_answer(), 0..40)
    ) {
        let score = overall_score(builtin_catalog(), &answers);
        prop_assert!(score <= 100);
    }

    /// Property: answering one more question with its best value never
    /// lowers the overall score.
    #[test]
    fn prop_positive_answers_are_monotone(
        answers in proptest::collection::vec(any_catalog_answer(), 0..20),
        extra_index in 0..builtin_catalog().len()
    ) {
        // Keep one answer per question and leave extra_index unanswered.
        let mut seen = std::collections::HashSet::new();
        let mut base: Vec<Answer> = Vec::new();
        for answer in answers {
            let target = &builtin_catalog().questions()[extra_index].id;
            if answer.question_id != *target && seen.insert(answer.question_id.clone()) {
                base.push(answer);
            }
        }

        let before = overall_score(builtin_catalog(), &base);
        let mut extended = base.clone();
        extended.push(Answer::new(
            builtin_catalog().questions()[extra_index].id.clone(),
            best_value_for(extra_index),
        ));
        let after = overall_score(builtin_catalog(), &extended);
        prop_assert!(after >= before, "score dropped from {before} to {after}");
    }

    /// Property: compliance summaries are idempotent, ordered, and
    /// bounded.
    #[test]
    fn prop_compliance_summaries_are_stable(
        answers in proptest::collection::vec(any_catalog_answer(), 0..40)
    ) {
        let first = compliance_scores(builtin_catalog(), &answers);
        let second = compliance_scores(builtin_catalog(), &answers);
        prop_assert_eq!(&first, &second);

        let order: Vec<Framework> = first.iter().map(|s| s.framework).collect();
        prop_assert_eq!(
            order,
            vec![Framework::Iso27001, Framework::Nist, Framework::Soc2]
        );
        for summary in &first {
            prop_assert!(summary.percentage <= 100);
            prop_assert!(summary.score <= summary.max_score + 1e-9);
        }
    }
}

proptest! {
    /// Property: a valid single-question catalog scores within bounds
    /// for every direction and option pick.
    #[test]
    fn prop_multiple_choice_direction_symmetry(
        weight in 1u32..=20,
        option_count in 2usize..=6,
        pick in 0usize..6
    ) {
        let options: Vec<String> = (0..option_count).map(|i| format!("opt-{i}")).collect();
        let pick = pick % option_count;
        let forward = riskmap::core::Question {
            id: "m-001".to_string(),
            category: "Test".to_string(),
            prompt: "Test".to_string(),
            kind: QuestionKind::Multiple,
            weight: f64::from(weight),
            options: options.clone(),
            direction: ScoringDirection::Forward,
            frameworks: vec![Framework::Nist],
        };
        let reversed = riskmap::core::Question {
            direction: ScoringDirection::Reversed,
            ..forward.clone()
        };

        let value = AnswerValue::Choice(options[pick].clone());
        let forward_score = score_answer(&forward, &value);
        let reversed_score = score_answer(&reversed, &value);

        // The two directions mirror each other around the weight.
        prop_assert!((forward_score + reversed_score - f64::from(weight)).abs() < 1e-6);
    }
}
