use solace_chat::assessment::{AssessmentSession, SubmitOutcome};
use solace_core::models::assessment::{QuestionnaireKind, RiskTier};

#[test]
fn intro_presents_question_one() {
    let (session, intro) = AssessmentSession::start(QuestionnaireKind::Phq9);
    assert_eq!(session.questions_answered(), 0);
    assert!(!session.is_complete());
    assert!(intro.contains("Let's start the PHQ-9 assessment"));
    assert!(intro.contains("I'll ask you 5 questions"));
    assert!(intro.contains("0 = Not at all"));
    assert!(intro.contains("Question 1:"));
}

#[test]
fn phq9_all_twos_lands_on_high() {
    // Five answers of 2 sum to 10, the bottom of the high band.
    let (mut session, _) = AssessmentSession::start(QuestionnaireKind::Phq9);
    for expected_question in 2..=5 {
        match session.submit_answer("2") {
            SubmitOutcome::NextPrompt(prompt) => {
                assert!(
                    prompt.starts_with(&format!("Question {expected_question}:")),
                    "unexpected prompt: {prompt}"
                );
            }
            other => panic!("expected next prompt, got {other:?}"),
        }
    }
    match session.submit_answer("2") {
        SubmitOutcome::Completed { message, result } => {
            assert_eq!(result.kind, QuestionnaireKind::Phq9);
            assert_eq!(result.total, 10);
            assert_eq!(result.canonical_max, 27);
            assert_eq!(result.tier, RiskTier::High);
            assert!(message.contains("moderate depression symptoms"));
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

#[test]
fn gad7_all_zeros_lands_on_low() {
    let (mut session, _) = AssessmentSession::start(QuestionnaireKind::Gad7);
    let mut last = None;
    for _ in 0..5 {
        last = Some(session.submit_answer("0"));
    }
    match last.expect("five answers submitted") {
        SubmitOutcome::Completed { result, .. } => {
            assert_eq!(result.kind, QuestionnaireKind::Gad7);
            assert_eq!(result.total, 0);
            assert_eq!(result.canonical_max, 21);
            assert_eq!(result.tier, RiskTier::Low);
        }
        other => panic!("expected completion, got {other:?}"),
    }
}

#[test]
fn total_is_the_sum_of_collected_scores() {
    let sequences: [[u8; 5]; 4] = [
        [0, 1, 2, 3, 0],
        [3, 3, 3, 3, 3],
        [1, 1, 1, 1, 1],
        [2, 0, 3, 1, 2],
    ];
    for scores in sequences {
        let (mut session, _) = AssessmentSession::start(QuestionnaireKind::Gad7);
        let mut outcome = None;
        for score in scores {
            outcome = Some(session.submit_answer(&score.to_string()));
        }
        let expected: u8 = scores.iter().sum();
        match outcome.expect("five answers submitted") {
            SubmitOutcome::Completed { result, .. } => {
                assert_eq!(result.total, expected, "sequence {scores:?}");
                assert_eq!(result.tier, solace_instruments::scoring::classify(expected));
            }
            other => panic!("expected completion for {scores:?}, got {other:?}"),
        }
    }
}

#[test]
fn rejection_is_idempotent() {
    let (mut session, _) = AssessmentSession::start(QuestionnaireKind::Phq9);
    match session.submit_answer("1") {
        SubmitOutcome::NextPrompt(_) => {}
        other => panic!("expected next prompt, got {other:?}"),
    }

    for input in ["7", "abc", "7", "-2", "two", "7"] {
        match session.submit_answer(input) {
            SubmitOutcome::Clarification(msg) => {
                assert!(msg.contains("Please respond with a number from 0-3"));
            }
            other => panic!("expected clarification for {input:?}, got {other:?}"),
        }
        assert_eq!(session.questions_answered(), 1);
    }
    assert!(!session.is_complete());
    assert_eq!(session.kind(), QuestionnaireKind::Phq9);
}
