use std::sync::Arc;
use std::time::Duration;

use solace_chat::controller::ConversationController;
use solace_chat::responder::{ANXIETY_RESPONSES, CannedResponder};
use solace_core::models::assessment::{QuestionnaireKind, RiskTier};
use solace_core::models::message::ChatRole;

fn controller() -> ConversationController {
    ConversationController::with_escalation_delay(
        Arc::new(CannedResponder),
        Duration::from_millis(20),
    )
}

#[tokio::test]
async fn greeting_seeds_the_log() {
    let controller = controller();
    let log = controller.log().await;
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].role, ChatRole::Assistant);
    assert!(
        log[0]
            .content
            .starts_with("Hello! I'm your mental health support assistant")
    );
}

#[tokio::test]
async fn blank_input_is_dropped() {
    let mut controller = controller();
    let replies = controller.handle_message("   ").await.unwrap();
    assert!(replies.is_empty());
    assert_eq!(controller.log().await.len(), 1);
}

#[tokio::test]
async fn anxiety_keywords_get_an_anxiety_reply() {
    let mut controller = controller();
    let replies = controller.handle_message("I'm feeling anxious").await.unwrap();
    assert_eq!(replies.len(), 1);
    assert!(ANXIETY_RESPONSES.contains(&replies[0].content.as_str()));
}

#[tokio::test]
async fn free_text_request_starts_phq9() {
    let mut controller = controller();
    let replies = controller
        .handle_message("Start PHQ-9 assessment")
        .await
        .unwrap();
    assert!(controller.assessment_active());
    assert!(replies[0].content.contains("Let's start the PHQ-9 assessment"));
}

#[tokio::test]
async fn high_outcome_schedules_escalation() {
    // Five 2s on the PHQ-9: total 10, high tier, then the counselor notice.
    let mut controller = controller();
    controller.handle_message("start the phq assessment").await.unwrap();
    for _ in 0..4 {
        controller.handle_message("2").await.unwrap();
    }
    let replies = controller.handle_message("2").await.unwrap();
    let result = replies[0].assessment.clone().expect("result attached");
    assert_eq!(result.total, 10);
    assert_eq!(result.tier, RiskTier::High);
    assert!(!controller.assessment_active());
    assert_eq!(controller.pending_escalations(), 1);

    tokio::time::sleep(Duration::from_millis(100)).await;
    let log = controller.log().await;
    let last = log.last().unwrap();
    assert!(
        last.content
            .contains("booking an appointment with one of our counselors")
    );
    assert_eq!(controller.pending_escalations(), 0);
}

#[tokio::test]
async fn low_outcome_fires_no_escalation() {
    let mut controller = controller();
    controller.handle_message("start the GAD-7 assessment").await.unwrap();
    for _ in 0..5 {
        controller.handle_message("0").await.unwrap();
    }
    assert_eq!(controller.pending_escalations(), 0);

    tokio::time::sleep(Duration::from_millis(100)).await;
    let log = controller.log().await;
    let last = log.last().unwrap();
    let result = last.assessment.clone().expect("log ends on the result message");
    assert_eq!(result.tier, RiskTier::Low);
}

#[tokio::test]
async fn invalid_answer_leaves_session_unchanged() {
    let mut controller = controller();
    controller.handle_message("start GAD-7").await.unwrap();

    let replies = controller.handle_message("7").await.unwrap();
    assert!(replies[0].content.contains("Please respond with a number from 0-3"));
    assert!(controller.assessment_active());

    // A valid answer still advances from question 1 to question 2.
    let replies = controller.handle_message("1").await.unwrap();
    assert!(replies[0].content.starts_with("Question 2:"));
}

#[tokio::test]
async fn restart_discards_partial_session() {
    let mut controller = controller();
    controller.start_assessment(QuestionnaireKind::Phq9).await;
    controller.handle_message("3").await.unwrap();
    controller.handle_message("3").await.unwrap();

    let intro = controller.start_assessment(QuestionnaireKind::Gad7).await;
    assert!(intro.content.contains("Let's start the GAD-7 assessment"));

    // Fresh session: five zeros complete it with total 0; the two
    // discarded 3s never count.
    for _ in 0..4 {
        controller.handle_message("0").await.unwrap();
    }
    let replies = controller.handle_message("0").await.unwrap();
    let result = replies[0].assessment.clone().expect("result attached");
    assert_eq!(result.kind, QuestionnaireKind::Gad7);
    assert_eq!(result.total, 0);
    assert!(!controller.assessment_active());
}
