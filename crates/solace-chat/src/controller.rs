//! Conversation routing.
//!
//! One controller per conversation. User text goes to the active
//! assessment session when one exists, then to assessment-request
//! detection, and otherwise to the support responder. The controller owns
//! the conversation log and the handles of any pending escalation tasks.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

use solace_core::models::assessment::QuestionnaireKind;
use solace_core::models::message::{ChatMessage, ChatRole};

use crate::assessment::{AssessmentSession, SubmitOutcome};
use crate::error::ChatError;
use crate::escalation::{self, ESCALATION_DELAY};
use crate::responder::{SupportResponder, TurnPair};

/// Opening message seeded into every new conversation.
const GREETING: &str =
    "Hello! I'm your mental health support assistant. I'm here to provide you with \
     coping strategies, mindfulness techniques, and emotional support. How are you feeling today?";

pub struct ConversationController {
    log: Arc<Mutex<Vec<ChatMessage>>>,
    session: Option<AssessmentSession>,
    responder: Arc<dyn SupportResponder>,
    escalation_delay: Duration,
    pending_escalations: Vec<JoinHandle<()>>,
}

impl ConversationController {
    pub fn new(responder: Arc<dyn SupportResponder>) -> Self {
        Self::with_escalation_delay(responder, ESCALATION_DELAY)
    }

    /// Same controller with a custom delay before escalation notices.
    pub fn with_escalation_delay(
        responder: Arc<dyn SupportResponder>,
        escalation_delay: Duration,
    ) -> Self {
        Self {
            log: Arc::new(Mutex::new(vec![ChatMessage::assistant(GREETING)])),
            session: None,
            responder,
            escalation_delay,
            pending_escalations: Vec::new(),
        }
    }

    /// Snapshot of the conversation log.
    pub async fn log(&self) -> Vec<ChatMessage> {
        self.log.lock().await.clone()
    }

    /// Whether an assessment is currently awaiting an answer.
    pub fn assessment_active(&self) -> bool {
        self.session.is_some()
    }

    /// Escalation notices scheduled but not yet delivered.
    pub fn pending_escalations(&self) -> usize {
        self.pending_escalations
            .iter()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Begin the named assessment, discarding any session already in
    /// progress. Pending escalation notices from earlier sessions are left
    /// to fire on their own schedule.
    pub async fn start_assessment(&mut self, kind: QuestionnaireKind) -> ChatMessage {
        if self.session.is_some() {
            info!(%kind, "abandoning in-progress assessment for a new one");
        }
        let (session, intro) = AssessmentSession::start(kind);
        self.session = Some(session);
        let message = ChatMessage::assistant(intro);
        self.log.lock().await.push(message.clone());
        message
    }

    /// Process one user turn and return the assistant messages it produced.
    ///
    /// Blank input is dropped before it reaches the engine. Responder
    /// failures surface to the caller; everything else is handled locally.
    pub async fn handle_message(&mut self, text: &str) -> Result<Vec<ChatMessage>, ChatError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.log.lock().await.push(ChatMessage::user(text));

        if let Some(session) = self.session.as_mut() {
            let outcome = session.submit_answer(text);
            let reply = match outcome {
                SubmitOutcome::Clarification(msg) | SubmitOutcome::NextPrompt(msg) => {
                    ChatMessage::assistant(msg)
                }
                SubmitOutcome::Completed { message, result } => {
                    // The session ends the instant the final question is scored.
                    self.session = None;
                    info!(
                        kind = %result.kind,
                        total = result.total,
                        tier = ?result.tier,
                        "assessment completed"
                    );
                    if let Some(handle) = escalation::schedule_notice(
                        Arc::clone(&self.log),
                        result.tier,
                        self.escalation_delay,
                    ) {
                        self.pending_escalations.push(handle);
                    }
                    ChatMessage::assistant(message).with_assessment(result)
                }
            };
            self.log.lock().await.push(reply.clone());
            return Ok(vec![reply]);
        }

        if let Some(kind) = detect_assessment_request(text) {
            return Ok(vec![self.start_assessment(kind).await]);
        }

        let history = self.history_pairs().await;
        let reply = ChatMessage::assistant(self.responder.respond(text, &history).await?);
        self.log.lock().await.push(reply.clone());
        Ok(vec![reply])
    }

    /// Collapse the log into (user, assistant) turn pairs for the remote
    /// endpoint, dropping the trailing unanswered user message.
    async fn history_pairs(&self) -> Vec<TurnPair> {
        let log = self.log.lock().await;
        let mut pairs = Vec::new();
        let mut pending_user: Option<String> = None;
        for msg in log.iter() {
            match msg.role {
                ChatRole::User => pending_user = Some(msg.content.clone()),
                ChatRole::Assistant => {
                    if let Some(user) = pending_user.take() {
                        pairs.push((user, msg.content.clone()));
                    }
                }
            }
        }
        pairs
    }
}

/// Assessment trigger phrases recognized in free text.
fn detect_assessment_request(text: &str) -> Option<QuestionnaireKind> {
    let lower = text.to_lowercase();
    if lower.contains("phq") || lower.contains("depression assessment") {
        Some(QuestionnaireKind::Phq9)
    } else if lower.contains("gad") || lower.contains("anxiety assessment") {
        Some(QuestionnaireKind::Gad7)
    } else {
        None
    }
}
