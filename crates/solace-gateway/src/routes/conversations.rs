use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use solace_chat::controller::ConversationController;
use solace_core::models::assessment::QuestionnaireKind;
use solace_core::models::message::ChatMessage;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ConversationCreated {
    pub id: Uuid,
    pub messages: Vec<ChatMessage>,
}

/// Open a new conversation backed by the remote responder.
pub async fn create_conversation(State(state): State<AppState>) -> Json<ConversationCreated> {
    let controller = ConversationController::new(state.responder.clone());
    let messages = controller.log().await;
    let id = Uuid::new_v4();
    state.conversations.lock().await.insert(id, controller);
    tracing::info!(conversation = %id, "conversation opened");
    Json(ConversationCreated { id, messages })
}

#[derive(Deserialize)]
pub struct PostMessageRequest {
    pub text: String,
}

/// One user turn. Returns only the assistant messages emitted for this
/// turn; delayed escalation notices show up in the full log later.
pub async fn post_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<PostMessageRequest>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let mut conversations = state.conversations.lock().await;
    let controller = conversations
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("conversation not found: {id}")))?;
    let messages = controller.handle_message(&req.text).await?;
    Ok(Json(messages))
}

pub async fn get_messages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let conversations = state.conversations.lock().await;
    let controller = conversations
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("conversation not found: {id}")))?;
    Ok(Json(controller.log().await))
}

#[derive(Deserialize)]
pub struct StartAssessmentRequest {
    pub kind: QuestionnaireKind,
}

/// Explicit assessment start (the UI's quick-reply path). Replaces any
/// assessment already in progress for this conversation.
pub async fn start_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StartAssessmentRequest>,
) -> Result<Json<ChatMessage>, ApiError> {
    let mut conversations = state.conversations.lock().await;
    let controller = conversations
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("conversation not found: {id}")))?;
    Ok(Json(controller.start_assessment(req.kind).await))
}
