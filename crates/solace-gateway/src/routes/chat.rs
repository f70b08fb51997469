use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use solace_chat::responder::{SupportResponder, TurnPair};

use crate::state::AppState;

#[derive(Deserialize)]
pub struct ChatForwardRequest {
    pub message: String,
    /// `[[user, assistant], ...]` turn pairs, oldest first.
    #[serde(default)]
    pub history: Vec<TurnPair>,
}

#[derive(Serialize)]
pub struct ChatForwardResponse {
    pub reply: String,
}

/// Forward one free-text message to the hosted chat model.
///
/// On upstream failure the 500 body keeps the `reply` field so the SPA
/// renders the error like any other bot message.
pub async fn forward_chat(
    State(state): State<AppState>,
    Json(req): Json<ChatForwardRequest>,
) -> impl IntoResponse {
    match state.responder.respond(&req.message, &req.history).await {
        Ok(reply) => (StatusCode::OK, Json(ChatForwardResponse { reply })),
        Err(e) => {
            tracing::error!(error = %e, "chat forwarding failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatForwardResponse {
                    reply: "Error contacting mental health model.".to_string(),
                }),
            )
        }
    }
}
