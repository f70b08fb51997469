use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use solace_chat::controller::ConversationController;
use solace_chat::remote::RemoteResponder;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub responder: Arc<RemoteResponder>,
    /// One controller per live conversation. The lock serializes turns, so
    /// each conversation processes one user action at a time.
    pub conversations: Arc<Mutex<HashMap<Uuid, ConversationController>>>,
}
