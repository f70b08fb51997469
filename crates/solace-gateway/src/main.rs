use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod routes;
mod state;

use solace_chat::remote::RemoteResponder;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let upstream_url = env::var("SOLACE_UPSTREAM_URL")
        .map_err(|_| eyre::eyre!("SOLACE_UPSTREAM_URL must be set"))?;
    let bind = env::var("SOLACE_BIND").unwrap_or_else(|_| "0.0.0.0:3001".to_string());

    let state = AppState {
        responder: Arc::new(RemoteResponder::new(upstream_url)?),
        conversations: Arc::new(Mutex::new(HashMap::new())),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // The thin proxy to the hosted chat model
        .route("/api/chat", post(routes::chat::forward_chat))
        // Reference data
        .route(
            "/api/questionnaires",
            get(routes::questionnaires::list_questionnaires),
        )
        .route(
            "/api/questionnaires/{id}",
            get(routes::questionnaires::get_questionnaire_detail),
        )
        .route(
            "/api/crisis-resources",
            get(routes::crisis::list_crisis_resources),
        )
        // Server-side conversations
        .route(
            "/api/conversations",
            post(routes::conversations::create_conversation),
        )
        .route(
            "/api/conversations/{id}/messages",
            post(routes::conversations::post_message),
        )
        .route(
            "/api/conversations/{id}/messages",
            get(routes::conversations::get_messages),
        )
        .route(
            "/api/conversations/{id}/assessments",
            post(routes::conversations::start_assessment),
        )
        .layer(cors)
        .with_state(state);

    let listener = TcpListener::bind(&bind).await?;
    tracing::info!(%bind, "solace gateway listening");
    axum::serve(listener, app).await?;
    Ok(())
}
