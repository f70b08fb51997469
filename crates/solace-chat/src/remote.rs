//! HTTP client for the hosted mental-health chat model.
//!
//! The endpoint is opaque: POST `{ "message": ..., "history": [[user, assistant], ...] }`
//! and read back `{ "reply": ... }`. Used both by conversations configured
//! to delegate free text and by the gateway's forwarding route.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ChatError;
use crate::responder::{SupportResponder, TurnPair};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    history: &'a [TurnPair],
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    reply: String,
}

/// Client for the remote text-generation endpoint.
#[derive(Debug, Clone)]
pub struct RemoteResponder {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteResponder {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ChatError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ChatError::Upstream(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl SupportResponder for RemoteResponder {
    async fn respond(&self, message: &str, history: &[TurnPair]) -> Result<String, ChatError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(&ChatRequest { message, history })
            .send()
            .await
            .map_err(|e| ChatError::Upstream(e.to_string()))?;

        let status = response.status();
        debug!(status = %status, "upstream chat response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::Upstream(format!(
                "upstream returned {status}: {body}"
            )));
        }

        let reply: ChatReply = response
            .json()
            .await
            .map_err(|e| ChatError::MalformedReply(e.to_string()))?;

        Ok(reply.reply)
    }
}
