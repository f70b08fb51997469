use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("upstream request failed: {0}")]
    Upstream(String),

    #[error("upstream returned malformed reply: {0}")]
    MalformedReply(String),
}
