//! Error types for the endpoint client.

use thiserror::Error;

/// Result type alias using the LLM error type.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Error type for endpoint operations.
///
/// A structured error object *inside* a successfully-parsed response body is
/// not represented here; it stays on the response (`CompletionResponse::error`)
/// and is surfaced by the dispatcher as an `error` output line.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Network/HTTP failure reaching the remote endpoint. Fatal for the
    /// invocation, never retried.
    #[error("transport error: {0}")]
    Transport(String),

    /// Response bytes did not match the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Client misconfiguration (missing credential, bad base URL).
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Transport(format!("request timed out: {}", err))
        } else if err.is_connect() {
            LlmError::Transport(format!("connection failed: {}", err))
        } else {
            LlmError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::Decode(err.to_string())
    }
}
