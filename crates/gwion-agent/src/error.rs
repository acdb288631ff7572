//! Error types for the classification core.

use thiserror::Error;

/// Result type alias using the agent error type.
pub type Result<T> = std::result::Result<T, AgentError>;

/// Error type for classification and dispatch operations.
#[derive(Debug, Error)]
pub enum AgentError {
    /// Carry-over JSON from the classification phase did not parse into the
    /// shape the execution phase expects. Fatal for that invocation.
    #[error("malformed carry-over arguments: {0}")]
    MalformedInput(String),

    /// The recorded-response snapshot could not be read or parsed.
    #[error("fixture snapshot unusable: {0}")]
    Fixture(String),

    #[error(transparent)]
    Llm(#[from] gwion_llm::LlmError),
}
