//! Remote-endpoint plumbing for Gwion.
//!
//! This crate owns the wire model for the chat-completion and
//! image-generation endpoints and the HTTP client that talks to them.
//! Everything that decides what a response *means* lives in `gwion-agent`;
//! this layer only moves bytes and gives them a total, loss-free shape.
//!
//! ```text
//! ┌──────────────┐   POST /chat/completions    ┌─────────────────────┐
//! │  ApiClient   │ ──────────────────────────► │ completion endpoint │
//! │              │ ◄────────────────────────── │                     │
//! └──────────────┘     CompletionResponse      └─────────────────────┘
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, ApiConfig, DEFAULT_API_BASE};
pub use error::{LlmError, Result};
pub use types::{
    ApiError, ChatMessage, ChatRole, Choice, ChoiceMessage, CompletionPayload, CompletionResponse,
    FunctionCall, FunctionSpec, ImageGenerationPayload, ImageGenerationResponse, ImageResult,
    TokenUsage, ToolCall, ToolSpec,
};
