//! Wire types for the completion and image-generation endpoints.
//!
//! Response parsing is total over the declared shape: every field the remote
//! endpoint may omit is an `Option` (or a defaulted container), so any JSON
//! object matching the schema deserializes without error. Only non-JSON
//! bytes fail, with [`crate::LlmError::Decode`].

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Request Payload
// ─────────────────────────────────────────────────────────────────────────────

/// A chat-completion request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionPayload {
    /// The model to classify with.
    pub model: String,

    /// Hard cap on generated tokens.
    pub max_tokens: u32,

    /// Sampling temperature. Classification runs at 0 for determinism.
    pub temperature: f32,

    /// Ordered message list.
    pub messages: Vec<ChatMessage>,

    /// Callable-action definitions offered to the model.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<ToolSpec>,
}

/// A message in the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message author.
    pub role: ChatRole,
    /// The text content.
    pub content: String,
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// The role of a request message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

/// A callable-action definition as the endpoint expects it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Always `"function"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionSpec,
}

impl ToolSpec {
    /// Create a function-typed tool definition.
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            kind: "function".to_string(),
            function: FunctionSpec {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

/// The function half of a [`ToolSpec`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionSpec {
    /// Unique action name.
    pub name: String,
    /// Natural-language instruction to the remote model.
    pub description: String,
    /// JSON Schema for the action's arguments.
    pub parameters: serde_json::Value,
}

/// An image-generation request body.
///
/// This is also the carry-over shape the classification phase hands to the
/// execution phase: the model's `gen_image` arguments are POSTed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageGenerationPayload {
    /// Number of images to generate.
    pub n: u32,
    /// Image model, e.g. `dall-e-2`.
    pub model: String,
    /// Image dimensions, e.g. `1024x1024`.
    pub size: String,
    /// The image prompt.
    pub prompt: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Completion Response
// ─────────────────────────────────────────────────────────────────────────────

/// One remote classification result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Present only on failure. When set, every other field is unreliable
    /// and the interpreter ignores them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Candidate completions. Only the first is ever consulted; the request
    /// shape asks for a single completion.
    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Token accounting, informational only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    /// The structured error message, if the endpoint reported one.
    ///
    /// An error object with an empty message does not count as an error.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .map(|e| e.message.as_str())
            .filter(|m| !m.is_empty())
    }

    /// The first choice's free-text content, if present and non-empty.
    pub fn message_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|c| !c.is_empty())
    }

    /// The first tool call of the first choice, if any.
    pub fn first_tool_call(&self) -> Option<&ToolCall> {
        self.choices
            .first()
            .and_then(|c| c.message.tool_calls.as_ref())
            .and_then(|calls| calls.first())
    }

    /// Pretty-printed dump of the full response, for operator diagnostics.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "<unprintable response>".to_string())
    }
}

/// A structured error object returned by the endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub message: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// `param` and `code` vary between string, number and null across
    /// endpoint versions; kept as raw JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<serde_json::Value>,
}

/// One candidate completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub message: ChoiceMessage,
}

/// The message of a candidate completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChoiceMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Free-text answer. Absent or empty when the model picked an action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Actions the model selected, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

/// One model-selected action invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCall {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub function: FunctionCall,
}

/// Name and arguments of a selected action.
///
/// `arguments` is the model's own JSON-encoded string; it is carried opaquely
/// and never validated against the outbound schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FunctionCall {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub arguments: String,
}

/// Token accounting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

// ─────────────────────────────────────────────────────────────────────────────
// Image Generation Response
// ─────────────────────────────────────────────────────────────────────────────

/// One image-generation result. No tool-call machinery.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageGenerationResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Generated images, in the order the endpoint produced them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ImageResult>>,
}

impl ImageGenerationResponse {
    /// The structured error message, if the endpoint reported one.
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_ref()
            .map(|e| e.message.as_str())
            .filter(|m| !m.is_empty())
    }

    /// The returned image URLs, order preserved. Empty when `data` is absent.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.data.iter().flatten().map(|d| d.url.as_str())
    }
}

/// A single generated image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageResult {
    #[serde(default)]
    pub url: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
