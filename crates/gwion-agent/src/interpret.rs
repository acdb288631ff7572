//! Interpretation of a completion response into a single action decision.

use gwion_llm::CompletionResponse;

use crate::catalog::actions;

/// The single, unambiguous decision extracted from a completion response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The endpoint reported a structured error with a non-empty message.
    Error(String),
    /// The model answered directly in prose.
    Message(String),
    /// The model selected an action. `arguments` is the model's own
    /// JSON-encoded string, carried opaquely.
    ToolCall { name: String, arguments: String },
    /// No error, no content, no tool calls. Reported, never defaulted:
    /// "the model answered directly" and "the model failed to answer" are
    /// different facts.
    Unresolved,
}

impl ActionOutcome {
    /// The action name this outcome resolves to, as it appears on the wire.
    pub fn action_name(&self) -> Option<&str> {
        match self {
            ActionOutcome::Error(_) => Some("error"),
            ActionOutcome::Message(_) => Some(actions::MESSAGE),
            ActionOutcome::ToolCall { name, .. } => Some(name),
            ActionOutcome::Unresolved => None,
        }
    }
}

/// Reduce a response to exactly one outcome.
///
/// Precedence is strict and total: error > non-empty free text > first tool
/// call > unresolved. A model that both explains itself in prose and proposes
/// a tool call has answered directly; it never runs an action. Tool calls
/// past the first are model noise (the request asks for a single action) and
/// are ignored, not merged.
pub fn interpret(response: &CompletionResponse) -> ActionOutcome {
    if let Some(message) = response.error_message() {
        return ActionOutcome::Error(message.to_string());
    }

    if let Some(content) = response.message_content() {
        return ActionOutcome::Message(content.to_string());
    }

    if let Some(call) = response.first_tool_call() {
        return ActionOutcome::ToolCall {
            name: call.function.name.clone(),
            arguments: call.function.arguments.clone(),
        };
    }

    ActionOutcome::Unresolved
}
