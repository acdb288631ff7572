//! Request builders for the classification and extraction phases.

use gwion_llm::{ChatMessage, CompletionPayload};

use crate::catalog::ActionCatalog;

/// Token cap on every classification completion.
pub const MAX_COMPLETION_TOKENS: u32 = 703;

/// Trailing nudge that keeps the model to a single action per request.
const SINGLE_FUNCTION_NUDGE: &str = "only call a single function";

/// System prompt of the crawl sub-flow's extraction phase.
const REPORT_SYSTEM_PROMPT: &str = "You are an information extraction system. You'll be given a \
     parsed web page and a goal, usually to extract information from the parsed page. You should \
     call report_information with the extracted information.";

/// Build the primary classification request.
///
/// Message order is significant to the remote model: host context first, the
/// user's input second, then the single-action nudge. The catalog rides along
/// as callable-tool definitions.
pub fn build_primary_request(
    user_input: &str,
    system_context: &str,
    model: &str,
    catalog: &ActionCatalog,
) -> CompletionPayload {
    CompletionPayload {
        model: model.to_string(),
        max_tokens: MAX_COMPLETION_TOKENS,
        temperature: 0.0,
        messages: vec![
            ChatMessage::system(system_context),
            ChatMessage::user(user_input),
            ChatMessage::user(SINGLE_FUNCTION_NUDGE),
        ],
        tools: catalog.tool_specs().to_vec(),
    }
}

/// Build the crawl sub-flow's extraction request.
///
/// Structurally identical to the primary request, but with the fetched page
/// text as user content, the crawl purpose as a second system message, and a
/// catalog of exactly one action.
pub fn build_report_request(
    page: &str,
    purpose: &str,
    model: &str,
    catalog: &ActionCatalog,
) -> CompletionPayload {
    CompletionPayload {
        model: model.to_string(),
        max_tokens: MAX_COMPLETION_TOKENS,
        temperature: 0.0,
        messages: vec![
            ChatMessage::system(REPORT_SYSTEM_PROMPT),
            ChatMessage::user(page),
            ChatMessage::system(purpose),
            ChatMessage::user("only call a single tool/function once"),
        ],
        tools: catalog.tool_specs().to_vec(),
    }
}
