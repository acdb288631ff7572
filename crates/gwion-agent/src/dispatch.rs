//! Dispatch of an interpreted outcome onto the stdout line protocol.
//!
//! The output format is the wire contract with the surrounding shell
//! integration: one line per invocation, `"<token> <payload>\n"`, exactly one
//! space between token and payload even when the payload is empty.

use std::io::{self, Write};

use serde::Deserialize;

use gwion_llm::CompletionResponse;

use crate::catalog::actions;
use crate::interpret::{ActionOutcome, interpret};

/// Diagnostic banner emitted when a response resolves to nothing this tool
/// understands. Followed by a pretty-printed dump of the full response.
pub const UNHANDLED_BANNER: &str = "[ !! ] Got a completion response this tool doesn't understand [ !! ]";

#[derive(Debug, Default, Deserialize)]
struct PrintzArgs {
    #[serde(default)]
    command: String,
}

#[derive(Debug, Default, Deserialize)]
struct EchoArgs {
    #[serde(default, rename = "str")]
    value: String,
}

/// Write the single protocol line for `response`.
///
/// `printz`/`echo` have their one string field extracted; `crawl_web` and
/// `gen_image` pass their raw arguments JSON through for the execution phase
/// to consume. Unrecognized actions and unresolved responses take the
/// diagnostic path; they are reported, never dropped.
pub fn write_action_line<W: Write>(response: &CompletionResponse, out: &mut W) -> io::Result<()> {
    match interpret(response) {
        ActionOutcome::Error(message) => writeln!(out, "error {}", message),
        ActionOutcome::Message(text) => writeln!(out, "message {}", text),
        ActionOutcome::ToolCall { name, arguments } => match name.as_str() {
            actions::PRINTZ => {
                // Inbound arguments are trusted: a shape mismatch degrades to
                // an empty payload rather than an error.
                let args: PrintzArgs = serde_json::from_str(&arguments).unwrap_or_default();
                writeln!(out, "{} {}", actions::PRINTZ, args.command)
            }
            actions::ECHO => {
                let args: EchoArgs = serde_json::from_str(&arguments).unwrap_or_default();
                writeln!(out, "{} {}", actions::ECHO, args.value)
            }
            actions::CRAWL_WEB | actions::GEN_IMAGE => {
                writeln!(out, "{} {}", name, arguments)
            }
            other => {
                tracing::warn!(action = other, "model selected an action not in the catalog");
                write_unhandled(response, out)
            }
        },
        ActionOutcome::Unresolved => {
            tracing::warn!("completion resolved to no error, content or tool call");
            write_unhandled(response, out)
        }
    }
}

fn write_unhandled<W: Write>(response: &CompletionResponse, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", UNHANDLED_BANNER)?;
    writeln!(out, "{}", response.pretty())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch(raw: &str) -> String {
        let response: CompletionResponse = serde_json::from_str(raw).unwrap();
        let mut out = Vec::new();
        write_action_line(&response, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_printz_extracts_command() {
        let out = dispatch(
            r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"printz","arguments":"{\"command\":\"ls -la\"}"}}]}}]}"#,
        );
        assert_eq!(out, "printz ls -la\n");
    }

    #[test]
    fn test_echo_extracts_str() {
        let out = dispatch(
            r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"echo","arguments":"{\"str\":\"4 quarts in a gallon\"}"}}]}}]}"#,
        );
        assert_eq!(out, "echo 4 quarts in a gallon\n");
    }

    #[test]
    fn test_message_precedence_over_tool_call() {
        let out = dispatch(
            r#"{"choices":[{"message":{"content":"42","tool_calls":[{"function":{"name":"printz","arguments":"{\"command\":\"ls\"}"}}]}}]}"#,
        );
        assert_eq!(out, "message 42\n");
    }

    #[test]
    fn test_error_line() {
        let out = dispatch(r#"{"error":{"message":"bad json!"}}"#);
        assert_eq!(out, "error bad json!\n");
    }

    #[test]
    fn test_crawl_web_passes_raw_arguments_through() {
        let out = dispatch(
            r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"crawl_web","arguments":"{\"url\":\"https://bbc.com\",\"purpose\":\"first headline\"}"}}]}}]}"#,
        );
        assert_eq!(out, "crawl_web {\"url\":\"https://bbc.com\",\"purpose\":\"first headline\"}\n");
    }

    #[test]
    fn test_gen_image_passes_raw_arguments_through() {
        let args = r#"{\"n\":1,\"model\":\"dall-e-2\",\"size\":\"1024x1024\",\"prompt\":\"a cup of coffee\"}"#;
        let out = dispatch(&format!(
            r#"{{"choices":[{{"message":{{"tool_calls":[{{"function":{{"name":"gen_image","arguments":"{args}"}}}}]}}}}]}}"#,
        ));
        assert!(out.starts_with("gen_image {"));
        assert!(out.contains("\"prompt\":\"a cup of coffee\""));
    }

    // The shell wrapper splits on the first space; a payload-less action must
    // still emit exactly one space after the token.
    #[test]
    fn test_empty_payload_keeps_single_space() {
        let out = dispatch(
            r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"printz","arguments":"{}"}}]}}]}"#,
        );
        assert_eq!(out, "printz \n");
    }

    #[test]
    fn test_malformed_arguments_degrade_to_empty_payload() {
        let out = dispatch(
            r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"echo","arguments":"not json"}}]}}]}"#,
        );
        assert_eq!(out, "echo \n");
    }

    #[test]
    fn test_unrecognized_action_takes_diagnostic_path() {
        let out = dispatch(
            r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"text_to_speech","arguments":"{}"}}]}}]}"#,
        );
        assert!(out.starts_with(UNHANDLED_BANNER));
        // Full dump follows for operator debugging.
        assert!(out.contains("text_to_speech"));
    }

    #[test]
    fn test_unresolved_takes_diagnostic_path() {
        let out = dispatch(r#"{"choices":[{"message":{"content":"","tool_calls":[]}}]}"#);
        assert!(out.starts_with(UNHANDLED_BANNER));
        assert!(out.contains("choices"));
    }

    #[test]
    fn test_dispatch_is_idempotent() {
        let raw = r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"printz","arguments":"{\"command\":\"uptime\"}"}}]}}]}"#;
        assert_eq!(dispatch(raw), dispatch(raw));
    }

    #[test]
    fn test_known_actions_begin_with_name_and_single_space() {
        let cases = [
            (r#"{"error":{"message":"boom"}}"#, "error"),
            (r#"{"choices":[{"message":{"content":"hi"}}]}"#, "message"),
            (
                r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"printz","arguments":"{\"command\":\"ls\"}"}}]}}]}"#,
                "printz",
            ),
            (
                r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"echo","arguments":"{\"str\":\"x\"}"}}]}}]}"#,
                "echo",
            ),
            (
                r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"crawl_web","arguments":"{\"url\":\"u\",\"purpose\":\"p\"}"}}]}}]}"#,
                "crawl_web",
            ),
            (
                r#"{"choices":[{"message":{"tool_calls":[{"function":{"name":"gen_image","arguments":"{\"n\":1}"}}]}}]}"#,
                "gen_image",
            ),
        ];

        for (raw, token) in cases {
            let out = dispatch(raw);
            assert!(out.starts_with(&format!("{} ", token)), "output: {out:?}");
            assert!(!out.starts_with(&format!("{}  ", token)), "output: {out:?}");
        }
    }
}
