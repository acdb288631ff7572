//! The classification fixture corpus.
//!
//! `PROMPT_FIXTURES` is the static table of user inputs and the action each
//! is expected to classify to. The companion snapshot file (user input →
//! recorded completion response) is produced by the offline `hydrate`
//! utility, one real remote call per entry, and consumed read-only by the
//! replay harness in `tests/classification.rs`.

use std::collections::BTreeMap;
use std::path::Path;

use gwion_llm::CompletionResponse;

use crate::error::{AgentError, Result};

/// One classification expectation.
#[derive(Debug, Clone, Copy)]
pub struct PromptFixture {
    /// Literal user input, also the snapshot key.
    pub user_input: &'static str,
    /// The action name the input must classify to.
    pub expected_action: &'static str,
}

/// The fixture corpus. Inputs chosen to pin the easy, unambiguous cases;
/// keys must match the hydrated snapshot exactly.
pub const PROMPT_FIXTURES: &[PromptFixture] = &[
    PromptFixture { expected_action: "printz", user_input: "list all open udp ports" },
    PromptFixture { expected_action: "printz", user_input: "command to show the weather" },
    PromptFixture { expected_action: "printz", user_input: "rename all files in the current directory to contain the word awesome" },
    PromptFixture { expected_action: "printz", user_input: "list my subnet mask" },
    PromptFixture { expected_action: "printz", user_input: "watch star wars in my terminal" },
    PromptFixture { expected_action: "printz", user_input: "convert all jpg images in folder to png" },
    PromptFixture { expected_action: "printz", user_input: "create a new user with sudo privileges" },
    PromptFixture { expected_action: "printz", user_input: "set up a cron job to run a script every day at midnight" },
    PromptFixture { expected_action: "printz", user_input: "cut a new git release called 1.0" },
    PromptFixture { expected_action: "printz", user_input: "monitor CPU and memory usage and alert if too high" },
    PromptFixture { expected_action: "gen_image", user_input: "generate an image of a cup of coffee" },
    PromptFixture { expected_action: "crawl_web", user_input: "summarize reddit.com" },
    PromptFixture { expected_action: "crawl_web", user_input: "what color do elephants tend to be?" },
    PromptFixture { expected_action: "crawl_web", user_input: "what is the first headline from bbc.com?" },
    PromptFixture { expected_action: "crawl_web", user_input: "What color is a penguin?" },
    PromptFixture { expected_action: "crawl_web", user_input: "What color is a lion?" },
    PromptFixture { expected_action: "crawl_web", user_input: "summarize the latest headline" },
];

/// Load a hydrated snapshot: a JSON object mapping literal user inputs to
/// full recorded completion responses.
pub fn load_recorded_responses(path: &Path) -> Result<BTreeMap<String, CompletionResponse>> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| AgentError::Fixture(format!("read {}: {}", path.display(), e)))?;
    serde_json::from_str(&raw)
        .map_err(|e| AgentError::Fixture(format!("parse {}: {}", path.display(), e)))
}
