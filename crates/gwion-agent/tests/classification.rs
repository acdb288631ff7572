//! Classification replay harness.
//!
//! Replays the hydrated response snapshot through the interpreter and
//! dispatcher and asserts the end-to-end classification is stable: every
//! corpus entry resolves to its expected action, and every dispatched line
//! honors the `"<token> <payload>"` contract the shell wrapper splits on.
//!
//! The snapshot is produced offline by `gwion hydrate`; it is a setup
//! precondition here, not a runtime input.

use std::path::Path;

use gwion_agent::{PROMPT_FIXTURES, interpret, load_recorded_responses, write_action_line};
use gwion_llm::CompletionResponse;

const SNAPSHOT: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/openai_responses.json"
);

fn dispatch(response: &CompletionResponse) -> String {
    let mut out = Vec::new();
    write_action_line(response, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn recorded_classifications_resolve_to_expected_actions() {
    let recorded =
        load_recorded_responses(Path::new(SNAPSHOT)).expect("hydrated snapshot must be readable");

    for fixture in PROMPT_FIXTURES {
        let Some(response) = recorded.get(fixture.user_input) else {
            panic!(
                "no recorded response for {:?}; run `gwion hydrate` to refresh the snapshot",
                fixture.user_input
            );
        };

        let resolved = interpret(response).action_name().unwrap_or("").to_string();
        assert_eq!(
            resolved, fixture.expected_action,
            "user input: {:?}",
            fixture.user_input
        );
    }
}

#[test]
fn recorded_dispatch_lines_start_with_action_and_single_space() {
    let recorded =
        load_recorded_responses(Path::new(SNAPSHOT)).expect("hydrated snapshot must be readable");

    for fixture in PROMPT_FIXTURES {
        let response = recorded
            .get(fixture.user_input)
            .unwrap_or_else(|| panic!("missing snapshot key {:?}", fixture.user_input));

        let line = dispatch(response);
        assert!(
            line.starts_with(&format!("{} ", fixture.expected_action)),
            "line for {:?} was {:?}",
            fixture.user_input,
            line
        );
        assert!(
            !line.starts_with(&format!("{}  ", fixture.expected_action)),
            "double space after token for {:?}: {:?}",
            fixture.user_input,
            line
        );
    }
}

#[test]
fn replaying_a_recorded_response_twice_is_byte_identical() {
    let recorded =
        load_recorded_responses(Path::new(SNAPSHOT)).expect("hydrated snapshot must be readable");

    for fixture in PROMPT_FIXTURES {
        let response = recorded
            .get(fixture.user_input)
            .unwrap_or_else(|| panic!("missing snapshot key {:?}", fixture.user_input));

        assert_eq!(dispatch(response), dispatch(response));
    }
}

// Carry-over payloads recorded for the two-phase actions must parse into the
// shapes their execution phase expects.
#[test]
fn recorded_two_phase_arguments_parse_as_carryover() {
    let recorded =
        load_recorded_responses(Path::new(SNAPSHOT)).expect("hydrated snapshot must be readable");

    for fixture in PROMPT_FIXTURES {
        let response = recorded.get(fixture.user_input).unwrap();
        let Some(call) = response.first_tool_call() else {
            continue;
        };

        match fixture.expected_action {
            "crawl_web" => {
                let args = gwion_agent::parse_crawl_args(&call.function.arguments)
                    .expect("recorded crawl_web arguments parse");
                assert!(!args.url.is_empty());
                assert!(!args.purpose.is_empty());
            }
            "gen_image" => {
                let args = gwion_agent::parse_image_args(&call.function.arguments)
                    .expect("recorded gen_image arguments parse");
                assert!(args.n >= 1);
                assert!(!args.prompt.is_empty());
            }
            _ => {}
        }
    }
}

#[test]
fn error_response_dispatches_to_error_line() {
    let response: CompletionResponse =
        serde_json::from_str(r#"{"error":{"message":"bad json!"}}"#).unwrap();
    assert_eq!(dispatch(&response), "error bad json!\n");
}
