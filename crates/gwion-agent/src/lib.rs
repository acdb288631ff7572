//! The classification core of Gwion.
//!
//! A user's natural-language input is shaped into a completion request that
//! constrains the remote model to pick exactly one action; the heterogeneous
//! response is interpreted into a single [`ActionOutcome`] with strict
//! precedence, and dispatched as one line of the stdout protocol the shell
//! wrapper consumes.
//!
//! ```text
//! user input ─► request ─► (transport) ─► CompletionResponse
//!                                              │
//!                                         interpret()
//!                                              │
//!                  error > message > first tool call > unresolved
//!                                              │
//!                                      write_action_line()
//!                                              │
//!                                    "<token> <payload>\n"
//! ```

pub mod carryover;
pub mod catalog;
pub mod dispatch;
pub mod error;
pub mod fixtures;
pub mod interpret;
pub mod request;

pub use carryover::{CrawlArgs, parse_crawl_args, parse_image_args};
pub use catalog::{ActionCatalog, actions};
pub use dispatch::{UNHANDLED_BANNER, write_action_line};
pub use error::{AgentError, Result};
pub use fixtures::{PROMPT_FIXTURES, PromptFixture, load_recorded_responses};
pub use interpret::{ActionOutcome, interpret};
pub use request::{MAX_COMPLETION_TOKENS, build_primary_request, build_report_request};
