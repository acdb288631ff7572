//! Hydrate command - re-record the classification fixture snapshot.
//!
//! Offline utility, not part of steady-state request handling: performs one
//! real remote call per fixture entry, all in flight concurrently, and
//! serializes the collected responses once every task has joined. Tasks
//! write disjoint keys of a lock-protected map.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Args;
use parking_lot::Mutex;
use tokio::task::JoinSet;

use gwion_agent::{ActionCatalog, PROMPT_FIXTURES, build_primary_request};
use gwion_llm::CompletionResponse;

use super::Context;

/// Arguments for the hydrate command.
#[derive(Args, Debug)]
pub struct HydrateArgs {
    /// Model to record the snapshot with
    #[arg(long, env = "OPENAI_API_MODEL")]
    pub model: String,

    /// Where to write the recorded responses
    #[arg(long, default_value = "crates/gwion-agent/tests/fixtures/openai_responses.json")]
    pub out: PathBuf,

    /// System context recorded into every request (default: `uname -a`)
    #[arg(long)]
    pub system_content: Option<String>,
}

/// Run the hydrate command.
pub async fn run(args: HydrateArgs, ctx: &Context) -> Result<()> {
    let client = ctx.api_client()?;
    let system_content = args.system_content.unwrap_or_else(host_description);

    println!("hydrating...");

    let results: Arc<Mutex<BTreeMap<String, CompletionResponse>>> =
        Arc::new(Mutex::new(BTreeMap::new()));
    let catalog = ActionCatalog::primary();

    let mut tasks = JoinSet::new();
    for fixture in PROMPT_FIXTURES {
        let client = client.clone();
        let catalog = catalog.clone();
        let model = args.model.clone();
        let system_content = system_content.clone();
        let results = Arc::clone(&results);

        tasks.spawn(async move {
            let payload =
                build_primary_request(fixture.user_input, &system_content, &model, &catalog);
            let response = client.complete(&payload).await?;
            println!("hydration complete for: {}", fixture.user_input);
            results.lock().insert(fixture.user_input.to_string(), response);
            Ok::<(), gwion_llm::LlmError>(())
        });
    }

    while let Some(joined) = tasks.join_next().await {
        joined.context("hydration task aborted")??;
    }

    let snapshot = serde_json::to_string_pretty(&*results.lock())?;
    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    std::fs::write(&args.out, snapshot)
        .with_context(|| format!("write {}", args.out.display()))?;

    println!(
        "wrote {} recorded responses to {}",
        PROMPT_FIXTURES.len(),
        args.out.display()
    );

    Ok(())
}

/// Best-effort description of the host, recorded as the system context.
fn host_description() -> String {
    std::process::Command::new("uname")
        .arg("-a")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown host".to_string())
}
