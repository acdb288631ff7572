//! Primary command - classify a prompt into a single action line.

use anyhow::Result;
use clap::Args;
use std::io::Write;

use gwion_agent::{ActionCatalog, build_primary_request, write_action_line};

use super::Context;

/// Arguments for the primary command.
#[derive(Args, Debug)]
pub struct PrimaryArgs {
    /// The user's natural-language input
    #[arg(long)]
    pub prompt: String,

    /// Description of the host system, used for printz commands
    #[arg(long)]
    pub system_content: String,

    /// Model to classify with
    #[arg(long, default_value = super::DEFAULT_MODEL)]
    pub model: String,
}

/// Run the primary command.
pub async fn run(args: PrimaryArgs, ctx: &Context) -> Result<()> {
    let client = ctx.api_client()?;
    let catalog = ActionCatalog::primary();

    let payload = build_primary_request(&args.prompt, &args.system_content, &args.model, &catalog);
    let response = client.complete(&payload).await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_action_line(&response, &mut out)?;
    out.flush()?;

    Ok(())
}
