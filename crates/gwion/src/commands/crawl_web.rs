//! Crawl command - execute the fetch-and-extract phase of a crawl_web action.

use anyhow::{Context as _, Result, bail};
use clap::Args;
use console::Style;
use serde::Deserialize;

use gwion_agent::{ActionCatalog, ActionOutcome, build_report_request, interpret, parse_crawl_args};

use super::Context;

/// Arguments for the crawl_web command.
#[derive(Args, Debug)]
pub struct CrawlWebArgs {
    /// Carry-over arguments JSON from the classification phase
    #[arg(long)]
    pub json_params: String,

    /// Model to extract with
    #[arg(long, default_value = super::DEFAULT_MODEL)]
    pub model: String,
}

#[derive(Debug, Deserialize)]
struct ReportArgs {
    #[serde(rename = "str")]
    value: String,
}

/// Run the crawl_web command.
pub async fn run(args: CrawlWebArgs, ctx: &Context) -> Result<()> {
    let carryover = parse_crawl_args(&args.json_params)?;

    let dim = Style::new().dim();
    println!("{}", dim.apply_to(format!("crawling: {}", carryover.url)));
    println!("{}", dim.apply_to(format!("purpose: {}", carryover.purpose)));

    let page = fetch_page(&carryover.url).await?;
    if ctx.verbose {
        println!("{}", dim.apply_to(format!("fetched {} bytes", page.len())));
    }

    let catalog = ActionCatalog::report_only();
    let payload = build_report_request(&page, &carryover.purpose, &args.model, &catalog);
    let response = ctx.api_client()?.complete(&payload).await?;

    match interpret(&response) {
        ActionOutcome::Error(message) => bail!("remote endpoint returned an error: {message}"),
        ActionOutcome::Message(text) => println!("{}", text),
        ActionOutcome::ToolCall { arguments, .. } => {
            let report: ReportArgs = serde_json::from_str(&arguments)
                .context("report arguments did not parse")?;
            println!("{}", report.value);
        }
        ActionOutcome::Unresolved => bail!("no extracted information in crawl response"),
    }

    Ok(())
}

/// Fetch the page text with a text browser.
async fn fetch_page(url: &str) -> Result<String> {
    let output = tokio::process::Command::new("lynx")
        .arg("-dump")
        .arg(url)
        .output()
        .await
        .context("failed to run lynx; is it installed?")?;

    if !output.status.success() {
        bail!(
            "lynx exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
