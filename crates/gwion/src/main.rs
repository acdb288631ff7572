//! Gwion - a natural-language shell assistant.
//!
//! Main entry point for the Gwion CLI. Each subcommand emits exactly one
//! line of the stdout protocol the surrounding shell integration consumes;
//! the wrapper is expected to invoke `primary` first and feed `crawl_web` /
//! `gen_image` their carry-over JSON from its output.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{Context, crawl_web, gen_image, hydrate, primary};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// Gwion - a natural-language shell assistant
#[derive(Parser)]
#[command(name = "gwion")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// API base URL override (for testing)
    #[arg(long, global = true, env = "OPENAI_API_BASE")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify a prompt into a single action line
    Primary(primary::PrimaryArgs),

    /// Execute the crawl phase of a crawl_web action
    #[command(name = "crawl_web")]
    CrawlWeb(crawl_web::CrawlWebArgs),

    /// Execute the image-generation phase of a gen_image action
    #[command(name = "gen_image")]
    GenImage(gen_image::GenImageArgs),

    /// Re-record the classification fixture snapshot (offline utility)
    #[command(hide = true)]
    Hydrate(hydrate::HydrateArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing — stderr (human-readable) + rotating JSON file.
    // Stdout carries the action-line protocol and must stay clean.
    let filter = if cli.verbose {
        "gwion=debug,gwion_agent=debug,gwion_llm=debug,info"
    } else {
        "gwion=warn,gwion_agent=warn,gwion_llm=warn,warn"
    };

    let log_dir = dirs::config_dir()
        .map(|d| d.join("gwion").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));
    let file_appender = tracing_appender::rolling::daily(&log_dir, "gwion.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    "gwion=trace,gwion_agent=trace,gwion_llm=trace,info",
                )),
        )
        .init();

    let ctx = Context {
        api_base: cli.api_base,
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Primary(args) => primary::run(args, &ctx).await,
        Commands::CrawlWeb(args) => crawl_web::run(args, &ctx).await,
        Commands::GenImage(args) => gen_image::run(args, &ctx).await,
        Commands::Hydrate(args) => hydrate::run(args, &ctx).await,
    }
}
