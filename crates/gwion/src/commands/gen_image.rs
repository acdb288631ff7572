//! Image command - execute the generation phase of a gen_image action.

use anyhow::{Result, bail};
use clap::Args;
use console::Style;

use gwion_agent::parse_image_args;

use super::Context;

/// Arguments for the gen_image command.
#[derive(Args, Debug)]
pub struct GenImageArgs {
    /// Carry-over arguments JSON from the classification phase
    #[arg(long)]
    pub json_params: String,
}

/// Run the gen_image command.
pub async fn run(args: GenImageArgs, ctx: &Context) -> Result<()> {
    let mut params = parse_image_args(&args.json_params)?;

    let dim = Style::new().dim();

    // dall-e-3 generates a single image per request.
    if params.model == "dall-e-3" && params.n > 1 {
        println!(
            "{}",
            dim.apply_to("Using dall-e-3, which limits parallel requests to 1")
        );
        params.n = 1;
    }

    println!(
        "{}",
        dim.apply_to(format!(
            "Generating {} image(s) using [{}], size: [{}] with prompt: {}",
            params.n, params.model, params.size, params.prompt
        ))
    );

    let response = ctx.api_client()?.generate_images(&params).await?;

    if let Some(message) = response.error_message() {
        bail!("image generation failed: {message}");
    }

    // One best-effort open per URL, order preserved; a failure to open one
    // does not abort the others.
    for url in response.urls() {
        if let Err(e) = open::that_detached(url) {
            tracing::warn!(url, error = %e, "failed to open generated image");
        }
    }

    Ok(())
}
