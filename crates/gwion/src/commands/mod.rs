//! CLI command handlers.

use anyhow::Result;
use gwion_llm::{ApiClient, ApiConfig};

pub mod crawl_web;
pub mod gen_image;
pub mod hydrate;
pub mod primary;

/// Default classification model, overridable per command.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-0125";

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// API base URL override, if any.
    pub api_base: Option<String>,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build an endpoint client from the environment plus any base override.
    pub fn api_client(&self) -> Result<ApiClient> {
        let mut config = ApiConfig::from_env()?;
        if let Some(ref base) = self.api_base {
            config = config.with_base_url(base.clone());
        }
        Ok(ApiClient::new(config)?)
    }
}
