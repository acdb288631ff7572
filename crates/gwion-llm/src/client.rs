//! HTTP client for the completion and image-generation endpoints.
//!
//! One plain `POST` per request: no retries, no pooling policy, no streaming.
//! A hung endpoint is bounded by the configured request timeout.

use std::time::Duration;

use reqwest::header;
use serde::Serialize;

use crate::error::{LlmError, Result};
use crate::types::{CompletionPayload, CompletionResponse, ImageGenerationPayload, ImageGenerationResponse};

/// Default API base URL.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default timeout for requests.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Environment variable supplying the API credential.
const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the API base URL.
const API_BASE_VAR: &str = "OPENAI_API_BASE";

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration for the endpoint client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bearer credential. Optional so stub endpoints can run without one.
    pub api_key: Option<String>,

    /// Base URL, overridable for testing.
    pub base_url: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Create a config with the given credential and production defaults.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Create a config from the environment.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_API_BASE` optionally overrides
    /// the endpoint.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .map_err(|_| LlmError::Config(format!("{} environment variable not set", API_KEY_VAR)))?;
        let mut config = Self::new(api_key);
        if let Ok(base) = std::env::var(API_BASE_VAR) {
            config.base_url = base;
        }
        Ok(config)
    }

    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// Client for the chat-completion and image-generation endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Create a client from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(ApiConfig::from_env()?)
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }

    fn images_url(&self) -> String {
        format!("{}/images/generations", self.config.base_url)
    }

    fn add_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder.header(header::CONTENT_TYPE, "application/json");

        if let Some(ref api_key) = self.config.api_key {
            builder.header(header::AUTHORIZATION, format!("Bearer {}", api_key))
        } else {
            builder
        }
    }

    /// Send a classification request and parse the completion response.
    pub async fn complete(&self, payload: &CompletionPayload) -> Result<CompletionResponse> {
        tracing::debug!(
            model = %payload.model,
            messages = payload.messages.len(),
            tools = payload.tools.len(),
            "sending completion request"
        );
        self.post_json(self.completions_url(), payload).await
    }

    /// Send an image-generation request and parse the response.
    pub async fn generate_images(
        &self,
        payload: &ImageGenerationPayload,
    ) -> Result<ImageGenerationResponse> {
        tracing::debug!(
            model = %payload.model,
            n = payload.n,
            size = %payload.size,
            "sending image-generation request"
        );
        self.post_json(self.images_url(), payload).await
    }

    // Structured error objects ride non-2xx statuses with the same body
    // shape, so the status line is never branched on: the body parses
    // unconditionally and errors surface through the response's `error`
    // field.
    async fn post_json<B, R>(&self, url: String, body: &B) -> Result<R>
    where
        B: Serialize,
        R: serde::de::DeserializeOwned,
    {
        let response = self
            .add_headers(self.http.post(url))
            .json(body)
            .send()
            .await?;

        let bytes = response.text().await?;
        Ok(serde_json::from_str(&bytes)?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
