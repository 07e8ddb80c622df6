//! Novita AI client configuration and streaming chat client

use serde_json::json;

use crate::error::ChatError;
use crate::streaming::{self, CompletionStream};
use crate::types::ChatMessage;

/// Base URL for the Novita AI OpenAI-compatible API.
pub const NOVITA_API_BASE_URL: &str = "https://api.novita.ai/v3/openai";

/// Default completion length cap per request.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Configuration for one Novita chat client.
///
/// Constructed once and not mutated afterwards; every request is scoped to a
/// single config instance.
#[derive(Debug, Clone)]
pub struct NovitaConfig {
    /// API key for authentication
    pub api_key: String,
    /// Base URL for the provider
    pub base_url: String,
    /// Model to use
    pub model: String,
    /// Maximum number of completion tokens per request
    pub max_tokens: u32,
}

impl NovitaConfig {
    /// Create a new configuration with the default base URL and token cap.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: NOVITA_API_BASE_URL.to_string(),
            model: model.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Override the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the completion token cap
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ChatError> {
        if self.api_key.is_empty() {
            return Err(ChatError::ConfigurationError(
                "API key cannot be empty".to_string(),
            ));
        }

        if self.model.is_empty() {
            return Err(ChatError::ConfigurationError(
                "Model cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ChatError::ConfigurationError(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

/// Streaming chat-completion client for Novita AI.
#[derive(Debug, Clone)]
pub struct NovitaClient {
    config: NovitaConfig,
    http_client: reqwest::Client,
}

impl NovitaClient {
    /// Create a client with a fresh HTTP client.
    pub fn new(config: NovitaConfig) -> Result<Self, ChatError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client reusing an existing HTTP client.
    pub fn with_http_client(
        config: NovitaConfig,
        http_client: reqwest::Client,
    ) -> Result<Self, ChatError> {
        config.validate()?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &NovitaConfig {
        &self.config
    }

    /// Open a streaming completion request for a fully-formed message list.
    ///
    /// Returns a lazy stream of cumulative text snapshots. The stream is
    /// restartable per call but not resumable mid-stream; each invocation
    /// owns its own connection and accumulator.
    pub async fn chat_stream(
        &self,
        messages: Vec<ChatMessage>,
    ) -> Result<CompletionStream, ChatError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let message_count = messages.len();
        let body = json!({
            "model": self.config.model,
            "messages": messages,
            "stream": true,
            "max_tokens": self.config.max_tokens,
        });

        tracing::debug!(
            model = %self.config.model,
            message_count,
            "sending streaming chat completion request"
        );

        let request_builder = self
            .http_client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body);

        streaming::completion_snapshot_stream(request_builder).await
    }
}
