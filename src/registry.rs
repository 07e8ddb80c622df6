//! Registry / factory
//!
//! Resolves a model name, an optional explicit credential, and a prompt
//! variant into a ready-to-launch [`ChatInterface`]. All configuration
//! failures are raised here, synchronously, before any network activity.

use crate::client::{NovitaClient, NovitaConfig};
use crate::error::ChatError;
use crate::interface::{ChatInterface, InterfaceOptions};
use crate::prompts::PromptVariant;

/// Environment variable consulted when no explicit credential is supplied.
pub const NOVITA_API_KEY_ENV: &str = "NOVITA_API_KEY";

/// Task classification for a model.
///
/// A closed enum: the factory matches it exhaustively, so adding a variant
/// forces an explicit decision there instead of silently falling through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// Conversational chat completion
    Chat,
}

/// Classify the pipeline kind for a model name.
///
/// Every Novita model is treated as a chat model for now.
pub fn classify_pipeline(_model: &str) -> Pipeline {
    Pipeline::Chat
}

/// Resolve the API key: explicit token first, then the environment.
///
/// A missing credential is a hard configuration failure.
pub fn resolve_api_key(token: Option<String>) -> Result<String, ChatError> {
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        return Ok(token);
    }
    std::env::var(NOVITA_API_KEY_ENV)
        .ok()
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            ChatError::ConfigurationError(format!(
                "{NOVITA_API_KEY_ENV} environment variable is not set"
            ))
        })
}

/// Create a chat interface for a model on Novita AI.
///
/// `token` falls back to the `NOVITA_API_KEY` environment variable; `coder`
/// selects between the default assistant persona and the coder persona.
pub fn registry(
    model: &str,
    token: Option<String>,
    coder: bool,
    options: InterfaceOptions,
) -> Result<ChatInterface, ChatError> {
    registry_with_prompt(model, token, PromptVariant::from_coder_flag(coder), options)
}

/// Like [`registry`], with the prompt persona named explicitly.
pub fn registry_with_prompt(
    model: &str,
    token: Option<String>,
    variant: PromptVariant,
    options: InterfaceOptions,
) -> Result<ChatInterface, ChatError> {
    let api_key = resolve_api_key(token)?;
    let pipeline = classify_pipeline(model);

    tracing::info!(
        model,
        pipeline = ?pipeline,
        prompt = variant.name(),
        "registering chat interface"
    );

    let client = NovitaClient::new(NovitaConfig::new(api_key, model))?;
    match pipeline {
        Pipeline::Chat => Ok(ChatInterface::new(
            client,
            variant.system_prompt(),
            options,
        )),
    }
}
