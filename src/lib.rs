//! # novita-chat
//!
//! Streaming chat interface for the Novita AI OpenAI-compatible API.
//!
//! Three pieces compose linearly: a message builder turns prior turns, the
//! newest user input, and an optional system prompt into a provider-shaped
//! message list; a streaming client submits that list and decodes the SSE
//! response into cumulative text snapshots; and a registry binds a model
//! name, a credential, and a prompt persona into a ready-to-launch
//! [`ChatInterface`].
//!
//! # Example
//!
//! ```rust,no_run
//! use novita_chat::{InterfaceOptions, registry};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), novita_chat::ChatError> {
//! let mut interface = registry(
//!     "meta-llama/llama-3.1-8b-instruct",
//!     None, // falls back to NOVITA_API_KEY
//!     false,
//!     InterfaceOptions::new().with_title("novita-chat"),
//! )?;
//! interface.launch().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod interface;
pub mod media;
pub mod messages;
pub mod prompts;
pub mod registry;
pub mod streaming;
pub mod types;

pub use client::{DEFAULT_MAX_TOKENS, NOVITA_API_BASE_URL, NovitaClient, NovitaConfig};
pub use error::ChatError;
pub use interface::{ChatInterface, InterfaceOptions, ResponseStream};
pub use messages::{build_chat_messages, normalize_user_input};
pub use prompts::PromptVariant;
pub use registry::{
    NOVITA_API_KEY_ENV, Pipeline, classify_pipeline, registry, registry_with_prompt,
    resolve_api_key,
};
pub use streaming::CompletionStream;
pub use types::{
    ChatMessage, ContentPart, ConversationTurn, ImageUrl, MessageContent, MessageRole, UserInput,
};
