//! Chat message types
//!
//! These types serialize directly into the OpenAI-compatible wire shape used
//! by the Novita chat-completions endpoint, so the request body can embed
//! them without a separate transformation pass.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Message role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

/// Image reference carried inside an `image_url` content part.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageUrl {
    pub url: String,
}

/// Content part for multimodal messages.
///
/// Serializes to `{"type": "text", "text": ...}` and
/// `{"type": "image_url", "image_url": {"url": ...}}` respectively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text content
    Text { text: String },
    /// Image content, referenced by URL or embedded as a data URI
    ImageUrl { image_url: ImageUrl },
}

impl ContentPart {
    /// Create a text content part
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Create an image content part from a URL or data URI
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }

    /// Get the text content if this is a text part
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text } => Some(text),
            _ => None,
        }
    }

    /// Check if this is an image part
    pub fn is_image(&self) -> bool {
        matches!(self, Self::ImageUrl { .. })
    }
}

/// Message content - plain text or a list of typed content blocks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text
    Text(String),
    /// Multimodal content
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Extract text content if available
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Parts(parts) => parts.iter().find_map(ContentPart::as_text),
        }
    }

    /// Get multimodal content parts if this is multimodal content
    pub fn as_parts(&self) -> Option<&[ContentPart]> {
        match self {
            Self::Parts(parts) => Some(parts),
            _ => None,
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: MessageRole,
    pub content: MessageContent,
}

impl ChatMessage {
    /// Creates a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::System,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Creates a user message with plain text content
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Text(content.into()),
        }
    }

    /// Creates a user message with multimodal content
    pub fn user_with_parts(parts: Vec<ContentPart>) -> Self {
        Self {
            role: MessageRole::User,
            content: MessageContent::Parts(parts),
        }
    }

    /// Creates an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: MessageRole::Assistant,
            content: MessageContent::Text(content.into()),
        }
    }
}

/// User-side input for one conversation step: plain text, or text plus
/// file attachments picked in the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput {
    /// Plain text
    Text(String),
    /// Text with zero or more attached files
    WithFiles { text: String, files: Vec<PathBuf> },
}

impl UserInput {
    /// Create a plain text input
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Create an input carrying file attachments
    pub fn with_files(text: impl Into<String>, files: Vec<PathBuf>) -> Self {
        Self::WithFiles {
            text: text.into(),
            files,
        }
    }

    /// Text form of this input, used when history entries are replayed as
    /// plain user messages.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::WithFiles { text, .. } => text,
        }
    }
}

impl From<&str> for UserInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for UserInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// One prior exchange: the user side and, if the assistant answered, its reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationTurn {
    pub user: UserInput,
    pub assistant: Option<String>,
}

impl ConversationTurn {
    /// A turn with both sides present
    pub fn complete(user: impl Into<UserInput>, assistant: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            assistant: Some(assistant.into()),
        }
    }

    /// A turn whose assistant side is still absent
    pub fn pending(user: impl Into<UserInput>) -> Self {
        Self {
            user: user.into(),
            assistant: None,
        }
    }
}
