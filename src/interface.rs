//! Interactive chat interface
//!
//! [`ChatInterface`] binds a streaming client, a system prompt, and the
//! conversation history into a ready-to-run chat surface. One message in,
//! one stream of cumulative snapshots out; transport failures are flattened
//! into a single user-visible `Error: <description>` snapshot so the
//! interface stays usable for the next message.

use std::pin::Pin;

use futures::Stream;
use futures_util::StreamExt;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::client::NovitaClient;
use crate::error::ChatError;
use crate::messages::build_chat_messages;
use crate::types::{ConversationTurn, UserInput};

/// Stream of user-visible response snapshots for one message.
pub type ResponseStream = Pin<Box<dyn Stream<Item = String> + Send>>;

/// Pass-through display options for the interface.
#[derive(Debug, Clone, Default)]
pub struct InterfaceOptions {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl InterfaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// An interactive chat widget bound to a streaming completion client.
pub struct ChatInterface {
    client: NovitaClient,
    system_prompt: String,
    history: Vec<ConversationTurn>,
    options: InterfaceOptions,
}

impl ChatInterface {
    /// Bind a client and system prompt into a fresh interface.
    pub fn new(
        client: NovitaClient,
        system_prompt: impl Into<String>,
        options: InterfaceOptions,
    ) -> Self {
        Self {
            client,
            system_prompt: system_prompt.into(),
            history: Vec::new(),
            options,
        }
    }

    /// Conversation history so far.
    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    /// Forget the conversation so far.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Append a finished exchange to the history.
    pub fn record_turn(&mut self, user: UserInput, assistant: Option<String>) {
        self.history.push(ConversationTurn { user, assistant });
    }

    /// Submit one user message and stream back cumulative response snapshots.
    ///
    /// Input normalization failures (unsupported attachment kinds) are
    /// returned synchronously, before any network activity, and are fatal to
    /// this single message only. Transport and API failures surface inside
    /// the stream as one terminal `Error: <description>` snapshot.
    pub fn send(&self, input: &UserInput) -> Result<ResponseStream, ChatError> {
        let messages = build_chat_messages(input, &self.history, Some(&self.system_prompt))?;
        let client = self.client.clone();

        let stream = async_stream::stream! {
            match client.chat_stream(messages).await {
                Ok(mut completion) => {
                    while let Some(item) = completion.next().await {
                        match item {
                            Ok(snapshot) => yield snapshot,
                            Err(error) => {
                                tracing::warn!(%error, "chat stream failed");
                                yield format!("Error: {error}");
                                break;
                            }
                        }
                    }
                }
                Err(error) => {
                    tracing::warn!(%error, "chat request failed");
                    yield format!("Error: {error}");
                }
            }
        };

        Ok(Box::pin(stream))
    }

    /// Run the interactive loop on stdin/stdout until EOF or `exit`/`quit`.
    ///
    /// Responses are printed incrementally as snapshots grow; each finished
    /// exchange is recorded into the history for the next turn.
    pub async fn launch(&mut self) -> Result<(), ChatError> {
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        if let Some(title) = &self.options.title {
            stdout.write_all(format!("{title}\n").as_bytes()).await?;
        }
        if let Some(description) = &self.options.description {
            stdout
                .write_all(format!("{description}\n").as_bytes())
                .await?;
        }

        loop {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == "exit" || line == "quit" {
                break;
            }

            let input = UserInput::text(line);
            let mut stream = match self.send(&input) {
                Ok(stream) => stream,
                Err(error) => {
                    stdout
                        .write_all(format!("Error: {error}\n").as_bytes())
                        .await?;
                    continue;
                }
            };

            let mut latest = String::new();
            while let Some(snapshot) = stream.next().await {
                // Snapshots grow monotonically except for a terminal error
                // replacement; print only what is new.
                match snapshot.strip_prefix(latest.as_str()) {
                    Some(suffix) => stdout.write_all(suffix.as_bytes()).await?,
                    None => {
                        stdout.write_all(b"\n").await?;
                        stdout.write_all(snapshot.as_bytes()).await?;
                    }
                }
                stdout.flush().await?;
                latest = snapshot;
            }
            stdout.write_all(b"\n").await?;

            let assistant = (!latest.is_empty()).then_some(latest);
            self.record_turn(input, assistant);
        }

        Ok(())
    }
}
