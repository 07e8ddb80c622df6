//! Streaming completion decode
//!
//! The completion endpoint answers with an SSE stream of OpenAI-style chunk
//! frames. This module decodes those frames into a lazy sequence of
//! cumulative text snapshots: each decoded delta is appended to a running
//! accumulator and the whole message-so-far is emitted, never just the delta.
//! The accumulator is monotone within one response and nothing outlives the
//! call; dropping the stream closes the underlying connection.

use std::pin::Pin;

use eventsource_stream::{Event, EventStreamError, Eventsource};
use futures::Stream;
use futures_util::{StreamExt, future};
use serde::Deserialize;

use crate::error::ChatError;

/// Lazy stream of cumulative assistant-text snapshots.
pub type CompletionStream = Pin<Box<dyn Stream<Item = Result<String, ChatError>> + Send>>;

/// Sentinel payload that terminates the stream without further output.
const DONE_SENTINEL: &str = "[DONE]";

/// One SSE frame payload, shaped like an OpenAI chat-completion chunk.
#[derive(Debug, Deserialize)]
struct StreamChunk {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Option<StreamDelta>,
}

#[derive(Debug, Deserialize)]
struct StreamDelta {
    content: Option<String>,
}

impl StreamChunk {
    /// Delta text of the first choice, if any.
    fn delta_text(&self) -> Option<&str> {
        self.choices
            .first()?
            .delta
            .as_ref()?
            .content
            .as_deref()
            .filter(|content| !content.is_empty())
    }
}

/// Per-call decode state.
#[derive(Default)]
struct Accumulator {
    partial: String,
    failed: bool,
}

type SseItem = Result<Event, EventStreamError<reqwest::Error>>;

/// Advance the accumulator with one SSE item.
///
/// Outer `None` terminates the stream; inner `None` means the frame produced
/// no output. Malformed frames are skipped, not surfaced.
fn step(state: &mut Accumulator, item: SseItem) -> Option<Option<Result<String, ChatError>>> {
    if state.failed {
        return None;
    }

    let event = match item {
        Ok(event) => event,
        Err(error) => {
            // One terminal error item, then the stream ends.
            state.failed = true;
            return Some(Some(Err(ChatError::StreamError(format!(
                "SSE error: {error}"
            )))));
        }
    };

    let data = event.data.trim();
    if data == DONE_SENTINEL {
        return None;
    }
    if data.is_empty() {
        return Some(None);
    }

    match serde_json::from_str::<StreamChunk>(data) {
        Ok(chunk) => match chunk.delta_text() {
            Some(delta) => {
                state.partial.push_str(delta);
                Some(Some(Ok(state.partial.clone())))
            }
            None => Some(None),
        },
        Err(error) => {
            tracing::debug!(%error, frame = data, "skipping malformed stream frame");
            Some(None)
        }
    }
}

/// Send a prepared streaming request and decode the SSE response.
///
/// A connection failure or non-success status is returned as a typed error
/// before any snapshot is emitted.
pub(crate) async fn completion_snapshot_stream(
    request_builder: reqwest::RequestBuilder,
) -> Result<CompletionStream, ChatError> {
    let response = request_builder
        .send()
        .await
        .map_err(|e| ChatError::HttpError(format!("Failed to send request: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ChatError::ApiError {
            code: status.as_u16(),
            message,
        });
    }

    let stream = response
        .bytes_stream()
        .eventsource()
        .scan(Accumulator::default(), |state, item| {
            future::ready(step(state, item))
        })
        .filter_map(future::ready);

    Ok(Box::pin(stream))
}
