//! Message list construction
//!
//! Turns prior turns, the newest user input, and an optional system prompt
//! into the ordered message list the completion endpoint expects: system
//! message first (if any), history turns in chronological order, newest user
//! message last.

use crate::error::ChatError;
use crate::media;
use crate::types::{
    ChatMessage, ContentPart, ConversationTurn, MessageContent, MessageRole, UserInput,
};

/// Normalize user input into message content.
///
/// Plain text passes through. When attachments are present only the most
/// recent one is considered: supported image files are embedded as a data-URI
/// image block next to the text block, anything else fails fast. An input
/// with an empty attachment list degenerates to its text field.
pub fn normalize_user_input(input: &UserInput) -> Result<MessageContent, ChatError> {
    match input {
        UserInput::Text(text) => Ok(MessageContent::Text(text.clone())),
        UserInput::WithFiles { text, files } => match files.last() {
            None => Ok(MessageContent::Text(text.clone())),
            Some(path) => {
                let data_uri = media::image_data_uri(path)?;
                Ok(MessageContent::Parts(vec![
                    ContentPart::text(text.clone()),
                    ContentPart::image_url(data_uri),
                ]))
            }
        },
    }
}

/// Build the ordered message list for one completion request.
///
/// Each history entry becomes a user message immediately followed by an
/// assistant message; the assistant message is omitted when that side of the
/// turn is absent. History user sides are replayed in their text form.
pub fn build_chat_messages(
    input: &UserInput,
    history: &[ConversationTurn],
    system_prompt: Option<&str>,
) -> Result<Vec<ChatMessage>, ChatError> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 2);

    if let Some(prompt) = system_prompt {
        messages.push(ChatMessage::system(prompt));
    }

    for turn in history {
        messages.push(ChatMessage::user(turn.user.display_text()));
        if let Some(assistant) = &turn.assistant {
            messages.push(ChatMessage::assistant(assistant.clone()));
        }
    }

    messages.push(ChatMessage {
        role: MessageRole::User,
        content: normalize_user_input(input)?,
    });

    Ok(messages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn history_of(n: usize) -> Vec<ConversationTurn> {
        (0..n)
            .map(|i| ConversationTurn::complete(format!("q{i}"), format!("a{i}")))
            .collect()
    }

    #[test]
    fn length_matches_complete_history() {
        let history = history_of(3);
        let input = UserInput::text("latest");

        let with_system =
            build_chat_messages(&input, &history, Some("be helpful")).unwrap();
        assert_eq!(with_system.len(), 3 * 2 + 1 + 1);

        let without_system = build_chat_messages(&input, &history, None).unwrap();
        assert_eq!(without_system.len(), 3 * 2 + 1);
    }

    #[test]
    fn ordering_invariant_holds() {
        let history = vec![ConversationTurn::complete("first", "reply")];
        let input = UserInput::text("second");

        let messages = build_chat_messages(&input, &history, Some("sys")).unwrap();
        let roles: Vec<MessageRole> = messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::System,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User
            ]
        );
        assert_eq!(messages[0].content.text(), Some("sys"));
        assert_eq!(messages[3].content.text(), Some("second"));
    }

    #[test]
    fn absent_assistant_side_emits_single_message() {
        let history = vec![
            ConversationTurn::complete("q0", "a0"),
            ConversationTurn::pending("q1"),
        ];
        let messages =
            build_chat_messages(&UserInput::text("q2"), &history, None).unwrap();
        // q0, a0, q1, q2
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2].role, MessageRole::User);
        assert_eq!(messages[2].content.text(), Some("q1"));
        assert_eq!(messages[3].content.text(), Some("q2"));
    }

    #[test]
    fn history_with_attachments_replays_text_form() {
        let history = vec![ConversationTurn::complete(
            UserInput::with_files("look at this", vec![PathBuf::from("x.png")]),
            "nice picture",
        )];
        let messages =
            build_chat_messages(&UserInput::text("thanks"), &history, None).unwrap();
        assert_eq!(messages[0].content, MessageContent::Text("look at this".into()));
    }

    #[test]
    fn empty_attachment_list_degenerates_to_text() {
        let input = UserInput::with_files("no files really", vec![]);
        let content = normalize_user_input(&input).unwrap();
        assert_eq!(content, MessageContent::Text("no files really".into()));
    }

    #[test]
    fn only_most_recent_attachment_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.png");
        let second = dir.path().join("second.gif");
        std::fs::write(&first, b"one").unwrap();
        std::fs::write(&second, b"two").unwrap();

        let input = UserInput::with_files("both", vec![first, second]);
        let content = normalize_user_input(&input).unwrap();
        let parts = content.as_parts().unwrap();
        assert_eq!(parts.len(), 2);
        match &parts[1] {
            ContentPart::ImageUrl { image_url } => {
                assert!(image_url.url.starts_with("data:image/gif;base64,"));
            }
            other => panic!("expected image part, got {other:?}"),
        }
    }

    #[test]
    fn unsupported_attachment_fails_fast() {
        let input = UserInput::with_files("bad", vec![PathBuf::from("scan.bmp")]);
        let err = build_chat_messages(&input, &[], Some("sys")).unwrap_err();
        assert!(matches!(err, ChatError::UnsupportedFileType(_)));
    }
}
