//! Conversions between Calliope types and the chat completions wire format.

use super::dto::ChatMessage;
use calliope_core::{Message, Role};

/// Convert a transcript to the provider's message format.
///
/// # Examples
///
/// ```
/// use calliope_core::Message;
/// use calliope_models::openai::to_chat_messages;
///
/// let wire = to_chat_messages(&[Message::user("Once upon a time")]);
/// assert_eq!(wire[0].role, "user");
/// ```
pub fn to_chat_messages(messages: &[Message]) -> Vec<ChatMessage> {
    messages
        .iter()
        .map(|m| ChatMessage {
            role: role_name(m.role).to_string(),
            content: m.content.clone(),
        })
        .collect()
}

fn role_name(role: Role) -> &'static str {
    match role {
        Role::System => "system",
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}
