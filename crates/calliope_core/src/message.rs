//! Message types for the conversation transcript.

use crate::Role;
use serde::{Deserialize, Serialize};

/// One message in a session transcript.
///
/// The transcript is append-only and replayed to the generation service on
/// every cycle to maintain narrative continuity.
///
/// # Examples
///
/// ```
/// use calliope_core::{Message, Role};
///
/// let message = Message::user("I want to create a fantasy story.");
///
/// assert_eq!(message.role, Role::User);
/// assert!(message.content.contains("fantasy"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
}

impl Message {
    /// Create a message with an explicit role.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }
}
