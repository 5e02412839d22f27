//! Request and response types for the generation service.

use crate::Message;
use serde::{Deserialize, Serialize};

/// Generic generation request, independent of provider wire format.
///
/// # Examples
///
/// ```
/// use calliope_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::user("Hello!")])
///     .max_tokens(Some(100))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 1);
/// assert_eq!(request.max_tokens, Some(100));
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder,
)]
#[builder(default)]
pub struct GenerateRequest {
    /// The conversation transcript to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Start building a request.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The accumulated reply from one generation cycle.
///
/// Whether the collaborator streams fragments or sends a single payload, the
/// client folds the reply into one complete text before the cycle's side
/// effects commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The complete generated text
    pub text: String,
}

impl GenerateResponse {
    /// Wrap an accumulated reply.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
