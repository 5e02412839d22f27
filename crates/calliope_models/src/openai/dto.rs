//! Wire types for the chat completions API.

use serde::{Deserialize, Serialize};

/// One message in the provider's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Sender role: "system", "user", or "assistant"
    pub role: String,
    /// Message text
    pub content: String,
}

/// Request body for `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,
    /// Ordered conversation transcript
    pub messages: Vec<ChatMessage>,
    /// Whether to stream the reply as server-sent events
    pub stream: bool,
    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Incremental content inside a streamed chunk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ChunkDelta {
    /// Partial text, absent on role-only or final chunks
    #[serde(default)]
    pub content: Option<String>,
}

/// One choice inside a streamed chunk.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChunkChoice {
    /// The incremental delta
    #[serde(default)]
    pub delta: ChunkDelta,
    /// Why generation stopped, present on the last content chunk
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// One server-sent event payload of a streamed reply.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatChunk {
    /// Streamed choices (the client uses the first)
    pub choices: Vec<ChunkChoice>,
}
