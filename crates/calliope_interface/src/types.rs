//! Shared types for streaming generation.

use serde::{Deserialize, Serialize};

/// A chunk of streamed generation output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamChunk {
    /// Incremental text content.
    pub content: String,
    /// Whether this is the final chunk.
    pub is_final: bool,
}

impl StreamChunk {
    /// A non-final chunk carrying partial text.
    pub fn partial(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_final: false,
        }
    }

    /// The final, empty chunk marking end of stream.
    pub fn done() -> Self {
        Self {
            content: String::new(),
            is_final: true,
        }
    }
}
