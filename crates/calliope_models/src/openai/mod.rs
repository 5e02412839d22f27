//! OpenAI-compatible chat completions client.

mod client;
mod conversion;
mod dto;
mod sse;

pub use client::OpenAiClient;
pub use conversion::to_chat_messages;
pub use dto::{ChatChunk, ChatMessage, ChatRequest};
pub use sse::{SsePayload, parse_sse_line};
