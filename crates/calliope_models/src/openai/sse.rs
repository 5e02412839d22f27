//! Server-sent event parsing for streamed chat completions.
//!
//! The streaming endpoint delivers `data: {json}` lines separated by blank
//! lines and terminated by a `data: [DONE]` sentinel. Chunks arrive on
//! arbitrary byte boundaries, so callers buffer bytes and hand complete lines
//! to [`parse_sse_line`].

use super::dto::ChatChunk;
use calliope_error::{GenerationError, GenerationErrorKind, GenerationResult};

/// What one SSE line contributed to the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SsePayload {
    /// A fragment of generated text (possibly empty)
    Delta(String),
    /// The end-of-stream sentinel
    Done,
}

/// Parse one line of a streamed reply.
///
/// Blank lines and non-`data:` lines (SSE comments, event names) yield
/// `Ok(None)`.
///
/// # Errors
///
/// Returns a malformed-stream error when a `data:` payload is not valid
/// chunk JSON.
///
/// # Examples
///
/// ```
/// use calliope_models::openai::{parse_sse_line, SsePayload};
///
/// let line = r#"data: {"choices":[{"delta":{"content":"Once"}}]}"#;
/// assert_eq!(
///     parse_sse_line(line).unwrap(),
///     Some(SsePayload::Delta("Once".to_string()))
/// );
/// assert_eq!(parse_sse_line("data: [DONE]").unwrap(), Some(SsePayload::Done));
/// assert_eq!(parse_sse_line("").unwrap(), None);
/// ```
pub fn parse_sse_line(line: &str) -> GenerationResult<Option<SsePayload>> {
    let line = line.trim();
    let Some(payload) = line.strip_prefix("data:") else {
        return Ok(None);
    };
    let payload = payload.trim();

    if payload == "[DONE]" {
        return Ok(Some(SsePayload::Done));
    }

    let chunk: ChatChunk = serde_json::from_str(payload).map_err(|e| {
        GenerationError::new(GenerationErrorKind::MalformedStream(format!(
            "bad chunk JSON: {}",
            e
        )))
    })?;

    let delta = chunk
        .choices
        .first()
        .and_then(|c| c.delta.content.clone())
        .unwrap_or_default();

    Ok(Some(SsePayload::Delta(delta)))
}
