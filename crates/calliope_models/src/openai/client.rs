//! OpenAI-compatible chat completions client.

use super::conversion::to_chat_messages;
use super::dto::ChatRequest;
use super::sse::{SsePayload, parse_sse_line};
use async_trait::async_trait;
use calliope_core::{GenerateRequest, GenerateResponse};
use calliope_error::{
    CalliopeResult, ConfigError, GenerationError, GenerationErrorKind, HttpError,
};
use calliope_interface::{StoryDriver, StreamChunk, Streaming};
use futures_util::{StreamExt, stream::Stream};
use std::pin::Pin;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Chat completions client for any OpenAI-compatible endpoint.
///
/// `generate` requests a streamed reply and folds the fragments into one
/// complete text before returning, so a failed stream commits nothing.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Creates a new client from the environment.
    ///
    /// Reads `OPENAI_API_KEY`, and `OPENAI_BASE_URL` when set (for
    /// compatible providers and test servers).
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not set or the HTTP client cannot
    /// be initialized.
    #[instrument(skip_all)]
    pub fn new(model: impl Into<String>) -> CalliopeResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|e| ConfigError::new(format!("OPENAI_API_KEY not set: {}", e)))?;
        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_api_key(api_key, model).map(|c| c.with_base_url(base_url))
    }

    /// Creates a new client with a specific API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> CalliopeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
        })
    }

    /// Overrides the service base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn send(&self, req: &GenerateRequest) -> CalliopeResult<reqwest::Response> {
        let body = ChatRequest {
            model: req.model.clone().unwrap_or_else(|| self.model.clone()),
            messages: to_chat_messages(&req.messages),
            stream: true,
            max_tokens: req.max_tokens,
            temperature: req.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(url = %url, messages = body.messages.len(), "Sending chat completions request");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::Transport(format!(
                    "request failed: {}",
                    e
                )))
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::new(GenerationErrorKind::Api { status, message }).into());
        }

        Ok(response)
    }
}

#[async_trait]
impl StoryDriver for OpenAiClient {
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> CalliopeResult<GenerateResponse> {
        let response = self.send(req).await?;

        let mut stream = response.bytes_stream();
        let mut buf = String::new();
        let mut text = String::new();

        while let Some(chunk) = stream.next().await {
            let bytes = chunk.map_err(|e| {
                GenerationError::new(GenerationErrorKind::Transport(format!(
                    "stream interrupted: {}",
                    e
                )))
            })?;
            buf.push_str(&String::from_utf8_lossy(&bytes));

            while let Some(pos) = buf.find('\n') {
                let line: String = buf.drain(..=pos).collect();
                if let Some(SsePayload::Delta(delta)) = parse_sse_line(&line)? {
                    text.push_str(&delta);
                }
            }
        }
        // Trailing partial line without a final newline
        if let Some(SsePayload::Delta(delta)) = parse_sse_line(&buf)? {
            text.push_str(&delta);
        }

        if text.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyReply).into());
        }

        debug!(reply_length = text.len(), "Accumulated streamed reply");
        Ok(GenerateResponse::new(text))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Streaming for OpenAiClient {
    #[instrument(skip(self, req))]
    async fn generate_stream(
        &self,
        req: &GenerateRequest,
    ) -> CalliopeResult<Pin<Box<dyn Stream<Item = CalliopeResult<StreamChunk>> + Send>>> {
        let response = self.send(req).await?;

        let stream = async_stream::try_stream! {
            let mut bytes_stream = response.bytes_stream();
            let mut buf = String::new();

            'recv: while let Some(chunk) = bytes_stream.next().await {
                let bytes = chunk.map_err(|e| {
                    GenerationError::new(GenerationErrorKind::Transport(format!(
                        "stream interrupted: {}",
                        e
                    )))
                })?;
                buf.push_str(&String::from_utf8_lossy(&bytes));

                while let Some(pos) = buf.find('\n') {
                    let line: String = buf.drain(..=pos).collect();
                    match parse_sse_line(&line)? {
                        Some(SsePayload::Delta(delta)) if !delta.is_empty() => {
                            yield StreamChunk::partial(delta);
                        }
                        Some(SsePayload::Done) => break 'recv,
                        _ => {}
                    }
                }
            }
            yield StreamChunk::done();
        };

        Ok(Box::pin(stream))
    }
}
