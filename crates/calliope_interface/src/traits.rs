//! Trait definitions for the engine's external collaborators.

use crate::StreamChunk;
use async_trait::async_trait;
use calliope_core::{GenerateRequest, GenerateResponse, ImageSource};
use calliope_error::CalliopeResult;
use futures_util::stream::Stream;
use std::pin::Pin;

/// Core trait every generation backend must implement.
///
/// `generate` returns one complete accumulated text; whether the provider
/// streams fragments underneath is the backend's business. A failed call must
/// leave no side effects, so the engine can keep the session unchanged and
/// let the caller retry.
#[async_trait]
pub trait StoryDriver: Send + Sync {
    /// Generate one complete reply for the given transcript.
    async fn generate(&self, req: &GenerateRequest) -> CalliopeResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4").
    fn model_name(&self) -> &str;
}

/// Trait for backends that expose their raw streaming replies.
#[async_trait]
pub trait Streaming: StoryDriver {
    /// Generate a streaming response.
    ///
    /// Returns a finite, non-restartable stream of chunks; consumers must
    /// drain it fully before committing any session side effects.
    async fn generate_stream(
        &self,
        req: &GenerateRequest,
    ) -> CalliopeResult<Pin<Box<dyn Stream<Item = CalliopeResult<StreamChunk>> + Send>>>;
}

/// Trait for illustration backends.
///
/// Illustration is a best-effort enhancement: any transport, status, or
/// decode failure degrades to `None` so narrative flow is never blocked on
/// image availability.
#[async_trait]
pub trait Illustrator: Send + Sync {
    /// Request an illustration for a turn's cleaned narrative text.
    async fn illustrate(&self, story: &str) -> Option<ImageSource>;
}

#[async_trait]
impl<I: Illustrator> Illustrator for Option<I> {
    async fn illustrate(&self, story: &str) -> Option<ImageSource> {
        match self {
            Some(inner) => inner.illustrate(story).await,
            None => None,
        }
    }
}

/// Trait for fetching referenced assets during document export.
#[async_trait]
pub trait AssetFetcher: Send + Sync {
    /// Fetch the bytes behind an image locator.
    async fn fetch(&self, url: &str) -> CalliopeResult<Vec<u8>>;
}
