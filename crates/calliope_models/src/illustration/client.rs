//! Illustration service client.

use super::decode::image_source_from_response;
use super::dto::IllustrationResponse;
use async_trait::async_trait;
use calliope_core::ImageSource;
use calliope_error::{CalliopeResult, ConfigError, HttpError};
use calliope_interface::Illustrator;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct IllustrationRequest<'a> {
    story: &'a str,
}

/// Client for the external illustration service.
///
/// Illustration is best-effort: every failure path (transport, non-2xx,
/// missing payload, decode) logs a warning and yields no image, so a turn is
/// never blocked on its picture.
#[derive(Debug, Clone)]
pub struct IllustrationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl IllustrationClient {
    /// Creates a new client from the environment.
    ///
    /// Reads the service endpoint from `ILLUSTRATION_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not configured or the HTTP client
    /// cannot be initialized.
    #[instrument(skip_all)]
    pub fn new() -> CalliopeResult<Self> {
        let endpoint = std::env::var("ILLUSTRATION_URL")
            .map_err(|e| ConfigError::new(format!("ILLUSTRATION_URL not set: {}", e)))?;
        Self::with_endpoint(endpoint)
    }

    /// Creates a new client with an explicit endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn with_endpoint(endpoint: impl Into<String>) -> CalliopeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Illustrator for IllustrationClient {
    #[instrument(skip(self, story), fields(story_length = story.len()))]
    async fn illustrate(&self, story: &str) -> Option<ImageSource> {
        let response = match self
            .client
            .post(&self.endpoint)
            .json(&IllustrationRequest { story })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "Illustration request failed, continuing without image");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                status = response.status().as_u16(),
                "Illustration service returned non-success, continuing without image"
            );
            return None;
        }

        let body: IllustrationResponse = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, "Illustration reply was not valid JSON, continuing without image");
                return None;
            }
        };

        match image_source_from_response(body) {
            Ok(source) => {
                debug!("Resolved illustration");
                Some(source)
            }
            Err(e) => {
                warn!(error = %e, "No usable illustration in reply, continuing without image");
                None
            }
        }
    }
}
