//! HTTP asset fetcher for referenced images.

use async_trait::async_trait;
use calliope_error::{CalliopeResult, HttpError};
use calliope_interface::AssetFetcher;
use std::time::Duration;
use tracing::{debug, instrument};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetches referenced image bytes over HTTP during document export.
#[derive(Debug, Clone)]
pub struct HttpAssetFetcher {
    client: reqwest::Client,
}

impl HttpAssetFetcher {
    /// Creates a new fetcher with a finite request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> CalliopeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> CalliopeResult<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("fetch failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(
                HttpError::with_status(response.status().as_u16(), "asset fetch rejected").into(),
            );
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(format!("fetch body failed: {}", e)))?;

        debug!(url = %url, size = bytes.len(), "Fetched asset");
        Ok(bytes.to_vec())
    }
}
