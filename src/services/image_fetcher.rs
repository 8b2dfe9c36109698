use crate::error::ApiError;
use crate::models::ImageSource;
use std::time::Duration;

const MAX_REDIRECTS: usize = 10;

/// Resolves image sources to raw bytes, downloading URLs over HTTP(S).
#[derive(Clone)]
pub struct ImageFetcher {
    client: reqwest::Client,
    max_bytes: usize,
}

impl ImageFetcher {
    pub fn new(timeout: Duration, max_bytes: usize) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(concat!("brandframe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Internal(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, max_bytes })
    }

    /// Bytes for `source`; inline payloads pass straight through.
    pub async fn resolve(&self, source: ImageSource) -> Result<Vec<u8>, ApiError> {
        match source {
            ImageSource::Inline(bytes) => Ok(bytes),
            ImageSource::Url(url) => self.fetch(&url).await,
        }
    }

    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        tracing::debug!(url = %url, "Fetching image");

        let mut response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!(url = %url, error = %e, "Image request failed");
            ApiError::Fetch(format!("{url}: {e}"))
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Image request returned error status");
            return Err(ApiError::Fetch(format!("{url}: HTTP {}", status.as_u16())));
        }

        if let Some(len) = response.content_length() {
            if len as usize > self.max_bytes {
                return Err(ApiError::Fetch(format!(
                    "{url}: {len} bytes exceeds limit of {}",
                    self.max_bytes
                )));
            }
        }

        // Chunked responses carry no length, so enforce the cap while reading.
        let mut bytes = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| ApiError::Fetch(format!("{url}: {e}")))?
        {
            if bytes.len() + chunk.len() > self.max_bytes {
                tracing::warn!(url = %url, limit = self.max_bytes, "Image download exceeded size limit");
                return Err(ApiError::Fetch(format!(
                    "{url}: body exceeds limit of {} bytes",
                    self.max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        tracing::debug!(url = %url, size = bytes.len(), "Fetched image");
        Ok(bytes)
    }
}
