//! HTTP manifest source for deployed documentation sites

use std::time::Duration;

use tracing::warn;

use crate::config::{FETCH_TIMEOUT_MS, MANIFEST_STATIC_PATH};
use crate::manifest::source::{ManifestSource, SourceError};
use crate::manifest::types::VersionManifest;

/// Loads `_static/versions.json` from a deployed docs root over HTTP
pub struct HttpManifestSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpManifestSource {
    /// Creates a new source reading below the given docs root URL
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, FETCH_TIMEOUT_MS)
    }

    /// Creates a new source with a custom fetch timeout
    pub fn with_timeout(base_url: &str, timeout_ms: u64) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("version-switcher")
                .timeout(Duration::from_millis(timeout_ms))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ManifestSource for HttpManifestSource {
    fn describe(&self) -> String {
        format!("{}/{}", self.base_url, MANIFEST_STATIC_PATH)
    }

    async fn fetch_manifest(&self) -> Result<VersionManifest, SourceError> {
        let url = format!("{}/{}", self.base_url, MANIFEST_STATIC_PATH);

        let response = self.client.get(&url).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound(url));
        }

        if !status.is_success() {
            warn!("Manifest endpoint returned status {}: {}", status, url);
            return Err(SourceError::InvalidResponse(format!(
                "Unexpected status: {}",
                status
            )));
        }

        let manifest: VersionManifest = response.json().await.map_err(|e| {
            warn!("Failed to parse manifest response: {}", e);
            SourceError::Malformed(e.to_string())
        })?;

        Ok(manifest)
    }
}
