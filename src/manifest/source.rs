//! ManifestSource trait for loading the version manifest from various places

#[cfg(test)]
use mockall::automock;

use crate::manifest::types::VersionManifest;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Manifest not found: {0}")]
    NotFound(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Malformed manifest: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for loading the version manifest
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ManifestSource: Send + Sync {
    /// Human-readable location of this source, for log messages
    fn describe(&self) -> String;

    /// Loads the manifest from the source
    ///
    /// # Returns
    /// * `Ok(VersionManifest)` - Entries in dropdown order
    /// * `Err(SourceError)` - If the load fails
    async fn fetch_manifest(&self) -> Result<VersionManifest, SourceError>;
}
