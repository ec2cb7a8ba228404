//! Filesystem manifest source for repository checkouts and local builds

use std::path::{Path, PathBuf};

use crate::manifest::source::{ManifestSource, SourceError};
use crate::manifest::types::VersionManifest;

/// Loads the manifest from a JSON file, typically `.github/versions.json`
pub struct FileManifestSource {
    path: PathBuf,
}

impl FileManifestSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl ManifestSource for FileManifestSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_manifest(&self) -> Result<VersionManifest, SourceError> {
        if !self.path.exists() {
            return Err(SourceError::NotFound(self.path.display().to_string()));
        }

        let content = tokio::fs::read_to_string(&self.path).await?;

        let manifest: VersionManifest =
            serde_json::from_str(&content).map_err(|e| SourceError::Malformed(e.to_string()))?;

        Ok(manifest)
    }
}
