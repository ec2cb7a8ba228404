//! Manifest loading with graceful fallback
//!
//! Every failure mode collapses into the hardcoded single-entry fallback;
//! loading never fails.

use tracing::{info, warn};

use crate::manifest::source::ManifestSource;
use crate::manifest::types::VersionManifest;

/// Loads the manifest from the source, falling back to the single-entry
/// default on any failure. Never fails.
///
/// An empty manifest is treated like a failed load.
pub async fn load_or_fallback<S: ManifestSource + ?Sized>(source: &S) -> VersionManifest {
    match source.fetch_manifest().await {
        Ok(manifest) if manifest.is_empty() => {
            warn!(
                "Manifest at {} has no versions, using fallback",
                source.describe()
            );
            VersionManifest::fallback()
        }
        Ok(manifest) => {
            info!(
                "Loaded {} versions from {}",
                manifest.len(),
                source.describe()
            );
            manifest
        }
        Err(e) => {
            warn!(
                "Failed to load manifest from {}: {}, using fallback",
                source.describe(),
                e
            );
            VersionManifest::fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::source::{MockManifestSource, SourceError};
    use indexmap::IndexMap;

    fn manifest(entries: &[(&str, &str)]) -> VersionManifest {
        let versions: IndexMap<String, String> = entries
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        VersionManifest::new(versions)
    }

    #[tokio::test]
    async fn load_or_fallback_returns_manifest_from_source() {
        let mut source = MockManifestSource::new();
        source
            .expect_describe()
            .return_const("test source".to_string());
        source
            .expect_fetch_manifest()
            .returning(|| Ok(manifest(&[("main", "latest version"), ("v1.0", "v1.0")])));

        let result = load_or_fallback(&source).await;

        assert_eq!(result.len(), 2);
        assert!(result.contains("v1.0"));
    }

    #[tokio::test]
    async fn load_or_fallback_absorbs_source_errors() {
        let mut source = MockManifestSource::new();
        source
            .expect_describe()
            .return_const("test source".to_string());
        source
            .expect_fetch_manifest()
            .returning(|| Err(SourceError::NotFound("test source".to_string())));

        let result = load_or_fallback(&source).await;

        assert_eq!(result, VersionManifest::fallback());
    }

    #[tokio::test]
    async fn load_or_fallback_replaces_empty_manifest() {
        let mut source = MockManifestSource::new();
        source
            .expect_describe()
            .return_const("test source".to_string());
        source.expect_fetch_manifest().returning(|| Ok(manifest(&[])));

        let result = load_or_fallback(&source).await;

        assert_eq!(result, VersionManifest::fallback());
    }
}
