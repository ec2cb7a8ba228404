//! Version change notification payload

use serde::Serialize;

use crate::manifest::types::VersionManifest;
use crate::switch::target::{UrlMode, compute_target_url};

/// Payload emitted when a version is selected, for other tooling to observe
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VersionChanged {
    /// Selected version id
    pub version: String,
    /// Display name of the selected version
    pub version_name: String,
    /// URL of the same page under the selected version
    pub new_url: String,
}

impl VersionChanged {
    /// Builds the payload for a target version and computed URL
    ///
    /// The display name falls back to the raw id when the target is not
    /// in the manifest.
    pub fn new(manifest: &VersionManifest, target: &str, new_url: String) -> Self {
        let version_name = manifest
            .display_name(target)
            .unwrap_or(target)
            .to_string();

        Self {
            version: target.to_string(),
            version_name,
            new_url,
        }
    }
}

/// Computes the outcome of selecting a version
pub fn select_version(
    path: &str,
    origin: &str,
    mode: UrlMode,
    manifest: &VersionManifest,
    target: &str,
) -> VersionChanged {
    let new_url = compute_target_url(path, origin, mode, manifest, target);
    VersionChanged::new(manifest, target, new_url)
}
