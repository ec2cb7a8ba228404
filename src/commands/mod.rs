//! CLI subcommand implementations

pub mod current;
pub mod embed;
pub mod list;
pub mod redirect;
pub mod target;
pub mod validate;

pub use current::CurrentCommand;
pub use embed::EmbedCommand;
pub use list::ListCommand;
pub use redirect::RedirectCommand;
pub use target::TargetCommand;
pub use validate::ValidateCommand;

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::{MANIFEST_REPO_PATH, SwitcherConfig};
use crate::manifest::{
    FileManifestSource, HttpManifestSource, ManifestSource, VersionManifest, load_or_fallback,
};

/// Loads the manifest for resolution commands, never failing
///
/// An explicit file wins over a deployed site URL; with neither, the
/// repository checkout location is tried.
pub(crate) async fn load_manifest(
    config: &SwitcherConfig,
    manifest_file: Option<&PathBuf>,
    base_url: Option<&str>,
) -> VersionManifest {
    match (manifest_file, base_url) {
        (Some(path), _) => load_or_fallback(&FileManifestSource::new(path)).await,
        (None, Some(url)) => {
            load_or_fallback(&HttpManifestSource::with_timeout(url, config.fetch.timeout)).await
        }
        (None, None) => load_or_fallback(&FileManifestSource::new(MANIFEST_REPO_PATH)).await,
    }
}

/// Loads the manifest for build commands, where a broken manifest must
/// abort instead of degrading
pub(crate) async fn load_manifest_strict(path: &Path) -> anyhow::Result<VersionManifest> {
    FileManifestSource::new(path)
        .fetch_manifest()
        .await
        .with_context(|| format!("failed to load manifest from {}", path.display()))
}
