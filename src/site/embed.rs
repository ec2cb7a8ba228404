//! Manifest embedding into the static menu asset
//!
//! The deployed menu script normally fetches `_static/versions.json`; for
//! builds that must work without a fetch (file:// previews, offline
//! bundles) the manifest is spliced into the script as the body of
//! `getEmbeddedVersionConfig()`. A backup of the asset is written before
//! modification so the checkout can be restored after the build.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::manifest::types::VersionManifest;

/// Marker comment preceding the generated function
const EMBED_MARKER: &str = "// Embedded version manifest (generated at build time)";

/// Signature of the generated function
const FUNC_SIG: &str = "function getEmbeddedVersionConfig()";

/// Insertion anchor when no embedded function exists yet
const FETCH_ANCHOR: &str = "async function fetchVersionInfo()";

#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("Menu asset not found: {0}")]
    MissingAsset(PathBuf),

    #[error("No backup found at {0}")]
    MissingBackup(PathBuf),

    #[error("Failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Embeds the manifest into the menu script, replacing any previously
/// embedded manifest. Writes a `.js.bak` backup of the asset first.
pub fn embed_manifest(js_path: &Path, manifest: &VersionManifest) -> Result<(), EmbedError> {
    if !js_path.exists() {
        return Err(EmbedError::MissingAsset(js_path.to_path_buf()));
    }

    std::fs::copy(js_path, backup_path(js_path))?;

    let content = std::fs::read_to_string(js_path)?;
    let snippet = embedded_snippet(manifest)?;
    let updated = splice_snippet(&content, &snippet);
    std::fs::write(js_path, updated)?;

    info!(
        "Embedded {} versions into {}",
        manifest.len(),
        js_path.display()
    );
    Ok(())
}

/// Restores the menu script from its `.js.bak` backup
pub fn restore_backup(js_path: &Path) -> Result<(), EmbedError> {
    let backup = backup_path(js_path);
    if !backup.exists() {
        return Err(EmbedError::MissingBackup(backup));
    }

    std::fs::copy(&backup, js_path)?;

    info!("Restored {} from backup", js_path.display());
    Ok(())
}

fn backup_path(js_path: &Path) -> PathBuf {
    js_path.with_extension("js.bak")
}

fn embedded_snippet(manifest: &VersionManifest) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string_pretty(manifest)?;
    Ok(format!(
        "{EMBED_MARKER}\nfunction getEmbeddedVersionConfig() {{\n    return {json};\n}}"
    ))
}

/// Splices the snippet into the script content
///
/// An existing embedded function is replaced via brace-depth matching, so
/// `}` characters inside the JSON do not terminate the scan early. With no
/// existing function the snippet lands before the fetch function, or at
/// the top of the file when that anchor is missing too.
fn splice_snippet(content: &str, snippet: &str) -> String {
    if let Some(start_idx) = content.find(EMBED_MARKER)
        && let Some(end_idx) = embedded_function_end(content, start_idx)
    {
        return format!("{}{}{}", &content[..start_idx], snippet, &content[end_idx..]);
    }

    if let Some(anchor_idx) = content.find(FETCH_ANCHOR) {
        return format!(
            "{}{}\n\n    {}",
            &content[..anchor_idx],
            snippet,
            &content[anchor_idx..]
        );
    }

    format!("{}\n\n{}", snippet, content)
}

/// Byte offset just past the closing brace of the embedded function
fn embedded_function_end(content: &str, start_idx: usize) -> Option<usize> {
    let sig_idx = start_idx + content[start_idx..].find(FUNC_SIG)?;
    let brace_start = sig_idx + content[sig_idx..].find('{')?;

    let mut depth = 0usize;
    for (offset, ch) in content[brace_start..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(brace_start + offset + 1);
                }
            }
            _ => {}
        }
    }
    None
}
