//! Version manifest types

use indexmap::IndexMap;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_VERSION, LATEST_DIR};

/// Ordered mapping from version id to human-readable display name
///
/// The wire shape is `{"versions": {"<id>": "<display name>", ...}}` and the
/// entry order is the dropdown order, so insertion order is preserved.
/// Read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VersionManifest {
    versions: IndexMap<String, String>,
}

impl VersionManifest {
    pub fn new(versions: IndexMap<String, String>) -> Self {
        Self { versions }
    }

    /// The hardcoded single-entry manifest used when no real one is available
    pub fn fallback() -> Self {
        let mut versions = IndexMap::new();
        versions.insert(DEFAULT_VERSION.to_string(), "latest".to_string());
        Self { versions }
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.versions.contains_key(id)
    }

    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.versions.get(id).map(String::as_str)
    }

    /// Entries in manifest (dropdown) order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.versions
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
    }

    /// Version ids in manifest order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.versions.keys().map(String::as_str)
    }

    /// Ids ordered for index listings: the default version first, numbered
    /// versions newest-first, anything unparseable last in manifest order
    pub fn display_order(&self) -> Vec<&str> {
        let mut default = Vec::new();
        let mut numbered: Vec<(&str, Version)> = Vec::new();
        let mut rest = Vec::new();

        for id in self.ids() {
            if id == DEFAULT_VERSION {
                default.push(id);
            } else if let Some(version) = parse_numbered(id) {
                numbered.push((id, version));
            } else {
                rest.push(id);
            }
        }

        numbered.sort_by(|(_, a), (_, b)| b.cmp(a));

        default
            .into_iter()
            .chain(numbered.into_iter().map(|(id, _)| id))
            .chain(rest)
            .collect()
    }
}

/// Returns the URL directory segment serving a version id
///
/// The default version is published under the `latest` directory; every
/// other id is its own directory.
pub fn version_dir(id: &str) -> &str {
    if id == DEFAULT_VERSION { LATEST_DIR } else { id }
}

/// Parse a `vX.Y`-style id into a semver version, padding missing parts.
///
/// Handles partial versions like "v1" or "v1.2" by padding with zeros.
/// Returns None for ids without the `v` prefix or with non-numeric parts.
pub fn parse_numbered(id: &str) -> Option<Version> {
    let stripped = id.strip_prefix('v')?;
    let parts: Vec<&str> = stripped.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => stripped.to_string(),
    };
    Version::parse(&normalized).ok()
}
