//! Current-version inference from URL paths

use regex::Regex;

use crate::config::{DEFAULT_VERSION, LATEST_DIR};
use crate::manifest::types::{VersionManifest, version_dir};

/// Resolves which version a documentation URL path is displaying
pub struct VersionResolver {
    /// Regex for numbered version directories: `/v1.2/`
    numbered_dir_re: Regex,
}

impl VersionResolver {
    pub fn new() -> Self {
        Self {
            numbered_dir_re: Regex::new(r"/(v\d+\.\d+)/").unwrap(),
        }
    }

    /// Resolves the current version id from a URL path
    ///
    /// Checks in order: the `latest` directory, a `vX.Y` directory, any
    /// manifest version's directory. Falls back to the default version
    /// when nothing matches.
    pub fn current_version(&self, path: &str, manifest: &VersionManifest) -> String {
        if path.contains(&format!("/{}/", LATEST_DIR)) {
            return DEFAULT_VERSION.to_string();
        }

        if let Some(captures) = self.numbered_dir_re.captures(path) {
            return captures[1].to_string();
        }

        for id in manifest.ids() {
            if path.contains(&format!("/{}/", version_dir(id))) {
                return id.to_string();
            }
        }

        DEFAULT_VERSION.to_string()
    }
}

impl Default for VersionResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use rstest::rstest;

    fn manifest(entries: &[(&str, &str)]) -> VersionManifest {
        let versions: IndexMap<String, String> = entries
            .iter()
            .map(|(id, name)| (id.to_string(), name.to_string()))
            .collect();
        VersionManifest::new(versions)
    }

    #[rstest]
    #[case("/myrepo/v2.3/guide/intro.html", "v2.3")]
    #[case("/myrepo/latest/guide/intro.html", "main")]
    #[case("/myrepo/guide/intro.html", "main")] // no version directory
    #[case("/v1.0/", "v1.0")]
    #[case("/docs/v12.34/api.html", "v12.34")]
    #[case("", "main")]
    fn current_version_resolves_expected(#[case] path: &str, #[case] expected: &str) {
        let resolver = VersionResolver::new();
        let manifest = manifest(&[("main", "latest version"), ("v1.0", "v1.0")]);

        assert_eq!(resolver.current_version(path, &manifest), expected);
    }

    #[test]
    fn current_version_prefers_latest_directory_over_numbered() {
        let resolver = VersionResolver::new();
        let manifest = manifest(&[("main", "latest version"), ("v1.0", "v1.0")]);

        // The latest check runs first, so a nested numbered segment loses
        assert_eq!(
            resolver.current_version("/repo/latest/v1.0/page.html", &manifest),
            "main"
        );
    }

    #[test]
    fn current_version_matches_numbered_directories_not_in_the_manifest() {
        let resolver = VersionResolver::new();
        let manifest = manifest(&[("main", "latest version")]);

        assert_eq!(
            resolver.current_version("/repo/v9.9/page.html", &manifest),
            "v9.9"
        );
    }

    #[test]
    fn current_version_falls_back_to_manifest_directory_scan() {
        let resolver = VersionResolver::new();
        let manifest = manifest(&[("main", "latest version"), ("legacy", "old docs")]);

        assert_eq!(
            resolver.current_version("/repo/legacy/page.html", &manifest),
            "legacy"
        );
    }

    #[test]
    fn current_version_requires_a_full_directory_segment() {
        let resolver = VersionResolver::new();
        let manifest = manifest(&[("main", "latest version"), ("legacy", "old docs")]);

        // "legacy-notes" contains "legacy" but not as a /legacy/ segment
        assert_eq!(
            resolver.current_version("/repo/legacy-notes/page.html", &manifest),
            "main"
        );
    }
}
