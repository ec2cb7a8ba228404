//! Target URL computation for version switches

use crate::config::DEFAULT_REPO_SLUG;
use crate::manifest::types::{VersionManifest, version_dir};

/// How the site is being served, which decides the URL rewriting strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlMode {
    /// Local preview: `file://` URLs, version directory replaced in place
    Local,
    /// Hosted layout: `<origin>/<repo>/<versionDir>/<relativePath>`
    Hosted,
}

/// Computes the URL of the same page under a different version
pub fn compute_target_url(
    path: &str,
    origin: &str,
    mode: UrlMode,
    manifest: &VersionManifest,
    target: &str,
) -> String {
    match mode {
        UrlMode::Local => local_target_url(path, manifest, target),
        UrlMode::Hosted => hosted_target_url(path, origin, manifest, target, DEFAULT_REPO_SLUG),
    }
}

/// Replaces the version directory segment in place and prefixes the file
/// scheme. A path without any known version directory is kept unchanged.
pub fn local_target_url(path: &str, manifest: &VersionManifest, target: &str) -> String {
    let target_dir = version_dir(target);
    let mut new_path = path.to_string();

    for id in manifest.ids() {
        let needle = format!("/{}/", version_dir(id));
        if path.contains(&needle) {
            new_path = path.replacen(&needle, &format!("/{}/", target_dir), 1);
            break;
        }
    }

    format!("file://{}", new_path)
}

/// Rebuilds a hosted URL as `<origin>/<repo>/<targetDir>/<relativePath>`
///
/// The repository name is the path segment preceding the first version
/// directory; everything after the version directory is the relative path.
/// When the pattern is not found, `fallback_repo` is used with an empty
/// relative path. An empty relative path yields exactly one trailing slash.
pub fn hosted_target_url(
    path: &str,
    origin: &str,
    manifest: &VersionManifest,
    target: &str,
    fallback_repo: &str,
) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let mut repo = None;
    let mut relative = String::new();

    for i in 0..segments.len().saturating_sub(1) {
        let next = segments[i + 1];
        let is_version_dir = manifest.ids().any(|id| version_dir(id) == next);
        if is_version_dir {
            repo = Some(segments[i]);
            relative = segments[i + 2..].join("/");
            break;
        }
    }

    let repo = repo.unwrap_or(fallback_repo);
    let target_dir = version_dir(target);
    let origin = origin.trim_end_matches('/');

    let url = format!("{}/{}/{}/{}", origin, repo, target_dir, relative);
    if relative.is_empty() || relative == "/" {
        format!("{}/", url.trim_end_matches('/'))
    } else {
        url
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

    fn two_versions() -> VersionManifest {
        manifest(&[("main", "latest version"), ("v1.0", "v1.0")])
    }

    #[rstest]
    #[case(
        "/myrepo/v1.0/guide/intro.html",
        "main",
        "https://example.github.io/myrepo/latest/guide/intro.html"
    )]
    #[case(
        "/myrepo/latest/guide/intro.html",
        "v1.0",
        "https://example.github.io/myrepo/v1.0/guide/intro.html"
    )]
    #[case("/myrepo/latest/", "v1.0", "https://example.github.io/myrepo/v1.0/")]
    fn hosted_url_rewrites_the_version_directory(
        #[case] path: &str,
        #[case] target: &str,
        #[case] expected: &str,
    ) {
        let url = compute_target_url(
            path,
            "https://example.github.io",
            UrlMode::Hosted,
            &two_versions(),
            target,
        );

        assert_eq!(url, expected);
    }

    #[test]
    fn hosted_url_defaults_the_repo_when_the_pattern_is_missing() {
        let url = compute_target_url(
            "/some/unrelated/page.html",
            "https://example.github.io",
            UrlMode::Hosted,
            &two_versions(),
            "main",
        );

        assert_eq!(
            url,
            "https://example.github.io/sdk_build_doc_template/latest/"
        );
    }

    #[test]
    fn hosted_url_honors_a_custom_fallback_repo() {
        let url = hosted_target_url(
            "/page.html",
            "https://example.github.io",
            &two_versions(),
            "v1.0",
            "my-docs",
        );

        assert_eq!(url, "https://example.github.io/my-docs/v1.0/");
    }

    #[test]
    fn hosted_url_selecting_the_current_version_is_idempotent() {
        let path = "/myrepo/v1.0/guide/intro.html";
        let url = compute_target_url(
            path,
            "https://example.github.io",
            UrlMode::Hosted,
            &two_versions(),
            "v1.0",
        );

        assert_eq!(url, format!("https://example.github.io{}", path));
    }

    #[test]
    fn hosted_url_tolerates_a_trailing_slash_on_the_origin() {
        let url = compute_target_url(
            "/myrepo/v1.0/index.html",
            "https://example.github.io/",
            UrlMode::Hosted,
            &two_versions(),
            "main",
        );

        assert_eq!(url, "https://example.github.io/myrepo/latest/index.html");
    }

    #[rstest]
    #[case(
        "/docs/_build/html/latest/guide/intro.html",
        "v1.0",
        "file:///docs/_build/html/v1.0/guide/intro.html"
    )]
    #[case(
        "/docs/_build/html/v1.0/guide/intro.html",
        "main",
        "file:///docs/_build/html/latest/guide/intro.html"
    )]
    // No version directory in the path: kept unchanged
    #[case("/docs/guide/intro.html", "v1.0", "file:///docs/guide/intro.html")]
    fn local_url_replaces_the_version_directory_in_place(
        #[case] path: &str,
        #[case] target: &str,
        #[case] expected: &str,
    ) {
        let url = compute_target_url(path, "", UrlMode::Local, &two_versions(), target);

        assert_eq!(url, expected);
    }

    #[test]
    fn local_url_replaces_only_the_first_version_directory() {
        let url = compute_target_url(
            "/html/latest/archive/latest/page.html",
            "",
            UrlMode::Local,
            &two_versions(),
            "v1.0",
        );

        assert_eq!(url, "file:///html/v1.0/archive/latest/page.html");
    }
}
