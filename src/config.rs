use serde::Deserialize;

// =============================================================================
// Site layout constants
// =============================================================================

/// Path of the version manifest relative to a deployed docs root
pub const MANIFEST_STATIC_PATH: &str = "_static/versions.json";

/// Manifest location inside the repository checkout
pub const MANIFEST_REPO_PATH: &str = ".github/versions.json";

/// Version id that the `latest` directory stands in for
pub const DEFAULT_VERSION: &str = "main";

/// Directory alias served for the default version
pub const LATEST_DIR: &str = "latest";

/// Repository slug used when the hosted URL pattern cannot be recognized
pub const DEFAULT_REPO_SLUG: &str = "sdk_build_doc_template";

/// Timeout for manifest fetch operations in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// Switcher configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SwitcherConfig {
    pub site: SiteConfig,
    pub fetch: FetchConfig,
}

/// Site-layout configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Repository slug for hosted URLs when the path carries none
    pub repo_slug: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            repo_slug: DEFAULT_REPO_SLUG.to_string(),
        }
    }
}

/// Manifest fetch configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchConfig {
    /// Fetch timeout in milliseconds
    pub timeout: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: FETCH_TIMEOUT_MS,
        }
    }
}
