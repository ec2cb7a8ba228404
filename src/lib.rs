//! Version resolution and URL rewriting for multi-version documentation sites
//!
//! A documentation site publishing several versions side by side
//! (`<origin>/<repo>/latest/`, `<origin>/<repo>/v1.0/`, ...) needs three
//! decisions made consistently: which version a URL path is displaying,
//! where the same page lives under another version, and which versions
//! exist at all. This crate owns those decisions and the build-side
//! tooling around them:
//!
//! - [`manifest`]: the version manifest, its sources (HTTP, filesystem),
//!   the never-failing fallback loader, and validation
//! - [`switch`]: current-version inference and target URL computation
//! - [`site`]: redirect pages and manifest embedding into the menu asset
//! - [`commands`]: the CLI surface over all of the above

pub mod commands;
pub mod config;
pub mod manifest;
pub mod site;
pub mod switch;

pub use manifest::{VersionManifest, load_or_fallback, validate, version_dir};
pub use switch::{UrlMode, VersionChanged, VersionResolver, compute_target_url, select_version};
