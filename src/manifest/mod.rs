//! Manifest layer
//! - types.rs: `VersionManifest` and version directory aliasing
//! - source.rs: `ManifestSource` trait and `SourceError`
//! - sources/: HTTP and filesystem source implementations
//! - loader.rs: loading with the never-failing fallback
//! - validate.rs: build-time manifest checks

pub mod loader;
pub mod source;
pub mod sources;
pub mod types;
pub mod validate;

pub use loader::load_or_fallback;
pub use source::{ManifestSource, SourceError};
pub use sources::{FileManifestSource, HttpManifestSource};
pub use types::{VersionManifest, parse_numbered, version_dir};
pub use validate::{ValidationReport, validate};
