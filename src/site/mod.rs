//! Build-side site tooling
//! - redirect.rs: root and per-version redirect pages
//! - embed.rs: manifest embedding into the static menu asset

pub mod embed;
pub mod redirect;

pub use embed::{EmbedError, embed_manifest, restore_backup};
pub use redirect::{root_redirect_page, version_redirect_page, write_root_redirect};
