//! Version switching layer
//!
//! The decision-making core of the site: which version a URL path is
//! displaying, and where the same page lives under another version.
//!
//! - [`resolver`]: current-version inference from a URL path
//! - [`target`]: target URL computation (local and hosted modes)
//! - [`event`]: the `VersionChanged` notification payload

pub mod event;
pub mod resolver;
pub mod target;

pub use event::{VersionChanged, select_version};
pub use resolver::VersionResolver;
pub use target::{UrlMode, compute_target_url, hosted_target_url, local_target_url};
