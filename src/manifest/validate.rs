//! Manifest validation for build-time checks

use crate::config::DEFAULT_VERSION;
use crate::manifest::types::{VersionManifest, parse_numbered};

/// Outcome of validating a manifest
///
/// Errors make the manifest unusable for a deployed site; warnings are
/// survivable but worth fixing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a manifest for entries that would break the deployed site
pub fn validate(manifest: &VersionManifest) -> ValidationReport {
    let mut report = ValidationReport::default();

    if manifest.is_empty() {
        report.errors.push("manifest has no versions".to_string());
        return report;
    }

    for (id, name) in manifest.iter() {
        if id.trim().is_empty() {
            report
                .errors
                .push("version id is empty".to_string());
            continue;
        }
        if name.trim().is_empty() {
            report
                .errors
                .push(format!("version '{}' has an empty display name", id));
        }
        if !is_valid_dir_segment(id) {
            report.errors.push(format!(
                "version id '{}' is not usable as a URL directory segment",
                id
            ));
        }
        if id.starts_with('v') && id[1..].starts_with(|c: char| c.is_ascii_digit()) {
            // Numbered ids drive the vX.Y path pattern and list ordering
            if parse_numbered(id).is_none() {
                report.warnings.push(format!(
                    "version id '{}' looks numbered but does not parse as a version",
                    id
                ));
            }
        }
    }

    if !manifest.contains(DEFAULT_VERSION) {
        report.warnings.push(format!(
            "no '{}' entry, nothing is published under the latest directory",
            DEFAULT_VERSION
        ));
    }

    let mut seen_names: Vec<&str> = Vec::new();
    for (_, name) in manifest.iter() {
        if seen_names.contains(&name) {
            report
                .warnings
                .push(format!("duplicate display name '{}'", name));
        } else {
            seen_names.push(name);
        }
    }

    report
}

fn is_valid_dir_segment(id: &str) -> bool {
    !id.contains('/')
        && !id.contains('\\')
        && !id.contains("..")
        && !id.chars().any(char::is_whitespace)
}
