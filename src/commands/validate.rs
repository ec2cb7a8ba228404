use std::path::PathBuf;

use clap::Args;

use crate::commands::load_manifest_strict;
use crate::manifest::validate;

/// Validate a manifest file
#[derive(Args)]
pub struct ValidateCommand {
    /// Manifest JSON file to check
    #[arg(long)]
    pub manifest_file: PathBuf,
}

impl ValidateCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        let manifest = load_manifest_strict(&self.manifest_file).await?;
        let report = validate(&manifest);

        for warning in &report.warnings {
            println!("warning: {}", warning);
        }
        for error in &report.errors {
            println!("error: {}", error);
        }

        if report.is_ok() {
            println!("✓ {} versions validated", manifest.len());
            Ok(())
        } else {
            anyhow::bail!(
                "manifest validation failed with {} error(s)",
                report.errors.len()
            )
        }
    }
}
