use std::path::PathBuf;

use clap::Args;

use crate::commands::load_manifest;
use crate::config::SwitcherConfig;
use crate::manifest::version_dir;

/// List manifest versions in display order
#[derive(Args)]
pub struct ListCommand {
    /// Manifest JSON file (defaults to .github/versions.json)
    #[arg(long)]
    pub manifest_file: Option<PathBuf>,

    /// Deployed docs root to fetch the manifest from instead
    #[arg(long, conflicts_with = "manifest_file")]
    pub base_url: Option<String>,
}

impl ListCommand {
    pub async fn execute(&self, config: &SwitcherConfig) -> anyhow::Result<()> {
        let manifest =
            load_manifest(config, self.manifest_file.as_ref(), self.base_url.as_deref()).await;

        println!("Versions:");
        for id in manifest.display_order() {
            let name = manifest.display_name(id).unwrap_or(id);
            println!("  - {} ({}) -> {}/", name, id, version_dir(id));
        }
        Ok(())
    }
}
