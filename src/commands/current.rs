use std::path::PathBuf;

use clap::Args;

use crate::commands::load_manifest;
use crate::config::SwitcherConfig;
use crate::switch::VersionResolver;

/// Resolve which version a documentation URL path is displaying
#[derive(Args)]
pub struct CurrentCommand {
    /// URL path of the page, e.g. /myrepo/v1.0/guide/intro.html
    #[arg(long)]
    pub path: String,

    /// Manifest JSON file (defaults to .github/versions.json)
    #[arg(long)]
    pub manifest_file: Option<PathBuf>,

    /// Deployed docs root to fetch the manifest from instead
    #[arg(long, conflicts_with = "manifest_file")]
    pub base_url: Option<String>,
}

impl CurrentCommand {
    pub async fn execute(&self, config: &SwitcherConfig) -> anyhow::Result<()> {
        let manifest =
            load_manifest(config, self.manifest_file.as_ref(), self.base_url.as_deref()).await;
        let resolver = VersionResolver::new();

        println!("{}", resolver.current_version(&self.path, &manifest));
        Ok(())
    }
}
