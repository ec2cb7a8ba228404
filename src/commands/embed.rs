use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::commands::load_manifest_strict;
use crate::site::{embed_manifest, restore_backup};

/// Embed the manifest into the menu script asset
#[derive(Args)]
pub struct EmbedCommand {
    /// Menu script asset to rewrite
    #[arg(long)]
    pub js: PathBuf,

    /// Manifest JSON file to embed
    #[arg(long, required_unless_present = "restore")]
    pub manifest_file: Option<PathBuf>,

    /// Restore the asset from its backup instead of embedding
    #[arg(long)]
    pub restore: bool,
}

impl EmbedCommand {
    pub async fn execute(&self) -> anyhow::Result<()> {
        if self.restore {
            restore_backup(&self.js)?;
            println!("Restored {} from backup", self.js.display());
            return Ok(());
        }

        let manifest_file = self
            .manifest_file
            .as_ref()
            .context("--manifest-file is required unless --restore is given")?;
        let manifest = load_manifest_strict(manifest_file).await?;
        embed_manifest(&self.js, &manifest)?;

        println!(
            "Embedded {} versions into {}",
            manifest.len(),
            self.js.display()
        );
        Ok(())
    }
}
