use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, ValueEnum};

use crate::commands::load_manifest;
use crate::config::SwitcherConfig;
use crate::switch::{UrlMode, VersionChanged, compute_target_url, hosted_target_url};

/// Compute the URL of the same page under another version
#[derive(Args)]
pub struct TargetCommand {
    /// URL path of the current page
    #[arg(long)]
    pub path: String,

    /// Version id to switch to
    #[arg(long)]
    pub version: String,

    /// Site origin, e.g. https://user.github.io (hosted mode only)
    #[arg(long)]
    pub origin: Option<String>,

    /// URL rewriting mode
    #[arg(long, value_enum, default_value = "hosted")]
    pub mode: ModeArg,

    /// Repository slug for hosted paths without a recognizable repo segment
    #[arg(long)]
    pub repo: Option<String>,

    /// Manifest JSON file (defaults to .github/versions.json)
    #[arg(long)]
    pub manifest_file: Option<PathBuf>,

    /// Deployed docs root to fetch the manifest from instead
    #[arg(long, conflicts_with = "manifest_file")]
    pub base_url: Option<String>,

    /// Print the full version-changed payload as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Local,
    Hosted,
}

impl From<ModeArg> for UrlMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Local => UrlMode::Local,
            ModeArg::Hosted => UrlMode::Hosted,
        }
    }
}

impl TargetCommand {
    pub async fn execute(&self, config: &SwitcherConfig) -> anyhow::Result<()> {
        let manifest =
            load_manifest(config, self.manifest_file.as_ref(), self.base_url.as_deref()).await;

        let new_url = match self.mode {
            ModeArg::Local => {
                compute_target_url(&self.path, "", UrlMode::Local, &manifest, &self.version)
            }
            ModeArg::Hosted => {
                let origin = self
                    .origin
                    .as_deref()
                    .context("--origin is required in hosted mode")?;
                let repo = self.repo.as_deref().unwrap_or(&config.site.repo_slug);
                hosted_target_url(&self.path, origin, &manifest, &self.version, repo)
            }
        };

        if self.json {
            let event = VersionChanged::new(&manifest, &self.version, new_url);
            println!("{}", serde_json::to_string_pretty(&event)?);
        } else {
            println!("{}", new_url);
        }
        Ok(())
    }
}
