use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use version_switcher::commands::{
    CurrentCommand, EmbedCommand, ListCommand, RedirectCommand, TargetCommand, ValidateCommand,
};
use version_switcher::config::SwitcherConfig;

#[derive(Parser)]
#[command(name = "version-switcher")]
#[command(version, about = "Version resolution and URL rewriting for versioned documentation")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Switcher configuration JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve which version a URL path is displaying
    Current(CurrentCommand),
    /// Compute the URL of the same page under another version
    Target(TargetCommand),
    /// List manifest versions in display order
    List(ListCommand),
    /// Validate a manifest file
    Validate(ValidateCommand),
    /// Write the site-root redirect page
    Redirect(RedirectCommand),
    /// Embed the manifest into the menu script asset
    Embed(EmbedCommand),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli.command, &config))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SwitcherConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config from {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse config from {}", path.display()))
        }
        None => Ok(SwitcherConfig::default()),
    }
}

async fn run(command: Command, config: &SwitcherConfig) -> anyhow::Result<()> {
    match command {
        Command::Current(cmd) => cmd.execute(config).await,
        Command::Target(cmd) => cmd.execute(config).await,
        Command::List(cmd) => cmd.execute(config).await,
        Command::Validate(cmd) => cmd.execute().await,
        Command::Redirect(cmd) => cmd.execute(),
        Command::Embed(cmd) => cmd.execute().await,
    }
}
