use std::path::PathBuf;

use clap::Args;

use crate::site::write_root_redirect;

/// Write the site-root redirect page
#[derive(Args)]
pub struct RedirectCommand {
    /// Build output directory to place index.html in
    #[arg(long)]
    pub out: PathBuf,

    /// Page title
    #[arg(long, default_value = "Documentation")]
    pub title: String,
}

impl RedirectCommand {
    pub fn execute(&self) -> anyhow::Result<()> {
        let path = write_root_redirect(&self.out, &self.title)?;

        println!("Root redirect page written to {}", path.display());
        Ok(())
    }
}
