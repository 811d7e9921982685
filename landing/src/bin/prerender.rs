//! Writes the landing page as a static HTML document.
//!
//! ```text
//! astra-prerender --out dist/index.html
//! astra-prerender --config astra.toml --year 2027 --no-motion
//! ```

use anyhow::{Context, Result};
use astra_landing::{config::PageConfig, render_document, telemetry};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "astra-prerender", version, about = "Render the landing page to static HTML")]
struct Args {
    /// Page configuration (defaults to the bundled astra.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file; stdout when omitted
    #[arg(long, short)]
    out: Option<PathBuf>,

    /// Copyright year for the footer instead of the current one
    #[arg(long)]
    year: Option<i32>,

    /// Render every entrance group already revealed
    #[arg(long)]
    no_motion: bool,
}

fn main() -> Result<()> {
    telemetry::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PageConfig::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => PageConfig::embedded(),
    };
    if args.no_motion {
        config.motion.enabled = false;
    }

    let html = render_document(&config, args.year);

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = html.len(), "page rendered");
        }
        None => print!("{html}"),
    }
    Ok(())
}
