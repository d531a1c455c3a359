//! mdpreview CLI - render a Markdown document into an HTML preview page.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use mdpreview_static::previewer::{DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE};
use tracing_subscriber::{fmt, EnvFilter};

mod preview;

#[derive(Parser)]
#[command(name = "mdpreview")]
#[command(about = "Render a Markdown document into a standalone HTML preview page")]
#[command(version)]
pub struct Cli {
    /// Markdown document to render
    #[arg(default_value = DEFAULT_SOURCE)]
    source: PathBuf,

    /// Directory to write the preview page and index into
    #[arg(default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Open the generated page in the default browser
    #[arg(long)]
    open: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for the "Wrote" line
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    preview::run(cli.source, cli.output_dir, cli.open)
}
