//! Preview command.

use std::path::PathBuf;

use anyhow::Result;
use mdpreview_static::{IndexStatus, PreviewConfig, Previewer};

/// Run the preview command.
pub fn run(source: PathBuf, output_dir: PathBuf, open: bool) -> Result<()> {
    let previewer = Previewer::new(PreviewConfig { source, output_dir })?;
    let result = previewer.render()?;

    if result.index == IndexStatus::Kept {
        tracing::debug!("Index already present, not updated");
    }

    println!("Wrote {}", result.page.display());

    if open {
        if let Err(e) = open::that(&result.page) {
            tracing::warn!("Failed to open {}: {}", result.page.display(), e);
        }
    }

    Ok(())
}
