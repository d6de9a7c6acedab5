mod apps;
mod preview;
mod set;
mod show;

pub use apps::{apps, AppsCommand};
pub use preview::{preview, PreviewArgs};
pub use set::{set, SetArgs};
pub use show::show;

use anyhow::Context;
use colored::Colorize;
use lpedit_editor::Document;
use std::path::Path;

/// Load the page, surfacing a degraded APPS literal as a warning rather
/// than aborting the session
pub(crate) fn load_document(file: &Path) -> anyhow::Result<Document> {
    let doc = Document::load(file.to_path_buf())
        .with_context(|| format!("could not open {}", file.display()))?;

    if let Some(cause) = doc.load_warning() {
        eprintln!(
            "{} APPS array could not be decoded, starting with an empty app list ({})",
            "warning:".yellow().bold(),
            cause
        );
    }

    Ok(doc)
}
