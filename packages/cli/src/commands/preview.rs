use super::load_document;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Destination for the rendered preview
    #[arg(short, long, default_value = "preview.html")]
    pub out: PathBuf,
}

pub fn preview(args: PreviewArgs, file: &Path) -> Result<()> {
    let doc = load_document(file)?;
    doc.save_as(&args.out)?;

    println!(
        "{} preview written to {}",
        "✓".green(),
        args.out.display().to_string().bold()
    );
    Ok(())
}
