use super::load_document;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use lpedit_editor::{Field, Mutation};
use std::path::Path;

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Field name (logo_src, h1_title, tagline, meta_title, meta_desc,
    /// meta_keywords, og_image, twitter_image, settings_iteration,
    /// settings_key)
    pub field: String,

    /// New value
    pub value: String,
}

pub fn set(args: SetArgs, file: &Path) -> Result<()> {
    let field = Field::from_name(&args.field).ok_or_else(|| {
        let names: Vec<&str> = Field::ALL.iter().map(|f| f.name()).collect();
        anyhow!(
            "unknown field `{}` (expected one of: {})",
            args.field,
            names.join(", ")
        )
    })?;

    let mut doc = load_document(file)?;
    doc.apply(Mutation::SetField {
        field,
        value: args.value,
    })?;
    doc.save()?;

    println!(
        "{} {} updated in {}",
        "✓".green(),
        field.name().bold(),
        file.display()
    );
    Ok(())
}
