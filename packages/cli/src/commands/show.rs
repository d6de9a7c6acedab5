use super::load_document;
use anyhow::Result;
use colored::Colorize;
use lpedit_editor::Field;
use std::path::Path;

pub fn show(file: &Path) -> Result<()> {
    let doc = load_document(file)?;

    println!("{}", format!("📄 {}", file.display()).bright_blue().bold());
    println!();

    for field in Field::ALL {
        let value = doc.fields().get(field);
        let shown = if value.is_empty() {
            "(not set)".dimmed().to_string()
        } else {
            value.to_string()
        };
        println!("  {:<20} {}", field.name().bold(), shown);
    }

    println!();
    if doc.records().is_empty() {
        println!("  {}", "no apps".dimmed());
        return Ok(());
    }

    println!("{}", "Apps".bold());
    for (index, record) in doc.records().iter().enumerate() {
        let mut flags = Vec::new();
        if record.trending {
            flags.push("trending");
        }
        if record.featured {
            flags.push("featured");
        }

        println!(
            "  {:>3}  {:<24} {:<20} [{}] {}",
            index,
            record.name,
            record.locker_id,
            record.platforms.join(", "),
            flags.join(", ").green()
        );
    }

    Ok(())
}
