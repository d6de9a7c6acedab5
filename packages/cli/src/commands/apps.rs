use super::load_document;
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use colored::Colorize;
use lpedit_editor::{AppRecord, Direction, Mutation};
use std::path::Path;

#[derive(Debug, Subcommand)]
pub enum AppsCommand {
    /// List apps in display order
    List {
        /// Emit the list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add an app at the end of the list
    Add(RecordArgs),

    /// Edit the app at an index; unset options keep their value
    Edit {
        index: usize,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Remove the app at an index
    Remove { index: usize },

    /// Move the app at an index one position up or down
    Move {
        index: usize,

        #[arg(value_enum)]
        direction: MoveDirection,
    },
}

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// App name (required for add)
    #[arg(long)]
    pub name: Option<String>,

    /// Icon URL
    #[arg(long)]
    pub icon: Option<String>,

    /// Locker identifier
    #[arg(long)]
    pub locker_id: Option<String>,

    /// Comma-separated platform list (e.g. android,ios)
    #[arg(long)]
    pub platforms: Option<String>,

    /// Mark as trending
    #[arg(long)]
    pub trending: Option<bool>,

    /// Mark as featured
    #[arg(long)]
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum MoveDirection {
    Up,
    Down,
}

impl From<MoveDirection> for Direction {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Up => Direction::Up,
            MoveDirection::Down => Direction::Down,
        }
    }
}

pub fn apps(command: AppsCommand, file: &Path) -> Result<()> {
    match command {
        AppsCommand::List { json } => list(file, json),
        AppsCommand::Add(args) => add(args, file),
        AppsCommand::Edit { index, record } => edit(index, record, file),
        AppsCommand::Remove { index } => remove(index, file),
        AppsCommand::Move { index, direction } => move_record(index, direction, file),
    }
}

fn list(file: &Path, json: bool) -> Result<()> {
    let doc = load_document(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(doc.records())?);
        return Ok(());
    }

    if doc.records().is_empty() {
        println!("{}", "no apps".dimmed());
        return Ok(());
    }

    for (index, record) in doc.records().iter().enumerate() {
        println!(
            "{:>3}  {:<24} {:<20} [{}] trending={} featured={}",
            index,
            record.name.bold(),
            record.locker_id,
            record.platforms.join(", "),
            record.trending,
            record.featured
        );
    }
    Ok(())
}

fn add(args: RecordArgs, file: &Path) -> Result<()> {
    let record = args.merge_into(AppRecord::default());

    let mut doc = load_document(file)?;
    doc.apply(Mutation::AppendRecord {
        record: record.clone(),
    })?;
    doc.save()?;

    println!("{} added `{}`", "✓".green(), record.name.bold());
    Ok(())
}

fn edit(index: usize, args: RecordArgs, file: &Path) -> Result<()> {
    let mut doc = load_document(file)?;

    let current = doc
        .records()
        .get(index)
        .cloned()
        .unwrap_or_default();
    let record = args.merge_into(current);

    doc.apply(Mutation::ReplaceRecord {
        index,
        record: record.clone(),
    })?;
    doc.save()?;

    println!("{} updated `{}`", "✓".green(), record.name.bold());
    Ok(())
}

fn remove(index: usize, file: &Path) -> Result<()> {
    let mut doc = load_document(file)?;

    let name = doc
        .records()
        .get(index)
        .map(|r| r.name.clone())
        .unwrap_or_default();

    doc.apply(Mutation::RemoveRecord { index })?;
    doc.save()?;

    println!("{} removed `{}`", "✓".green(), name.bold());
    Ok(())
}

fn move_record(index: usize, direction: MoveDirection, file: &Path) -> Result<()> {
    let mut doc = load_document(file)?;
    doc.apply(Mutation::MoveRecord {
        index,
        direction: direction.into(),
    })?;
    doc.save()?;

    println!("{} moved app {}", "✓".green(), index);
    Ok(())
}

impl RecordArgs {
    /// Overlay the provided options on an existing record
    fn merge_into(self, mut record: AppRecord) -> AppRecord {
        if let Some(name) = self.name {
            record.name = name;
        }
        if let Some(icon) = self.icon {
            record.icon = icon;
        }
        if let Some(locker_id) = self.locker_id {
            record.locker_id = locker_id;
        }
        if let Some(platforms) = self.platforms {
            record.platforms = platforms
                .split(',')
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty())
                .collect();
        }
        if let Some(trending) = self.trending {
            record.trending = trending;
        }
        if let Some(featured) = self.featured {
            record.featured = featured;
        }
        record
    }
}
