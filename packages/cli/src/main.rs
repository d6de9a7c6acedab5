mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{apps, preview, set, show, AppsCommand, PreviewArgs, SetArgs};
use std::path::PathBuf;

/// lpedit - edit a landing page's fields and app list in place
#[derive(Parser, Debug)]
#[command(name = "lpedit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Landing page file to edit
    #[arg(long, global = true, default_value = "index.html")]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the current field values and app list
    Show,

    /// Set one field and save
    Set(SetArgs),

    /// Manage the app list
    Apps {
        #[command(subcommand)]
        command: AppsCommand,
    },

    /// Render a preview to a separate file, leaving the page untouched
    Preview(PreviewArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Show => show(&cli.file),
        Command::Set(args) => set(args, &cli.file),
        Command::Apps { command } => apps(command, &cli.file),
        Command::Preview(args) => preview(args, &cli.file),
    };

    if let Err(err) = result {
        eprintln!("{} {:#}", "error:".red().bold(), err);
        std::process::exit(1);
    }
}
