mod commands;
mod text_renderer;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{edit, init, show, EditArgs, InitArgs, ShowArgs};
use tracing::Level;

/// JsonTree CLI - inspect and edit JSON documents as a collapsible tree
#[derive(Parser, Debug)]
#[command(name = "jsontree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every applied and skipped mutation
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default jsontree.config.json
    Init(InitArgs),

    /// Print the visible tree of a JSON file
    Show(ShowArgs),

    /// Apply a mutation script to a JSON file
    Edit(EditArgs),
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Show(args) => show(args, &cwd),
        Command::Edit(args) => edit(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
