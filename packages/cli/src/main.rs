mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    delete, edit, export, init, list, new, open, tree, DeleteArgs, EditArgs, ExportArgs,
    InitArgs, NewArgs, OpenArgs,
};
use tracing_subscriber::EnvFilter;

/// Pagecraft CLI - build pages from components
#[derive(Parser, Debug)]
#[command(name = "pagecraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a pagecraft.config.json
    Init(InitArgs),

    /// Start an empty project and make it current
    New(NewArgs),

    /// List saved projects
    List,

    /// Make a saved project current
    Open(OpenArgs),

    /// Delete a saved project
    Delete(DeleteArgs),

    /// Print the current project's component tree
    Tree,

    /// Apply an edit script to the current project
    Edit(EditArgs),

    /// Export the current project as HTML and/or CSS
    Export(ExportArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = std::env::current_dir()
        .map_err(anyhow::Error::from)
        .and_then(|cwd| {
            let cwd = cwd.display().to_string();
            match cli.command {
                Command::Init(args) => init(args, &cwd),
                Command::New(args) => new(args, &cwd),
                Command::List => list(&cwd),
                Command::Open(args) => open(args, &cwd),
                Command::Delete(args) => delete(args, &cwd),
                Command::Tree => tree(&cwd),
                Command::Edit(args) => edit(args, &cwd),
                Command::Export(args) => export(args, &cwd),
            }
        });

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
