use super::{current_project, open_store};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_editor::{EditSession, History, Mutation, Outcome, TreeStore};
use pagecraft_model::{Breakpoint, ComponentId};
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// JSON file with an array of edit commands, or `-` for stdin
    pub script: PathBuf,

    /// Run the script without saving the result
    #[arg(long)]
    pub dry_run: bool,
}

/// One step of an edit script
///
/// ```json
/// [
///   {"apply": {"AddComponent": {"kind": "hero"}}},
///   "undo",
///   "redo",
///   {"select": null},
///   {"breakpoint": "mobile"}
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditCommand {
    Apply(Mutation),
    Undo,
    Redo,
    Select(Option<ComponentId>),
    Breakpoint(Breakpoint),
}

/// What a step did, for the report
#[derive(Debug, PartialEq)]
pub enum StepReport {
    Changed(String),
    Skipped(String),
}

pub fn edit(args: EditArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = open_store(&config, cwd);
    let project = current_project(&store)?;

    let script = read_script(&args.script)?;
    let commands: Vec<EditCommand> = serde_json::from_str(&script)
        .with_context(|| format!("Invalid edit script {}", args.script.display()))?;

    let mut session = EditSession::with_store(
        project.id.clone(),
        TreeStore::new(),
        History::with_max_levels(config.history_limit),
    );
    session.load(project.canvas_state)?;

    println!(
        "{} {} ({} commands)",
        "✏️  Editing".bright_blue().bold(),
        project.name.bright_white(),
        commands.len()
    );

    for command in &commands {
        match run_command(&mut session, command) {
            StepReport::Changed(message) => println!("  {} {}", "✓".green(), message),
            StepReport::Skipped(message) => println!("  {} {}", "-".yellow(), message.dimmed()),
        }
    }

    if args.dry_run {
        println!("{}", "Dry run, nothing saved".yellow());
        return Ok(());
    }

    let saved = store.save_project(project.name, session.snapshot())?;
    println!(
        "{} Saved {} components",
        "✅".green(),
        saved.canvas_state.components.len()
    );
    Ok(())
}

pub fn run_command(session: &mut EditSession, command: &EditCommand) -> StepReport {
    match command {
        EditCommand::Apply(mutation) => match session.apply(mutation.clone()) {
            Outcome::Created(id) => StepReport::Changed(format!("{} ({})", mutation.label(), id)),
            Outcome::Applied => StepReport::Changed(mutation.label()),
            Outcome::NotFound(id) => {
                StepReport::Skipped(format!("{}: {} not found", mutation.label(), id))
            }
        },

        EditCommand::Undo => {
            let label = session.history().undo_label().unwrap_or("edit").to_string();
            if session.undo() {
                StepReport::Changed(format!("Undo {}", label))
            } else {
                StepReport::Skipped("Nothing to undo".to_string())
            }
        }

        EditCommand::Redo => {
            let label = session.history().redo_label().unwrap_or("edit").to_string();
            if session.redo() {
                StepReport::Changed(format!("Redo {}", label))
            } else {
                StepReport::Skipped("Nothing to redo".to_string())
            }
        }

        EditCommand::Select(id) => {
            session.select(id.clone());
            match id {
                Some(id) => StepReport::Changed(format!("Selected {}", id)),
                None => StepReport::Changed("Cleared selection".to_string()),
            }
        }

        EditCommand::Breakpoint(breakpoint) => {
            session.set_breakpoint(*breakpoint);
            StepReport::Changed(format!(
                "Breakpoint {} ({}px)",
                breakpoint,
                breakpoint.viewport_width()
            ))
        }
    }
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut script = String::new();
        std::io::stdin().read_to_string(&mut script)?;
        return Ok(script);
    }

    std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))
}
