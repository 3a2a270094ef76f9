use super::open_store;
use crate::config::Config;
use anyhow::{anyhow, Result};
use chrono::{DateTime, Local};
use clap::Args;
use colored::Colorize;
use pagecraft_model::CanvasState;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Project name
    pub name: String,
}

#[derive(Debug, Args)]
pub struct OpenArgs {
    /// Project id (see `pagecraft list`)
    pub id: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Project id (see `pagecraft list`)
    pub id: String,
}

/// Start an empty project and make it current
pub fn new(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = open_store(&config, cwd);

    let project = store.create_project(args.name, CanvasState::default())?;

    println!(
        "{} Created {} {}",
        "✓".green(),
        project.name.bright_white().bold(),
        project.id.dimmed()
    );
    Ok(())
}

pub fn list(cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let store = open_store(&config, cwd);

    let projects = store.list_projects()?;
    if projects.is_empty() {
        println!("{}", "No saved projects".yellow());
        return Ok(());
    }

    let current = store.current_project_id()?;
    for project in &projects {
        let marker = if current.as_deref() == Some(project.id.as_str()) {
            "*".green().bold()
        } else {
            " ".normal()
        };
        println!(
            "{} {}  {}  {} components, updated {}",
            marker,
            project.id.dimmed(),
            project.name.bright_white(),
            project.canvas_state.components.len(),
            format_millis(project.updated_at)
        );
    }
    Ok(())
}

/// Make a saved project current
pub fn open(args: OpenArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = open_store(&config, cwd);

    store.set_current_project_id(&args.id)?;
    let project = store
        .get_project(&args.id)?
        .ok_or_else(|| anyhow!("Project not found: {}", args.id))?;

    println!("{} Opened {}", "✓".green(), project.name.bright_white().bold());
    Ok(())
}

pub fn delete(args: DeleteArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut store = open_store(&config, cwd);

    if !store.delete_project(&args.id)? {
        return Err(anyhow!("Project not found: {}", args.id));
    }

    println!("{} Deleted {}", "✓".green(), args.id);
    Ok(())
}

/// Unix milliseconds as local time, e.g. `2024-03-01 14:05`
fn format_millis(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(time) => time.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => millis.to_string(),
    }
}
