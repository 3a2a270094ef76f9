use super::{current_project, open_store};
use crate::config::Config;
use anyhow::Result;
use colored::Colorize;
use pagecraft_model::ComponentTree;

/// Print the current project's component tree
pub fn tree(cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let store = open_store(&config, cwd);
    let project = current_project(&store)?;

    println!("{}", project.name.bright_white().bold());

    let state = &project.canvas_state;
    if state.components.is_empty() {
        println!("  {}", "(empty canvas)".dimmed());
        return Ok(());
    }

    for line in render_tree(&state.components) {
        println!("{}", line);
    }
    Ok(())
}

fn render_tree(tree: &ComponentTree) -> Vec<String> {
    tree.walk()
        .map(|(depth, node)| {
            let mut line = format!(
                "{}{} {} {}",
                "  ".repeat(depth + 1),
                node.kind.as_str().cyan(),
                node.name,
                format!("({})", node.id).dimmed()
            );
            if node.locked {
                line.push_str(&format!(" {}", "[locked]".yellow()));
            }
            if node.hidden {
                line.push_str(&format!(" {}", "[hidden]".yellow()));
            }
            line
        })
        .collect()
}
