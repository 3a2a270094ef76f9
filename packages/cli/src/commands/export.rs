use super::{current_project, open_store};
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use pagecraft_compiler_css::compile_to_css;
use pagecraft_compiler_html::{compile_to_html, CompileOptions as HtmlOptions};
use pagecraft_model::ComponentTree;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Target format (html, css, all)
    #[arg(short, long, default_value = "html")]
    pub target: String,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

/// A generated file, named relative to the output directory
#[derive(Debug)]
struct Output {
    file_name: &'static str,
    content: String,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let store = open_store(&config, cwd);
    let project = current_project(&store)?;

    let outputs = render(&project.canvas_state.components, &args.target, config.html_options())?;

    if args.stdout {
        for output in &outputs {
            println!("{}", output.content);
        }
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(dir) => PathBuf::from(cwd).join(dir),
        None => config.get_out_dir(cwd),
    };
    fs::create_dir_all(&out_dir)?;

    println!(
        "{} {}",
        "📦 Exporting".bright_blue().bold(),
        project.name.bright_white()
    );
    for output in &outputs {
        let path = out_dir.join(output.file_name);
        fs::write(&path, &output.content)?;
        println!("  {} {}", "✓".green(), path.display());
    }
    Ok(())
}

fn render(tree: &ComponentTree, target: &str, html_options: HtmlOptions) -> Result<Vec<Output>> {
    let html = |options: HtmlOptions| -> Result<Output> {
        Ok(Output {
            file_name: "index.html",
            content: compile_to_html(tree, options)?,
        })
    };
    let css = || Output {
        file_name: "styles.css",
        content: compile_to_css(tree),
    };

    match target {
        "html" => Ok(vec![html(html_options)?]),
        "css" => Ok(vec![css()]),
        // Both files together: the page links the stylesheet by class
        "all" => {
            let options = HtmlOptions {
                use_classes: true,
                inline_styles: false,
                ..html_options
            };
            Ok(vec![html(options)?, css()])
        }
        other => Err(anyhow!(
            "Unknown target: {}. Use: html, css, or all",
            other
        )),
    }
}
