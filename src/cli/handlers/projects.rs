// src/cli/handlers/projects.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::{cli::args::ProjectsArgs, models::AppConfig, state::AppState};

pub fn handle(args: Vec<String>, state: &mut AppState) -> Result<i32> {
    ProjectsArgs::try_parse_from(&args)?;

    if state.projects.is_empty() {
        println!("{}", t!("projects.info.empty").dimmed());
        return Ok(0);
    }
    println!("{}", t!("projects.header").magenta().bold());
    for line in render_rows(state) {
        println!("{}", line);
    }
    Ok(0)
}

/// One line per tracked project, with an arrow on the current one.
fn render_rows(config: &AppConfig) -> Vec<String> {
    let width = config.projects.keys().map(|name| name.chars().count()).max().unwrap_or(0);
    config
        .projects
        .iter()
        .map(|(name, path)| {
            let is_current = config.current_project.as_deref() == Some(name.as_str());
            let marker = if is_current { "→" } else { " " };
            let padded = format!("{:<width$}", name);
            format!(" {} {}  {}", marker.green().bold(), padded.cyan(), path.dimmed())
        })
        .collect()
}
