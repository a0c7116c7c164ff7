// src/cli/handlers/export.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::commons;
use crate::{cli::args::ExportArgs, core::paths, state::AppState};

const BUILD_DIR: &str = "build";

pub fn handle(args: Vec<String>, state: &mut AppState) -> Result<i32> {
    let export_args = ExportArgs::try_parse_from(&args)?;
    let project_dir = commons::resolve_project(export_args.project.as_deref(), state)?;

    let output = match &export_args.output {
        Some(raw) => paths::expand_user_path(raw)?,
        None => {
            let build_dir = project_dir.join(BUILD_DIR);
            fs::create_dir_all(&build_dir)
                .with_context(|| format!("Could not create '{}'", build_dir.display()))?;
            default_output(&project_dir, &export_args.preset)
        }
    };

    let wrapper = commons::get_godot_wrapper(state)?;
    println!(
        "{}",
        format!(t!("export.info.exporting"), output = output.display()).cyan()
    );
    wrapper
        .export_project(&project_dir, &export_args.preset, &output, export_args.debug)
        .context(t!("export.error.failed"))?;

    println!("{}", t!("export.success").green());
    Ok(0)
}

/// `<project>/build/<dir-name><ext>`, with the extension guessed from the preset name.
pub fn default_output(project_dir: &Path, preset: &str) -> PathBuf {
    let ext = if preset.contains("Windows") {
        ".exe"
    } else if preset.contains("Linux") {
        ".x86_64"
    } else {
        ".zip"
    };
    project_dir
        .join(BUILD_DIR)
        .join(format!("{}{}", commons::dir_name(project_dir), ext))
}
