// src/cli/handlers/run.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::Path;

use super::commons;
use crate::{
    cli::args::RunArgs,
    core::scene,
    state::AppState,
    system::invoker::RunOptions,
};

/// Runs the project (or opens it in the editor). The engine's exit code is
/// returned as ours.
pub fn handle(args: Vec<String>, state: &mut AppState) -> Result<i32> {
    let run_args = RunArgs::try_parse_from(&args)?;
    let project_dir = commons::resolve_project(run_args.project.as_deref(), state)?;
    let wrapper = commons::get_godot_wrapper(state)?;

    scene::ensure_main_scene(&project_dir)?;
    scene::ensure_script_attachment(&project_dir)?;

    let name = commons::dir_name(&project_dir);
    if run_args.headless || run_args.script.is_some() {
        println!(
            "{}",
            format!(t!("run.info.running_headless"), name = name).cyan()
        );
        let script = run_args.script.as_deref().map(Path::new);
        return Ok(wrapper.run_headless(&project_dir, script)?);
    }

    if run_args.debug {
        log::debug!("--debug adds no engine arguments; running normally.");
    }
    let options = RunOptions {
        editor: run_args.editor,
        fullscreen: run_args.fullscreen,
        maximized: run_args.maximized,
        scene: run_args.scene,
    };
    println!("{}", format!(t!("run.info.running"), name = name).cyan());
    Ok(wrapper.run_editor(&project_dir, &options)?)
}
