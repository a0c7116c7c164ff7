// src/cli/handlers/setup.rs

use anyhow::{Result, anyhow};
use clap::Parser;
use colored::Colorize;

use crate::{
    cli::args::SetupArgs,
    core::{errors::GodocoError, paths},
    state::AppState,
    system::locator,
};

/// Finds (or validates) the engine binary, probes its version and stores both.
pub fn handle(args: Vec<String>, state: &mut AppState) -> Result<i32> {
    let setup_args = SetupArgs::try_parse_from(&args)?;

    let executable = match &setup_args.path {
        Some(raw) => {
            let path = paths::expand_user_path(raw)?;
            if !locator::is_executable(&path) {
                return Err(GodocoError::InvalidExecutable(path).into());
            }
            path
        }
        None => locator::find_godot_executable().ok_or_else(|| anyhow!(t!("setup.error.not_found")))?,
    };
    let executable = dunce::canonicalize(&executable).unwrap_or(executable);

    println!("{}", t!("setup.info.probing").dimmed());
    let found = locator::describe(&executable);
    log::debug!("Engine: {:?}", found);

    state.godot.executable_path = Some(found.path.clone());
    state.godot.version = Some(found.version.clone());

    println!("\n{}", t!("setup.success.title").green().bold());
    println!(
        "{}",
        format_args!(t!("setup.success.executable"), path = found.path.display())
    );
    println!(
        "{}",
        format_args!(t!("setup.success.version"), version = found.version.cyan())
    );
    Ok(0)
}
