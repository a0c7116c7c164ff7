// src/bin/godoco.rs

use anyhow::Result;
use colored::*;
use godoco::{
    cli::{Cli, dispatcher},
    state,
};

/// Sets up logging, loads the config once, dispatches, saves the config if a
/// handler changed it, and turns errors into a one-line message and exit 1.
fn main() {
    env_logger::init();

    match run_cli(Cli::from_env()) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            // Clap renders its own errors, including `<command> --help`.
            if let Some(clap_err) = e.downcast_ref::<clap::Error>() {
                clap_err.exit();
            }
            eprintln!("\n{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run_cli(cli: Cli) -> Result<i32> {
    log::debug!("CLI args collected: {:?}", cli);

    let mut app_state = state::load_app_state()?;
    let code = dispatcher::dispatch(cli.args, &mut app_state)?;

    if app_state.needs_saving() {
        log::debug!("Configuration changed, saving.");
        app_state.save()?;
    }
    Ok(code)
}
