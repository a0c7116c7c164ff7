// src/cli/handlers/switch.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use crate::{cli::args::SwitchArgs, core::errors::GodocoError, state::AppState};

pub fn handle(args: Vec<String>, state: &mut AppState) -> Result<i32> {
    let switch_args = SwitchArgs::try_parse_from(&args)?;
    let name = switch_args.name;

    if !state.projects.contains_key(&name) {
        return Err(GodocoError::ProjectNotFound(name).into());
    }
    if state.current_project.as_deref() != Some(name.as_str()) {
        state.current_project = Some(name.clone());
    }

    println!("{}", format!(t!("switch.success"), name = name).green());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppConfig;
    use std::path::PathBuf;

    #[test]
    fn test_switch_to_tracked_project() {
        let mut config = AppConfig::default();
        config.track_project("alpha", PathBuf::from("/games/alpha"));
        config.track_project("beta", PathBuf::from("/games/beta"));
        let mut state = AppState::in_memory(config);

        assert_eq!(handle(vec!["alpha".to_string()], &mut state).unwrap(), 0);
        assert_eq!(state.current_project.as_deref(), Some("alpha"));
        assert!(state.needs_saving());
    }

    #[test]
    fn test_switch_to_current_is_not_a_change() {
        let mut config = AppConfig::default();
        config.track_project("alpha", PathBuf::from("/games/alpha"));
        let mut state = AppState::in_memory(config);

        handle(vec!["alpha".to_string()], &mut state).unwrap();
        assert!(!state.needs_saving());
    }

    #[test]
    fn test_switch_to_unknown_project_fails() {
        let mut state = AppState::in_memory(AppConfig::default());
        let err = handle(vec!["ghost".to_string()], &mut state).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GodocoError>(),
            Some(GodocoError::ProjectNotFound(name)) if name == "ghost"
        ));
        assert!(state.current_project.is_none());
    }
}
