// src/cli/handlers/commons.rs

// Shared helpers for the command handlers.

use anyhow::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::{
    core::{errors::GodocoError, paths, project_file::ProjectFile},
    models::AppConfig,
    system::{invoker::GodotWrapper, locator},
};

/// The engine binary to use: the configured one if it still exists, otherwise
/// whatever the locator finds (unless auto-detection is switched off).
pub fn find_godot_executable(config: &AppConfig) -> Option<PathBuf> {
    if let Some(configured) = &config.godot.executable_path {
        if configured.exists() {
            return Some(configured.clone());
        }
        log::debug!(
            "Configured executable {} is gone, falling back to detection.",
            configured.display()
        );
    }
    if !config.godot.auto_detect {
        return None;
    }
    locator::find_godot_executable()
}

pub fn get_godot_wrapper(config: &AppConfig) -> Result<GodotWrapper> {
    let executable = find_godot_executable(config).ok_or(GodocoError::GodotNotFound)?;
    Ok(GodotWrapper::new(executable))
}

/// Resolves the project directory for `--project`. An explicit argument that
/// resolves to nothing on disk is an error.
pub fn resolve_project(name_or_path: Option<&str>, config: &AppConfig) -> Result<PathBuf> {
    let path = paths::resolve_project_path(name_or_path, config)?;
    match name_or_path {
        Some(raw) if !path.exists() => Err(GodocoError::ProjectNotFound(raw.to_string()).into()),
        _ => Ok(path),
    }
}

/// Opens the project file in `dir`, failing if there is none.
pub fn require_project_file(dir: &Path) -> Result<ProjectFile> {
    if !paths::is_project_dir(dir) {
        return Err(GodocoError::ProjectFileMissing(dir.to_path_buf()).into());
    }
    Ok(ProjectFile::new(dir))
}

/// Prompts only make sense when a user is at the keyboard.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Display name for a project directory.
pub fn dir_name(dir: &Path) -> String {
    dir.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.display().to_string())
}
