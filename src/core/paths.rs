// src/core/paths.rs

use crate::{
    constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, PROJECT_FILE_NAME},
    models::AppConfig,
};
use anyhow::{Result, anyhow};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not create config directory at '{path}': {source}")]
    ConfigDirCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Returns the godoco configuration directory (`<config dir>/godoco`), creating it
/// if needed.
pub fn get_godoco_config_dir() -> Result<PathBuf, PathError> {
    let config_path = dirs::config_dir()
        .ok_or(PathError::ConfigDirNotFound)?
        .join(CONFIG_DIR_NAME);

    if !config_path.exists() {
        fs::create_dir_all(&config_path).map_err(|e| PathError::ConfigDirCreation {
            path: config_path.display().to_string(),
            source: e,
        })?;
    }
    Ok(config_path)
}

/// Returns the path to `config.toml`.
pub fn get_config_file_path() -> Result<PathBuf, PathError> {
    get_godoco_config_dir().map(|dir| dir.join(CONFIG_FILE_NAME))
}

/// Expands `~` and environment variables (`$VAR`, `%VAR%`) in a user-supplied path.
pub fn expand_user_path(raw: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| anyhow!("Failed to expand path '{}': {}", raw, e))?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Resolves the project directory a command should operate on.
///
/// Priority:
/// 1. `name_or_path` naming a tracked project.
/// 2. `name_or_path` as a filesystem path (a file resolves to its parent).
/// 3. No argument: the current project, if its directory still exists.
/// 4. The working directory.
pub fn resolve_project_path(name_or_path: Option<&str>, config: &AppConfig) -> Result<PathBuf> {
    let Some(raw) = name_or_path else {
        return match config.current_project_path() {
            Some(current) if current.exists() => Ok(current),
            _ => Ok(std::env::current_dir()?),
        };
    };

    if let Some(tracked) = config.projects.get(raw) {
        return Ok(PathBuf::from(tracked));
    }

    let candidate = expand_user_path(raw)?;
    if candidate.is_file() {
        return Ok(candidate
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or(candidate));
    }
    Ok(candidate)
}

/// Whether `dir` holds a `project.godot`.
pub fn is_project_dir(dir: &Path) -> bool {
    dir.join(PROJECT_FILE_NAME).is_file()
}

/// Converts a file inside a project into an engine `res://` path. Files outside
/// the project root are returned as plain forward-slash paths.
pub fn make_res_path(project_root: &Path, file_path: &Path) -> String {
    match file_path.strip_prefix(project_root) {
        Ok(rel) => {
            let parts: Vec<String> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            format!("res://{}", parts.join("/"))
        }
        Err(_) => file_path.to_string_lossy().replace('\\', "/"),
    }
}
