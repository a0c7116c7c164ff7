// src/core/errors.rs

use std::path::PathBuf;
use thiserror::Error;

/// User-facing "not found" failures. Each one is reported as a single line and
/// makes the command exit with a nonzero status.
#[derive(Error, Debug)]
pub enum GodocoError {
    #[error("Godot executable not found. Run 'godoco setup' first.")]
    GodotNotFound,
    #[error("Godot executable not found at '{0}'. Please specify --path or install Godot.")]
    InvalidExecutable(PathBuf),
    #[error("Project '{0}' not found.")]
    ProjectNotFound(String),
    #[error("No project.godot found in '{0}'.")]
    ProjectFileMissing(PathBuf),
    #[error("Directory '{0}' already exists.")]
    TargetExists(PathBuf),
    #[error("A project name is required when not running interactively.")]
    NameRequired,
}
