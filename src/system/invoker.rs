// src/system/invoker.rs

//! Builds engine command lines and runs them. Argument order is part of the
//! engine's CLI contract and must not change:
//!
//! - `<exe> --path <dir> [--editor] [--fullscreen] [--maximized] [<scene>]`
//! - `<exe> --path <dir> --headless [--script <path>]`
//! - `<exe> --path <dir> --headless (--export-debug|--export-release) <preset> <output>`

use crate::system::executor::{self, ExecutionError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Flags for an interactive run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub editor: bool,
    pub fullscreen: bool,
    pub maximized: bool,
    pub scene: Option<String>,
}

/// Wraps one engine binary.
#[derive(Debug, Clone)]
pub struct GodotWrapper {
    executable: PathBuf,
}

impl GodotWrapper {
    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }

    fn build_cmd(&self, project_path: &Path, args: Vec<OsString>) -> Vec<OsString> {
        let mut argv = vec![
            self.executable.as_os_str().to_os_string(),
            OsString::from("--path"),
            project_path.as_os_str().to_os_string(),
        ];
        argv.extend(args);
        argv
    }

    pub fn editor_args(&self, project_path: &Path, options: &RunOptions) -> Vec<OsString> {
        let mut args = Vec::new();
        if options.editor {
            args.push(OsString::from("--editor"));
        }
        if options.fullscreen {
            args.push(OsString::from("--fullscreen"));
        }
        if options.maximized {
            args.push(OsString::from("--maximized"));
        }
        if let Some(scene) = &options.scene {
            args.push(OsString::from(scene));
        }
        self.build_cmd(project_path, args)
    }

    pub fn headless_args(&self, project_path: &Path, script: Option<&Path>) -> Vec<OsString> {
        let mut args = vec![OsString::from("--headless")];
        if let Some(script) = script {
            args.push(OsString::from("--script"));
            args.push(script.as_os_str().to_os_string());
        }
        self.build_cmd(project_path, args)
    }

    pub fn export_args(
        &self,
        project_path: &Path,
        preset: &str,
        output: &Path,
        debug: bool,
    ) -> Vec<OsString> {
        let mode = if debug { "--export-debug" } else { "--export-release" };
        let args = vec![
            OsString::from("--headless"),
            OsString::from(mode),
            OsString::from(preset),
            output.as_os_str().to_os_string(),
        ];
        self.build_cmd(project_path, args)
    }

    /// Opens the editor or runs the game. Returns the engine's exit code.
    pub fn run_editor(&self, project_path: &Path, options: &RunOptions) -> Result<i32, ExecutionError> {
        executor::execute_inherited(&self.editor_args(project_path, options), None)
    }

    /// Runs without a window, optionally executing a script. Returns the engine's exit code.
    pub fn run_headless(
        &self,
        project_path: &Path,
        script: Option<&Path>,
    ) -> Result<i32, ExecutionError> {
        executor::execute_inherited(&self.headless_args(project_path, script), None)
    }

    /// Exports a preset. A nonzero engine exit is an error.
    pub fn export_project(
        &self,
        project_path: &Path,
        preset: &str,
        output: &Path,
        debug: bool,
    ) -> Result<(), ExecutionError> {
        executor::execute_checked(&self.export_args(project_path, preset, output, debug), None)
    }

    /// Forwards `args` untouched: `<exe> <args...>`. Returns the engine's exit code.
    pub fn passthrough(&self, args: &[String]) -> Result<i32, ExecutionError> {
        let mut argv = vec![self.executable.as_os_str().to_os_string()];
        argv.extend(args.iter().map(OsString::from));
        executor::execute_inherited(&argv, None)
    }
}
