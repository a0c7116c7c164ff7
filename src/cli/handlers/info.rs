// src/cli/handlers/info.rs

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::Path;

use super::commons;
use crate::{
    cli::args::InfoArgs,
    core::project_file::{ProjectFile, Setting},
    state::AppState,
};

/// Shows the key facts about a project, or every setting with `--all`.
pub fn handle(args: Vec<String>, state: &mut AppState) -> Result<i32> {
    let info_args = InfoArgs::try_parse_from(&args)?;
    let project_dir = commons::resolve_project(info_args.project.as_deref(), state)?;
    let project = commons::require_project_file(&project_dir)?;

    let rows = if info_args.all {
        all_rows(&project.settings())
    } else {
        summary_rows(&project, &project_dir)
    };
    for line in render(&rows) {
        println!("{}", line);
    }
    Ok(0)
}

fn summary_rows(project: &ProjectFile, project_dir: &Path) -> Vec<(String, String)> {
    let value = |section: &str, key: &str| {
        project
            .get(section, key)
            .map(|v| v.trim_matches('"').to_string())
            .unwrap_or_default()
    };
    vec![
        (t!("info.label.name").to_string(), value("application", "config/name")),
        (t!("info.label.main_scene").to_string(), value("application", "run/main_scene")),
        (
            t!("info.label.renderer").to_string(),
            value("rendering", "renderer/rendering_method"),
        ),
        (t!("info.label.path").to_string(), project_dir.display().to_string()),
    ]
}

/// Every `key=value` line, prefixed with its section.
fn all_rows(settings: &[Setting]) -> Vec<(String, String)> {
    settings
        .iter()
        .map(|s| {
            let key = if s.section.is_empty() {
                s.key.clone()
            } else {
                format!("[{}] {}", s.section, s.key)
            };
            (key, s.value.clone())
        })
        .collect()
}

fn render(rows: &[(String, String)]) -> Vec<String> {
    let width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    rows.iter()
        .map(|(key, value)| format!("{}  {}", format!("{:<width$}", key).bold(), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::project_file::parse_settings, models::AppConfig};
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "config_version=5\n\n[application]\nconfig/name=\"Demo\"\nrun/main_scene=\"res://main.tscn\"\n\n[rendering]\nrenderer/rendering_method=\"mobile\"\n";

    #[test]
    fn test_summary_rows_strip_quotes() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("project.godot"), SAMPLE).unwrap();
        let rows = summary_rows(&ProjectFile::new(dir.path()), dir.path());
        let values: Vec<&str> = rows.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(values[0], "Demo");
        assert_eq!(values[1], "res://main.tscn");
        assert_eq!(values[2], "mobile");
    }

    #[test]
    fn test_all_rows_keep_file_order() {
        let rows = all_rows(&parse_settings(SAMPLE));
        let keys: Vec<&str> = rows.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "config_version",
                "[application] config/name",
                "[application] run/main_scene",
                "[rendering] renderer/rendering_method"
            ]
        );
    }

    #[test]
    fn test_info_without_project_file_fails() {
        let dir = tempdir().unwrap();
        let mut state = AppState::in_memory(AppConfig::default());
        let project = dir.path().to_string_lossy().into_owned();
        assert!(handle(vec!["-p".to_string(), project], &mut state).is_err());
    }

    #[test]
    fn test_info_all_succeeds() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("project.godot"), SAMPLE).unwrap();
        let mut state = AppState::in_memory(AppConfig::default());
        let project = dir.path().to_string_lossy().into_owned();
        let code = handle(vec!["-p".to_string(), project, "--all".to_string()], &mut state).unwrap();
        assert_eq!(code, 0);
    }
}
