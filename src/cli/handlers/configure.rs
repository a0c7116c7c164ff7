// src/cli/handlers/configure.rs

use anyhow::{Result, bail};
use clap::Parser;
use colored::Colorize;
use std::path::Path;

use super::commons;
use crate::{
    cli::args::ConfigureArgs,
    core::{paths, validators},
    state::AppState,
};

/// Applies targeted edits to `project.godot`.
pub fn handle(args: Vec<String>, state: &mut AppState) -> Result<i32> {
    let configure_args = ConfigureArgs::try_parse_from(&args)?;
    let project_dir = commons::resolve_project(configure_args.project.as_deref(), state)?;
    let project = commons::require_project_file(&project_dir)?;

    if configure_args.main_scene.is_none()
        && configure_args.icon.is_none()
        && configure_args.renderer.is_none()
    {
        println!("{}", t!("configure.info.nothing").dimmed());
        return Ok(0);
    }

    if let Some(raw) = &configure_args.main_scene {
        if !validators::is_scene_path(Path::new(raw)) {
            bail!(format!(t!("configure.error.not_a_scene"), path = raw));
        }
        let scene = to_res_path(&project_dir, raw);
        report(project.update_main_scene(&scene)?, "run/main_scene", &scene);
    }
    if let Some(raw) = &configure_args.icon {
        let icon = to_res_path(&project_dir, raw);
        report(project.update_icon(&icon)?, "config/icon", &icon);
    }
    if let Some(renderer) = configure_args.renderer {
        let updated = project.set_renderer(renderer.as_str(), state.engine_version())?;
        report(updated, "rendering_method", renderer.as_str());
    }
    Ok(0)
}

fn report(updated: bool, key: &str, value: &str) {
    if updated {
        println!("{}", format!(t!("configure.success.updated"), key = key, value = value).green());
    } else {
        println!("{}", format!(t!("configure.warning.key_missing"), key = key).yellow());
    }
}

/// `res://` paths pass through; anything else is taken relative to the project.
fn to_res_path(project_dir: &Path, raw: &str) -> String {
    if raw.starts_with("res://") {
        return raw.to_string();
    }
    let relative = raw.trim_start_matches("./");
    paths::make_res_path(project_dir, &project_dir.join(relative))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::project_file::ProjectFile, models::AppConfig};
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = "[application]\nrun/main_scene=\"\"\nconfig/features=PackedStringArray(\"4.3\", \"Forward Plus\")\nconfig/icon=\"res://icon.svg\"\n\n[rendering]\nrenderer/rendering_method=\"forward_plus\"\n";

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_to_res_path() {
        let root = Path::new("/games/demo");
        assert_eq!(to_res_path(root, "res://a.tscn"), "res://a.tscn");
        assert_eq!(to_res_path(root, "levels/a.tscn"), "res://levels/a.tscn");
        assert_eq!(to_res_path(root, "./a.tscn"), "res://a.tscn");
    }

    #[test]
    fn test_configure_edits_project_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("project.godot"), SAMPLE).unwrap();
        let mut config = AppConfig::default();
        config.godot.version = Some("4.2".to_string());
        let mut state = AppState::in_memory(config);
        let project = dir.path().to_string_lossy().into_owned();

        let code = handle(
            args(&[
                "-p",
                &project,
                "--main-scene",
                "levels/one.tscn",
                "--icon",
                "res://art/logo.svg",
                "--renderer",
                "gl_compatibility",
            ]),
            &mut state,
        )
        .unwrap();
        assert_eq!(code, 0);

        let file = ProjectFile::new(dir.path());
        assert_eq!(
            file.get("application", "run/main_scene").as_deref(),
            Some("\"res://levels/one.tscn\"")
        );
        assert_eq!(file.get("application", "config/icon").as_deref(), Some("\"res://art/logo.svg\""));
        assert_eq!(
            file.get("application", "config/features").as_deref(),
            Some("PackedStringArray(\"4.2\", \"GL Compatibility\")")
        );
        assert_eq!(
            file.get("rendering", "renderer/rendering_method").as_deref(),
            Some("\"gl_compatibility\"")
        );
        assert!(!state.needs_saving());
    }

    #[test]
    fn test_main_scene_must_be_a_scene_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("project.godot"), SAMPLE).unwrap();
        let mut state = AppState::in_memory(AppConfig::default());
        let project = dir.path().to_string_lossy().into_owned();

        let err = handle(
            args(&["-p", &project, "--main-scene", "src/main.gd", "--icon", "x.svg"]),
            &mut state,
        )
        .unwrap_err();
        assert!(err.to_string().contains("src/main.gd"));
        assert_eq!(fs::read_to_string(dir.path().join("project.godot")).unwrap(), SAMPLE);
    }

    #[test]
    fn test_configure_without_project_file_fails() {
        let dir = tempdir().unwrap();
        let mut state = AppState::in_memory(AppConfig::default());
        let project = dir.path().to_string_lossy().into_owned();
        assert!(handle(args(&["-p", &project, "--icon", "x.svg"]), &mut state).is_err());
        assert!(!dir.path().join("project.godot").exists());
    }
}
