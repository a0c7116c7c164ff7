// src/cli/handlers/create.rs

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use std::fs;
use std::path::{Path, PathBuf};

use super::commons;
use crate::{
    cli::args::CreateArgs,
    constants::{MAIN_SCENE_FILE, MAIN_SCRIPT_FILE},
    core::{errors::GodocoError, paths, project_file::ProjectFile, templates, validators},
    models::Renderer,
    state::AppState,
};

/// Everything needed to scaffold a project, after flags and prompts are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOptions {
    pub name: String,
    pub parent: PathBuf,
    pub renderer: Renderer,
    pub scripts: bool,
}

/// The main handler for the `create` command.
pub fn handle(args: Vec<String>, state: &mut AppState) -> Result<i32> {
    let create_args = CreateArgs::try_parse_from(&args)?;
    let options = resolve_options(create_args, commons::is_interactive())?;

    let project_dir = scaffold(&options, state.engine_version())?;
    let tracked = dunce::canonicalize(&project_dir).unwrap_or_else(|_| project_dir.clone());
    state.track_project(&options.name, tracked);

    println!(
        "\n{}",
        format!(
            t!("create.success"),
            name = options.name,
            path = project_dir.display()
        )
        .green()
    );
    Ok(0)
}

/// Fills in whatever the flags left out: by prompting when a user is present,
/// otherwise with defaults. A missing name cannot be defaulted.
fn resolve_options(args: CreateArgs, interactive: bool) -> Result<CreateOptions> {
    let name = match &args.name {
        Some(name) => validators::validate_project_name(name)?,
        None if interactive => prompt_name()?,
        None => return Err(GodocoError::NameRequired.into()),
    };

    let renderer = match args.renderer {
        Some(renderer) => renderer,
        None if interactive => prompt_renderer()?,
        None => Renderer::default(),
    };

    let scripts = match args.scripts {
        Some(scripts) => scripts,
        None if interactive => Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("create.prompt.scripts"))
            .default(false)
            .interact()?,
        None => false,
    };

    Ok(CreateOptions {
        name,
        parent: paths::expand_user_path(&args.path)?,
        renderer,
        scripts,
    })
}

fn prompt_name() -> Result<String> {
    loop {
        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(t!("create.prompt.name"))
            .interact_text()?;
        match validators::validate_project_name(&input) {
            Ok(name) => return Ok(name),
            Err(e) => println!("{}", format!("Error: {}", e).red()),
        }
    }
}

fn prompt_renderer() -> Result<Renderer> {
    let labels: Vec<&str> = Renderer::ALL.iter().map(|r| r.friendly_name()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(t!("create.prompt.renderer"))
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Renderer::ALL
        .get(selection)
        .copied()
        .unwrap_or_default())
}

/// Writes the project skeleton to `<parent>/<name>` and returns that directory.
/// Fails without touching the disk when the directory already exists.
pub fn scaffold(options: &CreateOptions, engine_version: &str) -> Result<PathBuf> {
    let project_dir = options.parent.join(&options.name);
    if project_dir.exists() {
        return Err(GodocoError::TargetExists(project_dir).into());
    }

    fs::create_dir_all(&project_dir)
        .with_context(|| format!("Could not create '{}'", project_dir.display()))?;
    for dir in templates::PROJECT_DIRS {
        fs::create_dir_all(project_dir.join(dir))?;
    }

    write_file(&project_dir, ".gitignore", templates::GITIGNORE)?;
    write_file(&project_dir, ".gitattributes", templates::GITATTRIBUTES)?;
    for marker in templates::GDIGNORE_FILES {
        write_file(&project_dir, marker, "")?;
    }
    write_file(&project_dir, "icon.svg", templates::ICON_SVG)?;
    write_file(&project_dir, "icon.svg.import", templates::ICON_IMPORT)?;

    ProjectFile::new(&project_dir).write(&templates::project_godot(
        &options.name,
        engine_version,
        options.renderer,
    ))?;

    if options.scripts {
        write_file(&project_dir, MAIN_SCENE_FILE, templates::MAIN_SCENE_WITH_SCRIPT)?;
        write_file(&project_dir, MAIN_SCRIPT_FILE, templates::MAIN_SCRIPT)?;
    } else {
        write_file(&project_dir, MAIN_SCENE_FILE, templates::MAIN_SCENE_BARE)?;
    }

    log::debug!("Scaffolded {:?} at {}", options, project_dir.display());
    Ok(project_dir)
}

fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
    let path = root.join(relative);
    fs::write(&path, content).with_context(|| format!("Could not write '{}'", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppConfig;
    use tempfile::tempdir;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_create_mobile_project_without_scripts() {
        let tmp = tempdir().unwrap();
        let out = tmp.path().join("out");
        let out_arg = out.to_string_lossy().into_owned();
        let mut state = AppState::in_memory(AppConfig::default());

        let code = handle(
            args(&["demo", "--path", &out_arg, "--renderer", "mobile", "--scripts=false"]),
            &mut state,
        )
        .unwrap();
        assert_eq!(code, 0);

        let project = out.join("demo");
        let godot = fs::read_to_string(project.join("project.godot")).unwrap();
        assert!(godot.contains("renderer/rendering_method=\"mobile\""));
        assert!(godot.contains("run/main_scene=\"\""));
        assert!(godot.contains("PackedStringArray(\"4.3\", \"Mobile\")"));
        assert!(project.join("icon.svg").is_file());
        assert!(project.join("icon.svg.import").is_file());

        let scene = fs::read_to_string(project.join("main.tscn")).unwrap();
        assert!(!scene.contains("Script"));
        assert!(!project.join("src/main.gd").exists());

        assert_eq!(state.current_project.as_deref(), Some("demo"));
        assert!(state.needs_saving());
    }

    #[test]
    fn test_scaffold_with_scripts() {
        let tmp = tempdir().unwrap();
        let options = CreateOptions {
            name: "game".to_string(),
            parent: tmp.path().to_path_buf(),
            renderer: Renderer::GlCompatibility,
            scripts: true,
        };
        let dir = scaffold(&options, "4.2").unwrap();

        for sub in templates::PROJECT_DIRS {
            assert!(dir.join(sub).is_dir(), "missing {}", sub);
        }
        assert!(dir.join("addons/.gdignore").is_file());
        assert!(dir.join("src/main.gd").is_file());
        let scene = fs::read_to_string(dir.join("main.tscn")).unwrap();
        assert!(scene.contains("path=\"res://src/main.gd\""));

        let project = ProjectFile::new(&dir);
        assert_eq!(project.get("application", "config/name").as_deref(), Some("\"game\""));
        assert_eq!(
            project.get("application", "config/features").as_deref(),
            Some("PackedStringArray(\"4.2\", \"GL Compatibility\")")
        );
    }

    #[test]
    fn test_existing_target_is_an_error() {
        let tmp = tempdir().unwrap();
        fs::create_dir(tmp.path().join("taken")).unwrap();
        let options = CreateOptions {
            name: "taken".to_string(),
            parent: tmp.path().to_path_buf(),
            renderer: Renderer::ForwardPlus,
            scripts: false,
        };
        let err = scaffold(&options, "4.3").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GodocoError>(),
            Some(GodocoError::TargetExists(_))
        ));
        assert!(!tmp.path().join("taken/project.godot").exists());
    }

    #[test]
    fn test_non_interactive_defaults() {
        let parsed = CreateArgs::try_parse_from(args(&["demo"])).unwrap();
        let options = resolve_options(parsed, false).unwrap();
        assert_eq!(options.renderer, Renderer::ForwardPlus);
        assert!(!options.scripts);
        assert_eq!(options.parent, PathBuf::from("."));

        let nameless = CreateArgs::try_parse_from(Vec::<String>::new()).unwrap();
        assert!(matches!(
            resolve_options(nameless, false)
                .unwrap_err()
                .downcast_ref::<GodocoError>(),
            Some(GodocoError::NameRequired)
        ));
    }
}
