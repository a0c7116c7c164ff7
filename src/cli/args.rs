// src/cli/args.rs
use clap::Parser;

use crate::models::Renderer;

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true, // The dispatcher already consumed the command name.
    name = "godoco setup",
    about = "Locate the Godot executable and remember it."
)]
pub struct SetupArgs {
    /// Path to the Godot executable. Auto-detected when omitted.
    #[arg(long)]
    pub path: Option<String>,
}

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    name = "godoco create",
    about = "Create a new Godot project."
)]
pub struct CreateArgs {
    /// Project name. Asked interactively when omitted.
    pub name: Option<String>,

    /// Parent directory for the new project.
    #[arg(long, short, default_value = ".")]
    pub path: String,

    /// Rendering method.
    #[arg(long, short, value_enum)]
    pub renderer: Option<Renderer>,

    /// Generate a sample script attached to the main scene (`--scripts=false` to skip).
    #[arg(
        long,
        short,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub scripts: Option<bool>,
}

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, name = "godoco run", about = "Run a project.")]
pub struct RunArgs {
    /// Project name or path. Defaults to the current project.
    #[arg(long, short)]
    pub project: Option<String>,

    /// Scene to run instead of the main scene.
    #[arg(long, short)]
    pub scene: Option<String>,

    /// Open the editor instead of running the game.
    #[arg(long)]
    pub editor: bool,

    /// Run a debug session.
    #[arg(long)]
    pub debug: bool,

    #[arg(long)]
    pub fullscreen: bool,

    #[arg(long)]
    pub maximized: bool,

    /// Run without a window.
    #[arg(long)]
    pub headless: bool,

    /// Script to execute (implies --headless).
    #[arg(long)]
    pub script: Option<String>,
}

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, name = "godoco projects", about = "List tracked projects.")]
pub struct ProjectsArgs {}

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, name = "godoco switch", about = "Switch the current project.")]
pub struct SwitchArgs {
    /// Name of a tracked project.
    pub name: String,
}

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, name = "godoco info", about = "Show project info.")]
pub struct InfoArgs {
    #[arg(long, short)]
    pub project: Option<String>,

    /// List every setting from project.godot.
    #[arg(long)]
    pub all: bool,
}

#[derive(Parser, Debug, Default)]
#[command(no_binary_name = true, name = "godoco export", about = "Export a project preset.")]
pub struct ExportArgs {
    /// Export preset name, as defined in export_presets.cfg.
    pub preset: String,

    /// Output file. Defaults to `build/<project><ext>` inside the project.
    pub output: Option<String>,

    #[arg(long, short)]
    pub project: Option<String>,

    /// Export with the debug template.
    #[arg(long)]
    pub debug: bool,
}

#[derive(Parser, Debug, Default)]
#[command(
    no_binary_name = true,
    name = "godoco configure",
    about = "Edit project.godot settings."
)]
pub struct ConfigureArgs {
    #[arg(long, short)]
    pub project: Option<String>,

    /// Main scene, as a `res://` path or a path relative to the project.
    #[arg(long)]
    pub main_scene: Option<String>,

    /// Project icon, as a `res://` path or a path relative to the project.
    #[arg(long)]
    pub icon: Option<String>,

    #[arg(long, value_enum)]
    pub renderer: Option<Renderer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_create_scripts_flag_forms() {
        let bare = CreateArgs::try_parse_from(args(&["demo", "--scripts"])).unwrap();
        assert_eq!(bare.scripts, Some(true));

        let off = CreateArgs::try_parse_from(args(&["demo", "--scripts=false"])).unwrap();
        assert_eq!(off.scripts, Some(false));

        let unset = CreateArgs::try_parse_from(args(&["demo"])).unwrap();
        assert_eq!(unset.scripts, None);
        assert_eq!(unset.path, ".");
    }

    #[test]
    fn test_create_renderer_value_enum() {
        let parsed =
            CreateArgs::try_parse_from(args(&["demo", "-p", "./out", "-r", "mobile"])).unwrap();
        assert_eq!(parsed.renderer, Some(Renderer::Mobile));
        assert_eq!(parsed.path, "./out");

        assert!(CreateArgs::try_parse_from(args(&["demo", "-r", "vulkan"])).is_err());
    }

    #[test]
    fn test_run_flags() {
        let parsed = RunArgs::try_parse_from(args(&[
            "-p",
            "demo",
            "-s",
            "res://level.tscn",
            "--editor",
            "--maximized",
        ]))
        .unwrap();
        assert_eq!(parsed.project.as_deref(), Some("demo"));
        assert_eq!(parsed.scene.as_deref(), Some("res://level.tscn"));
        assert!(parsed.editor && parsed.maximized && !parsed.fullscreen);
    }

    #[test]
    fn test_export_positionals() {
        let parsed = ExportArgs::try_parse_from(args(&["Linux/X11", "out/game", "--debug"])).unwrap();
        assert_eq!(parsed.preset, "Linux/X11");
        assert_eq!(parsed.output.as_deref(), Some("out/game"));
        assert!(parsed.debug);

        assert!(ExportArgs::try_parse_from(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_switch_requires_name() {
        assert!(SwitchArgs::try_parse_from(Vec::<String>::new()).is_err());
    }
}
