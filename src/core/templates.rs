// src/core/templates.rs

//! Static file contents written by `create`.

use crate::models::Renderer;

/// The default engine icon.
pub const ICON_SVG: &str = include_str!("../../assets/icon.svg");

/// Import settings matching [`ICON_SVG`].
pub const ICON_IMPORT: &str = "[remap]\nimporter=\"texture\"\ntype=\"CompressedTexture2D\"\npath=\"res://.godot/imported/icon.svg\"\n[params]\ncompress/mode=0\n";

pub const GITIGNORE: &str = ".godot/\n.import/\nexport_presets.cfg\n";

pub const GITATTRIBUTES: &str = "*.wav filter=lfs diff=lfs merge=lfs -text\n";

/// Directories created inside every new project.
pub const PROJECT_DIRS: [&str; 4] = ["src", "assets", "addons", ".godot"];

/// Empty marker files that keep the engine from importing a directory.
pub const GDIGNORE_FILES: [&str; 2] = [".gdignore", "addons/.gdignore"];

pub const MAIN_SCENE_BARE: &str =
    "[gd_scene format=3 uid=\"uid://b4y5z1x2w3v4\"]\n\n[node name=\"Main\" type=\"Node\"]\n";

pub const MAIN_SCENE_WITH_SCRIPT: &str = "[gd_scene load_steps=2 format=3 uid=\"uid://b4y5z1x2w3v4\"]\n\n[ext_resource type=\"Script\" path=\"res://src/main.gd\" id=\"1_script\"]\n\n[node name=\"Main\" type=\"Node\"]\nscript = ExtResource(\"1_script\")\n";

pub const MAIN_SCRIPT: &str = "extends Node\n\nfunc _ready() -> void:\n\tprint(\"Ready\")\n";

/// Renders a fresh `project.godot` with an empty main scene.
pub fn project_godot(name: &str, version: &str, renderer: Renderer) -> String {
    format!(
        r#"config_version=5

[application]
config/name="{name}"
run/main_scene=""
config/features=PackedStringArray("{version}", "{feature}")
config/icon="res://icon.svg"

[display]
window/size/viewport_width=1280
window/size/viewport_height=720
window/size/resizable=true
window/stretch/mode="canvas_items"

[rendering]
renderer/rendering_method="{renderer}"
"#,
        name = name,
        version = version,
        feature = renderer.friendly_name(),
        renderer = renderer.as_str(),
    )
}
