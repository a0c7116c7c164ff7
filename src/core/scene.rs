// src/core/scene.rs

//! Best-effort fixes applied to a project before it is run. Every routine here
//! silently does nothing when its preconditions are not met.

use crate::{
    constants::{ENGINE_CACHE_DIR, MAIN_SCENE_FILE, MAIN_SCRIPT_FILE, MAIN_SCRIPT_RESOURCE_ID},
    core::{paths, project_file::ProjectFile, validators},
};
use anyhow::Result;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

lazy_static! {
    static ref SCENE_HEADER_RE: Regex =
        Regex::new(r"\[gd_scene.*?\]").expect("valid scene header pattern");
    static ref NODE_HEADER_RE: Regex =
        Regex::new(r#"\[node name=".*?" type=".*?"\]\r?\n"#).expect("valid node header pattern");
}

/// Attaches the script at `script_res_path` to the first node of a scene.
///
/// Inserts an `ext_resource` declaration right after the `[gd_scene ...]` header
/// and a `script = ExtResource(...)` line right after the first typed node
/// header. Inserted lines follow the scene's line endings. Text that already
/// references the script, or that has no scene header, is returned unchanged.
/// Applying it twice equals applying it once.
pub fn attach_script(scene: &str, script_res_path: &str, resource_id: &str) -> String {
    if scene.contains(&format!("path=\"{}\"", script_res_path)) {
        return scene.to_string();
    }
    let Some(header) = SCENE_HEADER_RE.find(scene) else {
        return scene.to_string();
    };

    let eol = if scene.contains("\r\n") { "\r\n" } else { "\n" };
    let resource_def = format!(
        "{eol}[ext_resource type=\"Script\" path=\"{}\" id=\"{}\"]{eol}",
        script_res_path, resource_id
    );
    let mut updated = scene.to_string();
    updated.insert_str(header.end(), &resource_def);

    if let Some(node) = NODE_HEADER_RE.find(&updated) {
        let attach_line = format!("script = ExtResource(\"{}\"){eol}", resource_id);
        updated.insert_str(node.end(), &attach_line);
    }
    updated
}

/// Attaches `src/main.gd` to `main.tscn` when both exist and the scene does not
/// reference it yet. Returns whether the scene was rewritten.
pub fn ensure_script_attachment(project_dir: &Path) -> Result<bool> {
    let scene_path = project_dir.join(MAIN_SCENE_FILE);
    let script_path = project_dir.join(MAIN_SCRIPT_FILE);
    if !scene_path.is_file() || !script_path.is_file() {
        return Ok(false);
    }

    let content = fs::read_to_string(&scene_path)?;
    let script_res = paths::make_res_path(project_dir, &script_path);
    let updated = attach_script(&content, &script_res, MAIN_SCRIPT_RESOURCE_ID);
    if updated == content {
        return Ok(false);
    }

    println!("{}", format!(t!("run.info.attaching_script"), script = MAIN_SCRIPT_FILE, scene = MAIN_SCENE_FILE));
    fs::write(&scene_path, updated)?;
    Ok(true)
}

/// Finds the first `.tscn` below the project root, skipping the engine cache.
/// Traversal is sorted by file name.
pub fn find_first_scene(project_dir: &Path) -> Option<PathBuf> {
    WalkDir::new(project_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.file_name() != ENGINE_CACHE_DIR)
        .filter_map(Result::ok)
        .find(|entry| {
            entry.file_type().is_file() && validators::is_scene_path(entry.path())
        })
        .map(|entry| entry.into_path())
}

/// Points `run/main_scene` at the first scene found when the project leaves it
/// empty. Returns the `res://` path that was set, if any.
pub fn ensure_main_scene(project_dir: &Path) -> Result<Option<String>> {
    let project = ProjectFile::new(project_dir);
    if !project.exists() {
        return Ok(None);
    }
    if !project.read()?.contains("run/main_scene=\"\"") {
        return Ok(None);
    }
    let Some(scene) = find_first_scene(project_dir) else {
        debug!("No scene found under {}", project_dir.display());
        return Ok(None);
    };

    let res_path = paths::make_res_path(project_dir, &scene);
    if project.update_main_scene(&res_path)? {
        println!("{}", format!(t!("run.info.main_scene_set"), scene = res_path));
        return Ok(Some(res_path));
    }
    Ok(None)
}
