// src/core/project_file.rs

//! Targeted editing of `project.godot`.
//!
//! There is no structured model of the file. Queries and mutations run directly
//! on the raw text through pattern search and first-match replacement, and every
//! call re-reads the file from disk so edits made by the editor in between are
//! never lost. The [`Setting`] view is a flat, ordered list of
//! `(section, key, raw value)` triples used only for display.

use crate::{constants::PROJECT_FILE_NAME, models::friendly_renderer_name};
use lazy_static::lazy_static;
use log::debug;
use regex::{NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

lazy_static! {
    static ref MAIN_SCENE_RE: Regex =
        Regex::new(r#"run/main_scene="[^"]*""#).expect("valid main scene pattern");
    static ref ICON_RE: Regex = Regex::new(r#"config/icon="[^"]*""#).expect("valid icon pattern");
    static ref RENDERING_METHOD_RE: Regex =
        Regex::new(r#"rendering_method="[^"]*""#).expect("valid rendering method pattern");
    static ref FEATURES_RE: Regex = Regex::new(r"config/features=PackedStringArray\([^)]*\)")
        .expect("valid feature literal pattern");
}

#[derive(Error, Debug)]
pub enum ProjectFileError {
    #[error("Could not read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid key pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

type ProjectFileResult<T> = Result<T, ProjectFileError>;

/// One `key=value` line, with the section it appeared under (`""` before the first header).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub section: String,
    pub key: String,
    pub value: String,
}

/// Handle on `<project_dir>/project.godot`. Owns only the path.
#[derive(Debug, Clone)]
pub struct ProjectFile {
    path: PathBuf,
}

impl ProjectFile {
    pub fn new(project_dir: &Path) -> Self {
        Self {
            path: project_dir.join(PROJECT_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the whole file. A missing file reads as an empty string.
    pub fn read(&self) -> ProjectFileResult<String> {
        if !self.exists() {
            return Ok(String::new());
        }
        fs::read_to_string(&self.path).map_err(|source| ProjectFileError::Read {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrites the whole file.
    pub fn write(&self, content: &str) -> ProjectFileResult<()> {
        fs::write(&self.path, content).map_err(|source| ProjectFileError::Write {
            path: self.path.clone(),
            source,
        })
    }

    /// Returns the trimmed remainder of the first `key=...` line in the file.
    ///
    /// The section is NOT used for scoping: when two sections define the same
    /// key, the first one in file order wins. Unreadable files yield `None`.
    pub fn get(&self, section: &str, key: &str) -> Option<String> {
        let content = self.read().ok()?;
        let pattern = Regex::new(&format!("{}=(.+)", regex::escape(key))).ok()?;
        let value = pattern
            .captures(&content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string());
        debug!("get [{}] {} -> {:?}", section, key, value);
        value
    }

    /// Replaces the first match of `key_pattern` (a regular expression) with the
    /// literal `replacement` and rewrites the file.
    ///
    /// Returns `Ok(false)` without writing when the file is missing or the
    /// pattern does not match.
    pub fn update(&self, key_pattern: &str, replacement: &str) -> ProjectFileResult<bool> {
        if !self.exists() {
            return Ok(false);
        }
        let pattern = Regex::new(key_pattern).map_err(|source| ProjectFileError::InvalidPattern {
            pattern: key_pattern.to_string(),
            source,
        })?;
        self.update_with(&pattern, replacement)
    }

    fn update_with(&self, pattern: &Regex, replacement: &str) -> ProjectFileResult<bool> {
        if !self.exists() {
            return Ok(false);
        }
        let content = self.read()?;
        if !pattern.is_match(&content) {
            debug!("'{}' not found in {}", pattern.as_str(), self.path.display());
            return Ok(false);
        }
        let updated = pattern.replacen(&content, 1, NoExpand(replacement));
        self.write(&updated)?;
        debug!("Patched {} -> {}", pattern.as_str(), replacement);
        Ok(true)
    }

    /// Sets `run/main_scene` to the given `res://` path.
    pub fn update_main_scene(&self, scene_path: &str) -> ProjectFileResult<bool> {
        self.update_with(
            &MAIN_SCENE_RE,
            &format!("run/main_scene=\"{}\"", scene_path),
        )
    }

    /// Sets `config/icon` to the given `res://` path.
    pub fn update_icon(&self, icon_path: &str) -> ProjectFileResult<bool> {
        self.update_with(&ICON_RE, &format!("config/icon=\"{}\"", icon_path))
    }

    /// Rewrites both the rendering method and the feature literal. Returns true
    /// when at least one of the two was found.
    pub fn set_renderer(&self, renderer: &str, version: &str) -> ProjectFileResult<bool> {
        let feature = friendly_renderer_name(renderer);
        let method_updated = self.update_with(
            &RENDERING_METHOD_RE,
            &format!("rendering_method=\"{}\"", renderer),
        )?;
        let features_updated = self.update_with(
            &FEATURES_RE,
            &format!(
                "config/features=PackedStringArray(\"{}\", \"{}\")",
                version, feature
            ),
        )?;
        Ok(method_updated || features_updated)
    }

    /// The ordered line view of the file. Unreadable files yield an empty list.
    pub fn settings(&self) -> Vec<Setting> {
        self.read()
            .map(|content| parse_settings(&content))
            .unwrap_or_default()
    }
}

/// Splits the text into `(section, key, value)` triples in file order.
/// Comments (`;`), blank lines and lines without `=` are skipped.
pub fn parse_settings(content: &str) -> Vec<Setting> {
    let mut section = String::new();
    let mut settings = Vec::new();

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = name.trim().to_string();
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            settings.push(Setting {
                section: section.clone(),
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            });
        }
    }
    settings
}
