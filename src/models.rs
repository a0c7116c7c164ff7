// src/models.rs

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::constants::DEFAULT_ENGINE_VERSION;

// --- Persisted configuration (config.toml) ---

/// Settings for the engine executable.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GodotConfig {
    /// Absolute path of the engine binary, set by `setup`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable_path: Option<PathBuf>,
    /// Version detected by `setup` (e.g. "4.3").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Whether commands may fall back to the locator when no path is configured.
    #[serde(default = "default_true")]
    pub auto_detect: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GodotConfig {
    fn default() -> Self {
        Self {
            executable_path: None,
            version: Some(DEFAULT_ENGINE_VERSION.to_string()),
            auto_detect: true,
        }
    }
}

/// The whole user configuration, loaded once per process.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Name of the selected project, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_project: Option<String>,
    /// Tracked projects: name -> absolute path.
    #[serde(default)]
    pub projects: BTreeMap<String, String>,
    #[serde(default)]
    pub godot: GodotConfig,
}

impl AppConfig {
    /// Path of the current project, if one is selected and still tracked.
    pub fn current_project_path(&self) -> Option<PathBuf> {
        let name = self.current_project.as_ref()?;
        self.projects.get(name).map(PathBuf::from)
    }

    /// Adds (or replaces) a project and makes it current.
    pub fn track_project(&mut self, name: &str, path: PathBuf) {
        self.projects
            .insert(name.to_string(), path.to_string_lossy().into_owned());
        self.current_project = Some(name.to_string());
    }

    /// The configured engine version, or the default.
    pub fn engine_version(&self) -> &str {
        self.godot
            .version
            .as_deref()
            .unwrap_or(DEFAULT_ENGINE_VERSION)
    }
}

// --- Runtime models ---

/// Host platform tag recorded alongside a located executable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
    Other,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Windows => "windows",
            Self::MacOs => "macos",
            Self::Linux => "linux",
            Self::Other => "other",
        };
        f.write_str(name)
    }
}

/// A located engine binary together with its detected version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutableRef {
    pub path: PathBuf,
    pub version: String,
    pub platform: Platform,
}

/// Rendering backends accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Renderer {
    #[default]
    #[value(name = "forward_plus")]
    ForwardPlus,
    #[value(name = "mobile")]
    Mobile,
    #[value(name = "gl_compatibility")]
    GlCompatibility,
}

impl Renderer {
    /// All renderers, in the order they are offered interactively.
    pub const ALL: [Self; 3] = [Self::ForwardPlus, Self::Mobile, Self::GlCompatibility];

    /// The identifier written to `rendering_method`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ForwardPlus => "forward_plus",
            Self::Mobile => "mobile",
            Self::GlCompatibility => "gl_compatibility",
        }
    }

    /// The display name used in the feature literal.
    pub fn friendly_name(self) -> &'static str {
        friendly_renderer_name(self.as_str())
    }
}

impl fmt::Display for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a renderer identifier to its feature-literal name. Unknown keys map to "Forward Plus".
pub fn friendly_renderer_name(renderer: &str) -> &'static str {
    match renderer {
        "mobile" => "Mobile",
        "gl_compatibility" => "GL Compatibility",
        _ => "Forward Plus",
    }
}
