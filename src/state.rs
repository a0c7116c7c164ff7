// src/state.rs

use crate::{
    core::{paths, validators},
    models::AppConfig,
};
use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Path(#[from] paths::PathError),
    #[error("Could not read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not write config file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// The configuration as loaded, plus (after the first mutable access) a
/// snapshot of how it looked before.
enum ConfigState {
    Pristine(AppConfig),
    Dirty {
        original: AppConfig,
        current: AppConfig,
    },
}

/// The user configuration, loaded once in `main` and handed to every handler.
///
/// Read access goes through `Deref`. The first `DerefMut` snapshots the
/// original, so [`AppState::needs_saving`] can tell whether anything changed.
pub struct AppState {
    path: Option<PathBuf>,
    state: ConfigState,
}

impl AppState {
    fn new(path: Option<PathBuf>, config: AppConfig) -> Self {
        Self {
            path,
            state: ConfigState::Pristine(config),
        }
    }

    /// A state that is never written to disk.
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(None, config)
    }

    /// Loads the config from `path`. A missing file gives the default config;
    /// a corrupt one is logged and replaced by the default. Tracked projects
    /// whose directories are gone are dropped, as is a malformed engine version.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            match toml::from_str::<AppConfig>(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring corrupt config at {}: {}", path.display(), e);
                    AppConfig::default()
                }
            }
        } else {
            debug!("No config at {}, using defaults.", path.display());
            AppConfig::default()
        };

        let mut state = Self::new(Some(path.to_path_buf()), config);
        state.validate_projects();
        state.validate_engine_version();
        Ok(state)
    }

    /// Forgets a stored engine version that is not `X.Y` or `X.Y.Z`, so the
    /// default is used until `setup` probes again.
    fn validate_engine_version(&mut self) {
        let Some(version) = self.godot.version.as_deref() else {
            return;
        };
        if validators::is_valid_version(version) {
            return;
        }
        warn!("Ignoring malformed engine version '{}' in config.", version);
        self.godot.version = None;
    }

    /// Drops projects whose paths no longer exist. Only touches the journal
    /// when something is actually removed.
    fn validate_projects(&mut self) {
        let stale: Vec<String> = self
            .projects
            .iter()
            .filter(|(_, path)| !Path::new(path).exists())
            .map(|(name, _)| name.clone())
            .collect();
        if stale.is_empty() {
            return;
        }

        let config: &mut AppConfig = self;
        for name in &stale {
            debug!("Dropping project '{}': path no longer exists.", name);
            config.projects.remove(name);
        }
        if config
            .current_project
            .as_ref()
            .is_some_and(|current| stale.contains(current))
        {
            config.current_project = None;
        }
    }

    pub fn config(&self) -> &AppConfig {
        match &self.state {
            ConfigState::Pristine(config) => config,
            ConfigState::Dirty { current, .. } => current,
        }
    }

    pub fn needs_saving(&self) -> bool {
        match &self.state {
            ConfigState::Pristine(_) => false,
            ConfigState::Dirty { original, current } => original != current,
        }
    }

    /// Writes the config through a temporary file in the same directory, then
    /// renames it over the target. In-memory states are not written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let write_err = |source| ConfigError::Write {
            path: path.clone(),
            source,
        };

        let content = toml::to_string_pretty(self.config())?;
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir).map_err(write_err)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(content.as_bytes()).map_err(write_err)?;
        tmp.persist(path).map_err(|e| write_err(e.error))?;
        debug!("Config saved to {}", path.display());
        Ok(())
    }
}

impl Deref for AppState {
    type Target = AppConfig;

    fn deref(&self) -> &AppConfig {
        self.config()
    }
}

impl DerefMut for AppState {
    fn deref_mut(&mut self) -> &mut AppConfig {
        if let ConfigState::Pristine(_) = self.state {
            let taken = std::mem::replace(&mut self.state, ConfigState::Pristine(AppConfig::default()));
            if let ConfigState::Pristine(config) = taken {
                self.state = ConfigState::Dirty {
                    original: config.clone(),
                    current: config,
                };
            }
        }

        match &mut self.state {
            ConfigState::Dirty { current, .. } => current,
            ConfigState::Pristine(config) => config,
        }
    }
}

/// Loads the state from the user's config file.
pub fn load_app_state() -> Result<AppState, ConfigError> {
    let path = paths::get_config_file_path()?;
    AppState::load(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_access_does_not_dirty() {
        let state = AppState::in_memory(AppConfig::default());
        assert!(state.projects.is_empty());
        assert!(!state.needs_saving());
    }

    #[test]
    fn test_mutation_is_journaled() {
        let mut state = AppState::in_memory(AppConfig::default());
        state.current_project = Some("demo".to_string());
        assert!(state.needs_saving());
    }

    #[test]
    fn test_mutation_back_to_original_needs_no_save() {
        let mut state = AppState::in_memory(AppConfig::default());
        state.current_project = Some("demo".to_string());
        state.current_project = None;
        assert!(!state.needs_saving());
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let state = AppState::load(&dir.path().join("config.toml")).unwrap();
        assert_eq!(*state.config(), AppConfig::default());
        assert!(!state.needs_saving());
    }

    #[test]
    fn test_corrupt_file_gives_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "projects = [[[ not toml").unwrap();
        let state = AppState::load(&path).unwrap();
        assert_eq!(*state.config(), AppConfig::default());
    }

    #[test]
    fn test_save_then_load_keeps_projects() {
        let dir = tempdir().unwrap();
        let project_dir = dir.path().join("demo");
        fs::create_dir(&project_dir).unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut state = AppState::load(&path).unwrap();
        state.track_project("demo", project_dir.clone());
        assert!(state.needs_saving());
        state.save().unwrap();

        let reloaded = AppState::load(&path).unwrap();
        assert_eq!(reloaded.current_project.as_deref(), Some("demo"));
        assert_eq!(reloaded.current_project_path(), Some(project_dir));
        assert!(!reloaded.needs_saving());
    }

    #[test]
    fn test_load_drops_stale_projects() {
        let dir = tempdir().unwrap();
        let alive = dir.path().join("alive");
        fs::create_dir(&alive).unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AppConfig::default();
        config.track_project("gone", dir.path().join("gone"));
        config.track_project("alive", alive.clone());
        config.current_project = Some("gone".to_string());
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let state = AppState::load(&path).unwrap();
        assert!(state.projects.contains_key("alive"));
        assert!(!state.projects.contains_key("gone"));
        assert!(state.current_project.is_none());
        assert!(state.needs_saving());
    }

    #[test]
    fn test_load_forgets_malformed_engine_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[godot]\nversion = \"four\"\n").unwrap();

        let state = AppState::load(&path).unwrap();
        assert!(state.godot.version.is_none());
        assert_eq!(state.engine_version(), crate::constants::DEFAULT_ENGINE_VERSION);
        assert!(state.needs_saving());

        fs::write(&path, "[godot]\nversion = \"4.2.1\"\n").unwrap();
        let state = AppState::load(&path).unwrap();
        assert_eq!(state.godot.version.as_deref(), Some("4.2.1"));
        assert!(!state.needs_saving());
    }

    #[test]
    fn test_in_memory_save_is_a_no_op() {
        let mut state = AppState::in_memory(AppConfig::default());
        state.current_project = Some("x".to_string());
        assert!(state.save().is_ok());
    }
}
