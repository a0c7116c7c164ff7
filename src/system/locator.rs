// src/system/locator.rs

use crate::{
    constants::ENGINE_EXE_NAME,
    models::{ExecutableRef, Platform},
    system::version,
};
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Searches the host for the engine binary.
///
/// The search path is authoritative: a hit there short-circuits everything
/// else. Only when it yields nothing are the candidate directories scanned
/// recursively. Absence is a normal outcome and is reported as `None`.
#[derive(Debug, Clone)]
pub struct ExecutableLocator {
    search_path: Option<OsString>,
    candidate_dirs: Vec<PathBuf>,
    exe_name: String,
    require_exe_suffix: bool,
}

impl ExecutableLocator {
    /// A locator over an explicit search path and candidate directories.
    pub fn new(search_path: Option<OsString>, candidate_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_path,
            candidate_dirs,
            exe_name: ENGINE_EXE_NAME.to_string(),
            require_exe_suffix: Platform::current() == Platform::Windows,
        }
    }

    /// A locator over the process `PATH` and the platform's usual install spots.
    pub fn for_host() -> Self {
        Self::new(env::var_os("PATH"), default_candidate_dirs())
    }

    pub fn find(&self) -> Option<PathBuf> {
        if let Some(found) = self.find_in_search_path() {
            log::debug!("Found engine on search path: {}", found.display());
            return Some(found);
        }
        let found = self.scan_candidate_dirs();
        match &found {
            Some(path) => log::debug!("Found engine by directory scan: {}", path.display()),
            None => log::debug!("No engine executable found on this host."),
        }
        found
    }

    fn find_in_search_path(&self) -> Option<PathBuf> {
        let search_path = self.search_path.as_ref()?;
        env::split_paths(search_path)
            .map(|dir| dir.join(&self.exe_name))
            .find(|candidate| is_executable(candidate))
    }

    fn scan_candidate_dirs(&self) -> Option<PathBuf> {
        self.candidate_dirs
            .iter()
            .filter(|dir| dir.is_dir())
            .find_map(|dir| self.scan_dir(dir))
    }

    fn scan_dir(&self, dir: &Path) -> Option<PathBuf> {
        WalkDir::new(dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .map(walkdir::DirEntry::into_path)
            .filter(|path| self.name_matches(path))
            .find(|path| is_executable(path))
    }

    fn name_matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };
        if self.require_exe_suffix {
            let lower = name.to_lowercase();
            lower.contains("godot") && lower.ends_with(".exe")
        } else {
            name.contains("godot")
        }
    }
}

fn default_candidate_dirs() -> Vec<PathBuf> {
    if Platform::current() == Platform::Windows {
        dirs::home_dir()
            .map(|home| vec![home.join("Desktop").join("Godot"), home.join("Downloads")])
            .unwrap_or_default()
    } else {
        vec![PathBuf::from("/usr/local/bin")]
    }
}

/// Whether `path` is a regular file the current user may execute.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Whether `path` is a regular file the current user may execute.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.is_file())
        .unwrap_or(false)
}

/// Finds the engine on this host.
pub fn find_godot_executable() -> Option<PathBuf> {
    ExecutableLocator::for_host().find()
}

/// Builds an [`ExecutableRef`] for a known binary by probing its version.
pub fn describe(path: &Path) -> ExecutableRef {
    ExecutableRef {
        path: path.to_path_buf(),
        version: version::detect_godot_version(path),
        platform: Platform::current(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn make_file(path: &Path, mode: u32) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
    }

    #[test]
    fn test_nothing_found_returns_none() {
        let empty = tempdir().unwrap();
        let locator = ExecutableLocator::new(
            Some(empty.path().as_os_str().to_os_string()),
            vec![empty.path().to_path_buf(), empty.path().join("missing")],
        );
        assert!(locator.find().is_none());

        let nothing = ExecutableLocator::new(None, vec![]);
        assert!(nothing.find().is_none());
    }

    #[test]
    fn test_search_path_hit_short_circuits_scan() {
        let bin = tempdir().unwrap();
        let scan = tempdir().unwrap();
        make_file(&bin.path().join("godot"), 0o755);
        make_file(&scan.path().join("godot_v4"), 0o755);

        let search = env::join_paths([bin.path()]).unwrap();
        let locator = ExecutableLocator::new(Some(search), vec![scan.path().to_path_buf()]);
        assert_eq!(locator.find(), Some(bin.path().join("godot")));
    }

    #[test]
    fn test_non_executable_on_search_path_is_skipped() {
        let bin = tempdir().unwrap();
        make_file(&bin.path().join("godot"), 0o644);

        let search = env::join_paths([bin.path()]).unwrap();
        let locator = ExecutableLocator::new(Some(search), vec![]);
        assert!(locator.find().is_none());
    }

    #[test]
    fn test_scan_is_recursive_and_filters_non_executables() {
        let scan = tempdir().unwrap();
        make_file(&scan.path().join("a/godot_readme.txt"), 0o644);
        make_file(&scan.path().join("b/Godot_v4.3/godot.x86_64"), 0o755);
        make_file(&scan.path().join("c/unrelated"), 0o755);

        let locator = ExecutableLocator::new(None, vec![scan.path().to_path_buf()]);
        assert_eq!(
            locator.find(),
            Some(scan.path().join("b/Godot_v4.3/godot.x86_64"))
        );
    }
}
