// src/system/version.rs

use crate::{
    constants::{DEFAULT_ENGINE_VERSION, VERSION_PROBE_TIMEOUT_SECS},
    system::executor,
};
use lazy_static::lazy_static;
use regex::Regex;
use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

lazy_static! {
    // "Godot Engine v4.3.stable.official..." -> "4.3"
    static ref TAGGED_VERSION_RE: Regex = Regex::new(r"v(\d+\.\d+)").expect("valid version pattern");
    static ref BARE_VERSION_RE: Regex = Regex::new(r"(\d+\.\d+)").expect("valid version pattern");
}

/// Extracts `major.minor` from `--version` output, preferring a `v`-prefixed match.
pub fn parse_version(output: &str) -> Option<String> {
    [&*TAGGED_VERSION_RE, &*BARE_VERSION_RE]
        .iter()
        .find_map(|re| re.captures(output).and_then(|caps| caps.get(1)))
        .map(|m| m.as_str().to_string())
}

/// Detects the engine version, falling back to the default on any failure.
pub fn detect_godot_version(godot_path: &Path) -> String {
    detect_with_timeout(godot_path, Duration::from_secs(VERSION_PROBE_TIMEOUT_SECS))
}

/// Same as [`detect_godot_version`] with an explicit timeout.
pub fn detect_with_timeout(godot_path: &Path, timeout: Duration) -> String {
    let argv = [godot_path.as_os_str().to_os_string(), OsString::from("--version")];
    let detected = match executor::execute_and_capture_output(&argv, Some(timeout)) {
        Ok(output) => parse_version(output.trim()),
        Err(e) => {
            log::debug!("Version probe failed: {}", e);
            None
        }
    };
    detected.unwrap_or_else(|| {
        log::debug!("Using default engine version {}", DEFAULT_ENGINE_VERSION);
        DEFAULT_ENGINE_VERSION.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tagged_version() {
        assert_eq!(
            parse_version("Godot Engine v4.2.1.stable.official.b09f793f5").as_deref(),
            Some("4.2")
        );
    }

    #[test]
    fn test_tagged_match_beats_earlier_bare_number() {
        assert_eq!(parse_version("build 10.15 v4.3.stable").as_deref(), Some("4.3"));
    }

    #[test]
    fn test_parse_bare_version() {
        assert_eq!(parse_version("4.1.stable.mono").as_deref(), Some("4.1"));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_version("").is_none());
        assert!(parse_version("Godot Engine (custom build)").is_none());
    }

    #[test]
    fn test_missing_binary_falls_back_to_default() {
        let version = detect_godot_version(Path::new("/no/such/godot-binary"));
        assert_eq!(version, DEFAULT_ENGINE_VERSION);
    }

    #[cfg(unix)]
    mod with_scripts {
        use super::*;
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        fn fake_engine(body: &str) -> (TempDir, std::path::PathBuf) {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("godot");
            fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
            (dir, path)
        }

        #[test]
        fn test_detects_version_from_stdout() {
            let (_dir, path) = fake_engine("echo 'Godot Engine v4.2.2.stable.official'");
            assert_eq!(detect_godot_version(&path), "4.2");
        }

        #[test]
        fn test_unparsable_output_uses_default() {
            let (_dir, path) = fake_engine("echo 'no version here'");
            assert_eq!(detect_godot_version(&path), DEFAULT_ENGINE_VERSION);
        }

        #[test]
        fn test_timeout_uses_default() {
            let (_dir, path) = fake_engine("sleep 5\necho v9.9");
            let version = detect_with_timeout(&path, Duration::from_millis(200));
            assert_eq!(version, DEFAULT_ENGINE_VERSION);
        }
    }
}
