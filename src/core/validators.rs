// src/core/validators.rs

use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;

lazy_static! {
    static ref VERSION_RE: Regex =
        Regex::new(r"^\d+\.\d+(\.\d+)?$").expect("valid version pattern");
}

/// True for `X.Y` or `X.Y.Z`.
pub fn is_valid_version(version: &str) -> bool {
    VERSION_RE.is_match(version)
}

/// True for paths with a `.tscn` extension.
pub fn is_scene_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "tscn")
}

/// Checks a project name before it is used as a directory and config key.
pub fn validate_project_name(name: &str) -> anyhow::Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        anyhow::bail!("Project name cannot be empty.");
    }
    if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        anyhow::bail!("Project name '{}' cannot contain path separators.", trimmed);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_strings() {
        assert!(is_valid_version("4.3"));
        assert!(is_valid_version("4.3.1"));
        assert!(!is_valid_version("v4.3"));
        assert!(!is_valid_version("4"));
        assert!(!is_valid_version("4.3.stable"));
    }

    #[test]
    fn test_scene_paths() {
        assert!(is_scene_path(Path::new("res/main.tscn")));
        assert!(!is_scene_path(Path::new("main.gd")));
    }

    #[test]
    fn test_project_names() {
        assert_eq!(validate_project_name("  demo ").unwrap(), "demo");
        assert!(validate_project_name("").is_err());
        assert!(validate_project_name("a/b").is_err());
        assert!(validate_project_name("..").is_err());
    }
}
