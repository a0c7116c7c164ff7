// src/constants.rs

/// The name of the engine's project configuration file.
pub const PROJECT_FILE_NAME: &str = "project.godot";

/// The name of the directory holding godoco's configuration (inside the OS config dir).
pub const CONFIG_DIR_NAME: &str = "godoco";

/// The name of the configuration file (inside the godoco config dir).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// The engine version assumed when detection fails or nothing is configured.
pub const DEFAULT_ENGINE_VERSION: &str = "4.3";

/// Upper bound for `<engine> --version` before the probe gives up.
pub const VERSION_PROBE_TIMEOUT_SECS: u64 = 5;

/// Executable name searched for on the host.
pub const ENGINE_EXE_NAME: &str = if cfg!(target_os = "windows") {
    "godot.exe"
} else {
    "godot"
};

/// The scene created by `create` and targeted by script attachment.
pub const MAIN_SCENE_FILE: &str = "main.tscn";

/// The sample script created by `create --scripts`, relative to the project root.
pub const MAIN_SCRIPT_FILE: &str = "src/main.gd";

/// Resource id used when attaching the main script to the main scene.
pub const MAIN_SCRIPT_RESOURCE_ID: &str = "1_script";

/// Engine-internal directory that is never scanned for scenes.
pub const ENGINE_CACHE_DIR: &str = ".godot";
