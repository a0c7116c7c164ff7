//! # System Interaction Layer
//!
//! Everything that touches the engine binary lives here.
//!
//! ## Modules
//!
//! - **`executor`**: spawns child processes, either with inherited stdio (exit
//!   code returned) or with captured output and an optional timeout.
//! - **`locator`**: finds the engine on the host (search path first, then a
//!   recursive scan of the usual install directories).
//! - **`version`**: runs `--version` and normalizes the result to `major.minor`.
//! - **`help_probe`**: runs `--help` and turns the output into option rows.
//! - **`invoker`**: builds the engine's `--path` command lines for run,
//!   headless, export and passthrough.

pub mod executor;
pub mod help_probe;
pub mod invoker;
pub mod locator;
pub mod version;
