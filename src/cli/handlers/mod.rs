// src/cli/handlers/mod.rs

// One module per command. Every handler takes its raw arguments plus the
// application state and returns the process exit code.

pub mod commons;
pub mod configure;
pub mod create;
pub mod export;
pub mod info;
pub mod projects;
pub mod run;
pub mod setup;
pub mod switch;
