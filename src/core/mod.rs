// src/core/mod.rs

pub mod errors;
pub mod paths;
pub mod project_file;
pub mod scene;
pub mod templates;
pub mod validators;
