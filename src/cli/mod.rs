use std::ffi::OsString;

pub mod args;
pub mod dispatcher;
pub mod handlers;
pub mod help;

/// godoco: a code-only front-end for Godot projects.
///
/// Only collects the raw arguments. They are not run through clap here: the
/// dispatcher decides what help and version flags mean (after a command name
/// they belong to that command; otherwise they are ours; anything unknown goes
/// to the engine), and a leading `--` must reach the engine as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cli {
    pub args: Vec<String>,
}

impl Cli {
    /// Builds the argument list from the process arguments.
    pub fn from_env() -> Self {
        Self::from_raw(std::env::args_os())
    }

    /// Drops the program name and keeps every other token verbatim.
    /// Non-UTF-8 tokens are converted lossily.
    pub fn from_raw<I, T>(raw: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args = raw
            .into_iter()
            .skip(1)
            .map(|arg| arg.into().to_string_lossy().into_owned())
            .collect();
        Self { args }
    }
}
