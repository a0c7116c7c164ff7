use anyhow::{Result, anyhow};

use crate::{
    cli::{
        handlers::{self, commons},
        help::{self, CommandEntry, HelpView},
    },
    state::AppState,
};

/// Defines a command, its aliases, its one-line summary and its handler.
/// Handlers return the process exit code.
#[derive(Debug)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub about: &'static str,
    handler: fn(Vec<String>, &mut AppState) -> Result<i32>,
}

/// The single source of truth for all commands.
static COMMAND_REGISTRY: &[CommandDefinition] = &[
    CommandDefinition {
        name: "setup",
        aliases: &[],
        about: t!("cmd.setup.about"),
        handler: handlers::setup::handle,
    },
    CommandDefinition {
        name: "create",
        aliases: &["new"],
        about: t!("cmd.create.about"),
        handler: handlers::create::handle,
    },
    CommandDefinition {
        name: "run",
        aliases: &[],
        about: t!("cmd.run.about"),
        handler: handlers::run::handle,
    },
    CommandDefinition {
        name: "projects",
        aliases: &["ls"],
        about: t!("cmd.projects.about"),
        handler: handlers::projects::handle,
    },
    CommandDefinition {
        name: "switch",
        aliases: &[],
        about: t!("cmd.switch.about"),
        handler: handlers::switch::handle,
    },
    CommandDefinition {
        name: "info",
        aliases: &[],
        about: t!("cmd.info.about"),
        handler: handlers::info::handle,
    },
    CommandDefinition {
        name: "export",
        aliases: &[],
        about: t!("cmd.export.about"),
        handler: handlers::export::handle,
    },
    CommandDefinition {
        name: "configure",
        aliases: &["config"],
        about: t!("cmd.configure.about"),
        handler: handlers::configure::handle,
    },
];

/// Finds a command definition in the registry by its name or alias.
pub fn find_command(name: &str) -> Option<&'static CommandDefinition> {
    COMMAND_REGISTRY
        .iter()
        .find(|cmd| cmd.name == name || cmd.aliases.contains(&name))
}

/// What to do with the raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterDecision {
    /// A registered command (canonical name) and the arguments after it.
    KnownCommand(&'static str, Vec<String>),
    /// Hand the arguments to the engine untouched.
    Passthrough(Vec<String>),
    ShowHelp,
    ShowVersion,
}

/// Decides what the raw arguments (without the program name) mean.
///
/// Rules, first match wins:
/// 1. no arguments: help;
/// 2. first token names a command or alias: that command;
/// 3. any `--version`/`-V`: version;
/// 4. any `--help`/`-h`: help;
/// 5. anything else goes to the engine.
///
/// Rules 3 and 4 only look at tokens before the first `--`; the rest are user
/// arguments for the game.
pub fn route(args: &[String]) -> RouterDecision {
    let Some(first) = args.first() else {
        return RouterDecision::ShowHelp;
    };
    if let Some(command) = find_command(first) {
        return RouterDecision::KnownCommand(command.name, args.iter().skip(1).cloned().collect());
    }
    let has_flag = |flags: [&str; 2]| {
        args.iter()
            .take_while(|a| *a != "--")
            .any(|a| flags.contains(&a.as_str()))
    };
    if has_flag(["--version", "-V"]) {
        return RouterDecision::ShowVersion;
    }
    if has_flag(["--help", "-h"]) {
        return RouterDecision::ShowHelp;
    }
    RouterDecision::Passthrough(args.to_vec())
}

/// The help screen for the current host.
pub fn help_view(state: &AppState) -> HelpView {
    let commands = COMMAND_REGISTRY
        .iter()
        .map(|cmd| CommandEntry {
            name: cmd.name,
            aliases: cmd.aliases,
            about: cmd.about,
        })
        .collect();
    let engine = commons::find_godot_executable(state);
    HelpView::assemble(commands, engine.as_deref())
}

/// Routes and runs. Returns the exit code for the process.
pub fn dispatch(args: Vec<String>, state: &mut AppState) -> Result<i32> {
    log::debug!("Dispatching args: {:?}", args);

    match route(&args) {
        RouterDecision::ShowHelp => {
            print!("{}", help_view(state).render());
            Ok(0)
        }
        RouterDecision::ShowVersion => {
            print!("{}", help::banner());
            Ok(0)
        }
        RouterDecision::KnownCommand(name, rest) => {
            let command = find_command(name).ok_or_else(|| anyhow!("Unknown command '{}'.", name))?;
            (command.handler)(rest, state)
        }
        RouterDecision::Passthrough(args) => {
            let wrapper = commons::get_godot_wrapper(state)?;
            Ok(wrapper.passthrough(&args)?)
        }
    }
}
