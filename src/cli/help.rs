// src/cli/help.rs

//! The top-level help screen. It is a plain value ([`HelpView`]) built from the
//! command registry plus whatever the engine reports for `--help`, and rendered
//! to a string in one place.

use crate::system::help_probe::{self, HelpOption};
use colored::Colorize;
use std::path::Path;

const LOGO: &str = r"
   ______          __
  / ____/___  ____/ /___  _________
 / / __/ __ \/ __  / __ \/ ___/ __ \
/ /_/ / /_/ / /_/ / /_/ / /__/ /_/ /
\____/\____/\__,_/\____/\___/\____/
";

/// Flag columns wider than this wrap the description onto the next line.
const MAX_FLAG_COLUMN: usize = 34;

/// One row of the Commands section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub about: &'static str,
}

#[derive(Debug, Clone, Default)]
pub struct HelpView {
    pub commands: Vec<CommandEntry>,
    pub options: Vec<HelpOption>,
    pub engine_options: Vec<HelpOption>,
}

impl HelpView {
    /// Builds the view. `engine` is probed for its own options when given.
    pub fn assemble(commands: Vec<CommandEntry>, engine: Option<&Path>) -> Self {
        let options = vec![
            HelpOption {
                flag: "-h, --help".to_string(),
                description: t!("help.option.help").to_string(),
            },
            HelpOption {
                flag: "-V, --version".to_string(),
                description: t!("help.option.version").to_string(),
            },
        ];
        let engine_options = engine.map(help_probe::options).unwrap_or_default();
        Self {
            commands,
            options,
            engine_options,
        }
    }

    pub fn render(&self) -> String {
        let mut out = banner();
        out.push_str(&format!(
            "\n {} godoco [OPTIONS] <COMMAND> [ARGS]...\n        godoco [GODOT OPTIONS]...\n",
            "Usage:".bold()
        ));

        out.push_str(&section_title(t!("help.section.commands")));
        let rows: Vec<(String, String)> = self
            .commands
            .iter()
            .map(|cmd| {
                let label = if cmd.aliases.is_empty() {
                    cmd.name.to_string()
                } else {
                    format!("{} ({})", cmd.name, cmd.aliases.join(", "))
                };
                (label, cmd.about.to_string())
            })
            .collect();
        out.push_str(&render_rows(&rows, |desc| desc.to_string()));

        out.push_str(&section_title(t!("help.section.options")));
        out.push_str(&render_rows(&option_rows(&self.options), |desc| desc.to_string()));

        if !self.engine_options.is_empty() {
            out.push_str(&section_title(t!("help.section.legend")));
            out.push_str(&legend());
            out.push_str(&section_title(t!("help.section.engine_options")));
            out.push_str(&render_rows(
                &option_rows(&self.engine_options),
                colorize_availability,
            ));
        }
        out
    }
}

/// The logo plus the tagline. Also printed for `--version`.
pub fn banner() -> String {
    format!(
        "{}\n{}\n",
        LOGO.cyan().bold(),
        format!(t!("help.tagline"), version = env!("CARGO_PKG_VERSION")).dimmed()
    )
}

fn section_title(title: &str) -> String {
    format!("\n{}\n", title.yellow().bold())
}

fn legend() -> String {
    format!(
        "  {}  {}\n  {}  {}\n  {}  {}\n",
        "R".green().bold(),
        t!("help.legend.release"),
        "D".blue().bold(),
        t!("help.legend.debug"),
        "E".red().bold(),
        t!("help.legend.editor"),
    )
}

fn option_rows(options: &[HelpOption]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|opt| (opt.flag.clone(), opt.description.clone()))
        .collect()
}

fn render_rows(rows: &[(String, String)], style_desc: impl Fn(&str) -> String) -> String {
    let width = rows
        .iter()
        .map(|(flag, _)| flag.chars().count())
        .filter(|len| *len <= MAX_FLAG_COLUMN)
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (flag, desc) in rows {
        let desc = style_desc(desc);
        if flag.chars().count() > width {
            out.push_str(&format!("  {}\n  {:width$}  {}\n", flag.cyan().bold(), "", desc));
        } else {
            let padded = format!("{:<width$}", flag);
            out.push_str(&format!("  {}  {}\n", padded.cyan().bold(), desc));
        }
    }
    out
}

/// Colors the availability marker (`R`, `D` or `E`) that opens an engine
/// option's description.
pub fn colorize_availability(desc: &str) -> String {
    let mut chars = desc.chars();
    let marker = chars.next();
    let rest = chars.as_str();
    let is_marker = rest.is_empty() || rest.starts_with(' ') || rest.starts_with('\t');
    if !is_marker {
        return desc.to_string();
    }
    match marker {
        Some('R') => format!("{}{}", "R".green().bold(), rest),
        Some('D') => format!("{}{}", "D".blue().bold(), rest),
        Some('E') => format!("{}{}", "E".red().bold(), rest),
        _ => desc.to_string(),
    }
}
