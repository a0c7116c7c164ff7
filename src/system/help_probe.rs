// src/system/help_probe.rs

use crate::system::executor;
use lazy_static::lazy_static;
use regex::Regex;
use std::ffi::OsString;
use std::path::Path;

lazy_static! {
    static ref ANSI_ESCAPE_RE: Regex =
        Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("valid ANSI pattern");
    static ref COLUMN_GAP_RE: Regex = Regex::new(r"\s{2,}|\t").expect("valid column pattern");
    static ref FLAG_THEN_TEXT_RE: Regex =
        Regex::new(r"^(--?[\w-]+(?: [^ ]+)?)\s+(.*)$").expect("valid flag pattern");
}

/// One option row from the engine's `--help`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpOption {
    pub flag: String,
    pub description: String,
}

impl HelpOption {
    fn new(flag: &str, description: &str) -> Self {
        Self {
            flag: flag.trim().to_string(),
            description: description.trim().to_string(),
        }
    }
}

/// Removes terminal control sequences.
pub fn strip_ansi(text: &str) -> String {
    ANSI_ESCAPE_RE.replace_all(text, "").into_owned()
}

/// Splits one help line into flag and description.
///
/// Tries, in order: a column gap (two or more spaces, or a tab); a leading flag
/// with at most one inline argument followed by text; the whole line as flag.
fn parse_option_line(line: &str) -> Option<HelpOption> {
    let option = if let Some(gap) = COLUMN_GAP_RE.find(line) {
        HelpOption::new(
            line.get(..gap.start()).unwrap_or_default(),
            line.get(gap.end()..).unwrap_or_default(),
        )
    } else if let Some(caps) = FLAG_THEN_TEXT_RE.captures(line) {
        let flag = caps.get(1).map_or("", |m| m.as_str());
        let description = caps.get(2).map_or("", |m| m.as_str());
        HelpOption::new(flag, description)
    } else {
        HelpOption::new(line, "")
    };
    (!option.flag.is_empty()).then_some(option)
}

/// Lazily parses option rows, in line order, from raw help text. Lines that do
/// not start with `-`, and `---` separators, are skipped.
pub fn parse_help_options(help_text: &str) -> impl Iterator<Item = HelpOption> + '_ {
    help_text
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-') && !line.starts_with("---"))
        .filter_map(parse_option_line)
}

/// Runs `<executable> --help` and returns its options. Any failure yields an
/// empty list.
pub fn options(executable: &Path) -> Vec<HelpOption> {
    if !executable.exists() {
        return Vec::new();
    }
    let argv = [executable.as_os_str().to_os_string(), OsString::from("--help")];
    match executor::execute_and_capture_output(&argv, None) {
        Ok(raw) => {
            let clean = strip_ansi(&raw);
            parse_help_options(&clean).collect()
        }
        Err(e) => {
            log::debug!("Could not read engine help: {}", e);
            Vec::new()
        }
    }
}
