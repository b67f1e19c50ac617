use regex::Regex;
use std::sync::LazyLock;

pub const EXIT_COMMAND: &str = ".exit";

const OS_PREFIX: &str = "os --";

// Double-quoted span, single-quoted span, or a bare run of non-whitespace.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]*)"|'([^']*)'|(\S+)"#).expect("token pattern is valid"));

/// A command line split into its name and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

impl ParsedCommand {
    fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }

    pub fn is_exit(&self) -> bool {
        self.name == EXIT_COMMAND
    }
}

/// Splits a raw input line into a command name and its arguments.
///
/// Quoted spans become a single argument with the quotes stripped. A line
/// starting with `os --` is never split: everything after the first `--` is
/// handed to `os` as one `--`-prefixed argument.
pub fn tokenize(line: &str) -> ParsedCommand {
    let line = line.trim();

    if line.is_empty() {
        return ParsedCommand::default();
    }

    if line == EXIT_COMMAND {
        return ParsedCommand::new(EXIT_COMMAND, Vec::new());
    }

    if line.starts_with(OS_PREFIX) {
        let parameter = line.split_once("--").map(|(_, rest)| rest).unwrap_or_default();
        return ParsedCommand::new("os", vec![format!("--{}", parameter)]);
    }

    let mut tokens = TOKEN.captures_iter(line).map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .or_else(|| caps.get(3))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    });

    match tokens.next() {
        Some(name) if !name.is_empty() => ParsedCommand::new(name, tokens.collect()),
        _ => ParsedCommand::default(),
    }
}
