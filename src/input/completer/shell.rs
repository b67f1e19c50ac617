use std::borrow::Cow;
use std::path::{Path, PathBuf};

use super::{command::CommandCompleter, path::PathCompleter};
use crate::highlight::SyntaxHighlighter;

use rustyline::{
    completion::{Completer, Pair},
    highlight::{CmdKind, Highlighter},
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

#[derive(Clone)]
pub struct ShellCompleter {
    command_completer: CommandCompleter,
    path_completer: PathCompleter,
    highlighter: SyntaxHighlighter,
    current_dir: PathBuf,
}

impl ShellCompleter {
    pub fn new(commands: &[&str], current_dir: &Path) -> Self {
        ShellCompleter {
            command_completer: CommandCompleter::new(commands.iter().copied()),
            path_completer: PathCompleter::new(),
            highlighter: SyntaxHighlighter::new(commands.iter().copied()),
            current_dir: current_dir.to_path_buf(),
        }
    }

    /// Keeps path completion anchored to the session's directory.
    pub fn set_current_dir(&mut self, dir: &Path) {
        if self.current_dir != dir {
            self.current_dir = dir.to_path_buf();
        }
    }
}

impl Helper for ShellCompleter {}

impl Highlighter for ShellCompleter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned(self.highlighter.highlight_command(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _kind: CmdKind) -> bool {
        true
    }
}

impl Hinter for ShellCompleter {
    type Hint = String;
}

impl Validator for ShellCompleter {}

impl Completer for ShellCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_up_to_cursor = &line[..pos];
        let mut words: Vec<&str> = line_up_to_cursor.split_whitespace().collect();

        if line_up_to_cursor.is_empty() || line_up_to_cursor.ends_with(char::is_whitespace) {
            words.push("");
        }

        let last_word = words.last().copied().unwrap_or("");
        let start = pos - last_word.len();

        let matches = match words.as_slice() {
            [] | [_] => self.command_completer.complete_command(last_word),
            ["os", _] => self.command_completer.complete_os_parameter(last_word),
            _ => self.path_completer.complete_path(last_word, &self.current_dir),
        };

        Ok((start, matches))
    }
}
