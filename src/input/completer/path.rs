use std::{
    fs,
    path::{Path, PathBuf, MAIN_SEPARATOR},
};

use rustyline::completion::Pair;

/// Completes file and directory names relative to the session's current
/// directory rather than the process working directory.
#[derive(Clone)]
pub struct PathCompleter;

impl PathCompleter {
    pub fn new() -> Self {
        Self
    }

    pub fn complete_path(&self, incomplete: &str, base: &Path) -> Vec<Pair> {
        let (typed_dir, file_prefix) = split_input(incomplete);
        let search_dir = if Path::new(&typed_dir).is_absolute() {
            PathBuf::from(&typed_dir)
        } else {
            base.join(&typed_dir)
        };

        let mut matches: Vec<Pair> = match fs::read_dir(&search_dir) {
            Ok(entries) => entries
                .filter_map(Result::ok)
                .filter_map(|entry| {
                    let name = entry.file_name().to_str()?.to_string();
                    if !name.starts_with(&file_prefix) {
                        return None;
                    }
                    let is_dir = entry.path().is_dir();
                    Some(completion_pair(&typed_dir, &name, is_dir))
                })
                .collect(),
            Err(_) => Vec::new(),
        };

        matches.sort_by(|a, b| a.display.cmp(&b.display));
        matches
    }
}

/// Splits what was typed into the directory part (kept verbatim) and the
/// file-name prefix being completed.
fn split_input(incomplete: &str) -> (String, String) {
    match incomplete.rfind(|c: char| c == '/' || c == MAIN_SEPARATOR) {
        Some(pos) => (
            incomplete[..=pos].to_string(),
            incomplete[pos + 1..].to_string(),
        ),
        None => (String::new(), incomplete.to_string()),
    }
}

fn completion_pair(typed_dir: &str, name: &str, is_dir: bool) -> Pair {
    let full = format!("{}{}", typed_dir, name);

    if is_dir {
        let display = format!("{}{}", full, MAIN_SEPARATOR);
        Pair {
            replacement: quote_if_needed(&display),
            display,
        }
    } else {
        Pair {
            replacement: format!("{} ", quote_if_needed(&full)),
            display: full,
        }
    }
}

fn quote_if_needed(text: &str) -> String {
    if text.chars().any(char::is_whitespace) {
        format!("\"{}\"", text)
    } else {
        text.to_string()
    }
}
