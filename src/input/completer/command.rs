use std::collections::BTreeSet;

use rustyline::completion::Pair;

use crate::core::commands::OS_PARAMETERS;
use crate::input::EXIT_COMMAND;

#[derive(Clone)]
pub struct CommandCompleter {
    commands: BTreeSet<String>,
}

impl CommandCompleter {
    pub fn new<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut commands: BTreeSet<String> = names.into_iter().map(str::to_string).collect();
        commands.insert(EXIT_COMMAND.to_string());
        Self { commands }
    }

    pub fn complete_command(&self, input: &str) -> Vec<Pair> {
        let input = input.trim();
        self.commands
            .iter()
            .filter(|cmd| cmd.starts_with(input))
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: format!("{} ", cmd),
            })
            .collect()
    }

    pub fn complete_os_parameter(&self, input: &str) -> Vec<Pair> {
        OS_PARAMETERS
            .iter()
            .filter(|param| param.starts_with(input))
            .map(|param| Pair {
                display: param.to_string(),
                replacement: param.to_string(),
            })
            .collect()
    }
}
