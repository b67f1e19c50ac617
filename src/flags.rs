use crate::error::ShellError;
use std::collections::HashMap;

pub const USAGE: &str = "Usage: fileman --username=<your_username>";

#[derive(Debug, Clone)]
pub struct Flags {
    flags: HashMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub long: String,
    pub value: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = HashMap::new();

        flags.insert(
            "username".to_string(),
            Flag {
                long: "--username".to_string(),
                value: None,
            },
        );

        Flags { flags }
    }

    /// Accepts only `--name=value` forms of known flags.
    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        for arg in args {
            let matched = arg.split_once('=').and_then(|(key, value)| {
                self.flags
                    .values_mut()
                    .find(|flag| flag.long == key)
                    .map(|flag| flag.value = Some(value.to_string()))
            });

            if matched.is_none() {
                return Err(ShellError::FlagError(format!(
                    "Invalid argument '{}'. {}",
                    arg, USAGE
                )));
            }
        }
        Ok(())
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn username(&self) -> Option<&str> {
        self.get_value("username").map(String::as_str)
    }
}
