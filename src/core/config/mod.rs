use std::fmt;
use std::path::PathBuf;

mod paths;

pub use paths::ConfigPaths;

use crate::flags::Flags;

pub const DEFAULT_USERNAME: &str = "Anonymous";
pub const USERNAME_ENV: &str = "FILEMAN_USERNAME";
pub const DEBUG_ENV: &str = "FILEMAN_DEBUG";

/// Everything the session needs to know before the first prompt.
#[derive(Debug, Clone)]
pub struct Config {
    username: String,
    start_dir: PathBuf,
    history_path: Option<PathBuf>,
    debug: bool,
}

impl Config {
    pub fn new(flags: &Flags) -> Result<Self, ConfigError> {
        let paths = ConfigPaths::new();
        let start_dir = match &paths.home {
            Some(home) => home.clone(),
            None => std::env::current_dir().map_err(ConfigError::NoStartDirectory)?,
        };

        Ok(Config {
            username: pick_username(flags.username(), std::env::var(USERNAME_ENV).ok()),
            start_dir,
            history_path: paths.history_path,
            debug: debug_enabled(std::env::var(DEBUG_ENV).ok()),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn start_dir(&self) -> &PathBuf {
        &self.start_dir
    }

    pub fn history_path(&self) -> Option<&PathBuf> {
        self.history_path.as_ref()
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}

/// Flag beats environment; blank values count as unset.
fn pick_username(flag: Option<&str>, env: Option<String>) -> String {
    flag.map(str::to_string)
        .into_iter()
        .chain(env)
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_USERNAME.to_string())
}

fn debug_enabled(value: Option<String>) -> bool {
    matches!(value.as_deref().map(str::trim), Some(v) if !v.is_empty() && v != "0")
}

#[derive(Debug)]
pub enum ConfigError {
    NoStartDirectory(std::io::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoStartDirectory(e) => {
                write!(f, "No home directory and no working directory: {}", e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
