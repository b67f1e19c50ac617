use std::path::PathBuf;

const HISTORY_FILE: &str = ".fileman_history";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub home: Option<PathBuf>,
    pub history_path: Option<PathBuf>,
}

impl ConfigPaths {
    pub fn new() -> Self {
        Self::from_home(dirs::home_dir())
    }

    pub fn from_home(home: Option<PathBuf>) -> Self {
        let history_path = home.as_ref().map(|h| h.join(HISTORY_FILE));
        ConfigPaths { home, history_path }
    }
}
