mod host;

pub use host::{architecture, cpus, eol, home_dir, username, CpuInfo};

#[derive(Debug)]
pub enum EnvError {
    HomeDirNotFound,
    UserNotFound,
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::HomeDirNotFound => write!(f, "Home directory not found"),
            EnvError::UserNotFound => write!(f, "Current user could not be determined"),
        }
    }
}

impl std::error::Error for EnvError {}
