use std::fmt;
use std::path::PathBuf;

mod resolver;

pub use resolver::PathResolver;

#[derive(Debug)]
pub enum PathError {
    AlreadyExists(PathBuf),
    Io(PathBuf, std::io::Error),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::AlreadyExists(path) => {
                write!(f, "Target already exists: {}", path.display())
            }
            PathError::Io(path, e) => write!(f, "Cannot access {}: {}", path.display(), e),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::Io(_, e) => Some(e),
            PathError::AlreadyExists(_) => None,
        }
    }
}
