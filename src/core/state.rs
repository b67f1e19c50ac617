use std::path::{Path, PathBuf};

/// Mutable state of one interactive session.
///
/// The current directory is always absolute. Only `cd` and `up` overwrite it,
/// through [`SessionState::set_current_dir`].
#[derive(Debug, Clone)]
pub struct SessionState {
    current_dir: PathBuf,
}

impl SessionState {
    pub fn new(current_dir: PathBuf) -> Self {
        Self { current_dir }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) -> &Path {
        self.current_dir = dir;
        &self.current_dir
    }
}
