use super::PathError;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf, MAIN_SEPARATOR};

/// Turns user-typed paths into absolute paths against the session's current
/// directory and probes the filesystem before commands touch it.
#[derive(Clone, Copy, Debug)]
pub struct PathResolver;

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolves `raw` relative to `current_dir`.
    ///
    /// Absolute input is returned untouched. Relative input is joined onto
    /// `current_dir` and lexically normalized, so `.` and `..` segments never
    /// survive and `..` never climbs above the root. On Windows a bare drive
    /// token (`d:` or `d:\`) resolves to that drive's root.
    pub fn resolve(&self, raw: &str, current_dir: &Path) -> PathBuf {
        if cfg!(windows) {
            if let Some(root) = drive_switch(raw) {
                return root;
            }
        }

        let path = Path::new(raw);
        if path.is_absolute() {
            return path.to_path_buf();
        }

        normalize(&current_dir.join(path))
    }

    /// Lexically collapses `.` and `..` segments without touching the disk.
    pub fn normalize(&self, path: &Path) -> PathBuf {
        normalize(path)
    }

    /// Root of the filesystem (or drive) that `path` lives on.
    pub fn drive_root(&self, path: &Path) -> PathBuf {
        let mut root = PathBuf::new();
        for component in path.components() {
            match component {
                Component::Prefix(_) | Component::RootDir => root.push(component.as_os_str()),
                _ => break,
            }
        }

        if root.as_os_str().is_empty() {
            PathBuf::from(MAIN_SEPARATOR.to_string())
        } else {
            root
        }
    }

    pub fn is_directory(&self, path: &Path) -> io::Result<bool> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.is_dir()),
            Err(e) if is_absent(&e) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn is_file(&self, path: &Path) -> io::Result<bool> {
        match fs::metadata(path) {
            Ok(meta) => Ok(meta.is_file()),
            Err(e) if is_absent(&e) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Fails when anything, even a dangling symlink, already occupies `path`.
    pub fn ensure_absent(&self, path: &Path) -> Result<(), PathError> {
        match fs::symlink_metadata(path) {
            Ok(_) => Err(PathError::AlreadyExists(path.to_path_buf())),
            Err(e) if is_absent(&e) => Ok(()),
            Err(e) => Err(PathError::Io(path.to_path_buf(), e)),
        }
    }
}

fn is_absent(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::NotFound {
        return true;
    }

    // `file.txt/child` reports ENOTDIR rather than ENOENT
    #[cfg(unix)]
    if err.raw_os_error() == Some(libc::ENOTDIR) {
        return true;
    }

    false
}

/// Recognizes `c:` and `c:\` style drive tokens.
fn drive_switch(raw: &str) -> Option<PathBuf> {
    let bytes = raw.as_bytes();
    let is_drive = |b: &[u8]| b[0].is_ascii_alphabetic() && b[1] == b':';

    match bytes.len() {
        2 if is_drive(bytes) => Some(PathBuf::from(format!("{}\\", raw))),
        3 if is_drive(bytes) && matches!(bytes[2], b'\\' | b'/') => Some(PathBuf::from(raw)),
        _ => None,
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(part) => out.push(part),
        }
    }

    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}
