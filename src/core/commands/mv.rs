use super::{
    expect_at_least, require_directory, require_file, target_in_dir, Command, CommandContext,
    CommandError,
};
use crate::core::stream;
use crate::path::PathResolver;
use std::fs;
use std::io;
use std::path::Path;

/// Deletes the source once its copy is in place.
pub(crate) type Remover = fn(&Path) -> io::Result<()>;

fn remove_source(path: &Path) -> io::Result<()> {
    fs::remove_file(path)
}

#[derive(Clone)]
pub struct MvCommand {
    resolver: PathResolver,
    remove: Remover,
}

impl MvCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self::with_remover(resolver, remove_source)
    }

    pub(crate) fn with_remover(resolver: PathResolver, remove: Remover) -> Self {
        Self { resolver, remove }
    }
}

/// Copy, then remove the source with `remove`.
///
/// A failed removal is reported as `MoveIncomplete` and the copy is kept, so
/// the worst outcome is a duplicate rather than a lost file.
pub(crate) fn move_file_with<F>(source: &Path, destination: &Path, remove: F) -> Result<(), CommandError>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    stream::copy_file(source, destination)
        .map_err(|e| CommandError::ExecutionError("Failed to move file".to_string(), e))?;

    remove(source).map_err(|e| CommandError::MoveIncomplete(destination.to_path_buf(), e))
}

impl Command for MvCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_at_least(
            args,
            2,
            "Both source file and destination directory are required",
        )?;

        let source = self.resolver.resolve(&args[0], ctx.current_dir());
        let dest_dir = self.resolver.resolve(&args[1], ctx.current_dir());

        require_file(&self.resolver, &source, || {
            format!("Source file does not exist or is not a file: {}", source.display())
        })?;
        require_directory(&self.resolver, &dest_dir, || {
            format!(
                "Destination directory does not exist or is not a directory: {}",
                dest_dir.display()
            )
        })?;

        let destination = target_in_dir(&source, &dest_dir);
        self.resolver.ensure_absent(&destination)?;
        ctx.trace("mv", &destination);

        move_file_with(&source, &destination, self.remove)?;

        writeln!(
            ctx.out,
            "File '{}' successfully moved to '{}'",
            source.display(),
            destination.display()
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::SessionState;
    use crate::testutil::ScratchDir;

    fn mv(state: &mut SessionState, items: &[&str]) -> Result<(), CommandError> {
        let args: Vec<String> = items.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        MvCommand::new(PathResolver::new()).execute(&args, &mut CommandContext::new(state, &mut out))
    }

    #[test]
    fn test_move_relocates_file() {
        let scratch = ScratchDir::new("mv_ok");
        scratch.write("report.txt", b"q3 numbers");
        scratch.mkdir("archive");
        let mut state = SessionState::new(scratch.path().to_path_buf());

        assert!(mv(&mut state, &["report.txt", "archive"]).is_ok());
        assert!(!scratch.path().join("report.txt").exists());
        assert_eq!(
            fs::read(scratch.path().join("archive/report.txt")).unwrap(),
            b"q3 numbers"
        );
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let scratch = ScratchDir::new("mv_extra");
        scratch.write("a.txt", b"a");
        scratch.mkdir("dest");
        let mut state = SessionState::new(scratch.path().to_path_buf());

        assert!(mv(&mut state, &["a.txt", "dest", "ignored"]).is_ok());
        assert!(scratch.path().join("dest/a.txt").exists());
    }

    #[test]
    fn test_move_onto_itself_is_rejected() {
        let scratch = ScratchDir::new("mv_self");
        scratch.write("a.txt", b"keep me");
        let mut state = SessionState::new(scratch.path().to_path_buf());

        assert!(matches!(
            mv(&mut state, &["a.txt", "."]),
            Err(CommandError::AlreadyExists(_))
        ));
        assert_eq!(fs::read(scratch.path().join("a.txt")).unwrap(), b"keep me");
    }

    #[test]
    fn test_move_arity() {
        let mut state = SessionState::new(std::env::temp_dir());
        assert!(matches!(
            mv(&mut state, &["only-one"]),
            Err(CommandError::InvalidArguments(_))
        ));
    }

    #[test]
    fn test_denied_removal_keeps_both_copies() {
        let scratch = ScratchDir::new("mv_denied");
        let source = scratch.write("src.txt", b"precious");
        let dest_dir = scratch.mkdir("dest");
        let destination = dest_dir.join("src.txt");

        let result = move_file_with(&source, &destination, |_| {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        });

        match result {
            Err(CommandError::MoveIncomplete(kept, err)) => {
                assert_eq!(kept, destination);
                assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
            }
            other => panic!("expected MoveIncomplete, got {:?}", other),
        }
        assert_eq!(fs::read(&destination).unwrap(), b"precious");
        assert_eq!(fs::read(&source).unwrap(), b"precious");
    }
}
