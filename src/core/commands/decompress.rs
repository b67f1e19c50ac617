use super::compress::create_parent_dirs;
use super::{expect_args, require_file, Command, CommandContext, CommandError};
use crate::core::stream;
use crate::path::PathResolver;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Clone)]
pub struct DecompressCommand {
    resolver: PathResolver,
}

impl DecompressCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

/// Report context for a failed decompression, given how removing the
/// partial output went.
fn failure_context(destination: &Path, cleanup: io::Result<()>) -> String {
    match cleanup {
        Err(e) if e.kind() != io::ErrorKind::NotFound => format!(
            "Decompression failed and the partial file '{}' could not be removed ({})",
            destination.display(),
            e
        ),
        _ => "Decompression failed".to_string(),
    }
}

impl Command for DecompressCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_args(
            args,
            2,
            "'decompress' command requires two parameters: (path_to_file path_to_destination)",
        )?;

        let source = self.resolver.resolve(&args[0], ctx.current_dir());
        let destination = self.resolver.resolve(&args[1], ctx.current_dir());

        require_file(&self.resolver, &source, || {
            format!("Source file does not exist or is not a file: {}", source.display())
        })?;
        self.resolver.ensure_absent(&destination)?;
        create_parent_dirs(&destination)?;
        ctx.trace("decompress", &destination);

        if let Err(e) = stream::decompress_file(&source, &destination) {
            // the guard above proved nothing lived here before us
            let context = failure_context(&destination, fs::remove_file(&destination));
            return Err(CommandError::ExecutionError(context, e));
        }

        writeln!(ctx.out, "File decompressed successfully to {}", destination.display())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::commands::CompressCommand;
    use crate::core::state::SessionState;
    use crate::testutil::ScratchDir;

    fn run(cmd: &dyn Command, state: &mut SessionState, from: &str, to: &str) -> Result<(), CommandError> {
        let mut out = Vec::new();
        cmd.execute(
            &[from.to_string(), to.to_string()],
            &mut CommandContext::new(state, &mut out),
        )
    }

    #[test]
    fn test_compress_then_decompress_round_trip() {
        let scratch = ScratchDir::new("br_cmd_round_trip");
        let original: Vec<u8> = b"The quick brown fox\n".repeat(500);
        scratch.write("fox.txt", &original);
        let mut state = SessionState::new(scratch.path().to_path_buf());
        let resolver = PathResolver::new();

        assert!(run(&CompressCommand::new(resolver), &mut state, "fox.txt", "fox.br").is_ok());
        assert!(run(&DecompressCommand::new(resolver), &mut state, "fox.br", "restored/fox.txt").is_ok());

        assert_eq!(fs::read(scratch.path().join("restored/fox.txt")).unwrap(), original);
    }

    #[test]
    fn test_failed_decompression_removes_partial_output() {
        let scratch = ScratchDir::new("br_cmd_truncated");
        scratch.write("notes.txt", &b"half a stream is no stream ".repeat(1000));
        let mut state = SessionState::new(scratch.path().to_path_buf());
        let resolver = PathResolver::new();
        assert!(run(&CompressCommand::new(resolver), &mut state, "notes.txt", "notes.br").is_ok());

        let packed = fs::read(scratch.path().join("notes.br")).unwrap();
        scratch.write("cut.br", &packed[..packed.len() / 2]);

        let result = run(&DecompressCommand::new(resolver), &mut state, "cut.br", "notes.out");

        match result {
            Err(CommandError::ExecutionError(context, _)) => {
                assert_eq!(context, "Decompression failed")
            }
            other => panic!("expected ExecutionError, got {:?}", other),
        }
        assert!(!scratch.path().join("notes.out").exists());
    }

    #[test]
    fn test_failed_cleanup_is_reported() {
        let destination = Path::new("/data/out.txt");

        assert_eq!(failure_context(destination, Ok(())), "Decompression failed");
        assert_eq!(
            failure_context(destination, Err(io::Error::from(io::ErrorKind::NotFound))),
            "Decompression failed"
        );

        let context = failure_context(
            destination,
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
        );
        assert!(context.starts_with("Decompression failed and the partial file '"));
        assert!(context.contains("out.txt"));
        assert!(context.ends_with("could not be removed (denied)"));
    }
}
