use super::{expect_args, require_file, Command, CommandContext, CommandError};
use crate::core::stream;
use crate::path::PathResolver;

#[derive(Clone)]
pub struct HashCommand {
    resolver: PathResolver,
}

impl HashCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl Command for HashCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_args(args, 1, "'hash' command requires a single parameter (path_to_file)")?;

        let path = self.resolver.resolve(&args[0], ctx.current_dir());
        require_file(&self.resolver, &path, || {
            format!("Not a file or does not exist: {}", path.display())
        })?;

        let digest = stream::sha256_file(&path).map_err(|e| {
            CommandError::ExecutionError(
                format!("Failed to calculate hash for {}", path.display()),
                e,
            )
        })?;

        writeln!(ctx.out, "Hash (SHA-256): {}", digest)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::SessionState;
    use crate::testutil::ScratchDir;

    #[test]
    fn test_hash_of_empty_file() {
        let scratch = ScratchDir::new("hash_empty");
        scratch.write("empty.txt", b"");
        let mut state = SessionState::new(scratch.path().to_path_buf());
        let mut out = Vec::new();

        HashCommand::new(PathResolver::new())
            .execute(
                &["empty.txt".to_string()],
                &mut CommandContext::new(&mut state, &mut out),
            )
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hash (SHA-256): e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n"
        );
    }

    #[test]
    fn test_hash_missing_file() {
        let scratch = ScratchDir::new("hash_missing");
        let mut state = SessionState::new(scratch.path().to_path_buf());
        let mut out = Vec::new();

        let result = HashCommand::new(PathResolver::new()).execute(
            &["nothing".to_string()],
            &mut CommandContext::new(&mut state, &mut out),
        );
        assert!(matches!(result, Err(CommandError::NotFound(_))));
    }
}
