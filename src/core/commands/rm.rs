use super::{expect_at_least, require_file, Command, CommandContext, CommandError};
use crate::path::PathResolver;
use std::fs;

#[derive(Clone)]
pub struct RmCommand {
    resolver: PathResolver,
}

impl RmCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl Command for RmCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_at_least(args, 1, "File path required")?;

        let path = self.resolver.resolve(&args[0], ctx.current_dir());
        require_file(&self.resolver, &path, || {
            format!("Not a file or does not exist: {}", path.display())
        })?;
        ctx.trace("rm", &path);

        fs::remove_file(&path)
            .map_err(|e| CommandError::ExecutionError("Failed to delete file".to_string(), e))?;

        writeln!(ctx.out, "File '{}' removed.", path.display())?;
        Ok(())
    }
}
