use super::{expect_args, Command, CommandContext, CommandError};
use crate::path::PathResolver;
use std::fs;
use std::io::ErrorKind;

#[derive(Clone)]
pub struct MkdirCommand {
    resolver: PathResolver,
}

impl MkdirCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl Command for MkdirCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_args(
            args,
            1,
            "'mkdir' command expects exactly one argument (new directory name)",
        )?;

        let path = self.resolver.resolve(&args[0], ctx.current_dir());
        ctx.trace("mkdir", &path);

        fs::create_dir(&path).map_err(|e| match e.kind() {
            ErrorKind::AlreadyExists => {
                CommandError::AlreadyExists("Directory already exists".to_string())
            }
            _ => CommandError::ExecutionError("Failed to create directory".to_string(), e),
        })?;

        writeln!(ctx.out, "Directory '{}' created successfully.", path.display())?;
        Ok(())
    }
}
