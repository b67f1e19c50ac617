use super::{expect_args, require_file, Command, CommandContext, CommandError};
use crate::core::stream;
use crate::path::PathResolver;

#[derive(Clone)]
pub struct CatCommand {
    resolver: PathResolver,
}

impl CatCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl Command for CatCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_args(args, 1, "'cat' command expects exactly one argument (file path)")?;

        let path = self.resolver.resolve(&args[0], ctx.current_dir());
        require_file(&self.resolver, &path, || {
            format!("{} is not a file or does not exist", path.display())
        })?;

        stream::read_file_to(&path, ctx.out)
            .map_err(|e| CommandError::ExecutionError("Failed to read file".to_string(), e))?;
        writeln!(ctx.out)?;
        Ok(())
    }
}
