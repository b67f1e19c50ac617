use super::{
    expect_args, require_directory, require_file, target_in_dir, Command, CommandContext,
    CommandError,
};
use crate::core::stream;
use crate::path::PathResolver;

#[derive(Clone)]
pub struct CpCommand {
    resolver: PathResolver,
}

impl CpCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl Command for CpCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_args(
            args,
            2,
            "'cp' command expects exactly two arguments (path_to_file path_to_new_directory)",
        )?;

        let source = self.resolver.resolve(&args[0], ctx.current_dir());
        let dest_dir = self.resolver.resolve(&args[1], ctx.current_dir());

        require_file(&self.resolver, &source, || {
            "Source file does not exist or is not a file".to_string()
        })?;
        require_directory(&self.resolver, &dest_dir, || {
            "Destination directory does not exist or is not a directory".to_string()
        })?;

        let destination = target_in_dir(&source, &dest_dir);
        self.resolver.ensure_absent(&destination)?;
        ctx.trace("cp", &destination);

        stream::copy_file(&source, &destination)
            .map_err(|e| CommandError::ExecutionError("Failed to copy file".to_string(), e))?;

        writeln!(
            ctx.out,
            "File '{}' successfully copied to '{}'",
            source.display(),
            destination.display()
        )?;
        Ok(())
    }
}
