use super::{expect_args, require_file, Command, CommandContext, CommandError};
use crate::core::stream;
use crate::path::PathResolver;
use std::fs;
use std::path::Path;

#[derive(Clone)]
pub struct CompressCommand {
    resolver: PathResolver,
}

impl CompressCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

pub(crate) fn create_parent_dirs(path: &Path) -> Result<(), CommandError> {
    match path.parent() {
        Some(parent) => fs::create_dir_all(parent).map_err(|e| {
            CommandError::ExecutionError("Failed to create destination directory".to_string(), e)
        }),
        None => Ok(()),
    }
}

impl Command for CompressCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_args(
            args,
            2,
            "'compress' command requires two parameters: (path_to_file path_to_destination)",
        )?;

        let source = self.resolver.resolve(&args[0], ctx.current_dir());
        let destination = self.resolver.resolve(&args[1], ctx.current_dir());

        require_file(&self.resolver, &source, || {
            format!("Source file does not exist or is not a file: {}", source.display())
        })?;
        self.resolver.ensure_absent(&destination)?;
        create_parent_dirs(&destination)?;
        ctx.trace("compress", &destination);

        stream::compress_file(&source, &destination)
            .map_err(|e| CommandError::ExecutionError("Compression failed".to_string(), e))?;

        writeln!(ctx.out, "File compressed successfully to {}", destination.display())?;
        Ok(())
    }
}
