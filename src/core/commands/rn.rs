use super::{expect_args, require_file, Command, CommandContext, CommandError};
use crate::path::PathResolver;
use std::fs;

#[derive(Clone)]
pub struct RnCommand {
    resolver: PathResolver,
}

impl RnCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl Command for RnCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_args(
            args,
            2,
            "'rn' command expects exactly two arguments (path_to_file new_filename)",
        )?;

        let old_path = self.resolver.resolve(&args[0], ctx.current_dir());
        // A bare new name stays next to the source file.
        let old_dir = old_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| self.resolver.drive_root(&old_path));
        let new_path = self.resolver.resolve(&args[1], &old_dir);
        ctx.trace("rn", &new_path);

        require_file(&self.resolver, &old_path, || {
            format!("Source file does not exist or is not a file: {}", old_path.display())
        })?;
        self.resolver.ensure_absent(&new_path)?;

        fs::rename(&old_path, &new_path)
            .map_err(|e| CommandError::ExecutionError("Failed to rename file".to_string(), e))?;

        writeln!(
            ctx.out,
            "File '{}' successfully renamed to '{}'",
            old_path.display(),
            new_path.display()
        )?;
        Ok(())
    }
}
