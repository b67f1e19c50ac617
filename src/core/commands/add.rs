use super::{expect_args, Command, CommandContext, CommandError};
use crate::path::PathResolver;
use std::fs::OpenOptions;
use std::io::ErrorKind;

#[derive(Clone)]
pub struct AddCommand {
    resolver: PathResolver,
}

impl AddCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl Command for AddCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_args(args, 1, "'add' command expects exactly one argument (new file name)")?;

        let path = self.resolver.resolve(&args[0], ctx.current_dir());
        ctx.trace("add", &path);

        // create_new is the existence guard: it never truncates an existing file
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(CommandError::AlreadyExists("File already exists".to_string()));
            }
            Err(e) => {
                return Err(CommandError::ExecutionError("Failed to create file".to_string(), e));
            }
        }

        writeln!(ctx.out, "File '{}' created successfully.", path.display())?;
        Ok(())
    }
}
