use super::{expect_args, require_directory, Command, CommandContext, CommandError};
use crate::path::PathResolver;

#[derive(Clone)]
pub struct CdCommand {
    resolver: PathResolver,
}

impl CdCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        expect_args(args, 1, "'cd' command expects exactly one argument (path_to_directory)")?;

        let target = self.resolver.resolve(&args[0], ctx.current_dir());
        require_directory(&self.resolver, &target, || {
            format!("'{}' is not a directory or does not exist", args[0])
        })?;

        let target = self.resolver.normalize(&target);
        ctx.trace("cd", &target);
        ctx.state.set_current_dir(target);
        Ok(())
    }
}
