use super::{Command, CommandContext, CommandError};
use crate::path::PathResolver;

#[derive(Clone)]
pub struct UpCommand {
    resolver: PathResolver,
}

impl UpCommand {
    pub fn new(resolver: PathResolver) -> Self {
        Self { resolver }
    }
}

impl Command for UpCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        if !args.is_empty() {
            return Err(CommandError::InvalidArguments(
                "The 'up' command does not accept arguments".to_string(),
            ));
        }

        let current = ctx.current_dir().to_path_buf();
        if self.resolver.drive_root(&current) == current {
            return Ok(());
        }

        let parent = self.resolver.resolve("..", &current);
        ctx.trace("up", &parent);
        ctx.state.set_current_dir(parent);
        Ok(())
    }
}
