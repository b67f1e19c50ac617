use crate::core::commands::{CommandContext, CommandError};
use crate::input::ParsedCommand;
use std::io::Write;

pub(crate) trait CommandHandler {
    fn execute_command(
        &mut self,
        command: &ParsedCommand,
        out: &mut dyn Write,
    ) -> Result<(), CommandError>;
}

impl CommandHandler for super::Session {
    fn execute_command(
        &mut self,
        command: &ParsedCommand,
        out: &mut dyn Write,
    ) -> Result<(), CommandError> {
        if self.debug {
            eprintln!("[debug] {} {:?}", command.name, command.args);
        }

        let mut ctx = CommandContext::new(&mut self.state, out);
        ctx.debug = self.debug;
        self.executor.execute(&command.name, &command.args, &mut ctx)
    }
}
