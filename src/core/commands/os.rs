use super::{Command, CommandContext, CommandError};
use crate::core::env;
use std::io::Write;

pub const OS_PARAMETERS: [&str; 5] = ["--EOL", "--cpus", "--homedir", "--username", "--architecture"];

const USAGE: &str =
    "'os' command requires a single parameter (--EOL, --cpus, --homedir, --username, --architecture)";

#[derive(Clone, Default)]
pub struct OsCommand;

impl OsCommand {
    pub fn new() -> Self {
        Self
    }

    fn print_cpus(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let cpus = env::cpus();
        writeln!(out, "Total CPUs: {}", cpus.len())?;
        writeln!(out, "CPU Details:")?;
        for (index, cpu) in cpus.iter().enumerate() {
            writeln!(out, "CPU {}: {} ({} GHz)", index + 1, cpu.model, cpu.speed_ghz())?;
        }
        Ok(())
    }
}

impl Command for OsCommand {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        // `os --x y` reaches us as the single argument "--x y"; the extra word
        // still counts against the one-parameter limit.
        let parameter = match args {
            [single] if single.split_whitespace().count() == 1 => single.trim(),
            _ => return Err(CommandError::InvalidArguments(USAGE.to_string())),
        };

        match parameter {
            "--EOL" => writeln!(ctx.out, "System EOL: {:?}", env::eol())?,
            "--cpus" => self.print_cpus(ctx.out)?,
            "--homedir" => writeln!(ctx.out, "Home Directory: {}", env::home_dir()?.display())?,
            "--username" => writeln!(ctx.out, "System Username: {}", env::username()?)?,
            "--architecture" => writeln!(ctx.out, "CPU Architecture: {}", env::architecture())?,
            _ => {
                return Err(CommandError::InvalidArguments(format!(
                    "Invalid 'os' parameter '{}'. Use {}",
                    parameter,
                    OS_PARAMETERS.join(", ")
                )))
            }
        }
        Ok(())
    }
}
