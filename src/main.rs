use fileman::core::config::Config;
use fileman::flags::Flags;
use fileman::shell::Shell;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = flags.parse(&args) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match start(&flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn start(flags: &Flags) -> Result<(), fileman::error::ShellError> {
    let config = Config::new(flags)?;
    let mut shell = Shell::new(config)?;
    shell.run()
}
