use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

mod add;
mod cat;
mod cd;
mod compress;
mod cp;
mod decompress;
mod hash;
mod ls;
mod mkdir;
mod mv;
mod os;
mod rm;
mod rn;
mod up;

pub use add::AddCommand;
pub use cat::CatCommand;
pub use cd::CdCommand;
pub use compress::CompressCommand;
pub use cp::CpCommand;
pub use decompress::DecompressCommand;
pub use hash::HashCommand;
pub use ls::LsCommand;
pub use mkdir::MkdirCommand;
pub use mv::MvCommand;
pub use os::{OsCommand, OS_PARAMETERS};
pub use rm::RmCommand;
pub use rn::RnCommand;
pub use up::UpCommand;

use crate::core::env::EnvError;
use crate::core::state::SessionState;
use crate::path::{PathError, PathResolver};

#[derive(Debug)]
pub enum CommandError {
    UnknownCommand(String),
    InvalidArguments(String),
    NotFound(String),
    AlreadyExists(String),
    ExecutionError(String, io::Error),
    MoveIncomplete(PathBuf, io::Error),
    EnvError(EnvError),
    IoError(io::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::UnknownCommand(_) => write!(f, "Invalid input"),
            CommandError::InvalidArguments(msg) => write!(f, "Invalid input: {}", msg),
            CommandError::NotFound(msg) => write!(f, "{}", msg),
            CommandError::AlreadyExists(msg) => write!(f, "{}", msg),
            CommandError::ExecutionError(context, err) => write!(f, "{}: {}", context, err),
            CommandError::MoveIncomplete(copied_to, err) => write!(
                f,
                "Failed to move file: copy kept at '{}' but the source could not be removed: {}",
                copied_to.display(),
                err
            ),
            CommandError::EnvError(err) => write!(f, "{}", err),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::ExecutionError(_, err)
            | CommandError::MoveIncomplete(_, err)
            | CommandError::IoError(err) => Some(err),
            CommandError::EnvError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for CommandError {
    fn from(err: io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

impl From<PathError> for CommandError {
    fn from(err: PathError) -> Self {
        match err {
            PathError::AlreadyExists(_) => CommandError::AlreadyExists(err.to_string()),
            PathError::Io(path, e) => {
                CommandError::ExecutionError(format!("Cannot access {}", path.display()), e)
            }
        }
    }
}

/// What a handler gets to work with: the session state it may read (and, for
/// navigation, overwrite) and the sink for its normal output.
pub struct CommandContext<'a> {
    pub state: &'a mut SessionState,
    pub out: &'a mut dyn Write,
    pub debug: bool,
}

impl<'a> CommandContext<'a> {
    pub fn new(state: &'a mut SessionState, out: &'a mut dyn Write) -> Self {
        Self {
            state,
            out,
            debug: false,
        }
    }

    pub fn current_dir(&self) -> &Path {
        self.state.current_dir()
    }

    pub(crate) fn trace(&self, what: &str, path: &Path) {
        if self.debug {
            eprintln!("[debug] {} -> {}", what, path.display());
        }
    }
}

pub trait Command {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError>;
}

pub(crate) fn expect_args(args: &[String], count: usize, usage: &str) -> Result<(), CommandError> {
    if args.len() == count {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(usage.to_string()))
    }
}

pub(crate) fn expect_at_least(args: &[String], count: usize, usage: &str) -> Result<(), CommandError> {
    if args.len() >= count {
        Ok(())
    } else {
        Err(CommandError::InvalidArguments(usage.to_string()))
    }
}

fn probe_failed(path: &Path, err: io::Error) -> CommandError {
    CommandError::ExecutionError(format!("Cannot access {}", path.display()), err)
}

/// Fails with `NotFound(message)` unless `path` is an existing regular file.
pub(crate) fn require_file(
    resolver: &PathResolver,
    path: &Path,
    message: impl FnOnce() -> String,
) -> Result<(), CommandError> {
    match resolver.is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CommandError::NotFound(message())),
        Err(e) => Err(probe_failed(path, e)),
    }
}

/// Fails with `NotFound(message)` unless `path` is an existing directory.
pub(crate) fn require_directory(
    resolver: &PathResolver,
    path: &Path,
    message: impl FnOnce() -> String,
) -> Result<(), CommandError> {
    match resolver.is_directory(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CommandError::NotFound(message())),
        Err(e) => Err(probe_failed(path, e)),
    }
}

/// Destination for `cp`/`mv`: the source's file name inside `dest_dir`.
pub(crate) fn target_in_dir(source: &Path, dest_dir: &Path) -> PathBuf {
    match source.file_name() {
        Some(name) => dest_dir.join(name),
        None => dest_dir.to_path_buf(),
    }
}

#[derive(Clone)]
enum CommandType {
    Up(UpCommand),
    Cd(CdCommand),
    Ls(LsCommand),
    Cat(CatCommand),
    Add(AddCommand),
    Mkdir(MkdirCommand),
    Rn(RnCommand),
    Cp(CpCommand),
    Mv(MvCommand),
    Rm(RmCommand),
    Hash(HashCommand),
    Compress(CompressCommand),
    Decompress(DecompressCommand),
    Os(OsCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], ctx: &mut CommandContext<'_>) -> Result<(), CommandError> {
        match self {
            CommandType::Up(cmd) => cmd.execute(args, ctx),
            CommandType::Cd(cmd) => cmd.execute(args, ctx),
            CommandType::Ls(cmd) => cmd.execute(args, ctx),
            CommandType::Cat(cmd) => cmd.execute(args, ctx),
            CommandType::Add(cmd) => cmd.execute(args, ctx),
            CommandType::Mkdir(cmd) => cmd.execute(args, ctx),
            CommandType::Rn(cmd) => cmd.execute(args, ctx),
            CommandType::Cp(cmd) => cmd.execute(args, ctx),
            CommandType::Mv(cmd) => cmd.execute(args, ctx),
            CommandType::Rm(cmd) => cmd.execute(args, ctx),
            CommandType::Hash(cmd) => cmd.execute(args, ctx),
            CommandType::Compress(cmd) => cmd.execute(args, ctx),
            CommandType::Decompress(cmd) => cmd.execute(args, ctx),
            CommandType::Os(cmd) => cmd.execute(args, ctx),
        }
    }
}

/// The closed set of commands, built once per session.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let resolver = PathResolver::new();
        let entries = [
            ("up", CommandType::Up(UpCommand::new(resolver))),
            ("cd", CommandType::Cd(CdCommand::new(resolver))),
            ("ls", CommandType::Ls(LsCommand::new())),
            ("cat", CommandType::Cat(CatCommand::new(resolver))),
            ("add", CommandType::Add(AddCommand::new(resolver))),
            ("mkdir", CommandType::Mkdir(MkdirCommand::new(resolver))),
            ("rn", CommandType::Rn(RnCommand::new(resolver))),
            ("cp", CommandType::Cp(CpCommand::new(resolver))),
            ("mv", CommandType::Mv(MvCommand::new(resolver))),
            ("rm", CommandType::Rm(RmCommand::new(resolver))),
            ("hash", CommandType::Hash(HashCommand::new(resolver))),
            ("compress", CommandType::Compress(CompressCommand::new(resolver))),
            ("decompress", CommandType::Decompress(DecompressCommand::new(resolver))),
            ("os", CommandType::Os(OsCommand::new())),
        ];

        Self {
            commands: entries
                .into_iter()
                .map(|(name, cmd)| (name.to_string(), cmd))
                .collect(),
        }
    }

    /// Same registry, but `mv` deletes its source through `remove`.
    #[cfg(test)]
    pub(crate) fn with_mv_remover(mut self, remove: mv::Remover) -> Self {
        let command = MvCommand::with_remover(PathResolver::new(), remove);
        self.commands.insert("mv".to_string(), CommandType::Mv(command));
        self
    }

    pub fn execute(
        &self,
        command: &str,
        args: &[String],
        ctx: &mut CommandContext<'_>,
    ) -> Result<(), CommandError> {
        match self.commands.get(command) {
            Some(cmd) => cmd.execute(args, ctx),
            None => Err(CommandError::UnknownCommand(command.to_string())),
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }
}
