use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process;

use rustyline::{
    error::ReadlineError,
    history::{FileHistory, History},
    Editor,
};

mod executor;
mod session;

pub use session::{LineOutcome, Session};

use crate::{
    core::config::Config, error::ShellError, highlight::SyntaxHighlighter, input::ShellCompleter,
};

const PROMPT: &str = "> ";

pub struct Shell {
    pub(crate) editor: Editor<ShellCompleter, FileHistory>,
    pub(crate) session: Session,
    pub(crate) history_path: Option<PathBuf>,
}

/// Adds `line` to `history` and appends it to the file at `path` right away,
/// so an exit from the interrupt handler loses nothing already typed.
fn record_line(
    history: &mut FileHistory,
    path: Option<&Path>,
    line: &str,
) -> rustyline::Result<()> {
    history.add(line)?;
    match path {
        Some(path) => history.append(path),
        None => Ok(()),
    }
}

impl Shell {
    pub fn new(config: Config) -> Result<Self, ShellError> {
        let session = Session::new(&config);
        let names: Vec<&str> = session.executor().names().collect();
        let completer = ShellCompleter::new(&names, session.current_dir());
        let highlighter = SyntaxHighlighter::new(names.iter().copied());
        let session = session.with_highlighter(highlighter);

        let mut editor = Editor::<ShellCompleter, FileHistory>::new()?;
        editor.set_helper(Some(completer));

        let history_path = config.history_path().cloned();
        if let Some(path) = &history_path {
            match editor.load_history(path) {
                Ok(()) => {}
                Err(ReadlineError::Io(e)) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => eprintln!("Warning: Couldn't load history: {}", e),
            }
        }

        // Line editing turns Ctrl-C into ReadlineError::Interrupted; this
        // handler only fires while a command is running.
        let goodbye = session.goodbye_message();
        ctrlc::set_handler(move || {
            println!("\n{}", goodbye);
            process::exit(0);
        })?;

        Ok(Shell {
            editor,
            session,
            history_path,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let mut stdout = io::stdout();
        self.session.greet(&mut stdout)?;

        let result = self.run_command_loop();
        self.save_history();
        result
    }

    fn run_command_loop(&mut self) -> Result<(), ShellError> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    self.record_history(&line);
                    let outcome = self.session.handle_line(
                        &line,
                        &mut io::stdout().lock(),
                        &mut io::stderr().lock(),
                    )?;

                    if let Some(helper) = self.editor.helper_mut() {
                        helper.set_current_dir(self.session.current_dir());
                    }
                    if outcome == LineOutcome::Close {
                        return Ok(());
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    self.session.farewell(&mut io::stdout())?;
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn record_history(&mut self, line: &str) {
        let path = self.history_path.as_deref();
        if let Err(e) = record_line(self.editor.history_mut(), path, line) {
            eprintln!("Warning: Couldn't add to history: {}", e);
            // one warning is enough; keep the rest of the session in memory only
            self.history_path = None;
        }
    }

    fn save_history(&mut self) {
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                eprintln!("Warning: Couldn't save history: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ScratchDir;

    #[test]
    fn test_lines_reach_history_file_immediately() {
        let scratch = ScratchDir::new("history_append");
        let path = scratch.path().join("history");
        let mut history = FileHistory::new();

        record_line(&mut history, Some(&path), "ls").unwrap();
        record_line(&mut history, Some(&path), "cd docs").unwrap();

        let mut reloaded = FileHistory::new();
        reloaded.load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn test_history_without_file_stays_in_memory() {
        let mut history = FileHistory::new();

        record_line(&mut history, None, "os --EOL").unwrap();
        assert_eq!(history.len(), 1);
    }
}
