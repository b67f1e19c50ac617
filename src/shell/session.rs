use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use super::executor::CommandHandler;
use crate::{
    core::{
        commands::{CommandError, CommandExecutor},
        config::Config,
        state::SessionState,
    },
    highlight::SyntaxHighlighter,
    input::tokenize,
};

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Close,
}

/// One user's session: the current directory, the command registry and the
/// messages framing the conversation. Knows nothing about terminals, so the
/// whole loop can run against in-memory writers.
pub struct Session {
    pub(crate) state: SessionState,
    pub(crate) executor: CommandExecutor,
    pub(crate) debug: bool,
    username: String,
    highlighter: SyntaxHighlighter,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self::with_parts(config.username(), config.start_dir().clone(), config.debug())
    }

    pub fn with_parts(username: &str, start_dir: PathBuf, debug: bool) -> Self {
        Session {
            state: SessionState::new(start_dir),
            executor: CommandExecutor::new(),
            debug,
            username: username.to_string(),
            highlighter: SyntaxHighlighter::plain(),
        }
    }

    pub fn with_highlighter(mut self, highlighter: SyntaxHighlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn current_dir(&self) -> &Path {
        self.state.current_dir()
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    pub fn welcome_message(&self) -> String {
        format!("Welcome to the File Manager, {}!", self.username)
    }

    pub fn goodbye_message(&self) -> String {
        format!("Thank you for using File Manager, {}, goodbye!", self.username)
    }

    /// Welcome line followed by the starting directory.
    pub fn greet(&self, out: &mut dyn Write) -> io::Result<()> {
        let welcome = self.welcome_message();
        writeln!(out, "{}", self.highlighter.highlight_success(&welcome))?;
        self.print_current_dir(out)
    }

    pub fn farewell(&self, out: &mut dyn Write) -> io::Result<()> {
        let goodbye = self.goodbye_message();
        writeln!(out, "{}", self.highlighter.highlight_success(&goodbye))?;
        out.flush()
    }

    pub fn print_current_dir(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "You are currently in {}", self.current_dir().display())?;
        out.flush()
    }

    /// Handles one input line.
    ///
    /// Command failures are reported on `err` and never end the session; only
    /// the exit token closes it. Every dispatch attempt, failed or not, is
    /// followed by the current directory. Blank lines print nothing.
    pub fn handle_line(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<LineOutcome> {
        let command = tokenize(line);

        if command.is_exit() {
            self.farewell(out)?;
            return Ok(LineOutcome::Close);
        }
        if command.is_empty() {
            return Ok(LineOutcome::Continue);
        }

        match self.execute_command(&command, out) {
            Ok(()) => {}
            Err(CommandError::UnknownCommand(_)) => {
                writeln!(err, "{}", self.highlighter.highlight_error("Invalid input"))?;
            }
            Err(e) => {
                let report = format!("Operation failed. {}", e);
                writeln!(err, "{}", self.highlighter.highlight_error(&report))?;
            }
        }
        err.flush()?;

        self.print_current_dir(out)?;
        Ok(LineOutcome::Continue)
    }

    /// Runs the whole loop over a plain line source. End of input takes the
    /// same goodbye path as the exit token.
    pub fn run<R: BufRead>(
        &mut self,
        input: R,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> io::Result<()> {
        self.greet(out)?;

        for line in input.lines() {
            if self.handle_line(&line?, out, err)? == LineOutcome::Close {
                return Ok(());
            }
        }

        self.farewell(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ScratchDir;
    use std::fs;

    struct Transcript {
        out: String,
        err: String,
    }

    fn run_script(session: &mut Session, script: &str) -> Transcript {
        let mut out = Vec::new();
        let mut err = Vec::new();
        session.run(script.as_bytes(), &mut out, &mut err).unwrap();
        Transcript {
            out: String::from_utf8_lossy(&out).into_owned(),
            err: String::from_utf8_lossy(&err).into_owned(),
        }
    }

    #[test]
    fn test_greeting_and_exit() {
        let scratch = ScratchDir::new("session_exit");
        let mut session = Session::with_parts("alice", scratch.path().to_path_buf(), false);

        let transcript = run_script(&mut session, ".exit\nls\n");
        let lines: Vec<&str> = transcript.out.lines().collect();

        assert_eq!(lines[0], "Welcome to the File Manager, alice!");
        assert_eq!(
            lines[1],
            format!("You are currently in {}", scratch.path().display())
        );
        assert_eq!(lines[2], "Thank you for using File Manager, alice, goodbye!");
        assert_eq!(lines.len(), 3);
        assert!(transcript.err.is_empty());
    }

    #[test]
    fn test_end_of_input_says_goodbye() {
        let scratch = ScratchDir::new("session_eof");
        let mut session = Session::with_parts("bob", scratch.path().to_path_buf(), false);

        let transcript = run_script(&mut session, "");
        assert!(transcript
            .out
            .ends_with("Thank you for using File Manager, bob, goodbye!\n"));
    }

    #[test]
    fn test_unknown_command_keeps_session_alive() {
        let scratch = ScratchDir::new("session_unknown");
        let mut session = Session::with_parts("carol", scratch.path().to_path_buf(), false);

        let transcript = run_script(&mut session, "format c:\n.exit\n");
        let cwd_line = format!("You are currently in {}", scratch.path().display());

        assert_eq!(transcript.err, "Invalid input\n");
        assert_eq!(transcript.out.matches(&cwd_line).count(), 2);
        assert!(transcript.out.contains("goodbye"));
    }

    #[test]
    fn test_failure_is_reported_with_prefix() {
        let scratch = ScratchDir::new("session_fail");
        let mut session = Session::with_parts("dave", scratch.path().to_path_buf(), false);

        let transcript = run_script(&mut session, "cat missing.txt\ncd\n.exit\n");
        let reports: Vec<&str> = transcript.err.lines().collect();

        assert_eq!(reports.len(), 2);
        assert!(reports.iter().all(|r| r.starts_with("Operation failed. ")));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let scratch = ScratchDir::new("session_blank");
        let mut session = Session::with_parts("erin", scratch.path().to_path_buf(), false);

        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = session.handle_line("   ", &mut out, &mut err).unwrap();

        assert_eq!(outcome, LineOutcome::Continue);
        assert!(out.is_empty());
        assert!(err.is_empty());
    }

    #[test]
    fn test_navigation_updates_prompt_directory() {
        let scratch = ScratchDir::new("session_nav");
        scratch.mkdir("docs");
        let mut session = Session::with_parts("frank", scratch.path().to_path_buf(), false);

        let transcript = run_script(&mut session, "cd docs\nup\n.exit\n");
        let docs_line = format!(
            "You are currently in {}",
            scratch.path().join("docs").display()
        );

        assert!(transcript.out.contains(&docs_line));
        assert_eq!(session.current_dir(), scratch.path());
    }

    #[test]
    fn test_quoted_names_reach_commands() {
        let scratch = ScratchDir::new("session_quotes");
        let mut session = Session::with_parts("gina", scratch.path().to_path_buf(), false);

        let transcript = run_script(&mut session, "add \"my notes.txt\"\ncat 'my notes.txt'\n.exit\n");

        assert!(transcript.err.is_empty(), "{}", transcript.err);
        assert!(scratch.path().join("my notes.txt").is_file());
    }

    #[test]
    fn test_file_workflow() {
        let scratch = ScratchDir::new("session_flow");
        scratch.write("data.txt", b"payload");
        scratch.mkdir("out");
        let mut session = Session::with_parts("hank", scratch.path().to_path_buf(), false);

        let script = "compress data.txt out/data.gz\n\
                      decompress out/data.gz out/data.txt\n\
                      hash out/data.txt\n\
                      rm data.txt\n\
                      .exit\n";
        let transcript = run_script(&mut session, script);

        assert!(transcript.err.is_empty(), "{}", transcript.err);
        assert!(!scratch.path().join("data.txt").exists());
        assert_eq!(
            fs::read(scratch.path().join("out/data.txt")).unwrap(),
            b"payload"
        );
        assert!(transcript.out.contains("Hash (SHA-256): "));
    }

    #[test]
    fn test_partial_move_is_reported_and_session_continues() {
        let scratch = ScratchDir::new("session_mv_denied");
        scratch.write("report.txt", b"q3 numbers");
        scratch.mkdir("archive");
        let mut session = Session::with_parts("ivan", scratch.path().to_path_buf(), false);
        session.executor = CommandExecutor::new().with_mv_remover(|_| {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        });

        let transcript = run_script(&mut session, "mv report.txt archive\nls\n.exit\n");

        assert!(
            transcript
                .err
                .starts_with("Operation failed. Failed to move file: copy kept at '"),
            "{}",
            transcript.err
        );
        assert_eq!(transcript.err.lines().count(), 1);
        assert_eq!(
            fs::read(scratch.path().join("archive/report.txt")).unwrap(),
            b"q3 numbers"
        );
        assert_eq!(fs::read(scratch.path().join("report.txt")).unwrap(), b"q3 numbers");
        assert!(transcript.out.contains("report.txt"));
        assert!(transcript.out.contains("goodbye"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_path_is_reported() {
        use std::os::unix::fs::PermissionsExt;

        if unsafe { libc::geteuid() } == 0 {
            return;
        }

        let scratch = ScratchDir::new("session_denied");
        let locked = scratch.mkdir("locked");
        scratch.write("locked/secret.txt", b"x");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        let mut session = Session::with_parts("judy", scratch.path().to_path_buf(), false);

        let transcript = run_script(&mut session, "cat locked/secret.txt\n.exit\n");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        assert!(
            transcript.err.starts_with("Operation failed. Cannot access "),
            "{}",
            transcript.err
        );
        assert!(transcript.out.contains("goodbye"));
    }

    #[test]
    fn test_greeting_lines_go_through_highlighter() {
        let scratch = ScratchDir::new("session_colour");
        let mut session = Session::with_parts("kim", scratch.path().to_path_buf(), false)
            .with_highlighter(SyntaxHighlighter::colored(["ls"]));

        let transcript = run_script(&mut session, ".exit\n");
        let lines: Vec<&str> = transcript.out.lines().collect();

        assert!(lines[0].contains("Welcome to the File Manager, kim!"));
        assert_ne!(lines[0], "Welcome to the File Manager, kim!");
        assert!(lines[2].contains("Thank you for using File Manager, kim, goodbye!"));
        assert_ne!(lines[2], "Thank you for using File Manager, kim, goodbye!");
        assert_eq!(
            lines[1],
            format!("You are currently in {}", scratch.path().display())
        );
    }
}
