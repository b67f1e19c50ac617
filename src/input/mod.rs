mod completer;
pub mod tokenizer;

pub use completer::ShellCompleter;
pub use tokenizer::{tokenize, ParsedCommand, EXIT_COMMAND};
