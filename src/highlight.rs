use inksac::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
    commands: BTreeSet<String>,
}

impl SyntaxHighlighter {
    pub fn new<'a>(commands: impl IntoIterator<Item = &'a str>) -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
            commands: commands.into_iter().map(str::to_string).collect(),
        }
    }

    /// A highlighter that never emits escape codes.
    pub fn plain() -> Self {
        Self {
            color_support: ColorSupport::NoColor,
            commands: BTreeSet::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn colored<'a>(commands: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            color_support: ColorSupport::Basic,
            ..Self::new(commands)
        }
    }

    fn enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    /// Colours the command word and `--` parameters, keeping every byte of
    /// whitespace so the cursor stays where the editor expects it.
    pub fn highlight_command(&self, input: &str) -> String {
        if !self.enabled() {
            return input.to_string();
        }

        let mut result = String::with_capacity(input.len() * 2);
        let mut word_start = None;
        let mut seen_command = false;

        for (i, c) in input.char_indices().chain(std::iter::once((input.len(), ' '))) {
            match (c.is_whitespace(), word_start) {
                (false, None) => word_start = Some(i),
                (true, Some(start)) => {
                    result.push_str(&self.style_word(&input[start..i], !seen_command));
                    seen_command = true;
                    word_start = None;
                }
                _ => {}
            }
            if c.is_whitespace() && i < input.len() {
                result.push(c);
            }
        }

        result
    }

    fn style_word(&self, word: &str, is_command: bool) -> String {
        if is_command {
            let color = if self.commands.contains(word) || word == crate::input::EXIT_COMMAND {
                Color::Cyan
            } else {
                Color::Red
            };
            let command_style = Style::builder().foreground(color).bold().build();
            word.style(command_style).to_string()
        } else if word.starts_with("--") {
            let flag_style = Style::builder().foreground(Color::Yellow).build();
            word.style(flag_style).to_string()
        } else {
            word.to_string()
        }
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.enabled() {
            return error.to_string();
        }

        let error_style = Style::builder().foreground(Color::Red).bold().build();
        error.style(error_style).to_string()
    }

    pub fn highlight_success(&self, message: &str) -> String {
        if !self.enabled() {
            return message.to_string();
        }

        let success_style = Style::builder().foreground(Color::Green).build();
        message.style(success_style).to_string()
    }
}
