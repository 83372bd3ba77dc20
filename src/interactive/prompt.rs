use crate::error::Result;

/// Source of operator answers.
///
/// Every interactive step goes through this trait, so the request-building
/// logic runs the same against a terminal or a scripted set of answers.
pub trait Prompter {
    /// Ask the operator to pick one of `choices`; returns its position.
    ///
    /// `default` is picked when the operator gives no explicit answer.
    fn select(&mut self, message: &str, choices: &[String], default: usize) -> Result<usize>;

    /// Ask for a free-form value.
    fn input(&mut self, message: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

#[cfg(feature = "cli")]
pub use terminal::TerminalPrompter;

#[cfg(feature = "cli")]
mod terminal {
    use super::Prompter;
    use crate::error::{Error, Result};

    use rustyline::{DefaultEditor, error::ReadlineError};

    fn map_readline_error(error: ReadlineError) -> Error {
        match error {
            ReadlineError::Interrupted | ReadlineError::Eof => Error::Interrupted,
            error => Error::Readline(error),
        }
    }

    /// Resolve a menu answer: empty picks the default, otherwise a 1-based
    /// position or an exact label.
    pub(super) fn parse_selection(answer: &str, choices: &[String], default: usize) -> Option<usize> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Some(default);
        }
        if let Ok(position) = answer.parse::<usize>() {
            return (1..=choices.len()).contains(&position).then(|| position - 1);
        }
        choices.iter().position(|choice| choice == answer)
    }

    pub(super) fn parse_confirmation(answer: &str, default: bool) -> Option<bool> {
        match answer.trim().to_ascii_lowercase().as_str() {
            "" => Some(default),
            "y" | "yes" => Some(true),
            "n" | "no" => Some(false),
            _ => None,
        }
    }

    /// Line-editor backed prompter for interactive terminals.
    pub struct TerminalPrompter {
        editor: DefaultEditor,
    }

    impl std::fmt::Debug for TerminalPrompter {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("TerminalPrompter").finish_non_exhaustive()
        }
    }

    impl TerminalPrompter {
        /// Open the line editor on the current terminal.
        pub fn new() -> Result<Self> {
            let editor = DefaultEditor::new().map_err(map_readline_error)?;
            Ok(Self { editor })
        }

        fn read(&mut self, prompt: &str) -> Result<String> {
            self.editor.readline(prompt).map_err(map_readline_error)
        }
    }

    impl Prompter for TerminalPrompter {
        fn select(&mut self, message: &str, choices: &[String], default: usize) -> Result<usize> {
            if choices.is_empty() {
                return Err(Error::EmptyMenu(message.to_string()));
            }
            println!("? {message}");
            for (position, choice) in choices.iter().enumerate() {
                let marker = if position == default { ">" } else { " " };
                println!("{marker} {}) {choice}", position + 1);
            }
            loop {
                let answer = self.read(&format!("  [1-{}, default {}]: ", choices.len(), default + 1))?;
                match parse_selection(&answer, choices, default) {
                    Some(position) => return Ok(position),
                    None => println!("  please pick a number between 1 and {}", choices.len()),
                }
            }
        }

        fn input(&mut self, message: &str) -> Result<String> {
            self.read(&format!("? {message}: "))
        }

        fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
            let hint = if default { "Y/n" } else { "y/N" };
            loop {
                let answer = self.read(&format!("? {message} ({hint}) "))?;
                match parse_confirmation(&answer, default) {
                    Some(confirmed) => return Ok(confirmed),
                    None => println!("  please answer y or n"),
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Prompter;
    use crate::error::{Error, Result};

    use std::collections;

    /// One scripted answer.
    #[derive(Clone, Debug)]
    pub(crate) enum Answer {
        /// Pick the menu entry with this label.
        Pick(&'static str),
        /// Type this value.
        Input(&'static str),
        /// Answer a yes/no question.
        Confirm(bool),
        /// Accept whatever the default is.
        Default,
    }

    /// Prompter replaying a fixed list of answers, recording what it was asked.
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedPrompter {
        answers: collections::VecDeque<Answer>,
        messages: Vec<String>,
        menus: Vec<Vec<String>>,
    }

    impl ScriptedPrompter {
        pub(crate) fn new(answers: Vec<Answer>) -> Self {
            Self {
                answers: answers.into(),
                ..Default::default()
            }
        }

        pub(crate) fn messages(&self) -> &[String] {
            &self.messages
        }

        pub(crate) fn menus(&self) -> &[Vec<String>] {
            &self.menus
        }

        pub(crate) fn is_exhausted(&self) -> bool {
            self.answers.is_empty()
        }

        fn next(&mut self, message: &str) -> Result<Answer> {
            self.messages.push(message.to_string());
            self.answers.pop_front().ok_or(Error::Interrupted)
        }
    }

    impl Prompter for ScriptedPrompter {
        fn select(&mut self, message: &str, choices: &[String], default: usize) -> Result<usize> {
            self.menus.push(choices.to_vec());
            match self.next(message)? {
                Answer::Pick(label) => Ok(choices
                    .iter()
                    .position(|choice| choice == label)
                    .unwrap_or_else(|| panic!("`{label}` not offered in {choices:?}"))),
                Answer::Default => Ok(default),
                answer => panic!("expected a menu answer for `{message}`, got {answer:?}"),
            }
        }

        fn input(&mut self, message: &str) -> Result<String> {
            match self.next(message)? {
                Answer::Input(value) => Ok(value.to_string()),
                Answer::Default => Ok(String::new()),
                answer => panic!("expected an input for `{message}`, got {answer:?}"),
            }
        }

        fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
            match self.next(message)? {
                Answer::Confirm(confirmed) => Ok(confirmed),
                Answer::Default => Ok(default),
                answer => panic!("expected a confirmation for `{message}`, got {answer:?}"),
            }
        }
    }
}
