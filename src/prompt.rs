//! Interactive prompts
//!
//! The pipeline only talks to [`Prompter`]; [`TerminalPrompter`] is the
//! `dialoguer` implementation used by the binary.

use std::io;

use colored::Colorize;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

pub trait Prompter {
    /// Pick one of `items`; returns the chosen item text
    fn select(&mut self, prompt: &str, items: &[&str]) -> io::Result<String>;

    /// Free text answer; an empty string means "keep the default"
    fn input(&mut self, prompt: &str, default_hint: Option<&str>) -> io::Result<String>;

    /// Yes/no question
    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool>;
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
    term: Term,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
            term: Term::stderr(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// dialoguer only fails on terminal I/O; hand back the underlying error
fn into_io_error(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(e) => e,
    }
}

impl Prompter for TerminalPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> io::Result<String> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_on(&self.term)
            .map_err(into_io_error)?;
        Ok(items[index].to_string())
    }

    fn input(&mut self, prompt: &str, default_hint: Option<&str>) -> io::Result<String> {
        let prompt = match default_hint.filter(|hint| !hint.is_empty()) {
            Some(hint) => format!("{prompt} {}", format!("({hint})").dimmed()),
            None => prompt.to_string(),
        };
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text_on(&self.term)
            .map_err(into_io_error)?;
        Ok(answer.trim().to_string())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> io::Result<bool> {
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_on(&self.term)
            .map_err(into_io_error)
    }
}
