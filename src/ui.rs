//! Colored terminal lines for user-facing status messages

use colored::{ColoredString, Colorize};

pub const TOOL_NAME: &str = "nyrenx";

/// `[nyrenx]` prefix shown in front of progress lines
pub fn prefix() -> String {
    format!("{}{}{}", "[".white(), TOOL_NAME.truecolor(135, 95, 215), "]".white())
}

pub fn success_mark() -> ColoredString {
    "✔".green().bold()
}

pub fn error_mark() -> ColoredString {
    "✖".red().bold()
}

pub fn success(message: &str) {
    println!("{} {}", success_mark(), message.green());
}

pub fn error(message: &str) {
    eprintln!("{} {}", error_mark(), message.red());
}

pub fn warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message.yellow());
}

pub fn info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Captured subprocess output, printed grey
pub fn output(text: &str) {
    let text = text.trim_end();
    if !text.is_empty() {
        println!("{}", text.dimmed());
    }
}

/// Emphasis for names and paths inside a message
pub fn emphasis(text: &str) -> ColoredString {
    text.white().bold()
}
