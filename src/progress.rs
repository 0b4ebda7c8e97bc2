//! Run a blocking action behind a spinner with start / success / failure captions

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use crate::ui;

/// Captions shown while an action runs and once it resolves
#[derive(Debug, Clone)]
pub struct Captions {
    pub start: String,
    pub success: String,
    /// When absent, a failed action leaves the start caption in place
    pub failure: Option<String>,
}

impl Captions {
    pub fn new(start: impl Into<String>, success: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            success: success.into(),
            failure: None,
        }
    }

    pub fn with_failure(mut self, failure: impl Into<String>) -> Self {
        self.failure = Some(failure.into());
        self
    }
}

/// Run `action`, showing a spinner until it resolves
///
/// The action's result is returned untouched; the spinner only reports on it.
pub fn run_with_progress<T, E>(
    captions: &Captions,
    action: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{prefix} {spinner:.white} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_prefix(ui::prefix());
    spinner.set_message(captions.start.dimmed().to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    log::debug!("stage started: {}", captions.start);
    let result = action();

    spinner.set_style(
        ProgressStyle::with_template("{prefix} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    match &result {
        Ok(_) => {
            log::debug!("stage succeeded: {}", captions.start);
            spinner.finish_with_message(format!(
                "{} {}",
                ui::success_mark(),
                captions.success.green()
            ));
        }
        Err(_) => {
            log::debug!("stage failed: {}", captions.start);
            let caption = captions.failure.as_deref().unwrap_or(&captions.start);
            spinner.abandon_with_message(format!("{} {}", ui::error_mark(), caption.red()));
        }
    }

    result
}
