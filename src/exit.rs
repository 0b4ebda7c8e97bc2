//! Map the pipeline result to a final message and a process exit code

use std::process::ExitCode;

use crate::error::GenerateError;
use crate::ui;

/// Terminal state of a generation run
#[derive(Debug)]
pub enum Outcome {
    Completed,
    Cancelled,
    Failed(GenerateError),
}

impl Outcome {
    pub fn from_result<T>(result: Result<T, GenerateError>) -> Self {
        match result {
            Ok(_) => Outcome::Completed,
            Err(GenerateError::Cancelled) => Outcome::Cancelled,
            Err(err) => Outcome::Failed(err),
        }
    }

    /// 0 for success and cancellation, 1 for any failed stage
    pub fn code(&self) -> u8 {
        match self {
            Outcome::Completed | Outcome::Cancelled => 0,
            Outcome::Failed(_) => 1,
        }
    }

    /// Print the closing line for this outcome
    pub fn report(&self) {
        match self {
            Outcome::Completed => ui::success("Successfully created the project."),
            Outcome::Cancelled => ui::error(&GenerateError::Cancelled.to_string()),
            Outcome::Failed(err) => {
                log::debug!("generation failed: {err:?}");
                ui::error(&err.to_string());
            }
        }
    }
}

/// Report the outcome of `result` and turn it into the process exit code
pub fn finish<T>(result: Result<T, GenerateError>) -> ExitCode {
    let outcome = Outcome::from_result(result);
    outcome.report();
    ExitCode::from(outcome.code())
}
