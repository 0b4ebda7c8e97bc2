pub mod archive;
pub mod config;
pub mod error;
pub mod exit;
pub mod install;
pub mod manifest;
pub mod metadata;
pub mod paths;
pub mod pipeline;
pub mod progress;
pub mod prompt;
pub mod template;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use error::{GenerateError, StageResult};
pub use exit::Outcome;
pub use manifest::Manifest;
pub use metadata::{KeywordSet, ProjectMetadata};
pub use pipeline::{generate, Generated};
pub use prompt::{Prompter, TerminalPrompter};
pub use template::{TemplateDescriptor, TemplateId};
