//! Failure taxonomy shared by every pipeline stage

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result returned by every stage of the generation pipeline
pub type StageResult<T> = Result<T, GenerateError>;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// Template identifier outside the known set
    #[error("Please select a template (unknown template `{0}`)")]
    Selection(String),

    /// Module type outside the offered choices
    #[error("Please select a module type (unknown module type `{0}`)")]
    ModuleSelection(String),

    /// User declined the continuation gate
    #[error("Process canceled by the user")]
    Cancelled,

    /// Prompt engine failed (closed stdin, no terminal)
    #[error("Prompt failed: {0}")]
    Prompt(#[from] io::Error),

    #[error("Failed to read template defaults {}: {source}", path.display())]
    TemplateDefaults {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid template defaults {}: {source}", path.display())]
    TemplateFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to copy the repository: {source}")]
    Extraction {
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Create package.json failed: {source}")]
    ManifestWrite {
        #[source]
        source: io::Error,
    },

    /// Package manager reported a failure; carries its captured error text
    #[error("Execution failed: {0}")]
    Subprocess(String),
}

impl GenerateError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GenerateError::Cancelled)
    }
}
