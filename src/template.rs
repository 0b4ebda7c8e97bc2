//! Bundled templates and the template selection prompt

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{GenerateError, StageResult};
use crate::manifest::Manifest;
use crate::paths;
use crate::prompt::Prompter;

/// Identifier of a bundled template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    TypeScript,
    JavaScript,
}

impl TemplateId {
    pub const ALL: [TemplateId; 2] = [TemplateId::TypeScript, TemplateId::JavaScript];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::TypeScript => "typescript",
            TemplateId::JavaScript => "javascript",
        }
    }

    /// File stem of the template pair under the templates root
    pub fn short_name(self) -> &'static str {
        match self {
            TemplateId::TypeScript => "ts",
            TemplateId::JavaScript => "js",
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| GenerateError::Selection(s.to_string()))
    }
}

/// Where a template's manifest defaults and archive live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDescriptor {
    pub id: TemplateId,
    /// `<root>/<short>`, the stem both files share
    pub src: PathBuf,
    pub manifest_path: PathBuf,
    pub archive_path: PathBuf,
}

impl TemplateDescriptor {
    pub fn new(id: TemplateId, root: &Path) -> Self {
        Self {
            id,
            src: paths::template_source(root, id.short_name()),
            manifest_path: paths::template_manifest(root, id.short_name()),
            archive_path: paths::template_archive(root, id.short_name()),
        }
    }

    /// Both halves of the template are on disk
    pub fn is_available(&self) -> bool {
        self.manifest_path.is_file() && self.archive_path.is_file()
    }

    /// Read the template's package.json defaults
    pub fn load_defaults(&self) -> StageResult<Manifest> {
        let text = fs::read_to_string(&self.manifest_path).map_err(|source| {
            GenerateError::TemplateDefaults {
                path: self.manifest_path.clone(),
                source,
            }
        })?;
        serde_json::from_str(&text).map_err(|source| GenerateError::TemplateFormat {
            path: self.manifest_path.clone(),
            source,
        })
    }
}

/// Every bundled template under `root`, in menu order
pub fn descriptors(root: &Path) -> Vec<TemplateDescriptor> {
    TemplateId::ALL
        .into_iter()
        .map(|id| TemplateDescriptor::new(id, root))
        .collect()
}

/// Ask for a template unless one was given up front, then validate the answer
pub fn select_template(
    prompter: &mut dyn Prompter,
    preselected: Option<&str>,
) -> StageResult<TemplateId> {
    let answer = match preselected {
        Some(answer) => answer.to_string(),
        None => {
            let items: Vec<&str> = TemplateId::ALL.iter().map(|id| id.as_str()).collect();
            prompter.select("Select a template", &items)?
        }
    };
    log::debug!("template selected: {answer}");
    answer.parse()
}
