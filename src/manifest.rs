//! package.json model with a fixed key order
//!
//! Field declaration order IS the persisted key order: name, version,
//! description, license, author, repository, keywords, type, main, then
//! every unrecognised key in the order the template listed it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GenerateError, StageResult};
use crate::paths;

/// Keys the manifest always emits first, in this order
pub const KEY_ORDER: [&str; 9] = [
    "name",
    "version",
    "description",
    "license",
    "author",
    "repository",
    "keywords",
    "type",
    "main",
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Raw JSON: npm accepts a `"Name <mail>"` string or a person object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Value>,
    /// Raw JSON: npm accepts both a URL string and an object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(flatten)]
    pub extras: Map<String, Value>,
}

impl Manifest {
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        let mut text = serde_json::to_string_pretty(self)?;
        text.push('\n');
        Ok(text)
    }

    /// Write `<project_dir>/package.json`, returning the written path
    pub fn write_to(&self, project_dir: &Path) -> StageResult<PathBuf> {
        let path = paths::project_manifest(project_dir);
        let text = self
            .to_json_pretty()
            .map_err(|e| GenerateError::ManifestWrite { source: e.into() })?;
        fs::write(&path, text).map_err(|source| GenerateError::ManifestWrite { source })?;
        log::debug!("manifest written to {}", path.display());
        Ok(path)
    }
}
