//! Single source of truth for the bundled template layout.
//!
//! This module defines WHERE template data lives. It has no I/O beyond an
//! existence check when picking the default root.
//!
//! ```text
//! templates/
//! ├── ts.json   # package.json defaults for the TypeScript starter
//! ├── ts.zip    # TypeScript project tree
//! ├── js.json   # package.json defaults for the JavaScript starter
//! └── js.zip    # JavaScript project tree
//! ```

use std::path::{Path, PathBuf};

/// Name of the template directory, both next to the binary and in the crate sources.
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// File name of the manifest written into every generated project.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Templates shipped with the crate sources: `<CARGO_MANIFEST_DIR>/templates/`
pub fn bundled_templates_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(TEMPLATES_DIR_NAME)
}

/// Templates installed next to the running executable: `<exe dir>/templates/`
pub fn installed_templates_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(TEMPLATES_DIR_NAME))
}

/// Default templates root: the installed copy when present, else the bundled one.
pub fn default_templates_dir() -> PathBuf {
    installed_templates_dir()
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(bundled_templates_dir)
}

/// Source path of a template, without extension: `<root>/<short>`
pub fn template_source(root: &Path, short_name: &str) -> PathBuf {
    root.join(short_name)
}

/// Manifest defaults of a template: `<root>/<short>.json`
pub fn template_manifest(root: &Path, short_name: &str) -> PathBuf {
    template_source(root, short_name).with_extension("json")
}

/// Packaged project tree of a template: `<root>/<short>.zip`
pub fn template_archive(root: &Path, short_name: &str) -> PathBuf {
    template_source(root, short_name).with_extension("zip")
}

/// Manifest inside a generated project: `<project>/package.json`
pub fn project_manifest(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE_NAME)
}
