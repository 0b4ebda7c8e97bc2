//! Collect project metadata from the user, merged with template defaults
//!
//! Two records come out of collection and must agree on every answered
//! field:
//! - [`ProjectMetadata`], the working record the pipeline reads paths from
//! - the template's [`Manifest`], which becomes package.json

mod keywords;

pub use keywords::KeywordSet;

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{GenerateError, StageResult};
use crate::manifest::Manifest;
use crate::progress::{run_with_progress, Captions};
use crate::prompt::Prompter;
use crate::template::{TemplateDescriptor, TemplateId};
use crate::ui;

/// Recognised manifest fields, in prompt order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Version,
    Description,
    Main,
    Keywords,
    Author,
    License,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Version,
        Field::Description,
        Field::Main,
        Field::Keywords,
        Field::Author,
        Field::License,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Version => "version",
            Field::Description => "description",
            Field::Main => "main",
            Field::Keywords => "keywords",
            Field::Author => "author",
            Field::License => "license",
        }
    }

    /// Used when the template itself has no value for a string field
    fn builtin_default(self) -> &'static str {
        match self {
            Field::Name | Field::Description => "my-project",
            Field::Version => "1.0.0",
            Field::Main => "index.js",
            Field::Keywords | Field::Author | Field::License => "",
        }
    }

    /// Current template value of a string field; `None` when absent
    fn template_text(self, manifest: &Manifest) -> Option<String> {
        match self {
            Field::Name => manifest.name.clone(),
            Field::Version => manifest.version.clone(),
            Field::Description => manifest.description.clone(),
            Field::Main => manifest.main.clone(),
            Field::Author => manifest.author.as_ref().and_then(Value::as_str).map(str::to_string),
            Field::License => manifest.license.clone(),
            Field::Keywords => None,
        }
    }

    fn set_template_text(self, manifest: &mut Manifest, value: String) {
        match self {
            Field::Name => manifest.name = Some(value),
            Field::Version => manifest.version = Some(value),
            Field::Description => manifest.description = Some(value),
            Field::Main => manifest.main = Some(value),
            Field::Author => manifest.author = Some(Value::String(value)),
            Field::License => manifest.license = Some(value),
            Field::Keywords => {}
        }
    }
}

/// Module system of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    Module,
    CommonJs,
}

impl ModuleKind {
    pub const ALL: [ModuleKind; 2] = [ModuleKind::Module, ModuleKind::CommonJs];

    pub fn label(self) -> &'static str {
        match self {
            ModuleKind::Module => "Module",
            ModuleKind::CommonJs => "CommonJS",
        }
    }

    /// Value of the manifest `type` field
    pub fn package_type(self) -> String {
        self.label().to_lowercase()
    }

    fn from_label(label: &str) -> Option<Self> {
        ModuleKind::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(label))
    }
}

/// Ask which module system the project uses
///
/// An answer outside the offered labels fails the run like an unknown template.
pub fn select_module_kind(prompter: &mut dyn Prompter) -> StageResult<ModuleKind> {
    let labels: Vec<&str> = ModuleKind::ALL.iter().map(|kind| kind.label()).collect();
    let answer = prompter.select("Select the module type", &labels)?;
    run_with_progress(
        &Captions::new("Setting module", "Module setup completed successfully!")
            .with_failure("Module setup failed!"),
        || ModuleKind::from_label(&answer).ok_or(GenerateError::ModuleSelection(answer.clone())),
    )
}

/// Working record built during collection
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectMetadata {
    pub name: String,
    pub version: String,
    pub description: String,
    pub main: String,
    pub keywords: Vec<String>,
    pub author: String,
    pub license: String,
    /// Lower-cased module kind, e.g. `module` or `commonjs`
    pub module_type: String,
    pub template: TemplateId,
    pub src: PathBuf,
    /// Filesystem-safe form of `name`
    pub directory_name: String,
    /// `directory_name` resolved against the working directory
    pub full_path: PathBuf,
}

impl ProjectMetadata {
    fn empty(descriptor: &TemplateDescriptor, module_kind: ModuleKind) -> Self {
        Self {
            name: String::new(),
            version: String::new(),
            description: String::new(),
            main: String::new(),
            keywords: Vec::new(),
            author: String::new(),
            license: String::new(),
            module_type: module_kind.package_type(),
            template: descriptor.id,
            src: descriptor.src.clone(),
            directory_name: String::new(),
            full_path: PathBuf::new(),
        }
    }

    fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Version => self.version = value,
            Field::Description => self.description = value,
            Field::Main => self.main = value,
            Field::Author => self.author = value,
            Field::License => self.license = value,
            Field::Keywords => {}
        }
    }
}

/// Everything collection produces
#[derive(Debug, Clone)]
pub struct Collected {
    pub metadata: ProjectMetadata,
    /// Template defaults with every answer applied
    pub manifest: Manifest,
    /// Accumulator handed back so a later pass can keep extending it
    pub keywords: KeywordSet,
}

/// Map a package name to a directory name: `@scope/name` becomes `scope-name`
///
/// Only the first `/` is replaced; anything without a leading `@` and a `/`
/// is returned unchanged.
pub fn directory_name(name: &str) -> String {
    match name.strip_prefix('@') {
        Some(rest) if rest.contains('/') => rest.replacen('/', "-", 1),
        _ => name.to_string(),
    }
}

/// Prompt for every recognised field and merge the answers into both records
///
/// An empty answer keeps the template default; a non-empty answer replaces
/// the value in the working record and the template record alike.
pub fn collect_metadata(
    prompter: &mut dyn Prompter,
    descriptor: &TemplateDescriptor,
    module_kind: ModuleKind,
    mut template: Manifest,
    mut keywords: KeywordSet,
    cwd: &Path,
) -> StageResult<Collected> {
    let mut metadata = ProjectMetadata::empty(descriptor, module_kind);

    ui::info("Let's build your project. Press enter to keep the value in brackets.");

    for field in Field::ALL {
        if field == Field::Keywords {
            let hint = template.keywords.as_ref().map(|words| words.join(","));
            let answer = prompter.input(field.key(), hint.as_deref())?;
            keywords.extend_from_answer(&answer);
            let list = if answer.is_empty() {
                Vec::new()
            } else {
                keywords.to_vec()
            };
            template.keywords = Some(list.clone());
            metadata.keywords = list;
            continue;
        }

        // A person object can't be edited as one line of text; keep it as is
        let person = template
            .author
            .as_ref()
            .filter(|author| field == Field::Author && !author.is_string());
        if let Some(person) = person {
            metadata.author = person
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            log::debug!("keeping non-string author from template");
            continue;
        }

        let default = field.template_text(&template);
        let answer = prompter.input(field.key(), default.as_deref())?;
        let resolved = if answer.is_empty() {
            // An empty template name would resolve the project to the cwd itself
            default
                .filter(|value| field != Field::Name || !value.is_empty())
                .unwrap_or_else(|| field.builtin_default().to_string())
        } else if field == Field::License {
            answer.to_uppercase()
        } else {
            answer
        };

        if !resolved.is_empty() {
            field.set_template_text(&mut template, resolved.clone());
        }
        log::debug!("field {} = {:?}", field.key(), resolved);
        metadata.set_text(field, resolved);
    }

    template.module_type = Some(metadata.module_type.clone());
    metadata.directory_name = directory_name(&metadata.name);
    metadata.full_path = cwd.join(&metadata.directory_name);

    ui::success(&format!(
        "Successfully setting the project: {} to {}",
        ui::emphasis(&metadata.directory_name),
        ui::emphasis(&metadata.full_path.display().to_string())
    ));

    Ok(Collected {
        metadata,
        manifest: template,
        keywords,
    })
}
