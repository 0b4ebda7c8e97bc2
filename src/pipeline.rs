//! The generation pipeline
//!
//! select template -> collect metadata -> continue gate -> extract archive ->
//! write package.json -> install dependencies
//!
//! Every stage returns [`StageResult`]; the first failure stops the run and
//! is handed back to the caller untouched. Nothing touches the filesystem
//! before the continue gate, and nothing already written is rolled back.

use std::path::{Path, PathBuf};

use crate::archive::extract_archive;
use crate::config::Config;
use crate::error::{GenerateError, StageResult};
use crate::install::{run_install, InstallOutput, InstallRequest};
use crate::metadata::{collect_metadata, select_module_kind, KeywordSet, ProjectMetadata};
use crate::progress::{run_with_progress, Captions};
use crate::prompt::Prompter;
use crate::template::{select_template, TemplateDescriptor};
use crate::ui;

/// What a completed run produced
#[derive(Debug)]
pub struct Generated {
    pub metadata: ProjectMetadata,
    pub manifest_path: PathBuf,
    pub install: InstallOutput,
}

/// Run the full pipeline, prompting through `prompter`
///
/// `preselected` answers the template prompt up front (`--template`).
pub fn generate(
    config: &Config,
    prompter: &mut dyn Prompter,
    preselected: Option<&str>,
) -> StageResult<Generated> {
    let template_id = select_template(prompter, preselected)?;
    let descriptor = TemplateDescriptor::new(template_id, &config.templates_dir);

    let defaults = run_with_progress(
        &Captions::new("Setting up repository templates", "Setup completed successfully!")
            .with_failure("Setup failed!"),
        || descriptor.load_defaults(),
    )?;

    let module_kind = select_module_kind(prompter)?;
    let collected = collect_metadata(
        prompter,
        &descriptor,
        module_kind,
        defaults,
        KeywordSet::new(),
        &config.cwd,
    )?;
    let metadata = collected.metadata;

    let add_libraries = prompter.confirm("Would you like to add more libraries?", false)?;
    notify_selection(&metadata);
    warn_overwrite(&metadata.full_path);

    if !prompter.confirm("Do you want to continue?", true)? {
        log::debug!("user declined the continue gate");
        return Err(GenerateError::Cancelled);
    }

    run_with_progress(
        &Captions::new("Cloning repository", "Cloning completed successfully!")
            .with_failure("Cloning failed!"),
        || extract_archive(&descriptor.archive_path, &metadata.full_path),
    )?;

    let manifest_path = run_with_progress(
        &Captions::new(
            "Creating the package.json file",
            "Package.json creation completed successfully!",
        )
        .with_failure("Package.json creation failed!"),
        || collected.manifest.write_to(&metadata.full_path),
    )?;

    let install = install_dependencies(config, prompter, add_libraries, &metadata.full_path)?;

    Ok(Generated {
        metadata,
        manifest_path,
        install,
    })
}

fn install_dependencies(
    config: &Config,
    prompter: &mut dyn Prompter,
    add_libraries: bool,
    project_dir: &Path,
) -> StageResult<InstallOutput> {
    let pm = config.package_manager.as_str();
    let (request, captions) = if add_libraries {
        show_library_examples(pm);
        let libraries = prompter.input("libraries", None)?;
        (
            InstallRequest::WithLibraries(libraries),
            Captions::new("Installing library", "Library installation completed successfully!")
                .with_failure("Library installation failed!"),
        )
    } else {
        (
            InstallRequest::Plain,
            Captions::new(
                format!("{pm} install"),
                format!("{pm} installation completed successfully!"),
            ),
        )
    };

    let output = run_with_progress(&captions, || run_install(pm, project_dir, &request))?;
    ui::output(&output.combined);
    Ok(output)
}

fn notify_selection(metadata: &ProjectMetadata) {
    ui::info(&format!(
        "Template {} with module type {}",
        ui::emphasis(metadata.template.as_str()),
        ui::emphasis(&metadata.module_type)
    ));
}

fn warn_overwrite(destination: &Path) {
    ui::warning(&format!(
        "Files in {} with the same names as template files will be overwritten.",
        destination.display()
    ));
}

fn show_library_examples(package_manager: &str) {
    ui::info(&format!(
        "List the libraries to pass to `{package_manager} install`, separated by spaces:"
    ));
    println!("    lodash");
    println!("    express@4 cors");
    println!("    -D vitest");
}
