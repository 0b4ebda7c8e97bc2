//! Shared fixtures for pipeline tests
#![allow(dead_code)]

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use nyrenx::{Config, Prompter};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

#[derive(Debug, Clone)]
pub enum Answer {
    Select(&'static str),
    Input(&'static str),
    Confirm(bool),
}

/// Replays a fixed list of answers and records every prompt it was shown
///
/// Running out of answers behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            asked: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, prompt: &str) -> io::Result<Answer> {
        self.asked.push(prompt.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more answers"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, prompt: &str, items: &[&str]) -> io::Result<String> {
        match self.next(prompt)? {
            Answer::Select(choice) => {
                assert!(items.contains(&choice), "{choice} not offered for {prompt}");
                Ok(choice.to_string())
            }
            other => panic!("expected select answer for {prompt:?}, got {other:?}"),
        }
    }

    fn input(&mut self, prompt: &str, _default_hint: Option<&str>) -> io::Result<String> {
        match self.next(prompt)? {
            Answer::Input(text) => Ok(text.to_string()),
            other => panic!("expected input answer for {prompt:?}, got {other:?}"),
        }
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> io::Result<bool> {
        match self.next(prompt)? {
            Answer::Confirm(yes) => Ok(yes),
            other => panic!("expected confirm answer for {prompt:?}, got {other:?}"),
        }
    }
}

/// Answers for: template, module kind, name, six defaulted fields
pub fn metadata_answers(template: &'static str, module: &'static str, name: &'static str) -> Vec<Answer> {
    let mut answers = vec![
        Answer::Select(template),
        Answer::Select(module),
        Answer::Input(name),
    ];
    answers.extend(std::iter::repeat(Answer::Input("")).take(6));
    answers
}

pub fn write_zip(path: &Path, files: &[(&str, &str)]) {
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    for (name, contents) in files {
        zip.start_file(*name, SimpleFileOptions::default()).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

/// A `ts` template pair under `<root>/templates`
pub fn write_ts_template(root: &Path, archive_files: &[(&str, &str)]) -> PathBuf {
    let dir = root.join("templates");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("ts.json"),
        r#"{"name":"fixture","version":"0.0.1","scripts":{"build":"tsc"},"keywords":[],"license":"MIT"}"#,
    )
    .unwrap();
    write_zip(&dir.join("ts.zip"), archive_files);
    dir
}

/// Workspace with its own cwd and a package manager that is never found
pub struct Workspace {
    pub temp: TempDir,
    pub config: Config,
}

impl Workspace {
    pub fn new(templates_dir: Option<PathBuf>) -> Self {
        let temp = TempDir::new().unwrap();
        let cwd = temp.path().join("work");
        fs::create_dir_all(&cwd).unwrap();
        let config = Config {
            cwd,
            templates_dir: templates_dir.unwrap_or_else(nyrenx::paths::bundled_templates_dir),
            package_manager: "nyrenx-test-missing-pm".to_string(),
        };
        Self { temp, config }
    }

    /// File the fake package manager appends its invocations to
    pub fn install_log(&self) -> PathBuf {
        self.temp.path().join("install.log")
    }

    /// Install a fake package manager that logs `cwd|args` and exits with `status`
    #[cfg(unix)]
    pub fn with_fake_package_manager(mut self, status: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let script = self.temp.path().join("fake-pm");
        fs::write(
            &script,
            format!(
                "#!/bin/sh\necho \"$(pwd)|$*\" >> '{}'\necho 'added 3 packages'\n{}\n",
                self.install_log().display(),
                if status == 0 {
                    "exit 0".to_string()
                } else {
                    format!("echo 'npm ERR! code E{status}' >&2\nexit {status}")
                }
            ),
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        self.config.package_manager = script.display().to_string();
        self
    }

    pub fn install_calls(&self) -> Vec<String> {
        fs::read_to_string(self.install_log())
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }
}
