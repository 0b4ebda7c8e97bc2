//! Extract a template archive into the project directory
//!
//! No confirmation and no rollback happen here: the overwrite warning and the
//! continue gate run before this is called, and a failed extraction leaves
//! whatever was already written in place.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use zip::result::ZipResult;
use zip::ZipArchive;

use crate::error::{GenerateError, StageResult};

/// Unpack `archive` into `destination`, creating the directory tree as needed
///
/// Existing files with the same names are overwritten.
pub fn extract_archive(archive: &Path, destination: &Path) -> StageResult<usize> {
    unpack(archive, destination).map_err(|source| GenerateError::Extraction { source })
}

fn unpack(archive: &Path, destination: &Path) -> ZipResult<usize> {
    let file = File::open(archive)?;
    let mut zip = ZipArchive::new(BufReader::new(file))?;
    let entries = zip.len();

    fs::create_dir_all(destination)?;
    zip.extract(destination)?;

    log::debug!(
        "extracted {entries} entries from {} into {}",
        archive.display(),
        destination.display()
    );
    Ok(entries)
}
