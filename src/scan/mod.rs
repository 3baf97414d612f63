//! Scan engine entry points.
//!
//! `check_directory` scans an extracted theme folder; `check_zip` extracts a
//! theme archive into a temp dir first, descending into a single wrapping
//! top-level folder when the archive has one. Both produce a `RawReport`
//! that the classifier normalizes before rendering.

pub mod checks;
pub mod rules;

use crate::models::report::RawReport;
use crate::models::RunOptions;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures that prevent a scan from running at all. `NotADirectory` is
/// distinguishable so the caller can suggest the archive flag.
pub enum ScanError {
    #[error("theme path not found: {0}")]
    NotFound(PathBuf),
    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),
    #[error("could not read theme: {0}")]
    Io(#[from] io::Error),
    #[error("could not read theme archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("theme archive is empty")]
    EmptyArchive,
}

/// Scan a theme directory.
pub fn check_directory(path: &Path, options: &RunOptions) -> Result<RawReport, ScanError> {
    let meta = fs::metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ScanError::NotFound(path.to_path_buf())
        } else {
            ScanError::Io(e)
        }
    })?;
    if !meta.is_dir() {
        return Err(ScanError::NotADirectory(path.to_path_buf()));
    }

    let mut report = RawReport::new(options.check_version.to_string());
    for finding in checks::run_checks(path, options) {
        report.push(finding);
    }
    Ok(report)
}

/// Scan a zipped theme by extracting it to a temp dir first.
pub fn check_zip(path: &Path, options: &RunOptions) -> Result<RawReport, ScanError> {
    let file = fs::File::open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ScanError::NotFound(path.to_path_buf())
        } else {
            ScanError::Io(e)
        }
    })?;
    let mut archive = zip::ZipArchive::new(file)?;
    if archive.is_empty() {
        return Err(ScanError::EmptyArchive);
    }

    let extracted = tempfile::tempdir()?;
    archive.extract(extracted.path())?;
    let root = theme_root(extracted.path())?;
    check_directory(&root, options)
}

/// Theme zips commonly wrap everything in one top-level folder; scan inside
/// it when that is the only real entry. Finder's __MACOSX junk is ignored.
fn theme_root(extracted: &Path) -> Result<PathBuf, ScanError> {
    let entries: Vec<fs::DirEntry> = fs::read_dir(extracted)?
        .collect::<Result<_, _>>()
        .map_err(ScanError::Io)?;
    let real: Vec<&fs::DirEntry> = entries
        .iter()
        .filter(|e| e.file_name().to_string_lossy() != "__MACOSX")
        .collect();
    if real.len() == 1 && real[0].path().is_dir() {
        Ok(real[0].path())
    } else {
        Ok(extracted.to_path_buf())
    }
}
