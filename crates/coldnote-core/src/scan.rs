// crates/coldnote-core/src/scan.rs - Vault and template scanning
//
// Lists the directories a vault offers for new notes and the templates
// available to fill them. Note directories follow a numbering convention:
// only direct subdirectories whose name starts with a decimal digit qualify
// (e.g. "01-projects"). Entries come back in filesystem enumeration order;
// no extra sorting is applied.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extension shared by templates and created notes.
pub const NOTE_EXTENSION: &str = ".md";

/// Errors raised while scanning the vault or templates root
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to read directory {}: {source}", .path.display())]
    Unreadable { path: PathBuf, source: io::Error },

    #[error("no note directories found in {}", .0.display())]
    NoDirectories(PathBuf),

    #[error("no template files found in {}", .0.display())]
    NoTemplates(PathBuf),

    #[error("failed to read template {}: {source}", .path.display())]
    Template { path: PathBuf, source: io::Error },
}

/// List the note directories directly under `root`.
///
/// An entry qualifies when it is a directory whose name starts with a
/// decimal digit. Zero qualifying entries is an error: a usable vault
/// carries at least one numbered directory.
pub fn list_note_directories(root: &Path) -> Result<Vec<String>, ScanError> {
    let entries = fs::read_dir(root).map_err(|source| ScanError::Unreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut dirs = Vec::new();
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                dirs.push(name.to_string());
            }
        }
    }

    if dirs.is_empty() {
        return Err(ScanError::NoDirectories(root.to_path_buf()));
    }
    Ok(dirs)
}

/// List the template files directly under `root`.
///
/// An entry qualifies when it is not a directory and its name ends with
/// the note extension. Subdirectories are not descended into.
pub fn list_templates(root: &Path) -> Result<Vec<String>, ScanError> {
    let entries = fs::read_dir(root).map_err(|source| ScanError::Unreadable {
        path: root.to_path_buf(),
        source,
    })?;

    let mut templates = Vec::new();
    for entry in entries.flatten() {
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(NOTE_EXTENSION) {
                templates.push(name.to_string());
            }
        }
    }

    if templates.is_empty() {
        return Err(ScanError::NoTemplates(root.to_path_buf()));
    }
    Ok(templates)
}

/// Read a template as raw UTF-8 text. No parsing happens here; placeholder
/// handling is the formatter's concern.
pub fn read_template(path: &Path) -> Result<String, ScanError> {
    fs::read_to_string(path).map_err(|source| ScanError::Template {
        path: path.to_path_buf(),
        source,
    })
}
