// crates/coldnote-core/src/note.rs - Note file creation
//
// Creation is exclusive: the file is opened with `create_new`, which fails
// atomically when the path is already occupied. An existing note is never
// overwritten.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::scan::NOTE_EXTENSION;

/// Errors raised while materializing a note
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("file already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("failed to write note {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
}

/// Create `<dir>/<filename>.md` with the given content and return the full
/// path of the created note.
///
/// Fails with [`NoteError::AlreadyExists`] when the target path is
/// occupied; any other I/O failure is fatal to the run.
pub fn create_note(dir: &Path, filename: &str, content: &str) -> Result<PathBuf, NoteError> {
    let path = dir.join(format!("{filename}{NOTE_EXTENSION}"));

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => NoteError::AlreadyExists(path.clone()),
            _ => NoteError::Io {
                path: path.clone(),
                source,
            },
        })?;

    file.write_all(content.as_bytes())
        .map_err(|source| NoteError::Io {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
