// crates/coldnote-core/src/tags.rs - Persisted tag registry
//
// Tags live in a single JSON file inside the vault: an array of
// {name, value, selected} objects. The registry is deduplicated on both
// fields: a tag whose name OR value matches an existing entry is never
// inserted twice. Writes are whole-file read-modify-write with no locking;
// one local user and one process instance at a time is the supported
// scenario.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the tag registry
#[derive(Error, Debug)]
pub enum TagStoreError {
    #[error("tag registry I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed tag registry: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One selectable tag: a display `name` and the `value` written into note
/// front matter.
///
/// Unknown JSON fields are ignored on read and `selected` defaults to
/// false, so hand-edited or newer registry files keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub selected: bool,
}

/// Handle on the tag registry file
pub struct TagStore {
    path: PathBuf,
}

impl TagStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all tags, in file order.
    ///
    /// Strict: a missing or unreadable file is an I/O error, malformed JSON
    /// a parse error. Callers that can proceed without tags decide for
    /// themselves whether to degrade to an empty set.
    pub fn load(&self) -> Result<Vec<Tag>, TagStoreError> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Add a tag, deduplicating on name or value.
    ///
    /// Returns `Ok(false)` without touching the file when a tag with the
    /// same name or the same value already exists. A missing registry file
    /// bootstraps an empty collection, so the first `add` creates it. The
    /// whole file is rewritten pretty-printed on every insertion.
    pub fn add(&self, name: &str, value: &str) -> Result<bool, TagStoreError> {
        let mut tags = match fs::read_to_string(&self.path) {
            Ok(data) => serde_json::from_str::<Vec<Tag>>(&data)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        if tags.iter().any(|t| t.value == value || t.name == name) {
            return Ok(false);
        }

        tags.push(Tag {
            name: name.to_string(),
            value: value.to_string(),
            selected: false,
        });

        let data = serde_json::to_string_pretty(&tags)?;
        fs::write(&self.path, data)?;
        Ok(true)
    }
}
