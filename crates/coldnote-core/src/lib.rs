// crates/coldnote-core/src/lib.rs - coldnote core library
//
// Domain logic and persistence for the coldnote CLI: runtime configuration,
// vault and template scanning, the JSON-backed tag registry, front-matter
// formatting, and exclusive note-file creation. Nothing here is interactive;
// prompts and editor launching live in the CLI crate.

pub mod config;
pub mod metadata;
pub mod note;
pub mod scan;
pub mod tags;

pub use config::{Config, ConfigError, EditorPreference};
pub use metadata::Metadata;
pub use note::NoteError;
pub use scan::ScanError;
pub use tags::{Tag, TagStore, TagStoreError};
