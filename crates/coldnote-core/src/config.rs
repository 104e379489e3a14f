// crates/coldnote-core/src/config.rs - Runtime configuration
//
// Configuration is resolved once at startup and handed to components as a
// plain struct; no component reads the process environment itself. The CLI
// crate owns the flag-over-environment precedence and constructs the struct,
// which keeps everything below it testable with synthetic paths.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Name of the tag registry file inside the vault root.
pub const TAGS_FILE: &str = "tags.json";

/// Errors raised while resolving configuration at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required setting was neither passed as a flag nor set in the
    /// environment. There is no usable default for vault paths.
    #[error("{0} environment variable not set")]
    MissingVar(&'static str),
}

/// Which editor the created note is handed to
///
/// Parsed from `EDITOR_PREFERENCE` or `--editor`. Unrecognized names have no
/// mapping; the caller falls back to the default and decides whether to warn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorPreference {
    #[default]
    Nvim,
    NvimZen,
    Vscode,
}

impl EditorPreference {
    /// Map a preference string to its variant.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "nvim" => Some(Self::Nvim),
            "nvim-zen" => Some(Self::NvimZen),
            "vscode" => Some(Self::Vscode),
            _ => None,
        }
    }

    /// The configuration string for this preference.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Nvim => "nvim",
            Self::NvimZen => "nvim-zen",
            Self::Vscode => "vscode",
        }
    }
}

impl fmt::Display for EditorPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved runtime configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Root note directory holding the numbered note subdirectories.
    pub vault_root: PathBuf,
    /// Directory scanned for `*.md` note templates.
    pub templates_root: PathBuf,
    /// Editor the created note is opened with.
    pub editor: EditorPreference,
}

impl Config {
    pub fn new(vault_root: PathBuf, templates_root: PathBuf, editor: EditorPreference) -> Self {
        Self {
            vault_root,
            templates_root,
            editor,
        }
    }

    /// Path of the persisted tag registry inside the vault.
    pub fn tags_path(&self) -> PathBuf {
        self.vault_root.join(TAGS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_editor_preference_names() {
        assert_eq!(
            EditorPreference::from_name("nvim"),
            Some(EditorPreference::Nvim)
        );
        assert_eq!(
            EditorPreference::from_name("nvim-zen"),
            Some(EditorPreference::NvimZen)
        );
        assert_eq!(
            EditorPreference::from_name("vscode"),
            Some(EditorPreference::Vscode)
        );
    }

    #[test]
    fn unknown_editor_preference_has_no_mapping() {
        assert_eq!(EditorPreference::from_name("emacs"), None);
        assert_eq!(EditorPreference::from_name(""), None);
        // Fallback used by callers for anything unrecognized.
        assert_eq!(EditorPreference::default(), EditorPreference::Nvim);
    }

    #[test]
    fn preference_names_round_trip() {
        for pref in [
            EditorPreference::Nvim,
            EditorPreference::NvimZen,
            EditorPreference::Vscode,
        ] {
            assert_eq!(EditorPreference::from_name(pref.name()), Some(pref));
        }
    }

    #[test]
    fn tags_path_is_inside_the_vault() {
        let config = Config::new(
            PathBuf::from("/vault"),
            PathBuf::from("/tpl"),
            EditorPreference::default(),
        );
        assert_eq!(config.tags_path(), PathBuf::from("/vault/tags.json"));
    }
}
