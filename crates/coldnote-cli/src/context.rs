// crates/coldnote-cli/src/context.rs - Configuration resolution and wiring

use anyhow::Result;
use coldnote_core::{Config, ConfigError, EditorPreference, TagStore};
use std::env;
use std::path::PathBuf;
use tracing::warn;

use crate::cli::Cli;

/// Application context passed to the command handler
///
/// Resolves configuration once (flag over environment variable) and owns
/// the tag store, so nothing downstream touches the process environment.
pub struct Context {
    config: Config,
    tag_store: TagStore,
}

impl Context {
    pub fn new(cli: &Cli) -> Result<Self> {
        let vault_root = resolve_path(cli.vault.clone(), "VAULT_ROOT")?;
        let templates_root = resolve_path(cli.templates.clone(), "TEMPLATES_ROOT")?;

        let editor = cli
            .editor
            .clone()
            .or_else(|| env::var("EDITOR_PREFERENCE").ok().filter(|v| !v.is_empty()))
            .map(|name| {
                EditorPreference::from_name(&name).unwrap_or_else(|| {
                    warn!("unrecognized editor preference '{name}', using nvim");
                    EditorPreference::default()
                })
            })
            .unwrap_or_default();

        let config = Config::new(vault_root, templates_root, editor);
        let tag_store = TagStore::new(config.tags_path());

        Ok(Self { config, tag_store })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn tag_store(&self) -> &TagStore {
        &self.tag_store
    }
}

/// Flag value wins; the environment variable is the fallback. An empty
/// variable counts as unset. Missing both is fatal.
fn resolve_path(flag: Option<PathBuf>, var: &'static str) -> Result<PathBuf, ConfigError> {
    flag.or_else(|| {
        env::var_os(var)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    })
    .ok_or(ConfigError::MissingVar(var))
}
