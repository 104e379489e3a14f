// crates/coldnote-cli/src/cli.rs - Command-line surface
//
// coldnote is one interactive flow, so the surface is just flag overrides
// for the environment configuration.

use clap::Parser;
use std::path::PathBuf;

/// Create a templated Markdown note in a numbered vault directory and open
/// it in your editor
#[derive(Parser)]
#[command(name = "coldnote")]
#[command(version)]
pub struct Cli {
    /// Vault root directory (overrides VAULT_ROOT)
    #[arg(long)]
    pub vault: Option<PathBuf>,

    /// Templates directory (overrides TEMPLATES_ROOT)
    #[arg(long)]
    pub templates: Option<PathBuf>,

    /// Editor preference: nvim, nvim-zen or vscode (overrides EDITOR_PREFERENCE)
    #[arg(long)]
    pub editor: Option<String>,
}
