// crates/coldnote-cli/src/main.rs - CLI entry point
//
// coldnote runs a single interactive note-creation flow:
//
//   scan vault + templates -> collect inputs -> tag loop -> aliases
//     -> materialize note -> launch editor
//
// Configuration comes from VAULT_ROOT / TEMPLATES_ROOT / EDITOR_PREFERENCE
// (or the matching flags). Any unrecoverable error prints a message and
// exits non-zero; the only degraded path is tag-registry loading, which
// falls back to an empty selectable set with a warning.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod context;
mod services;
mod ui;

use cli::Cli;
use context::Context;

fn main() -> Result<()> {
    // Warnings (tag-registry degradation, editor trouble) must be visible
    // without RUST_LOG set.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let ctx = Context::new(&cli)?;

    commands::create::handle(&ctx)
}
