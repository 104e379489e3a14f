// crates/coldnote-cli/src/commands/create.rs - Note creation flow
//
// Sequences one interactive run: scan the vault, collect inputs, manage
// tags, render the template, materialize the note, hand off to the editor.
// All collection happens before any file is touched, so aborting mid-form
// leaves no partial state behind.

use anyhow::Result;
use coldnote_core::metadata::{self, Metadata};
use coldnote_core::tags::{Tag, TagStore};
use coldnote_core::{note, scan};
use console::style;
use indicatif::ProgressBar;
use std::time::Duration;
use tracing::warn;

use crate::context::Context;
use crate::services::EditorService;
use crate::ui::Prompter;

pub fn handle(ctx: &Context) -> Result<()> {
    let config = ctx.config();

    // Both roots must be usable before the first prompt.
    let dirs = scan::list_note_directories(&config.vault_root)?;
    let templates = scan::list_templates(&config.templates_root)?;

    let prompter = Prompter::new();

    let filename = prompter.filename()?;
    let directory = prompter.directory(&dirs)?;
    let template_name = prompter.template(&templates)?;

    let tags = collect_tags(&prompter, ctx.tag_store())?;
    let aliases = metadata::parse_aliases(&prompter.aliases()?);

    let meta = Metadata {
        title: filename.clone(),
        tags,
        aliases,
    };

    let template = scan::read_template(&config.templates_root.join(&template_name))?;
    let content = metadata::format_metadata(&template, &meta);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Creating your note...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    let created = note::create_note(&config.vault_root.join(&directory), &filename, &content);
    spinner.finish_and_clear();
    let note_path = created?;

    println!(
        "\n{}",
        style(format!("Created note at {}", note_path.display()))
            .green()
            .bold()
    );

    // The note exists; editor trouble must not turn the run into a failure.
    if let Err(e) = EditorService::launch(config.editor, &note_path) {
        warn!("{e:#}");
    }

    Ok(())
}

/// Tag selection loop: multi-select over the registry, optionally creating
/// new tags any number of times. Each pass reloads the registry so fresh
/// tags are selectable; the last committed selection wins.
fn collect_tags(prompter: &Prompter, store: &TagStore) -> Result<Vec<String>> {
    loop {
        let tags = load_or_empty(store);
        let selected = prompter.tags(&tags)?;

        if !prompter.create_another_tag()? {
            return Ok(selected);
        }

        let (name, value) = prompter.new_tag()?;
        match store.add(&name, &value) {
            Ok(true) => println!(
                "{}",
                style(format!("Successfully created tag: {name}"))
                    .green()
                    .bold()
            ),
            Ok(false) => println!("{}", style(format!("Tag already exists: {name}")).yellow()),
            // A failed save costs one tag, not the whole run.
            Err(e) => eprintln!("{}", style(format!("Error saving tag: {e}")).red().bold()),
        }
    }
}

/// Load the registry, degrading to an empty set with a warning when the
/// file is missing, unreadable or malformed. The run continues; the first
/// successful `add` (re)creates the file.
fn load_or_empty(store: &TagStore) -> Vec<Tag> {
    match store.load() {
        Ok(tags) => tags,
        Err(e) => {
            warn!("could not load tags from {}: {e}", store.path().display());
            println!(
                "{}",
                style("A new tags.json file will be created if you add a new tag.").yellow()
            );
            Vec::new()
        }
    }
}
