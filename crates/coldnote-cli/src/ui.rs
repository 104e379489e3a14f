// crates/coldnote-cli/src/ui.rs - Interactive form collaborator
//
// Thin wrapper over dialoguer prompts. The orchestrator supplies option
// labels/values and validation predicates; this module returns the
// committed values. Empty filename and tag fields re-prompt rather than
// abort; an interrupted prompt surfaces as an error and ends the run
// before any file is created.

use anyhow::Result;
use coldnote_core::Tag;
use console::{Term, style};
use dialoguer::{Confirm, Input, MultiSelect, Select, theme::ColorfulTheme};

pub struct Prompter {
    term: Term,
    theme: ColorfulTheme,
}

impl Prompter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }

    /// Filename for the new note, non-empty after trimming.
    pub fn filename(&self) -> Result<String> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt("Note filename (e.g. brand-new-note)")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("filename cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;
        Ok(name)
    }

    /// Single choice from the vault's note directories.
    pub fn directory(&self, dirs: &[String]) -> Result<String> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("Select directory")
            .items(dirs)
            .default(0)
            .interact_on(&self.term)?;
        Ok(dirs[index].clone())
    }

    /// Single choice from the available templates.
    pub fn template(&self, templates: &[String]) -> Result<String> {
        let index = Select::with_theme(&self.theme)
            .with_prompt("Select template")
            .items(templates)
            .default(0)
            .interact_on(&self.term)?;
        Ok(templates[index].clone())
    }

    /// Multi-select over the registry. Labels are tag names; the returned
    /// values are what ends up in front matter.
    pub fn tags(&self, tags: &[Tag]) -> Result<Vec<String>> {
        if tags.is_empty() {
            println!("{}", style("No tags in the registry yet.").dim());
            return Ok(Vec::new());
        }

        let labels: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
        let preselected: Vec<bool> = tags.iter().map(|t| t.selected).collect();

        let picks = MultiSelect::with_theme(&self.theme)
            .with_prompt("Tags (space to toggle, enter to confirm)")
            .items(&labels)
            .defaults(&preselected)
            .interact()?;

        Ok(picks.into_iter().map(|i| tags[i].value.clone()).collect())
    }

    pub fn create_another_tag(&self) -> Result<bool> {
        Ok(Confirm::with_theme(&self.theme)
            .with_prompt("Create a new tag?")
            .default(false)
            .interact()?)
    }

    /// Name and value for a new registry entry, both non-empty.
    pub fn new_tag(&self) -> Result<(String, String)> {
        let name: String = Input::with_theme(&self.theme)
            .with_prompt("Tag name (e.g. Programming)")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("tag name cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        let value: String = Input::with_theme(&self.theme)
            .with_prompt("Tag value (e.g. programming)")
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("tag value cannot be empty")
                } else {
                    Ok(())
                }
            })
            .interact_text()?;

        Ok((name, value))
    }

    /// Comma-separated aliases; empty input means no aliases.
    pub fn aliases(&self) -> Result<String> {
        Ok(Input::with_theme(&self.theme)
            .with_prompt("Aliases (comma-separated, e.g. go notes,programming)")
            .allow_empty(true)
            .interact_text()?)
    }
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}
