// crates/coldnote-cli/src/services/editor.rs - Editor launch
//
// Launches the configured editor on the created note, inheriting the
// terminal's stdio and blocking until it exits. By the time this runs the
// note is already on disk, so editor trouble is reported as a warning and
// never fails the run.

use anyhow::{Context as AnyhowContext, Result};
use coldnote_core::EditorPreference;
use console::style;
use std::path::Path;
use std::process::Command;
use tracing::warn;

pub struct EditorService;

impl EditorService {
    /// Open `path` with the preferred editor and wait for it to exit.
    ///
    /// COMMAND TABLE:
    /// - nvim:     nvim "+ normal ggzzi" <path>
    /// - nvim-zen: nvim "+ normal ggzzi" <path> -c :ZenMode
    /// - vscode:   code <path>
    ///
    /// The nvim forms jump to the top of the file and enter insert mode,
    /// ready to write under the fresh front matter.
    pub fn launch(preference: EditorPreference, path: &Path) -> Result<()> {
        println!(
            "{}",
            style(format!("Opening note with {}", Self::describe(preference)))
                .magenta()
                .bold()
        );

        let status = Self::command_for(preference, path)
            .status()
            .with_context(|| format!("failed to launch {}", Self::describe(preference)))?;

        if !status.success() {
            warn!(
                "editor exited with {:?}; the note was already created",
                status.code()
            );
        }

        Ok(())
    }

    fn command_for(preference: EditorPreference, path: &Path) -> Command {
        match preference {
            EditorPreference::Nvim => {
                let mut cmd = Command::new("nvim");
                cmd.arg("+ normal ggzzi").arg(path);
                cmd
            }
            EditorPreference::NvimZen => {
                let mut cmd = Command::new("nvim");
                cmd.arg("+ normal ggzzi").arg(path).arg("-c").arg(":ZenMode");
                cmd
            }
            EditorPreference::Vscode => {
                let mut cmd = Command::new("code");
                cmd.arg(path);
                cmd
            }
        }
    }

    fn describe(preference: EditorPreference) -> &'static str {
        match preference {
            EditorPreference::Nvim => "Neovim",
            EditorPreference::NvimZen => "Neovim (ZenMode)",
            EditorPreference::Vscode => "VSCode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn argv(cmd: &Command) -> Vec<&OsStr> {
        cmd.get_args().collect()
    }

    #[test]
    fn nvim_command_positions_cursor() {
        let cmd = EditorService::command_for(EditorPreference::Nvim, Path::new("/v/n.md"));
        assert_eq!(cmd.get_program(), "nvim");
        assert_eq!(argv(&cmd), ["+ normal ggzzi", "/v/n.md"]);
    }

    #[test]
    fn nvim_zen_command_appends_zen_mode() {
        let cmd = EditorService::command_for(EditorPreference::NvimZen, Path::new("/v/n.md"));
        assert_eq!(cmd.get_program(), "nvim");
        assert_eq!(argv(&cmd), ["+ normal ggzzi", "/v/n.md", "-c", ":ZenMode"]);
    }

    #[test]
    fn vscode_command_takes_only_the_path() {
        let cmd = EditorService::command_for(EditorPreference::Vscode, Path::new("/v/n.md"));
        assert_eq!(cmd.get_program(), "code");
        assert_eq!(argv(&cmd), ["/v/n.md"]);
    }
}
