//! Editor launching for picked files.

use std::env;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, anyhow};

use crate::infra::config::Config;

/// Resolved editor invocation: program plus leading arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorCommand {
    program: String,
    args: Vec<String>,
}

impl EditorCommand {
    /// Resolve the editor from config, then `$VISUAL`, then `$EDITOR`.
    pub fn resolve(config: &Config) -> Option<Self> {
        let candidates = [
            Some(config.defaults.editor.clone()),
            env::var("VISUAL").ok(),
            env::var("EDITOR").ok(),
        ];

        candidates
            .into_iter()
            .flatten()
            .find_map(|raw| Self::parse(&raw))
    }

    fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split_whitespace().map(str::to_owned);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Launch the editor on `path` and wait for it to exit.
    pub fn open(&self, path: &Path) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch editor: {}", self.program))?;

        if status.success() {
            Ok(())
        } else {
            Err(anyhow!("editor exited with status {status}"))
        }
    }
}

/// Open `path` with the configured editor, failing when none is available.
pub fn open_in_editor(config: &Config, path: &Path) -> Result<()> {
    let command = EditorCommand::resolve(config)
        .ok_or_else(|| anyhow!("no editor configured; set defaults.editor or $EDITOR"))?;
    tracing::debug!(program = %command.program, path = %path.display(), "opening editor");
    command.open(path)
}
