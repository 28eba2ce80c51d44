//! Project root discovery and path normalization.
//!
//! The classifier consumes project-relative, forward-slash paths. This module
//! bridges between whatever the user typed on the command line and that form,
//! and resolves chosen candidates back to absolute paths.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Walk upward from `start` looking for a `.git` marker.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Project root for the current invocation: the enclosing repository root, or
/// the working directory when there is none.
pub fn project_root() -> Result<PathBuf> {
    let cwd = env::current_dir().context("unable to determine working directory")?;
    Ok(find_project_root(&cwd).unwrap_or(cwd))
}

/// Normalize user input to the project-relative, forward-slash form the
/// classifier expects. Absolute paths are stripped of the root prefix;
/// relative paths are taken as already project-relative.
pub fn to_project_relative(root: &Path, input: &str) -> String {
    let path = Path::new(input);
    let relative = if path.is_absolute() {
        path.strip_prefix(root).unwrap_or(path).to_path_buf()
    } else {
        path.to_path_buf()
    };

    let mut display = relative.display().to_string().replace('\\', "/");
    while let Some(stripped) = display.strip_prefix("./") {
        display = stripped.to_owned();
    }
    display
}

/// Resolve a project-relative candidate path against the project root.
pub fn resolve(root: &Path, relative: &str) -> PathBuf {
    root.join(relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_root_by_git_marker() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let root = temp.path().join("repo");
        fs::create_dir_all(root.join(".git"))?;
        fs::create_dir_all(root.join("app/components"))?;

        let found = find_project_root(&root.join("app/components"));
        assert_eq!(found, Some(root));
        Ok(())
    }

    #[test]
    fn no_marker_yields_none() -> Result<()> {
        let temp = tempfile::tempdir()?;
        // Temp dirs can live under a repo checkout; only assert when the
        // environment is actually marker-free.
        if find_project_root(temp.path()).is_none() {
            assert_eq!(find_project_root(&temp.path().join("deep")), None);
        }
        Ok(())
    }

    #[test]
    fn strips_the_root_from_absolute_input() {
        let root = Path::new("/work/my-app");
        let input = "/work/my-app/app/components/widget.js";
        assert_eq!(
            to_project_relative(root, input),
            "app/components/widget.js"
        );
    }

    #[test]
    fn keeps_relative_input_as_given() {
        let root = Path::new("/work/my-app");
        assert_eq!(
            to_project_relative(root, "app/routes/users/edit.js"),
            "app/routes/users/edit.js"
        );
    }

    #[test]
    fn normalizes_separators_and_leading_dot() {
        let root = Path::new("/work/my-app");
        assert_eq!(
            to_project_relative(root, "./app/templates/widget.hbs"),
            "app/templates/widget.hbs"
        );
        assert_eq!(
            to_project_relative(root, "app\\components\\widget.js"),
            "app/components/widget.js"
        );
    }

    #[test]
    fn resolves_candidates_against_the_root() {
        let root = Path::new("/work/my-app");
        assert_eq!(
            resolve(root, "app/templates/components/widget.hbs"),
            PathBuf::from("/work/my-app/app/templates/components/widget.hbs")
        );
    }
}
