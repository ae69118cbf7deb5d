//! Repository root resolution through git.

use std::env;
use std::path::PathBuf;
use std::process::Command;
use tracing::debug;

use crate::errors::WorkspaceError;

/// Ask git for the top-level directory of the current working tree.
pub fn git_toplevel() -> Result<PathBuf, WorkspaceError> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| WorkspaceError::GitUnavailable(e.to_string()))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(WorkspaceError::NotARepository(stderr.trim().to_string()));
    }

    parse_toplevel(&String::from_utf8_lossy(&output.stdout))
}

/// Turn `git rev-parse --show-toplevel` output into a path.
pub fn parse_toplevel(stdout: &str) -> Result<PathBuf, WorkspaceError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(WorkspaceError::NotARepository(
            "git reported an empty top-level directory".to_string(),
        ));
    }
    Ok(PathBuf::from(trimmed))
}

/// Resolve the repository root and make it the working directory.
pub fn enter_repository_root() -> Result<PathBuf, WorkspaceError> {
    let root = git_toplevel()?;
    env::set_current_dir(&root).map_err(|e| WorkspaceError::EnterFailed {
        path: root.display().to_string(),
        reason: e.to_string(),
    })?;
    debug!(root = %root.display(), "entered repository root");
    Ok(root)
}
