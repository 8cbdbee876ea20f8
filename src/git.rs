//! Git command runner for repokit.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling. All git operations go through this module.
//! Failures map to [`RepokitError::GitError`] (exit code 3); the calling
//! task prints a manual fallback command where one exists.

use crate::error::{RepokitError, Result};
use regex::Regex;
use std::path::Path;
use std::process::{Command, Output};
use std::sync::LazyLock;

/// `org/repo.git` at the end of a remote URL, for both HTTPS and SSH forms.
static REMOTE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([\w\-]+)/([\w\-]+)\.git").expect("valid regex"));

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns the first stdout line, if any.
    pub fn first_line(&self) -> Option<&str> {
        self.stdout.lines().next()
    }
}

/// Run a git command with the specified working directory.
///
/// Returns `Ok(GitOutput)` on exit code 0, and a `GitError` carrying the
/// command's stderr (or stdout when stderr is empty) otherwise.
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            RepokitError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(RepokitError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Derive the organization and repository name from the first configured
/// remote, by parsing the `org/repo.git` tail of its URL.
pub fn repo_details<P: AsRef<Path>>(cwd: P) -> Result<(String, String)> {
    let output = run_git(cwd, &["remote", "-v"])?;

    let line = output.first_line().ok_or_else(|| {
        RepokitError::GitError(
            "no git remote configured. Add one with: git remote add origin <url>".to_string(),
        )
    })?;

    let caps = REMOTE_URL.captures(line).ok_or_else(|| {
        RepokitError::GitError(format!(
            "could not parse org/repo from remote line '{}'",
            line
        ))
    })?;

    Ok((caps[1].to_string(), caps[2].to_string()))
}

/// Create a lightweight tag named `v<version>`.
pub fn tag_version<P: AsRef<Path>>(cwd: P, version: &str) -> Result<()> {
    run_git(cwd, &["tag", &format!("v{}", version)])?;
    Ok(())
}

/// Commit all tracked changes with the given message.
pub fn commit_all<P: AsRef<Path>>(cwd: P, message: &str) -> Result<()> {
    run_git(cwd, &["commit", "-a", "-m", message])?;
    Ok(())
}
