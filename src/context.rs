//! Task context: where a workflow reads and writes.

use crate::error::{RepokitError, Result};
use std::path::{Path, PathBuf};

/// Directory all task operations are isolated to when `--testing` is set.
pub const TESTING_SUBDIR: &str = "repo-test";

/// Resolved target root for one task invocation.
///
/// All file reads and writes of a task happen under `root`; git commands
/// run in the working directory the tool was launched from.
#[derive(Debug, Clone)]
pub struct TaskContext {
    /// The directory the tool was launched from.
    pub cwd: PathBuf,
    /// The directory files are generated into. Equal to `cwd`, or
    /// `cwd/repo-test` when testing mode redirects operations.
    pub root: PathBuf,
}

impl TaskContext {
    /// Resolve the context from the process working directory.
    pub fn resolve(testing: bool) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            RepokitError::UserError(format!("failed to determine working directory: {}", e))
        })?;
        Ok(Self::at(cwd, testing))
    }

    /// Build a context rooted at an explicit directory. Used by tests.
    pub fn at<P: AsRef<Path>>(cwd: P, testing: bool) -> Self {
        let cwd = cwd.as_ref().to_path_buf();
        let root = if testing {
            cwd.join(TESTING_SUBDIR)
        } else {
            cwd.clone()
        };
        Self { cwd, root }
    }
}
