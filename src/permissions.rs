//! Permission confirmation for workflow tasks.
//!
//! Each task declares what it is about to touch and asks the operator to
//! confirm before doing anything. Denial is fatal for the whole process
//! (exit code 10); there is no partial grant.

use crate::console::{Console, Input};
use crate::error::{RepokitError, Result};
use std::fmt;

/// A capability a task needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Read files under the target root.
    Read,
    /// Write files under the target root.
    Write,
    /// Run `git` commands.
    RunGit,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Permission::Read => "read",
            Permission::Write => "write",
            Permission::RunGit => "run git",
        };
        f.write_str(s)
    }
}

/// Ask the operator to grant the listed permissions.
///
/// Returns `Ok(())` on grant and `PermissionDenied` otherwise, after
/// reporting the denial on the console.
pub fn check_permissions<I: Input>(
    console: &mut Console<I>,
    permissions: &[Permission],
) -> Result<()> {
    let listed = permissions
        .iter()
        .map(Permission::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    let granted = console.prompt_yes_no(&format!("This task requires: {}. Allow? (y/n)", listed))?;

    if granted {
        console.info("Permissions accepted.");
        Ok(())
    } else {
        console.error("Permissions denied.");
        Err(RepokitError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedInput;
    use crate::exit_codes;

    fn console(responses: &[&str]) -> Console<ScriptedInput> {
        Console::new("TEST", 0, ScriptedInput::new(responses.iter().copied()))
    }

    #[test]
    fn grant_allows_the_task() {
        let mut console = console(&["y"]);
        let result = check_permissions(&mut console, &[Permission::Read, Permission::Write]);
        assert!(result.is_ok());
    }

    #[test]
    fn denial_is_fatal_with_exit_code_10() {
        let mut console = console(&["n"]);
        let err =
            check_permissions(&mut console, &[Permission::RunGit]).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::PERMISSION_DENIED);
    }

    #[test]
    fn exhausted_input_counts_as_denial() {
        let mut console = console(&[]);
        let err = check_permissions(&mut console, &[Permission::Write]).unwrap_err();
        assert!(matches!(err, RepokitError::PermissionDenied));
    }
}
