//! Error types for the repokit CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for repokit operations.
///
/// Each task is a process entry point, so errors are not handed back to a
/// caller for recovery; they propagate to `main`, which maps each variant
/// to one of the documented exit codes.
#[derive(Error, Debug)]
pub enum RepokitError {
    /// Invalid state, I/O failure, or missing manifest.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The operator denied the permissions a task requires.
    #[error("Permissions denied.")]
    PermissionDenied,

    /// Interactive input could not be satisfied (input source exhausted
    /// while a field was still invalid).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The operator declined an overwrite or a commit confirmation.
    #[error("{0}")]
    Declined(String),
}

impl RepokitError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RepokitError::UserError(_) => exit_codes::USER_ERROR,
            RepokitError::GitError(_) => exit_codes::GIT_FAILURE,
            RepokitError::PermissionDenied => exit_codes::PERMISSION_DENIED,
            RepokitError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            RepokitError::Declined(_) => exit_codes::DECLINED,
        }
    }
}

/// Result type alias for repokit operations.
pub type Result<T> = std::result::Result<T, RepokitError>;
