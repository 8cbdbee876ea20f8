//! Exit code constants for the repokit CLI.
//!
//! Every task terminates through one of these codes:
//! - 0: Success
//! - 1: User error (bad state, I/O failure, missing manifest)
//! - 3: Git operation failure
//! - 10: Permission denied by the operator
//! - 11: Invalid interactive input (input source exhausted)
//! - 12: Operator declined an overwrite or a commit

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: invalid state, I/O failure, or missing manifest.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: remote inspection, tag, or commit errors.
pub const GIT_FAILURE: i32 = 3;

/// The operator denied the permissions a task requires.
pub const PERMISSION_DENIED: i32 = 10;

/// Interactive input was invalid and the input source ran out.
pub const INVALID_INPUT: i32 = 11;

/// The operator declined an overwrite or a commit confirmation.
pub const DECLINED: i32 = 12;
