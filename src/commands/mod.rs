//! Workflow task implementations.
//!
//! Each subcommand maps to one task module. Tasks take a [`Console`] (so
//! tests can script the interaction) and a [`TaskContext`] (so testing
//! mode can redirect writes); `dispatch` wires both up from the parsed
//! CLI arguments.
//!
//! Tasks are not transactional: a failure partway through leaves the
//! files already written in place, and re-running the task is the
//! recovery path.

mod add_exception;
mod add_feature;
mod bump_version;
mod commit;
mod init;

use crate::cli::{Cli, Command};
use crate::console::{Console, Input, StdinInput};
use crate::context::TaskContext;
use crate::error::{RepokitError, Result};
use crate::fs;
use crate::scaffold::FIXTURE_SUFFIX;
use std::path::Path;

/// Resolve the context and run the selected task against standard input.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = TaskContext::resolve(cli.testing)?;
    let level = cli.log_level;

    match cli.command {
        Command::Init => init::run(&mut Console::new("INIT", level, StdinInput), &ctx),
        Command::AddFeature => add_feature::run(&mut Console::new("FEAT", level, StdinInput), &ctx),
        Command::AddException => {
            add_exception::run(&mut Console::new("EXC", level, StdinInput), &ctx)
        }
        Command::BumpVersion => {
            bump_version::run(&mut Console::new("VBUMP", level, StdinInput), &ctx)
        }
        Command::Commit => commit::run(&mut Console::new("COMMIT", level, StdinInput), &ctx),
    }
}

/// Write one generated artifact plus its bookkeeping: the source file, a
/// re-export appended to the directory's `mod.ts`, and companion test and
/// fixture files under `tests/`.
///
/// If the source file already exists the operator is asked before it is
/// replaced; refusing aborts the task with exit code 12. The module index
/// append is skipped on overwrite so re-exports are not duplicated.
fn write_artifact<I: Input>(
    console: &mut Console<I>,
    ctx: &TaskContext,
    dir: &Path,
    stem: &str,
    name: &str,
    content: &str,
    index_entry: &str,
    test_content: &str,
    fixture_content: &str,
) -> Result<()> {
    let file_path = dir.join(format!("{}.ts", stem));
    let overwriting = file_path.exists();

    if overwriting {
        console.warn(&format!("{} already exists.", file_path.display()));
        if !console.prompt_yes_no("Overwrite? (y/n)")? {
            console.error(&format!("{} not created.", name));
            return Err(RepokitError::Declined(format!("{} not created.", name)));
        }
    }

    console.debug(&format!("Writing {}.", file_path.display()));
    fs::write_file(&file_path, content)?;

    if !overwriting {
        let index_path = dir.join("mod.ts");
        console.debug(&format!("Appending re-export to {}.", index_path.display()));
        fs::append_file(&index_path, index_entry)?;
    }

    let test_path = ctx.root.join("tests").join(format!("{}.test.ts", stem));
    let fixture_path = ctx
        .root
        .join("tests")
        .join("fixtures")
        .join(format!("{}{}", stem, FIXTURE_SUFFIX));

    console.debug(&format!("Writing {}.", test_path.display()));
    fs::write_file(&test_path, test_content)?;
    console.debug(&format!("Writing {}.", fixture_path.display()));
    fs::write_file(&fixture_path, fixture_content)?;

    console.done(&format!("{} created at {}.", name, file_path.display()));
    Ok(())
}

/// Resolve a prompt code against a template's validation guarantee.
///
/// `prompt_matching` only returns strings the pattern accepted, so a
/// failed lookup here is a programming error in the pattern, reported as
/// invalid input rather than a panic.
fn require_code<T>(parsed: Option<T>, field: &str) -> Result<T> {
    parsed.ok_or_else(|| RepokitError::InvalidInput(field.to_string()))
}
