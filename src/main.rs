//! repokit: interactive scaffolding toolkit for package repositories.
//!
//! Five workflow tasks (init, add-feature, add-exception, bump-version,
//! commit) maintain a `deno.jsonc` manifest, a generated source tree, and
//! a conventional commit history. Each task asks for permission before it
//! touches anything, and every failure maps to a documented exit code.

mod cli;
mod commands;
mod console;
mod context;
mod error;
mod exit_codes;
mod filename;
mod fs;
mod git;
mod manifest;
mod permissions;
mod props;
mod scaffold;
mod template;
mod version;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
