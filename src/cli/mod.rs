//! CLI argument parsing for repokit.
//!
//! Uses clap derive macros for declarative argument definitions. This
//! module defines the command structure; actual implementations are in
//! the `commands` module.

use clap::{Parser, Subcommand};

/// Repokit: interactive scaffolding toolkit for package repositories.
///
/// Five independent tasks share two global flags: `--testing` redirects
/// all file operations into an isolated `repo-test/` subdirectory, and
/// `--log-level` (0-5) gates which message severities print.
#[derive(Parser, Debug)]
#[command(name = "repokit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Redirect file operations into the `repo-test/` subdirectory.
    #[arg(short = 't', long, global = true)]
    pub testing: bool,

    /// Log level: 0 silent, 1 errors/warnings, 2 +log, 3 +info (default),
    /// 4 +debug, 5 +trace.
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        default_value_t = 3,
        value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available workflow tasks.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize a repository with the package scaffold.
    ///
    /// Creates the manifest, directory structure, and boilerplate files.
    /// Existing files are never overwritten.
    Init,

    /// Add a feature (class, function, or decorator) to the package.
    ///
    /// Generates the feature file, appends a re-export to the module
    /// index, and creates companion test and fixture files.
    AddFeature,

    /// Add an exception to the package.
    ///
    /// Generates the exception file under `src/exceptions/`, appends a
    /// re-export to the exceptions index, and creates companion test and
    /// fixture files.
    AddException,

    /// Bump the package version (major, minor, or patch).
    ///
    /// Rewrites the manifest and the duplicated version constant in
    /// generated source.
    BumpVersion,

    /// Compose a conventional commit message and optionally commit.
    ///
    /// Collects type, scope, descriptions, and issue IDs; can tag the
    /// commit with the current manifest version.
    Commit,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
