//! The `commit` task: compose a conventional commit and run it.
//!
//! Collects type, optional scope, a breaking-change flag, description
//! lines (first line is the title, the rest the body), and issue IDs;
//! optionally tags the commit with the current manifest version. Every
//! git failure prints the manual fallback command before the task exits.

use crate::console::{Console, Input};
use crate::context::TaskContext;
use crate::error::{RepokitError, Result};
use crate::git;
use crate::manifest::Manifest;
use crate::permissions::{check_permissions, Permission};
use regex::Regex;
use std::sync::LazyLock;

const PERMISSIONS: &[Permission] = &[Permission::Read, Permission::RunGit];

/// Commit types in the conventional format, keyed by a one-letter code.
const COMMIT_TYPES: &[(&str, &str, &str)] = &[
    ("f", "feat", "A new feature"),
    ("x", "fix", "A bug fix"),
    ("d", "docs", "Documentation changes"),
    ("s", "style", "Formatting changes that do not affect meaning"),
    ("r", "refactor", "A change that neither fixes a bug nor adds a feature"),
    ("p", "perf", "A performance improvement"),
    ("t", "test", "Adding or correcting tests"),
    ("c", "chore", "Build process or tooling changes"),
];

static TYPE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[fxdsrptc]$").expect("valid regex"));

pub fn run<I: Input>(console: &mut Console<I>, ctx: &TaskContext) -> Result<()> {
    let manifest = Manifest::require(&ctx.root)?;
    console.describe("Compose a conventional commit.");
    check_permissions(console, PERMISSIONS)?;

    for (code, name, explanation) in COMMIT_TYPES {
        console.describe(&format!("  {} = {}: {}", code, name, explanation));
    }
    let code = console.prompt_matching("Commit type", &TYPE_CODE, "commit type")?;
    let type_name = super::require_code(type_for_code(&code), "commit type")?;

    let scope = console.prompt("Commit scope (blank for none)")?.unwrap_or_default();
    let breaking = console.prompt_yes_no("Is this a breaking change? (y/n)")?;

    console.describe(
        "Enter description lines; the first is the commit title, the rest the body. A blank line finishes.",
    );
    let descriptions = console.prompt_lines("Description")?;
    if descriptions.is_empty() {
        console.error("At least one description line is required.");
        return Err(RepokitError::InvalidInput("commit description".to_string()));
    }

    console.describe("Enter related issue IDs, one per line. A blank line finishes.");
    let issues = console.prompt_lines("Issue ID")?;

    if console.prompt_yes_no(&format!(
        "Tag this commit with v{}? (y/n)",
        manifest.version
    ))? {
        if let Err(e) = git::tag_version(&ctx.cwd, &manifest.version) {
            console.error(&format!("Failed to tag with v{}.", manifest.version));
            console.log(&format!(
                "Tag manually with:\n\n\tgit tag v{}",
                manifest.version
            ));
            return Err(e);
        }
        console.info(&format!("Tagged with v{}.", manifest.version));
    }

    let message = build_message(type_name, &scope, breaking, &descriptions, &issues);
    console.info(&format!("Commit message:\n\n{}\n", message));

    if !console.prompt_yes_no("Commit with this message? (y/n)")? {
        console.error("Commit aborted.");
        console.log(&format!(
            "Commit manually with:\n\n\tgit commit -a -m \"{}\"",
            message
        ));
        return Err(RepokitError::Declined("Commit aborted.".to_string()));
    }

    if let Err(e) = git::commit_all(&ctx.cwd, &message) {
        console.error("Commit failed.");
        console.log(&format!(
            "Commit manually with:\n\n\tgit commit -a -m \"{}\"",
            message
        ));
        return Err(e);
    }

    console.done("Changes committed.");
    Ok(())
}

fn type_for_code(code: &str) -> Option<&'static str> {
    COMMIT_TYPES
        .iter()
        .find(|(c, _, _)| *c == code)
        .map(|(_, name, _)| *name)
}

/// Assemble the conventional commit message.
///
/// `<type>(<scope>)!: <title>` on the first line, body lines after, and a
/// trailing `Refs:` line when issue IDs were given.
fn build_message(
    type_name: &str,
    scope: &str,
    breaking: bool,
    descriptions: &[String],
    issues: &[String],
) -> String {
    let mut message = String::from(type_name);

    if !scope.is_empty() {
        message.push_str(&format!("({})", scope));
    }
    if breaking {
        message.push('!');
    }
    message.push_str(": ");
    message.push_str(&descriptions[0]);

    for line in &descriptions[1..] {
        message.push('\n');
        message.push_str(line);
    }

    if !issues.is_empty() {
        let refs = issues
            .iter()
            .map(|id| format!("#{}", id))
            .collect::<Vec<_>>()
            .join(",");
        message.push_str(&format!("\n\nRefs: {}", refs));
    }

    message
}
