//! The `bump-version` task: increment the package version.
//!
//! The version lives in two places: the manifest and the `VERSION`
//! constant in generated `src/version.ts`. Both are rewritten; the
//! manifest first, so a failure on the source file leaves the manifest
//! already bumped. Re-running the task is the recovery path.

use crate::console::{Console, Input};
use crate::context::TaskContext;
use crate::error::{RepokitError, Result};
use crate::fs;
use crate::manifest::Manifest;
use crate::permissions::{check_permissions, Permission};
use crate::version::{self, Bump};
use regex::Regex;
use std::sync::LazyLock;

const PERMISSIONS: &[Permission] = &[Permission::Read, Permission::Write];

static BUMP_SELECTOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[Mmp]$").expect("valid regex"));

pub fn run<I: Input>(console: &mut Console<I>, ctx: &TaskContext) -> Result<()> {
    let mut manifest = Manifest::require(&ctx.root)?;
    console.describe("Bump the package version.");
    check_permissions(console, PERMISSIONS)?;

    console.describe("Version components: M = major, m = minor, p = patch.");
    let selector = console.prompt_matching("Version component", &BUMP_SELECTOR, "version component")?;
    let bump = super::require_code(Bump::from_selector(&selector), "version component")?;

    let new_version = version::apply(&manifest.version, bump)?;
    console.info(&format!(
        "Bumping version from {} to {}.",
        manifest.version, new_version
    ));

    manifest.version = new_version.clone();
    manifest.save(&ctx.root)?;

    let version_path = ctx.root.join("src").join("version.ts");
    let content = std::fs::read_to_string(&version_path).map_err(|e| {
        RepokitError::UserError(format!(
            "failed to read '{}': {}",
            version_path.display(),
            e
        ))
    })?;

    match version::rewrite_version_constant(&content, &new_version) {
        Some(updated) => fs::write_file(&version_path, &updated)?,
        None => console.warn(&format!(
            "No VERSION constant found in {}; left unchanged.",
            version_path.display()
        )),
    }

    console.done(&format!("Version bumped to {}.", new_version));
    console.describe(&format!(
        "Commit the change and tag it with 'v{}' (the commit task can do both).",
        new_version
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init;
    use crate::console::ScriptedInput;
    use crate::exit_codes;
    use crate::test_support::create_test_repo_with_remote;
    use tempfile::TempDir;

    fn console(responses: &[&str]) -> Console<ScriptedInput> {
        Console::new("VBUMP", 0, ScriptedInput::new(responses.iter().copied()))
    }

    fn initialized_repo(version: &str) -> (TempDir, TaskContext) {
        let temp_dir = create_test_repo_with_remote();
        let ctx = TaskContext::at(temp_dir.path(), false);
        init::run(
            &mut Console::new(
                "INIT",
                0,
                ScriptedInput::new(["y", "widget", "", version, "n", "n"]),
            ),
            &ctx,
        )
        .unwrap();
        (temp_dir, ctx)
    }

    #[test]
    fn patch_bump_updates_manifest_and_version_constant() {
        let (_temp_dir, ctx) = initialized_repo("1.4.9");
        let mut console = console(&["y", "p"]);

        run(&mut console, &ctx).unwrap();

        let manifest = Manifest::load(&ctx.root).unwrap();
        assert_eq!(manifest.version, "1.4.10");

        let version_ts = std::fs::read_to_string(ctx.root.join("src/version.ts")).unwrap();
        assert!(version_ts.contains("export const VERSION = \"1.4.10\";"));
    }

    #[test]
    fn major_bump_resets_minor_and_patch() {
        let (_temp_dir, ctx) = initialized_repo("1.4.9");
        let mut console = console(&["y", "M"]);

        run(&mut console, &ctx).unwrap();

        assert_eq!(Manifest::load(&ctx.root).unwrap().version, "2.0.0");
    }

    #[test]
    fn minor_bump_resets_patch() {
        let (_temp_dir, ctx) = initialized_repo("1.4.9");
        let mut console = console(&["y", "m"]);

        run(&mut console, &ctx).unwrap();

        assert_eq!(Manifest::load(&ctx.root).unwrap().version, "1.5.0");
    }

    #[test]
    fn invalid_selector_is_retried() {
        let (_temp_dir, ctx) = initialized_repo("0.0.1");
        let mut console = console(&["y", "x", "P", "p"]);

        run(&mut console, &ctx).unwrap();

        assert_eq!(Manifest::load(&ctx.root).unwrap().version, "0.0.2");
    }

    #[test]
    fn missing_version_file_fails_after_the_manifest_is_bumped() {
        // The two writes are not transactional: the manifest keeps its new
        // version even though the source rewrite failed.
        let (_temp_dir, ctx) = initialized_repo("0.0.1");
        std::fs::remove_file(ctx.root.join("src/version.ts")).unwrap();
        let mut console = console(&["y", "p"]);

        let err = run(&mut console, &ctx).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(Manifest::load(&ctx.root).unwrap().version, "0.0.2");
    }

    #[test]
    fn version_file_without_constant_is_left_unchanged() {
        let (_temp_dir, ctx) = initialized_repo("0.0.1");
        std::fs::write(ctx.root.join("src/version.ts"), "// hand-rolled\n").unwrap();
        let mut console = console(&["y", "p"]);

        run(&mut console, &ctx).unwrap();

        assert_eq!(
            std::fs::read_to_string(ctx.root.join("src/version.ts")).unwrap(),
            "// hand-rolled\n"
        );
        assert_eq!(Manifest::load(&ctx.root).unwrap().version, "0.0.2");
    }

    #[test]
    fn malformed_manifest_version_is_a_user_error() {
        let (_temp_dir, ctx) = initialized_repo("0.0.1");
        let mut manifest = Manifest::load(&ctx.root).unwrap();
        manifest.version = "not-a-version".to_string();
        manifest.save(&ctx.root).unwrap();
        let mut console = console(&["y", "p"]);

        let err = run(&mut console, &ctx).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn missing_manifest_is_a_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = TaskContext::at(temp_dir.path(), false);
        let mut console = console(&["y", "p"]);

        let err = run(&mut console, &ctx).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }
}
