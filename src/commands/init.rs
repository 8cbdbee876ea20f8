//! The `init` task: scaffold a package repository.
//!
//! Builds defaults (repository name from the git remote when one exists),
//! merges them with any existing manifest so a re-run never clobbers
//! operator data, confirms the identity fields interactively, then writes
//! the manifest, the directory tree, and every boilerplate file that does
//! not already exist.

use crate::console::{Console, Input};
use crate::context::TaskContext;
use crate::error::{RepokitError, Result};
use crate::fs;
use crate::git;
use crate::manifest::{merge_defaults, Manifest, Status};
use crate::permissions::{check_permissions, Permission};
use crate::props::{PackageProps, Pkg};
use crate::scaffold::{init_file_map, templates, FOLDERS};
use serde_json::Value;

const PERMISSIONS: &[Permission] = &[Permission::Read, Permission::Write, Permission::RunGit];

pub fn run<I: Input>(console: &mut Console<I>, ctx: &TaskContext) -> Result<()> {
    console.describe("Initialize a package repository.");
    check_permissions(console, PERMISSIONS)?;

    console.debug(&format!("Target root: {}", ctx.root.display()));

    // The repository name seeds the default package name. A missing or
    // unparseable remote is not fatal; the operator types a name instead.
    let repo_name = match git::repo_details(&ctx.cwd) {
        Ok((org, repo)) => {
            console.debug(&format!("Detected repository {}/{}.", org, repo));
            repo
        }
        Err(e) => {
            console.warn(&format!("Could not detect repository name: {}", e));
            String::new()
        }
    };

    let mut manifest = load_merged_manifest(ctx, &repo_name)?;
    if manifest.name.is_empty() {
        manifest.name = repo_name;
    }

    manifest.name = console.prompt_default("Package name", &manifest.name.clone())?;
    manifest.description =
        console.prompt_default("Package description", &manifest.description.clone())?;
    manifest.version = console.prompt_default("Package version", &manifest.version.clone())?;

    let stable = console.prompt_yes_no("Is this package stable? (y/n)")?;
    let deprecated = console.prompt_yes_no("Is this package deprecated? (y/n)")?;
    manifest.status = Status::from_confirmations(stable, deprecated);

    manifest.save(&ctx.root)?;
    console.info(&format!(
        "Manifest written for {} v{} ({}).",
        manifest.name, manifest.version, manifest.status
    ));

    for folder in FOLDERS {
        let dir = ctx.root.join(folder);
        console.debug(&format!("Creating {}.", dir.display()));
        std::fs::create_dir_all(&dir).map_err(|e| {
            RepokitError::UserError(format!("failed to create '{}': {}", dir.display(), e))
        })?;
    }

    let bag = PackageProps::new(Pkg::from_manifest(&manifest)).bag()?;
    for (relative, template) in init_file_map() {
        let target = ctx.root.join(relative);
        if target.exists() {
            console.debug(&format!("Skipping existing {}.", target.display()));
            continue;
        }
        console.debug(&format!("Writing {}.", target.display()));
        fs::write_file(&target, &template.render(&bag))?;
    }

    console.done("Package scaffolding complete.");
    Ok(())
}

/// Render the default manifest, then shallow-merge an existing manifest
/// over it so operator-set values always win.
fn load_merged_manifest(ctx: &TaskContext, repo_name: &str) -> Result<Manifest> {
    let default_pkg = Pkg {
        name: repo_name.to_string(),
        description: String::new(),
        version: "0.0.1".to_string(),
        status: Status::default().to_string(),
    };
    let rendered = templates::manifest_defaults().render(&PackageProps::new(default_pkg).bag()?);
    let defaults: Value = serde_json::from_str(&rendered)
        .map_err(|e| RepokitError::UserError(format!("failed to build manifest defaults: {}", e)))?;

    let merged = match Manifest::load_if_exists(&ctx.root)? {
        Some(existing) => merge_defaults(&defaults, &existing.to_value()?),
        None => defaults,
    };
    Manifest::from_value(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedInput;
    use crate::exit_codes;
    use crate::manifest::MANIFEST_FILE;
    use crate::test_support::{create_test_repo, create_test_repo_with_remote};
    use std::path::Path;

    fn console(responses: &[&str]) -> Console<ScriptedInput> {
        Console::new("INIT", 0, ScriptedInput::new(responses.iter().copied()))
    }

    fn assert_scaffold_files(root: &Path) {
        for relative in [
            "src/mod.ts",
            "src/constants.ts",
            "src/version.ts",
            "src/_internals/mod.ts",
            "src/_internals/constants.ts",
            "src/exceptions/mod.ts",
            "src/types/mod.ts",
            "src/types/enums.ts",
            "src/types/interfaces.ts",
            "src/types/types.ts",
            "deps.ts",
            "dev_deps.ts",
            "mod.ts",
            "LICENSE",
            "README.md",
            "CONTRIBUTING.md",
        ] {
            assert!(root.join(relative).is_file(), "missing {relative}");
        }
        assert!(root.join("tests").is_dir());
        assert!(root.join("tests/fixtures").is_dir());
    }

    #[test]
    fn init_scaffolds_a_fresh_repository() {
        let temp_dir = create_test_repo_with_remote();
        let ctx = TaskContext::at(temp_dir.path(), false);
        // permissions, name, description, version (default), stable, deprecated
        let mut console = console(&["y", "widget", "A widget package", "", "n", "n"]);

        run(&mut console, &ctx).unwrap();

        let manifest = Manifest::load(&ctx.root).unwrap();
        assert_eq!(manifest.name, "widget");
        assert_eq!(manifest.description, "A widget package");
        assert_eq!(manifest.version, "0.0.1");
        assert_eq!(manifest.status, Status::Unstable);
        assert_scaffold_files(&ctx.root);
    }

    #[test]
    fn init_stamps_the_version_constant() {
        let temp_dir = create_test_repo_with_remote();
        let ctx = TaskContext::at(temp_dir.path(), false);
        let mut console = console(&["y", "widget", "", "1.2.3", "y", "n"]);

        run(&mut console, &ctx).unwrap();

        let version_ts = std::fs::read_to_string(ctx.root.join("src/version.ts")).unwrap();
        assert!(version_ts.contains("export const VERSION = \"1.2.3\";"));
    }

    #[test]
    fn init_defaults_name_from_the_remote() {
        let temp_dir = create_test_repo_with_remote();
        let ctx = TaskContext::at(temp_dir.path(), false);
        // Blank name response selects the remote-derived default.
        let mut console = console(&["y", "", "", "", "n", "n"]);

        run(&mut console, &ctx).unwrap();

        let manifest = Manifest::load(&ctx.root).unwrap();
        assert_eq!(manifest.name, "test-repo");
    }

    #[test]
    fn init_without_a_remote_still_succeeds() {
        let temp_dir = create_test_repo();
        let ctx = TaskContext::at(temp_dir.path(), false);
        let mut console = console(&["y", "manual-name", "", "", "n", "n"]);

        run(&mut console, &ctx).unwrap();

        let manifest = Manifest::load(&ctx.root).unwrap();
        assert_eq!(manifest.name, "manual-name");
    }

    #[test]
    fn init_is_idempotent_and_never_overwrites_files() {
        let temp_dir = create_test_repo_with_remote();
        let ctx = TaskContext::at(temp_dir.path(), false);

        run(&mut console(&["y", "widget", "", "", "n", "n"]), &ctx).unwrap();

        // Operator edits survive a re-run.
        let entry = ctx.root.join("src/mod.ts");
        std::fs::write(&entry, "// edited by hand\n").unwrap();

        run(&mut console(&["y", "", "", "", "n", "n"]), &ctx).unwrap();

        assert_eq!(
            std::fs::read_to_string(&entry).unwrap(),
            "// edited by hand\n"
        );
        let manifest = Manifest::load(&ctx.root).unwrap();
        assert_eq!(manifest.name, "widget");
    }

    #[test]
    fn init_preserves_existing_manifest_sections() {
        let temp_dir = create_test_repo_with_remote();
        let ctx = TaskContext::at(temp_dir.path(), false);
        std::fs::write(
            ctx.root.join(MANIFEST_FILE),
            "{\n  // custom config\n  \"name\": \"kept\",\n  \"custom\": { \"key\": 1 }\n}\n",
        )
        .unwrap();

        run(&mut console(&["y", "", "", "", "n", "n"]), &ctx).unwrap();

        let manifest = Manifest::load(&ctx.root).unwrap();
        assert_eq!(manifest.name, "kept");
        assert!(manifest.extra.contains_key("custom"));
        // Defaults fill the gaps the existing manifest left open.
        assert!(manifest.extra.contains_key("tasks"));
    }

    #[test]
    fn init_in_testing_mode_writes_under_repo_test() {
        let temp_dir = create_test_repo_with_remote();
        let ctx = TaskContext::at(temp_dir.path(), true);
        let mut console = console(&["y", "widget", "", "", "n", "n"]);

        run(&mut console, &ctx).unwrap();

        assert!(temp_dir.path().join("repo-test").join(MANIFEST_FILE).is_file());
        assert!(!temp_dir.path().join(MANIFEST_FILE).exists());
    }

    #[test]
    fn init_status_from_confirmations() {
        let temp_dir = create_test_repo_with_remote();
        let ctx = TaskContext::at(temp_dir.path(), false);
        let mut console = console(&["y", "widget", "", "", "y", "y"]);

        run(&mut console, &ctx).unwrap();

        // Stable wins when both confirmations are answered yes.
        let manifest = Manifest::load(&ctx.root).unwrap();
        assert_eq!(manifest.status, Status::Stable);
    }

    #[test]
    fn init_denied_permissions_exit_code_10() {
        let temp_dir = create_test_repo_with_remote();
        let ctx = TaskContext::at(temp_dir.path(), false);
        let mut console = console(&["n"]);

        let err = run(&mut console, &ctx).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::PERMISSION_DENIED);
        assert!(!Manifest::exists_in(&ctx.root));
    }
}
