//! The `add-feature` task: generate a class, function, or decorator.
//!
//! Collects the feature kind, a name validated against the kind's naming
//! rule, and a description; writes the feature file (internal features go
//! under `src/_internals/`), appends a re-export to the directory index,
//! and creates companion test and fixture files.

use super::write_artifact;
use crate::console::{Console, Input};
use crate::context::TaskContext;
use crate::error::{RepokitError, Result};
use crate::filename::filename_stem;
use crate::manifest::Manifest;
use crate::permissions::{check_permissions, Permission};
use crate::props::{Feature, FeatureProps, Pkg};
use crate::scaffold::{templates, FeatureKind};
use regex::Regex;
use std::sync::LazyLock;

const PERMISSIONS: &[Permission] = &[Permission::Read, Permission::Write];

static KIND_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[cfd]$").expect("valid regex"));

pub fn run<I: Input>(console: &mut Console<I>, ctx: &TaskContext) -> Result<()> {
    let manifest = Manifest::require(&ctx.root)?;
    console.describe("Add a feature to the package.");
    check_permissions(console, PERMISSIONS)?;

    console.describe("Feature types: c = class, f = function, d = decorator.");
    let code = console.prompt_matching("Feature type", &KIND_CODE, "feature type")?;
    let kind = super::require_code(FeatureKind::from_code(&code), "feature type")?;

    console.describe(kind.name_hint());
    let name_pattern = Regex::new(kind.name_pattern())
        .map_err(|e| RepokitError::UserError(format!("invalid name pattern: {}", e)))?;
    let name = console.prompt_matching("Feature name", &name_pattern, "feature name")?;
    let description = console.prompt_non_empty("Feature description", "feature description")?;
    let internal = console.prompt_yes_no("Is this feature internal to the package? (y/n)")?;

    let props = FeatureProps::new(
        Pkg::from_manifest(&manifest),
        Feature {
            name: name.clone(),
            r#type: kind.label().to_string(),
            description,
        },
    );
    let bag = props.bag()?;

    let header = if internal {
        templates::src_internals_feature()
    } else {
        templates::src_feature()
    };
    let content = format!(
        "{}\n{}",
        header.render(&bag),
        kind.body_template().render(&bag)
    );

    let dir = if internal {
        ctx.root.join("src").join("_internals")
    } else {
        ctx.root.join("src")
    };

    write_artifact(
        console,
        ctx,
        &dir,
        &filename_stem(&name),
        &name,
        &content,
        &templates::mod_entry().render(&bag),
        &templates::tests_feature().render(&bag),
        &templates::tests_fixture().render(&bag),
    )?;

    console.describe("Review the generated feature and resolve its TODO items.");
    Ok(())
}
