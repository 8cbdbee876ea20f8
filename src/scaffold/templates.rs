//! Templates for every generated artifact.
//!
//! Each function builds a reusable [`Template`]. Slots reference the
//! property-bag paths documented in `props`; the `feature_filename`
//! computed slot derives the normalized stem from `feature.name` so
//! cross-file references (test -> fixture) stay consistent.

use crate::filename::filename_stem;
use crate::template::{resolve_path, stringify, Template};
use serde_json::Value;

/// Computed slot: normalized filename stem of `feature.name`.
fn feature_filename(bag: &Value) -> String {
    filename_stem(&stringify(resolve_path(bag, "feature.name")))
}

/// Shared file-header template: a description line plus copyright.
fn header(lead: &str) -> Template {
    Template::new("/**\n * ")
        .text(lead)
        .text("\n *\n * @copyright ")
        .path("meta.year")
        .text(" ")
        .path("pkg.name")
        .text(" contributors. All rights reserved. MIT license.\n */\n")
}

// ============================================================================
// Manifest and root-level files
// ============================================================================

/// Default manifest contents. Rendered only with default property values,
/// so the output is always valid JSON.
pub fn manifest_defaults() -> Template {
    Template::new("{\n  \"name\": \"")
        .path("pkg.name")
        .text("\",\n  \"description\": \"")
        .path("pkg.description")
        .text("\",\n  \"version\": \"")
        .path("pkg.version")
        .text("\",\n  \"status\": \"")
        .path("pkg.status")
        .text(
            r#"",
  "lint": {
    "rules": {
      "tags": ["recommended"]
    }
  },
  "fmt": {
    "options": {
      "indentWidth": 2,
      "lineWidth": 80,
      "useTabs": false,
      "singleQuote": false
    }
  },
  "tasks": {
    "init": "repokit init",
    "add-feature": "repokit add-feature",
    "add-exception": "repokit add-exception",
    "bump-version": "repokit bump-version",
    "commit": "repokit commit"
  }
}
"#,
        )
}

pub fn license() -> Template {
    Template::new("MIT License\n\nCopyright (c) ")
        .path("meta.year")
        .text(" ")
        .path("pkg.name")
        .text(" contributors")
        .text(
            r#"

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in
all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
THE SOFTWARE.
"#,
        )
}

pub fn readme() -> Template {
    Template::new("# ")
        .path("pkg.name")
        .text("\n\n")
        .path("pkg.description")
        .text("\n\n- **Version:** ")
        .path("pkg.version")
        .text("\n- **Status:** ")
        .path("pkg.status")
        .text("\n- **Scaffolded:** ")
        .path("meta.date")
        .text(
            r#"

## Usage

See the package entry point in `mod.ts`.

## Contributing

See [CONTRIBUTING.md](./CONTRIBUTING.md).
"#,
        )
}

pub fn contributing() -> Template {
    Template::new("# Contributing to ")
        .path("pkg.name")
        .text(
            r#"

Thank you for contributing!

- Run the pre-commit task before opening a pull request.
- Keep commits in the conventional format; the `commit` task assists.
- New features and exceptions are scaffolded with the `add-feature` and
  `add-exception` tasks so files land in the expected locations.
"#,
        )
}

pub fn root_mod() -> Template {
    Template::new("/**\n * This file exports the public API features of the ")
        .path("pkg.name")
        .text(" package.\n *\n * @copyright ")
        .path("meta.year")
        .text(" ")
        .path("pkg.name")
        .text(" contributors. All rights reserved. MIT license.\n */\n")
        .text("\nexport * from \"./src/mod.ts\";\n")
}

pub fn deps_ts() -> Template {
    header("External dependencies of this package, re-exported from one location.")
        .text("\n//  Add dependency re-exports here.\n")
}

pub fn dev_deps_ts() -> Template {
    header("Development-only dependencies (test runner, assertions).")
        .text("\n//  Add development dependency re-exports here.\n")
}

// ============================================================================
// src/ skeleton
// ============================================================================

pub fn src_mod() -> Template {
    header("This file exports the package features.")
        .text("\nexport * from \"./constants.ts\";\nexport * from \"./types/mod.ts\";\nexport * from \"./version.ts\";\n")
}

pub fn src_constants() -> Template {
    header("Package-level constants.").text("\n//  Add package constants here.\n")
}

pub fn src_version() -> Template {
    Template::new("/**\n * The current release version of the ")
        .path("pkg.name")
        .text(" package.\n *\n * @copyright ")
        .path("meta.year")
        .text(" ")
        .path("pkg.name")
        .text(" contributors. All rights reserved. MIT license.\n */\n")
        .text("\nexport const VERSION = \"")
        .path("pkg.version")
        .text("\";\n")
}

pub fn src_internals_mod() -> Template {
    header("This file exports internal features, for use within the package only.")
}

pub fn src_internals_constants() -> Template {
    header("Internal constants, for use within the package only.")
        .text("\n//  Add internal constants here.\n")
}

pub fn src_exceptions_mod() -> Template {
    header("This file exports the package exceptions.")
}

pub fn src_types_mod() -> Template {
    header("This file exports the package types.").text(
        "\nexport * from \"./enums.ts\";\nexport * from \"./interfaces.ts\";\nexport * from \"./types.ts\";\n",
    )
}

pub fn src_types_enums() -> Template {
    header("Enums used across the package.").text("\n//  Add enums here.\n")
}

pub fn src_types_interfaces() -> Template {
    header("Interfaces used across the package.").text("\n//  Add interfaces here.\n")
}

pub fn src_types_types() -> Template {
    header("Type aliases used across the package.").text("\n//  Add type aliases here.\n")
}

// ============================================================================
// Feature artifacts
// ============================================================================

/// Header for a public feature file.
pub fn src_feature() -> Template {
    Template::new("/**\n * This file exports the ")
        .path("feature.name")
        .text(" ")
        .path("feature.type")
        .text(" and related features.\n *\n * @copyright ")
        .path("meta.year")
        .text(" ")
        .path("pkg.name")
        .text(" contributors. All rights reserved. MIT license.\n */\n")
}

/// Header for an internal feature file.
pub fn src_internals_feature() -> Template {
    Template::new("/**\n * This file exports the internal ")
        .path("feature.name")
        .text(" ")
        .path("feature.type")
        .text(" and related features.\n *\n * @copyright ")
        .path("meta.year")
        .text(" ")
        .path("pkg.name")
        .text(" contributors. All rights reserved. MIT license.\n */\n")
}

pub fn class_feature() -> Template {
    Template::new("/**\n * ")
        .path("feature.description")
        .text("\n *\n * TODO: Implement ")
        .path("feature.name")
        .text(" and update documentation.\n */\nexport class ")
        .path("feature.name")
        .text(" {\n  constructor() {\n    //  TODO: Implement ")
        .path("feature.name")
        .text(".\n  }\n}\n")
}

pub fn func_feature() -> Template {
    Template::new("/**\n * ")
        .path("feature.description")
        .text("\n *\n * TODO: Implement ")
        .path("feature.name")
        .text(" and update documentation.\n */\nexport function ")
        .path("feature.name")
        .text("() {\n  //  TODO: Implement ")
        .path("feature.name")
        .text(".\n}\n")
}

pub fn decorator_feature() -> Template {
    Template::new("/**\n * ")
        .path("feature.description")
        .text("\n *\n * TODO: Implement the ")
        .path("feature.name")
        .text(" decorator and update documentation.\n */\nexport function ")
        .path("feature.name")
        .text(
            "(target: unknown, context: unknown) {\n  //  TODO: Implement ",
        )
        .path("feature.name")
        .text(".\n}\n")
}

/// Re-export entry appended to a module index file.
pub fn mod_entry() -> Template {
    Template::new("\n//  Export feature ")
        .path("feature.name")
        .text(" and related features.\nexport * from \"./")
        .computed(feature_filename)
        .text(".ts\";\n")
}

/// Re-export entry appended to the exceptions index file.
pub fn exceptions_mod_entry() -> Template {
    Template::new("\n//  Export exception ")
        .path("feature.name")
        .text(" and related features.\nexport * from \"./")
        .computed(feature_filename)
        .text(".ts\";\n")
}

// ============================================================================
// Exception artifact
// ============================================================================

pub fn src_exceptions_exception() -> Template {
    Template::new("/**\n * This file exports the ")
        .path("feature.name")
        .text(" exception and related features.\n *\n * @copyright ")
        .path("meta.year")
        .text(" ")
        .path("pkg.name")
        .text(
            " contributors. All rights reserved. MIT license.\n */\n\n//  Import base exception\nimport { Exception } from \"../../deps.ts\";\n\n/**\n * The default message for the ",
        )
        .path("feature.name")
        .text(" exception.\n */\nconst DEFAULT_MESSAGE = \"")
        .path("exception.message")
        .text("\";\n\n/**\n * ")
        .path("feature.description")
        .text("\n */\nexport class ")
        .path("feature.name")
        .text(" extends Exception {\n  constructor(message: string = DEFAULT_MESSAGE) {\n    super(message);\n  }\n\n  /**\n   * The exception code for the ")
        .path("feature.name")
        .text(" exception.\n   */\n  public code: number = ")
        .path("exception.code")
        .text(";\n}\n")
}

// ============================================================================
// Test artifacts
// ============================================================================

pub fn tests_feature() -> Template {
    Template::new("/**\n * This file contains tests for the ")
        .path("feature.name")
        .text(" feature.\n *\n * @copyright ")
        .path("meta.year")
        .text(" ")
        .path("pkg.name")
        .text(
            " contributors. All rights reserved. MIT license.\n */\n\n//  Import test suite and assertions\nimport { describe, it, unimplemented } from \"../dev_deps.ts\";\n\n//  Import test cases, fixtures, stubs, and/or mocks.\nimport { ",
        )
        .path("feature.name")
        .text("Fixture } from \"./fixtures/")
        .computed(feature_filename)
        .text(".fixture.ts\";\n\ndescribe(\"")
        .path("feature.name")
        .text(
            "\", () => {\n  it(\"should have an implemented test\", () => {\n    unimplemented();\n  });\n});\n",
        )
}

pub fn tests_fixture() -> Template {
    Template::new(
        "/**\n * This file contains test cases, mocks, or other data for testing the\n * ",
    )
    .path("feature.name")
    .text(" feature.\n *\n * For use in ../")
    .computed(feature_filename)
    .text(".test.ts.\n *\n * @copyright ")
    .path("meta.year")
    .text(" ")
    .path("pkg.name")
    .text(
        " contributors. All rights reserved. MIT license.\n */\n\n//  Re-export features, stubs, mocks, and/or fixtures.\nexport const ",
    )
    .path("feature.name")
    .text("Fixture = {};\n")
}
