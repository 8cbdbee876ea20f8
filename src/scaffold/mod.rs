//! File scaffolding: which files get generated where, and from what.
//!
//! `templates` holds one template per generated artifact. This module maps
//! them onto the fixed relative paths of the generated tree and assembles
//! composite contents (a feature file is a header template plus a
//! kind-specific body template, selected by the calling workflow).

pub mod templates;


use crate::template::Template;

/// Directories created under the target root by `init`.
pub const FOLDERS: &[&str] = &[
    "src",
    "src/_internals",
    "src/exceptions",
    "src/types",
    "tests",
    "tests/fixtures",
];

/// Suffix convention for generated test fixtures.
pub const FIXTURE_SUFFIX: &str = ".fixture.ts";

/// Relative path and template for every file `init` generates.
///
/// Existing files are never touched by `init`; the map is applied
/// create-if-absent.
pub fn init_file_map() -> Vec<(&'static str, Template)> {
    vec![
        ("src/_internals/mod.ts", templates::src_internals_mod()),
        (
            "src/_internals/constants.ts",
            templates::src_internals_constants(),
        ),
        ("src/exceptions/mod.ts", templates::src_exceptions_mod()),
        ("src/mod.ts", templates::src_mod()),
        ("src/constants.ts", templates::src_constants()),
        ("src/types/enums.ts", templates::src_types_enums()),
        ("src/types/interfaces.ts", templates::src_types_interfaces()),
        ("src/types/types.ts", templates::src_types_types()),
        ("src/types/mod.ts", templates::src_types_mod()),
        ("src/version.ts", templates::src_version()),
        ("deps.ts", templates::deps_ts()),
        ("dev_deps.ts", templates::dev_deps_ts()),
        ("mod.ts", templates::root_mod()),
        ("LICENSE", templates::license()),
        ("README.md", templates::readme()),
        ("CONTRIBUTING.md", templates::contributing()),
    ]
}

/// Kind of feature artifact being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    Class,
    Function,
    Decorator,
}

impl FeatureKind {
    /// Parse the one-letter code used at the prompt: `c`, `f`, or `d`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "c" => Some(FeatureKind::Class),
            "f" => Some(FeatureKind::Function),
            "d" => Some(FeatureKind::Decorator),
            _ => None,
        }
    }

    /// The one-letter code accepted at the prompt.
    pub fn code(&self) -> &'static str {
        match self {
            FeatureKind::Class => "c",
            FeatureKind::Function => "f",
            FeatureKind::Decorator => "d",
        }
    }

    /// Full-word label stamped into generated file headers.
    pub fn label(&self) -> &'static str {
        match self {
            FeatureKind::Class => "class",
            FeatureKind::Function => "function",
            FeatureKind::Decorator => "decorator",
        }
    }

    /// Naming-rule hint shown before the name prompt.
    pub fn name_hint(&self) -> &'static str {
        match self {
            FeatureKind::Class => {
                "A class name must be PascalCase and contain only letters. (e.g. 'MyCustomClass')"
            }
            FeatureKind::Function => {
                "A function name must be camelCase and contain only letters. (e.g. 'myCustomFunction')"
            }
            FeatureKind::Decorator => {
                "A decorator name must be camelCase and contain only letters. (e.g. 'myCustomDecorator')"
            }
        }
    }

    /// Name validation pattern: PascalCase for classes, camelCase otherwise.
    pub fn name_pattern(&self) -> &'static str {
        match self {
            FeatureKind::Class => r"^[A-Z][a-zA-Z]+$",
            FeatureKind::Function | FeatureKind::Decorator => r"^[a-z][a-zA-Z]+$",
        }
    }

    /// Body template for this kind.
    pub fn body_template(&self) -> Template {
        match self {
            FeatureKind::Class => templates::class_feature(),
            FeatureKind::Function => templates::func_feature(),
            FeatureKind::Decorator => templates::decorator_feature(),
        }
    }
}
