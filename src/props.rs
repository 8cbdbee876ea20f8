//! Typed property bags supplied to templates at render time.
//!
//! Templates resolve dotted paths against a `serde_json::Value` tree, but
//! workflows assemble that tree from these typed structs so every field is
//! spelled once, at a call site the compiler can see. Three shapes recur:
//! package, feature (package + feature fields), and exception (feature +
//! exception fields).

use crate::error::{RepokitError, Result};
use crate::manifest::Manifest;
use chrono::{Datelike, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

/// Generation-time metadata stamped into file headers.
#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub year: String,
    pub date: String,
}

impl Meta {
    /// Capture the current year and RFC 3339 timestamp.
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            year: now.year().to_string(),
            date: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Package identity fields, sourced from the manifest.
#[derive(Debug, Clone, Serialize)]
pub struct Pkg {
    pub name: String,
    pub description: String,
    pub version: String,
    pub status: String,
}

impl Pkg {
    pub fn from_manifest(manifest: &Manifest) -> Self {
        Self {
            name: manifest.name.clone(),
            description: manifest.description.clone(),
            version: manifest.version.clone(),
            status: manifest.status.to_string(),
        }
    }
}

/// Properties for package-level templates (manifest, readme, entry points).
#[derive(Debug, Clone, Serialize)]
pub struct PackageProps {
    pub pkg: Pkg,
    pub meta: Meta,
}

impl PackageProps {
    pub fn new(pkg: Pkg) -> Self {
        Self {
            pkg,
            meta: Meta::now(),
        }
    }

    pub fn bag(&self) -> Result<Value> {
        to_bag(self)
    }
}

/// Feature fields collected by the add-feature task.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub name: String,
    /// Kind label stamped into file headers: `class`, `function`,
    /// `decorator`, or `exception`.
    pub r#type: String,
    pub description: String,
}

/// Properties for feature templates: package props plus feature fields.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureProps {
    #[serde(flatten)]
    pub package: PackageProps,
    pub feature: Feature,
}

impl FeatureProps {
    pub fn new(pkg: Pkg, feature: Feature) -> Self {
        Self {
            package: PackageProps::new(pkg),
            feature,
        }
    }

    pub fn bag(&self) -> Result<Value> {
        to_bag(self)
    }
}

/// Exception fields collected by the add-exception task.
#[derive(Debug, Clone, Serialize)]
pub struct ExceptionInfo {
    pub message: String,
    /// Decimal text of the numeric exception code.
    pub code: String,
}

/// Properties for exception templates: feature props plus exception fields.
#[derive(Debug, Clone, Serialize)]
pub struct ExceptionProps {
    #[serde(flatten)]
    pub feature: FeatureProps,
    pub exception: ExceptionInfo,
}

impl ExceptionProps {
    pub fn new(pkg: Pkg, feature: Feature, exception: ExceptionInfo) -> Self {
        Self {
            feature: FeatureProps::new(pkg, feature),
            exception,
        }
    }

    pub fn bag(&self) -> Result<Value> {
        to_bag(self)
    }
}

fn to_bag<T: Serialize>(props: &T) -> Result<Value> {
    serde_json::to_value(props)
        .map_err(|e| RepokitError::UserError(format!("failed to build property bag: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{resolve_path, stringify};

    fn sample_pkg() -> Pkg {
        Pkg {
            name: "widget".to_string(),
            description: "A widget".to_string(),
            version: "0.0.1".to_string(),
            status: "unstable".to_string(),
        }
    }

    #[test]
    fn package_bag_exposes_pkg_and_meta_paths() {
        let bag = PackageProps::new(sample_pkg()).bag().unwrap();
        assert_eq!(stringify(resolve_path(&bag, "pkg.name")), "widget");
        assert_eq!(stringify(resolve_path(&bag, "pkg.version")), "0.0.1");
        // Year is a 4-digit string, not a number.
        let year = stringify(resolve_path(&bag, "meta.year"));
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn feature_bag_extends_package_bag() {
        let feature = Feature {
            name: "MyCustomClass".to_string(),
            r#type: "class".to_string(),
            description: "Does things".to_string(),
        };
        let bag = FeatureProps::new(sample_pkg(), feature).bag().unwrap();
        assert_eq!(stringify(resolve_path(&bag, "pkg.name")), "widget");
        assert_eq!(
            stringify(resolve_path(&bag, "feature.name")),
            "MyCustomClass"
        );
        assert_eq!(stringify(resolve_path(&bag, "feature.type")), "class");
    }

    #[test]
    fn exception_bag_extends_feature_bag() {
        let feature = Feature {
            name: "MyCustomException".to_string(),
            r#type: "exception".to_string(),
            description: "Raised on misuse".to_string(),
        };
        let exception = ExceptionInfo {
            message: "Something went wrong.".to_string(),
            code: "42".to_string(),
        };
        let bag = ExceptionProps::new(sample_pkg(), feature, exception)
            .bag()
            .unwrap();
        assert_eq!(stringify(resolve_path(&bag, "exception.code")), "42");
        assert_eq!(
            stringify(resolve_path(&bag, "exception.message")),
            "Something went wrong."
        );
        assert_eq!(
            stringify(resolve_path(&bag, "feature.name")),
            "MyCustomException"
        );
    }
}
