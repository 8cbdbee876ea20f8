//! Semantic version parsing and bump arithmetic.

use crate::error::{RepokitError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// The `VERSION` constant line stamped into generated `src/version.ts`.
static VERSION_CONSTANT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"export const VERSION = "[0-9]+\.[0-9]+\.[0-9]+";"#).expect("valid regex")
});

/// Which component of `MAJOR.MINOR.PATCH` to bump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bump {
    Major,
    Minor,
    Patch,
}

impl Bump {
    /// Parse the one-letter selector used by the bump-version prompt:
    /// `M` major, `m` minor, `p` patch.
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "M" => Some(Bump::Major),
            "m" => Some(Bump::Minor),
            "p" => Some(Bump::Patch),
            _ => None,
        }
    }
}

/// Parse a `MAJOR.MINOR.PATCH` string into its numeric components.
pub fn parse(version: &str) -> Result<(u64, u64, u64)> {
    let mut parts = version.split('.');
    let mut next = |label: &str| -> Result<u64> {
        parts
            .next()
            .and_then(|p| p.parse().ok())
            .ok_or_else(|| {
                RepokitError::UserError(format!(
                    "invalid version '{}': missing or non-numeric {} component",
                    version, label
                ))
            })
    };

    let major = next("major")?;
    let minor = next("minor")?;
    let patch = next("patch")?;

    if parts.next().is_some() {
        return Err(RepokitError::UserError(format!(
            "invalid version '{}': expected MAJOR.MINOR.PATCH",
            version
        )));
    }

    Ok((major, minor, patch))
}

/// Apply a bump to a version string.
///
/// Major resets minor and patch; minor resets patch.
pub fn apply(version: &str, bump: Bump) -> Result<String> {
    let (major, minor, patch) = parse(version)?;
    let bumped = match bump {
        Bump::Major => format!("{}.0.0", major + 1),
        Bump::Minor => format!("{}.{}.0", major, minor + 1),
        Bump::Patch => format!("{}.{}.{}", major, minor, patch + 1),
    };
    Ok(bumped)
}

/// Rewrite the duplicated `VERSION` constant in generated source.
///
/// Returns the updated content, or `None` if no constant line was found.
pub fn rewrite_version_constant(content: &str, new_version: &str) -> Option<String> {
    if !VERSION_CONSTANT.is_match(content) {
        return None;
    }
    let replacement = format!(r#"export const VERSION = "{}";"#, new_version);
    Some(
        VERSION_CONSTANT
            .replace(content, replacement.as_str())
            .into_owned(),
    )
}
