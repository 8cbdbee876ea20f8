//! Manifest struct definition and defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Release status of the package.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Stable,
    #[default]
    Unstable,
    Deprecated,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Stable => "stable",
            Status::Unstable => "unstable",
            Status::Deprecated => "deprecated",
        };
        f.write_str(s)
    }
}

impl Status {
    /// Resolve status from the two init confirmations. Stable wins over
    /// deprecated; neither means unstable.
    pub fn from_confirmations(stable: bool, deprecated: bool) -> Self {
        if stable {
            Status::Stable
        } else if deprecated {
            Status::Deprecated
        } else {
            Status::Unstable
        }
    }
}

/// Contents of the package manifest (`deno.jsonc`).
///
/// Unknown top-level keys are captured in `extra` so lint/fmt/task
/// configuration survives a read-modify-write cycle untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_version")]
    pub version: String,

    #[serde(default)]
    pub status: Status,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            version: default_version(),
            status: Status::default(),
            extra: BTreeMap::new(),
        }
    }
}

fn default_version() -> String {
    "0.0.1".to_string()
}
