//! Manifest loading, saving, and merge operations.

use super::jsonc::strip_comments;
use super::model::Manifest;
use crate::error::{RepokitError, Result};
use crate::fs::atomic_write_file;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Manifest file name, fixed relative to the target root.
pub const MANIFEST_FILE: &str = "deno.jsonc";

impl Manifest {
    /// Path of the manifest under a target root.
    pub fn path_in<P: AsRef<Path>>(root: P) -> PathBuf {
        root.as_ref().join(MANIFEST_FILE)
    }

    /// Whether a manifest exists under the target root.
    pub fn exists_in<P: AsRef<Path>>(root: P) -> bool {
        Self::path_in(root).is_file()
    }

    /// Load the manifest from the target root.
    ///
    /// Comments are stripped before parsing. Unknown keys land in `extra`.
    pub fn load<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = Self::path_in(root);

        let content = std::fs::read_to_string(&path).map_err(|e| {
            RepokitError::UserError(format!(
                "failed to read manifest '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_json::from_str(&strip_comments(&content)).map_err(|e| {
            RepokitError::UserError(format!(
                "failed to parse manifest '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Load the manifest if present, or `None` if the file is absent.
    pub fn load_if_exists<P: AsRef<Path>>(root: P) -> Result<Option<Self>> {
        if Self::exists_in(&root) {
            Ok(Some(Self::load(root)?))
        } else {
            Ok(None)
        }
    }

    /// Require a manifest: precondition for every task except `init`.
    pub fn require<P: AsRef<Path>>(root: P) -> Result<Self> {
        if !Self::exists_in(&root) {
            return Err(RepokitError::UserError(
                "Manifest does not exist. Please initialize a project first.".to_string(),
            ));
        }
        Self::load(root)
    }

    /// Write the manifest atomically under the target root.
    pub fn save<P: AsRef<Path>>(&self, root: P) -> Result<()> {
        let path = Self::path_in(root);
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            RepokitError::UserError(format!("failed to serialize manifest: {}", e))
        })?;
        atomic_write_file(&path, &format!("{}\n", json))
    }

    /// Convert to a raw JSON value, e.g. for merging.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self)
            .map_err(|e| RepokitError::UserError(format!("failed to serialize manifest: {}", e)))
    }

    /// Build a manifest from a raw JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| RepokitError::UserError(format!("failed to read manifest data: {}", e)))
    }
}

/// Shallow-merge freshly generated defaults with an existing manifest.
///
/// Every key present in `existing` wins; defaults only fill gaps. Opaque
/// sections (lint, fmt, tasks, ...) pass through from whichever side
/// defines them, existing first.
pub fn merge_defaults(defaults: &Value, existing: &Value) -> Value {
    match (defaults, existing) {
        (Value::Object(d), Value::Object(e)) => {
            let mut merged = d.clone();
            for (key, value) in e {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        // A non-object existing manifest is taken as-is.
        (_, other) => other.clone(),
    }
}
