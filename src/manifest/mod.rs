//! Package manifest persistence.
//!
//! The manifest (`deno.jsonc`) is the single source of truth for package
//! identity: name, description, semantic version, and release status. It
//! also carries tool-specific sections (lint, fmt, tasks) that repokit
//! treats as opaque pass-through data and preserves across merges.
//!
//! Lifecycle: created by `init` if absent; read and selectively merged
//! (existing values win over freshly generated defaults) on every task
//! invocation; rewritten whenever version or metadata changes. Generated
//! files derive their headers from it at generation time only and are not
//! regenerated when it changes.

mod jsonc;
mod model;
mod operations;


pub use jsonc::strip_comments;
pub use model::{Manifest, Status};
pub use operations::{merge_defaults, MANIFEST_FILE};
