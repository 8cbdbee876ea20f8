//! Filename normalization for generated artifacts.
//!
//! Converts a mixed-case identifier (e.g. `MyCustomException`) into a
//! lowercase, underscore-delimited filename stem (`my_custom_exception`).
//! The transformation is idempotent on its own output: a name already in
//! `snake_case` passes through unchanged.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Boundary between a lowercase letter and a following uppercase run.
static LOWER_TO_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z]+)").expect("valid regex"));

/// A trailing run of uppercase letters followed only by non-alphanumerics.
static TRAILING_UPPER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z]+)([^a-zA-Z0-9]*)$").expect("valid regex"));

/// Boundary between an uppercase run and a following `Upper+lower` pair.
static UPPER_RUN_TO_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").expect("valid regex"));

/// Runs of non-word characters (anything but letters, digits, `_`).
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-z_]+").expect("valid regex"));

/// Insert word boundaries into a mixed-case identifier.
fn split_caps(name: &str) -> String {
    let pass1 = LOWER_TO_UPPER.replace_all(name, "$1 $2");
    let pass2 = TRAILING_UPPER_RUN.replace(&pass1, |caps: &Captures| {
        format!("{}{}{}", &caps[1], caps[2].to_lowercase(), &caps[3])
    });
    UPPER_RUN_TO_WORD
        .replace_all(&pass2, |caps: &Captures| {
            format!("{} {}", caps[1].to_lowercase(), &caps[2])
        })
        .into_owned()
}

/// Split on spaces and on the zero-width boundary before any uppercase
/// letter, dropping empty words.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_ascii_uppercase() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.push(ch);
        } else {
            current.push(ch);
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Produce a filesystem-safe stem from an identifier.
///
/// `MyCustomException` becomes `my_custom_exception`, `myCustomFunction`
/// becomes `my_custom_function`, and `HTTPClient` becomes `http_client`.
pub fn filename_stem(name: &str) -> String {
    let spaced = split_caps(name);
    let spaced = NON_WORD.replace_all(&spaced, " ");

    split_words(&spaced)
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
