//! Flat-substitution template engine over a nested property bag.
//!
//! A template is an ordered alternation of literal fragments and
//! interpolation slots; a slot is either a dotted path resolved against the
//! property bag at render time, or a computed function of the whole bag.
//! There are no loops or conditionals: any conditional logic belongs to the
//! calling workflow, which selects among whole templates before
//! concatenating their outputs.
//!
//! # Missing paths
//!
//! Resolution never fails. A path whose intermediate or terminal segment is
//! absent stringifies to the literal text `undefined` in the output. This is
//! a deliberate, tested behavior: a typo in a template shows up verbatim in
//! the generated file instead of aborting a half-finished scaffold.

use serde_json::Value;

/// Resolve a dotted path (e.g. `"feature.name"`) against a property bag.
///
/// Walks the bag by splitting the path on `.` and successively indexing.
/// Returns `None` if any segment is missing or a non-object is indexed.
/// Never errors; absence is represented, not signaled.
pub fn resolve_path<'a>(bag: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(bag, |value, key| value.get(key))
}

/// Stringify a resolved value the way it should appear in generated text.
///
/// Strings render without quotes, numbers and booleans as their decimal /
/// literal text, and a missing or null value as `undefined`.
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "undefined".to_string(),
        Some(other) => other.to_string(),
    }
}

/// One interpolation slot in a template.
pub enum Slot {
    /// A dotted path resolved against the property bag at render time.
    Path(&'static str),
    /// A pure function of the full property bag.
    Computed(fn(&Value) -> String),
}

/// A reusable renderer: literal fragments interleaved with slots.
///
/// Invariant: `fragments.len() == slots.len() + 1`. A template begins and
/// ends with a literal fragment, possibly empty. The builder methods
/// maintain this by construction.
pub struct Template {
    fragments: Vec<String>,
    slots: Vec<Slot>,
}

impl Template {
    /// Start a template with a leading literal fragment.
    pub fn new(lead: &str) -> Self {
        Self {
            fragments: vec![lead.to_string()],
            slots: Vec::new(),
        }
    }

    /// Append literal text to the current trailing fragment.
    pub fn text(mut self, text: &str) -> Self {
        // Safe: fragments is never empty by construction.
        if let Some(last) = self.fragments.last_mut() {
            last.push_str(text);
        }
        self
    }

    /// Append a path-reference slot.
    pub fn path(mut self, path: &'static str) -> Self {
        self.slots.push(Slot::Path(path));
        self.fragments.push(String::new());
        self
    }

    /// Append a computed slot.
    pub fn computed(mut self, f: fn(&Value) -> String) -> Self {
        self.slots.push(Slot::Computed(f));
        self.fragments.push(String::new());
        self
    }

    /// Number of interpolation slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of literal fragments (always `slot_count() + 1`).
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }

    /// Render the template against a property bag.
    ///
    /// Rendering is pure: the same bag always produces the same output.
    pub fn render(&self, bag: &Value) -> String {
        debug_assert_eq!(self.fragments.len(), self.slots.len() + 1);

        let mut out = String::new();
        for (fragment, slot) in self.fragments.iter().zip(&self.slots) {
            out.push_str(fragment);
            match slot {
                Slot::Path(path) => out.push_str(&stringify(resolve_path(bag, path))),
                Slot::Computed(f) => out.push_str(&f(bag)),
            }
        }
        // The trailing fragment.
        if let Some(last) = self.fragments.last() {
            out.push_str(last);
        }
        out
    }
}
