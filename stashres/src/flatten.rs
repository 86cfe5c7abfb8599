//! Flattens a nested locale catalog into (path, leaf-value) pairs.
//!
//! The walk is depth-first in the catalog's own key order (`serde_json` is
//! built with `preserve_order`, so that is document order). Each key segment
//! has its hyphens normalized to underscores before it is appended to the
//! path; the final resource key is the `_`-joined path.

use serde_json::{Map, Value};

/// Fixed first segment of every resource key.
pub const ROOT_SEGMENT: &str = "stashapp";

/// One terminal value of a catalog, addressed by its normalized path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEntry {
    /// Normalized path segments, root segment first.
    pub path: Vec<String>,
    /// The leaf rendered as text. Strings are taken verbatim; other JSON
    /// leaves (numbers, booleans, null) keep their JSON textual form.
    pub value: String,
}

impl FlatEntry {
    /// The `_`-joined resource key for this entry.
    pub fn key(&self) -> String {
        self.path.join("_")
    }
}

/// Walks `map` depth-first and returns one entry per non-object leaf,
/// with every path starting at `root`.
pub fn flatten(map: &Map<String, Value>, root: &str) -> Vec<FlatEntry> {
    let mut entries = Vec::new();
    walk(map, vec![root.to_string()], &mut entries);
    entries
}

fn walk(map: &Map<String, Value>, path: Vec<String>, out: &mut Vec<FlatEntry>) {
    for (key, value) in map {
        let segment = key.replace('-', "_");
        // A fresh path vector per child; the accumulator is never shared.
        let mut child_path = path.clone();
        child_path.push(segment);
        match value {
            Value::Object(nested) => walk(nested, child_path, out),
            Value::String(s) => out.push(FlatEntry {
                path: child_path,
                value: s.clone(),
            }),
            other => out.push(FlatEntry {
                path: child_path,
                value: other.to_string(),
            }),
        }
    }
}
