//! Converts one locale catalog file into one resource document.

use std::{
    collections::HashSet,
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde_json::{Map, Value};

use crate::{
    android::{StringResource, write_resources},
    error::Error,
    escape::escape_value,
    flatten::{ROOT_SEGMENT, flatten},
};

/// Outcome of converting one catalog file.
#[derive(Debug, Default)]
pub struct ConvertReport {
    /// Keys emitted into the destination document, in no particular order.
    pub written: HashSet<String>,
    /// Keys dropped because they were absent from the allow-list, in
    /// traversal order.
    pub skipped: Vec<String>,
}

/// Converts the JSON catalog at `source` into a resource document at `dest`.
///
/// When `allowed` is non-empty, keys absent from it are omitted from the
/// output and recorded in the report instead. The reference locale is
/// converted with an empty set, which accepts every key; its written set is
/// the allow-list for all other locales.
///
/// The destination's parent directories are created as needed and an
/// existing destination file is truncated. A malformed source or any I/O
/// failure aborts the conversion; a partially written destination may remain
/// and is rewritten by the next successful run.
pub fn convert_file(
    source: impl AsRef<Path>,
    dest: impl AsRef<Path>,
    allowed: &HashSet<String>,
) -> Result<ConvertReport, Error> {
    let file = File::open(source)?;
    let catalog: Map<String, Value> = serde_json::from_reader(BufReader::new(file))?;

    let dest = dest.as_ref();
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut report = ConvertReport::default();
    let mut strings = Vec::new();
    for entry in flatten(&catalog, ROOT_SEGMENT) {
        let key = entry.key();
        if !allowed.is_empty() && !allowed.contains(&key) {
            report.skipped.push(key);
            continue;
        }
        let escaped = escape_value(&entry.value);
        strings.push(StringResource {
            name: key.clone(),
            value: escaped.text,
            formatted: escaped.formatted,
        });
        report.written.insert(key);
    }

    let writer = BufWriter::new(File::create(dest)?);
    write_resources(&strings, writer)?;
    Ok(report)
}
