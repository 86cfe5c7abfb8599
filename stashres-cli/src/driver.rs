//! Orchestrates a full conversion run.
//!
//! Two phases with one ordering dependency: the reference locale is
//! converted first and its written key set becomes the allow-list that
//! restricts every other catalog in the source directory.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::glob;
use stashres::convert_file;

/// Filename stem of the reference locale catalog.
pub const REFERENCE_LOCALE: &str = "en-GB";
/// Name of every generated resource document.
const STRINGS_FILE: &str = "stash_strings.xml";

pub const DEFAULT_SOURCE_DIR: &str = "../stash-server/ui/v2.5/src/locales";
pub const DEFAULT_DEST_PREFIX: &str = "src/main/res/values";

/// Run configuration, constructed once at process start.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory holding one JSON catalog per locale.
    pub source_dir: String,
    /// Resource directory prefix; non-reference locales get a
    /// `-b+<tag>` suffix appended to its final component.
    pub dest_prefix: String,
    pub debug: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            source_dir: DEFAULT_SOURCE_DIR.to_string(),
            dest_prefix: DEFAULT_DEST_PREFIX.to_string(),
            debug: false,
        }
    }
}

/// Converts the reference locale, then every other catalog restricted to
/// the reference's keys. The first parse or I/O failure aborts the run.
pub fn run_conversion(opts: &RunOptions) -> Result<(), String> {
    let source_dir = Path::new(&opts.source_dir);
    let reference_source = source_dir.join(format!("{REFERENCE_LOCALE}.json"));
    let reference_dest = Path::new(&opts.dest_prefix).join(STRINGS_FILE);

    if opts.debug {
        println!(
            "Converting reference locale {} -> {}",
            reference_source.display(),
            reference_dest.display()
        );
    }
    let reference = convert_file(&reference_source, &reference_dest, &HashSet::new()).map_err(
        |e| {
            format!(
                "Failed to convert reference locale '{}': {}",
                reference_source.display(),
                e
            )
        },
    )?;
    let allowed = reference.written;
    if opts.debug {
        println!("Reference allow-list: {} key(s)", allowed.len());
    }

    let pattern = source_dir.join("*.json").to_string_lossy().into_owned();
    let mut locales = 1usize;
    let mut skipped_total = 0usize;
    for entry in
        glob(&pattern).map_err(|e| format!("Invalid source pattern '{}': {}", pattern, e))?
    {
        let path = entry.map_err(|e| format!("Failed to list source directory: {}", e))?;
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with(REFERENCE_LOCALE) {
            continue;
        }

        let dest = locale_dest(&opts.dest_prefix, name);
        if opts.debug {
            println!("Converting {} -> {}", path.display(), dest.display());
        }
        let report = convert_file(&path, &dest, &allowed)
            .map_err(|e| format!("Failed to convert '{}': {}", path.display(), e))?;
        if opts.debug {
            for key in &report.skipped {
                println!("Skipping key not in reference locale: {key}");
            }
        }
        skipped_total += report.skipped.len();
        locales += 1;
    }

    println!(
        "✅ Converted {} locale file(s): {} reference key(s), {} key(s) skipped",
        locales,
        allowed.len(),
        skipped_total
    );

    if opts.debug {
        match std::fs::read_to_string(&reference_dest) {
            Ok(contents) => {
                println!("--- {} ---", reference_dest.display());
                print!("{contents}");
            }
            Err(e) => eprintln!(
                "Failed to read back '{}': {}",
                reference_dest.display(),
                e
            ),
        }
    }
    Ok(())
}

/// Destination document for a non-reference catalog.
fn locale_dest(dest_prefix: &str, file_name: &str) -> PathBuf {
    PathBuf::from(format!("{}-b+{}", dest_prefix, locale_tag(file_name))).join(STRINGS_FILE)
}

/// Derives the resource-directory locale tag from a catalog filename:
/// `pt-BR.json` -> `pt+BR`, `zh_CN.json` -> `zh+CN`.
fn locale_tag(file_name: &str) -> String {
    file_name.trim_end_matches(".json").replace(['-', '_'], "+")
}
