#![forbid(unsafe_code)]
//! Converts stash-server JSON locale catalogs into Android string resources.
//!
//! Each locale catalog is an arbitrarily nested JSON object whose leaves are
//! the strings to localize. Conversion flattens the hierarchy into
//! underscore-joined resource keys, escapes values for XML, rewrites
//! `{identifier}` interpolation placeholders into positional `%N$s`
//! specifiers, and writes one `<resources>` document per catalog.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::collections::HashSet;
//! use stashres::convert_file;
//!
//! // Convert the reference locale without filtering; its written keys
//! // become the allow-list for every other locale.
//! let report = convert_file("locales/en-GB.json", "values/stash_strings.xml", &HashSet::new())?;
//! convert_file("locales/de.json", "values-b+de/stash_strings.xml", &report.written)?;
//! # Ok::<(), stashres::Error>(())
//! ```

pub mod android;
pub mod convert;
pub mod error;
pub mod escape;
pub mod flatten;

// Re-export most used items for easy consumption
pub use crate::{
    android::StringResource,
    convert::{ConvertReport, convert_file},
    error::Error,
    escape::{EscapedValue, escape_value},
    flatten::{FlatEntry, ROOT_SEGMENT, flatten},
};
