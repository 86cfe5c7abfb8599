//! Escapes catalog values for Android string-resource XML.
//!
//! Three passes, in order: XML entity escaping, `{identifier}` placeholder
//! rewriting into positional `%N$s` specifiers, and apostrophe escaping with
//! a backslash (the Android resource-compiler convention; `&apos;` is never
//! emitted).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Matches any brace-enclosed run of word characters, including prose
    // that is not a real interpolation placeholder. Downstream consumers
    // depend on the positional numbering this produces; keep the pattern
    // as-is.
    static ref PLACEHOLDER_REGEX: Regex = Regex::new(r"\{\w+\}").unwrap();
}

/// A value ready to be written as `<string>` element content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapedValue {
    /// Escaped text, safe to emit without further XML escaping.
    pub text: String,
    /// True iff at least one placeholder was rewritten into a `%N$s`
    /// specifier.
    pub formatted: bool,
}

/// Escapes a raw catalog value.
///
/// ```rust
/// use stashres::escape_value;
///
/// let v = escape_value("Hello {name}, it's A & B");
/// assert_eq!(v.text, r"Hello %1$s, it\'s A &amp; B");
/// assert!(v.formatted);
/// ```
pub fn escape_value(raw: &str) -> EscapedValue {
    let escaped = escape_xml_text(raw);

    let mut count = 0usize;
    let substituted = PLACEHOLDER_REGEX.replace_all(&escaped, |_: &regex::Captures| {
        count += 1;
        format!("%{count}$s")
    });

    EscapedValue {
        text: substituted.replace('\'', "\\'"),
        formatted: count > 0,
    }
}

/// Entity-escapes XML text content. Apostrophes are left alone; they are
/// handled by the backslash pass in [`escape_value`].
fn escape_xml_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
