use std::collections::HashSet;
use std::fs;

use indoc::indoc;
use stashres::convert_file;
use tempfile::TempDir;

#[test]
fn reference_catalog_converts_to_exact_document() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("en-GB.json");
    fs::write(
        &source,
        r#"{"a": {"b": "Hi {x}"}, "media-info": {"bit-rate": "Bit rate"}, "note": "A & B <tag> it's"}"#,
    )
    .unwrap();
    let dest = tmp.path().join("values/stash_strings.xml");

    let report = convert_file(&source, &dest, &HashSet::new()).unwrap();
    assert_eq!(report.written.len(), 3);

    let out = fs::read_to_string(&dest).unwrap();
    assert_eq!(
        out,
        indoc! {r#"
            <?xml version="1.0" encoding="utf-8"?>
            <resources>
                <string name="stashapp_a_b" formatted="true">Hi %1$s</string>
                <string name="stashapp_media_info_bit_rate" formatted="false">Bit rate</string>
                <string name="stashapp_note" formatted="false">A &amp; B &lt;tag&gt; it\'s</string>
            </resources>
        "#}
    );
}

#[test]
fn secondary_locale_is_restricted_to_reference_keys() {
    let tmp = TempDir::new().unwrap();
    let reference = tmp.path().join("en-GB.json");
    let secondary = tmp.path().join("de.json");
    fs::write(&reference, r#"{"a": "Hello", "b": "World"}"#).unwrap();
    fs::write(&secondary, r#"{"a": "Hallo", "c": "Verwaist"}"#).unwrap();

    let reference_dest = tmp.path().join("values/stash_strings.xml");
    let secondary_dest = tmp.path().join("values-b+de/stash_strings.xml");

    let allowed = convert_file(&reference, &reference_dest, &HashSet::new())
        .unwrap()
        .written;
    assert_eq!(allowed.len(), 2);

    let report = convert_file(&secondary, &secondary_dest, &allowed).unwrap();
    assert_eq!(report.written.len(), 1);
    assert!(report.written.contains("stashapp_a"));
    assert_eq!(report.skipped, vec!["stashapp_c".to_string()]);

    let out = fs::read_to_string(&secondary_dest).unwrap();
    assert!(out.contains(r#"<string name="stashapp_a" formatted="false">Hallo</string>"#));
    assert!(!out.contains("stashapp_c"));
    // Keys the secondary locale never translated are simply absent, not
    // filled from the reference.
    assert!(!out.contains("stashapp_b"));
}

#[test]
fn placeholder_numbering_is_per_value() {
    let tmp = TempDir::new().unwrap();
    let source = tmp.path().join("en-GB.json");
    fs::write(
        &source,
        r#"{"first": "Hello {name}, you have {count} items", "second": "{count} left"}"#,
    )
    .unwrap();
    let dest = tmp.path().join("out.xml");

    convert_file(&source, &dest, &HashSet::new()).unwrap();
    let out = fs::read_to_string(&dest).unwrap();
    assert!(out.contains(
        r#"<string name="stashapp_first" formatted="true">Hello %1$s, you have %2$s items</string>"#
    ));
    assert!(out.contains(r#"<string name="stashapp_second" formatted="true">%1$s left</string>"#));
}
