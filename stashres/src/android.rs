//! Serialization of Android `strings.xml` resource documents.
//!
//! Output only: the generated files are consumed by the Android resource
//! compiler, never read back by this crate. Values must already be escaped
//! (see [`crate::escape`]); they are written verbatim so that `\'` sequences
//! survive instead of turning into `&apos;`.

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use serde::Serialize;
use std::io::Write;

use crate::error::Error;

/// One `<string>` element of a resource document.
#[derive(Debug, Clone, Serialize)]
pub struct StringResource {
    pub name: String,
    /// Pre-escaped element content.
    pub value: String,
    /// Whether the value carries positional format specifiers.
    pub formatted: bool,
}

/// Writes a complete resource document to any writer.
pub fn write_resources<W: Write>(strings: &[StringResource], mut writer: W) -> Result<(), Error> {
    let mut xml_writer = Writer::new_with_indent(&mut writer, b' ', 4);

    xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;
    for sr in strings {
        let mut elem = BytesStart::new("string");
        elem.push_attribute(("name", sr.name.as_str()));
        elem.push_attribute(("formatted", if sr.formatted { "true" } else { "false" }));

        xml_writer.write_event(Event::Start(elem))?;
        xml_writer.write_event(Event::Text(BytesText::from_escaped(sr.value.as_str())))?;
        xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
    }
    xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
    xml_writer.write_event(Event::Text(BytesText::new("\n")))?;
    Ok(())
}
