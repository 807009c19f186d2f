//! Thin helpers over quick-xml's writer for emitting OOXML parts.

use deck_core::{Error, Result};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// PresentationML main namespace.
pub const NS_P: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
/// DrawingML main namespace.
pub const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
/// Part-to-part relationship namespace (the `r:` prefix).
pub const NS_R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// Package relationships namespace.
pub const NS_PKG_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
/// Content-types namespace.
pub const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

/// Relationship type URIs.
pub mod rel_type {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
    pub const SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
    pub const SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
    pub const THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
}

fn xml_err(e: quick_xml::Error) -> Error {
    Error::XmlError(e.to_string())
}

/// An in-memory XML part under construction.
pub struct XmlPart {
    writer: Writer<Vec<u8>>,
}

impl XmlPart {
    /// Start a part with the standard XML declaration.
    pub fn new() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_err)?;
        Ok(Self { writer })
    }

    /// Open an element with attributes.
    pub fn open(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for (key, value) in attrs {
            elem.push_attribute((*key, *value));
        }
        self.writer.write_event(Event::Start(elem)).map_err(xml_err)
    }

    /// Write a self-closing element with attributes.
    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let mut elem = BytesStart::new(name);
        for (key, value) in attrs {
            elem.push_attribute((*key, *value));
        }
        self.writer.write_event(Event::Empty(elem)).map_err(xml_err)
    }

    /// Write escaped character data.
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_err)
    }

    /// Close an element opened with [`XmlPart::open`].
    pub fn close(&mut self, name: &str) -> Result<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    /// Open, write text, and close in one step.
    pub fn leaf(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.open(name, attrs)?;
        self.text(text)?;
        self.close(name)
    }

    /// Finish the part and return its bytes.
    pub fn finish(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_starts_with_declaration() {
        let part = XmlPart::new().unwrap();
        let bytes = part.finish();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>"));
    }

    #[test]
    fn test_nested_elements_and_attributes() {
        let mut part = XmlPart::new().unwrap();
        part.open("root", &[("a", "1")]).unwrap();
        part.empty("child", &[("b", "2")]).unwrap();
        part.close("root").unwrap();
        let text = String::from_utf8(part.finish()).unwrap();
        assert!(text.contains("<root a=\"1\"><child b=\"2\"/></root>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let mut part = XmlPart::new().unwrap();
        part.leaf("t", &[], "a < b & c > d").unwrap();
        let text = String::from_utf8(part.finish()).unwrap();
        assert!(text.contains("a &lt; b &amp; c &gt; d"));
    }

    #[test]
    fn test_leaf_with_japanese_text() {
        let mut part = XmlPart::new().unwrap();
        part.leaf("t", &[], "要件設計").unwrap();
        let text = String::from_utf8(part.finish()).unwrap();
        assert!(text.contains("<t>要件設計</t>"));
    }
}
