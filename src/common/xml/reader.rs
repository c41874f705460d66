//! Pull reader over one XML package part.
//!
//! Wraps `quick_xml::Reader` with the checks a DOM parser would apply before
//! handing back a tree: a root element must exist, end tags must match, and
//! nothing may be left open at end of input. Every failure becomes
//! [`Error::MalformedXml`] naming the part.

use std::borrow::Cow;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::escape::resolve_entity;
use crate::common::{Error, Result};

/// Streaming reader that tracks element depth.
pub struct PartReader<'a> {
    reader: Reader<&'a [u8]>,
    part: &'a str,
    open: usize,
    depth: usize,
    pop_pending: bool,
    seen_root: bool,
}

impl<'a> PartReader<'a> {
    /// Create a reader for the part named `part` with content `xml`.
    pub fn new(part: &'a str, xml: &'a str) -> Self {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(false);
        reader.config_mut().check_end_names = true;
        Self {
            reader,
            part,
            open: 0,
            depth: 0,
            pop_pending: false,
            seen_root: false,
        }
    }

    /// Name of the part being read.
    #[inline]
    pub fn part(&self) -> &'a str {
        self.part
    }

    /// Depth of the element the last event belongs to.
    ///
    /// For `Start`, `End`, and `Empty` events this is the element's own depth
    /// (the root is 1). For text it is the depth of the enclosing element.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Read the next event. Returns `Event::Eof` once, at a well-formed end.
    pub fn next_event(&mut self) -> Result<Event<'a>> {
        if self.pop_pending {
            self.open -= 1;
            self.pop_pending = false;
        }

        let event = self
            .reader
            .read_event()
            .map_err(|e| Error::malformed(self.part, e))?;

        match &event {
            Event::Start(_) => {
                if self.open == 0 && self.seen_root {
                    return Err(Error::malformed(self.part, "more than one root element"));
                }
                self.seen_root = true;
                self.open += 1;
                self.depth = self.open;
            },
            Event::End(_) => {
                self.depth = self.open;
                self.pop_pending = true;
            },
            Event::Empty(_) => {
                if self.open == 0 && self.seen_root {
                    return Err(Error::malformed(self.part, "more than one root element"));
                }
                self.seen_root = true;
                self.depth = self.open + 1;
            },
            Event::Eof => {
                if !self.seen_root {
                    return Err(Error::malformed(self.part, "no root element"));
                }
                if self.open > 0 {
                    return Err(Error::malformed(
                        self.part,
                        format!("{} element(s) left open at end of input", self.open),
                    ));
                }
                self.depth = 0;
            },
            Event::GeneralRef(e) => {
                let name = String::from_utf8_lossy(e.as_ref());
                if resolve_entity(&name).is_none() {
                    return Err(Error::malformed(
                        self.part,
                        format!("unknown entity reference &{};", name),
                    ));
                }
                self.depth = self.open;
            },
            _ => self.depth = self.open,
        }

        Ok(event)
    }

    /// Character data carried by a text-like event, with references resolved.
    ///
    /// Returns `None` for events that carry no character data.
    pub fn text_of(&self, event: &Event<'a>) -> Option<Cow<'a, str>> {
        match event {
            Event::Text(e) => Some(Cow::Owned(String::from_utf8_lossy(e.as_ref()).into_owned())),
            Event::CData(e) => Some(Cow::Owned(String::from_utf8_lossy(e.as_ref()).into_owned())),
            Event::GeneralRef(e) => resolve_entity(&String::from_utf8_lossy(e.as_ref()))
                .map(|ch| Cow::Owned(ch.to_string())),
            _ => None,
        }
    }

    /// Read to the end of the document, validating the remainder.
    pub fn finish(&mut self) -> Result<()> {
        loop {
            if let Event::Eof = self.next_event()? {
                return Ok(());
            }
        }
    }
}

/// Whether an element name is `local` in the WordprocessingML `w:` prefix or unprefixed.
///
/// Matching on the full name keeps math runs (`m:r`) and DrawingML paragraphs
/// (`a:p`) from being taken for text runs and paragraphs.
#[inline]
pub fn is_w(name: &[u8], local: &[u8]) -> bool {
    name == local || (name.len() == local.len() + 2 && name.starts_with(b"w:") && name.ends_with(local))
}

/// Whether an element's local name (prefix ignored) is `local`.
#[inline]
pub fn is_local(e: &BytesStart<'_>, local: &[u8]) -> bool {
    e.local_name().as_ref() == local
}

/// Whether an end tag's local name (prefix ignored) is `local`.
#[inline]
pub fn is_local_end(name: quick_xml::name::QName<'_>, local: &[u8]) -> bool {
    name.local_name().as_ref() == local
}

/// Value of the attribute with exactly this qualified name, unescaped.
pub fn attribute(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        })
}

/// Value of the first attribute with this local name and any namespace prefix.
pub fn prefixed_attribute(e: &BytesStart<'_>, local: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.prefix().is_some() && attr.key.local_name().as_ref() == local)
        .map(|attr| match attr.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&attr.value).into_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(xml: &str) -> Result<()> {
        PartReader::new("part.xml", xml).finish()
    }

    #[test]
    fn test_well_formed_document() {
        assert!(drain(r#"<?xml version="1.0"?><a><b/><c>text</c></a>"#).is_ok());
    }

    #[test]
    fn test_malformed_documents() {
        for xml in ["", "   ", "<a><b></a>", "<a>", "<a/><b/>", "<a>&bogus;</a>"] {
            let err = drain(xml).unwrap_err();
            assert!(
                matches!(err, Error::MalformedXml { ref part, .. } if part == "part.xml"),
                "{:?} should be malformed",
                xml
            );
        }
    }

    #[test]
    fn test_depth_tracking() {
        let mut reader = PartReader::new("p", "<a><b><c/></b>x</a>");
        let mut seen = Vec::new();
        loop {
            let event = reader.next_event().unwrap();
            match &event {
                Event::Start(e) | Event::Empty(e) => {
                    seen.push((String::from_utf8_lossy(e.name().as_ref()).into_owned(), reader.depth()))
                },
                Event::End(e) => seen.push((
                    format!("/{}", String::from_utf8_lossy(e.name().as_ref())),
                    reader.depth(),
                )),
                Event::Text(_) => seen.push(("#text".to_string(), reader.depth())),
                Event::Eof => break,
                _ => {},
            }
        }
        let expected = [("a", 1), ("b", 2), ("c", 3), ("/b", 2), ("#text", 1), ("/a", 1)];
        let expected: Vec<(String, usize)> =
            expected.iter().map(|(n, d)| (n.to_string(), *d)).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_text_resolves_references() {
        let mut reader = PartReader::new("p", "<t>a &amp; b &#65;<![CDATA[<x>]]></t>");
        let mut text = String::new();
        loop {
            let event = reader.next_event().unwrap();
            if let Event::Eof = event {
                break;
            }
            if let Some(chunk) = reader.text_of(&event) {
                text.push_str(&chunk);
            }
        }
        assert_eq!(text, "a & b A<x>");
    }

    #[test]
    fn test_name_matching() {
        assert!(is_w(b"w:p", b"p"));
        assert!(is_w(b"p", b"p"));
        assert!(!is_w(b"m:r", b"r"));
        assert!(!is_w(b"w:pPr", b"p"));
        assert!(!is_w(b"w:tbl", b"tc"));
    }
}
