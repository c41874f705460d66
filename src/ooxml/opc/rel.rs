//! Relationship parts of OPC packages.
//!
//! A `.rels` part lists `Relationship` elements, each naming an id, a type,
//! and a target. Targets are either part references relative to the source
//! part's directory or, in `External` mode, arbitrary URLs.

use crate::common::xml::reader::{PartReader, attribute, is_local};
use crate::common::Result;
use crate::ooxml::opc::constants::target_mode;
use crate::ooxml::opc::packuri::PackURI;
use quick_xml::events::Event;
use std::collections::HashMap;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone)]
pub struct Relationship {
    /// Relationship type URI, empty when the part omits it
    reltype: String,

    /// Target reference - either a part reference or external URL
    target_ref: String,

    /// Whether this is an external relationship
    is_external: bool,
}

impl Relationship {
    /// Get the relationship type.
    #[inline]
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Get the target reference exactly as written in the part.
    #[inline]
    pub fn target_ref(&self) -> &str {
        &self.target_ref
    }

    /// Check if this is an external relationship.
    #[inline]
    pub fn is_external(&self) -> bool {
        self.is_external
    }
}

/// The relationships declared by one source part, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: HashMap<String, Relationship>,
}

impl Relationships {
    /// Parse a relationships part.
    ///
    /// Entries lacking an `Id` or a `Target` are dropped; when an id repeats,
    /// the first declaration wins.
    pub fn parse(part: &str, xml: &str) -> Result<Self> {
        let mut reader = PartReader::new(part, xml);
        let mut rels = HashMap::new();

        loop {
            match reader.next_event()? {
                Event::Start(e) | Event::Empty(e) if is_local(&e, b"Relationship") => {
                    let (Some(r_id), Some(target_ref)) =
                        (attribute(&e, b"Id"), attribute(&e, b"Target"))
                    else {
                        log::debug!("{}: skipping relationship without Id or Target", part);
                        continue;
                    };
                    let is_external = attribute(&e, b"TargetMode")
                        .is_some_and(|mode| mode == target_mode::EXTERNAL);
                    let reltype = attribute(&e, b"Type").unwrap_or_default();
                    rels.entry(r_id).or_insert(Relationship {
                        reltype,
                        target_ref,
                        is_external,
                    });
                },
                Event::Eof => break,
                _ => {},
            }
        }

        Ok(Self { rels })
    }

    /// Look up a relationship by id.
    #[inline]
    pub fn get(&self, r_id: &str) -> Option<&Relationship> {
        self.rels.get(r_id)
    }

    /// Number of relationships.
    #[inline]
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Whether the part declared no usable relationships.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }
}

/// Resolve an internal relationship target to a part under `root`.
///
/// Both relative targets and targets with a leading slash are placed under
/// `root`, so `"worksheets/sheet1.xml"` and `"/worksheets/sheet1.xml"` both
/// resolve to `/xl/worksheets/sheet1.xml` for root `"xl"`.
pub fn resolve_target(root: &str, target_ref: &str) -> PackURI {
    PackURI::from_rel_ref(&format!("/{}", root.trim_matches('/')), target_ref)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="https://example.com/?a=1&amp;b=2" TargetMode="External"/>
  <Relationship Id="rId1" Target="worksheets/duplicate.xml"/>
  <Relationship Id="rId9"/>
</Relationships>"#;

    #[test]
    fn test_parse_relationships() {
        let rels = Relationships::parse("xl/_rels/workbook.xml.rels", RELS).unwrap();
        assert_eq!(rels.len(), 3);

        let sheet = rels.get("rId1").unwrap();
        assert_eq!(sheet.target_ref(), "worksheets/sheet1.xml");
        assert!(sheet.reltype().ends_with("/worksheet"));
        assert!(!sheet.is_external());

        let link = rels.get("rId3").unwrap();
        assert!(link.is_external());
        assert_eq!(link.target_ref(), "https://example.com/?a=1&b=2");

        assert!(rels.get("rId9").is_none());
    }

    #[test]
    fn test_parse_rejects_malformed_part() {
        assert!(Relationships::parse("x.rels", "<Relationships>").is_err());
    }

    #[test]
    fn test_resolve_target() {
        assert_eq!(
            resolve_target("xl", "worksheets/sheet1.xml").membername(),
            "xl/worksheets/sheet1.xml"
        );
        assert_eq!(
            resolve_target("xl", "/worksheets/sheet1.xml").membername(),
            "xl/worksheets/sheet1.xml"
        );
    }
}
