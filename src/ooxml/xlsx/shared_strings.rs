//! Shared strings table for Excel files.
//!
//! Cells of type `s` hold an index into this table instead of their text.
//! Each `<si>` entry is either a single `<t>` or a list of rich-text runs;
//! its text is the concatenation of every `<t>` outside phonetic (`<rPh>`)
//! annotations.

use quick_xml::events::Event;

use crate::common::Result;
use crate::common::xml::reader::{PartReader, is_local, is_local_end};

/// Shared strings table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedStringTable {
    strings: Vec<String>,
}

impl SharedStringTable {
    /// Create a new empty shared strings table.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse shared strings from xl/sharedStrings.xml content.
    pub fn parse(part: &str, xml: &str) -> Result<Self> {
        let mut reader = PartReader::new(part, xml);
        let mut strings = Vec::new();
        let mut current: Option<String> = None;
        let mut in_text = false;
        let mut phonetic_depth = 0usize;

        loop {
            let event = reader.next_event()?;
            match &event {
                Event::Start(e) => {
                    if is_local(e, b"si") {
                        current = Some(String::new());
                    } else if is_local(e, b"rPh") {
                        phonetic_depth += 1;
                    } else if is_local(e, b"t") && current.is_some() && phonetic_depth == 0 {
                        in_text = true;
                    }
                },
                Event::Empty(e) if is_local(e, b"si") => strings.push(String::new()),
                Event::End(e) => {
                    let name = e.name();
                    if is_local_end(name, b"si") {
                        strings.push(current.take().unwrap_or_default());
                        phonetic_depth = 0;
                    } else if is_local_end(name, b"rPh") {
                        phonetic_depth = phonetic_depth.saturating_sub(1);
                    } else if is_local_end(name, b"t") {
                        in_text = false;
                    }
                },
                Event::Eof => break,
                _ => {
                    if in_text {
                        if let (Some(text), Some(current)) = (reader.text_of(&event), current.as_mut()) {
                            current.push_str(&text);
                        }
                    }
                },
            }
        }

        log::debug!("{}: {} shared strings", part, strings.len());
        Ok(Self { strings })
    }

    /// Get a string by index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.strings.get(index).map(String::as_str)
    }

    /// Get the number of strings.
    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Check if the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// All strings in index order.
    #[inline]
    pub fn strings(&self) -> &[String] {
        &self.strings
    }
}
