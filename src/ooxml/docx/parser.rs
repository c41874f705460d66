//! Streaming parser for the main document part.
//!
//! Walks `word/document.xml` once, keeping only what the preview renders:
//! the body's top-level paragraphs and tables, run text, line breaks, and
//! the bold/italic/underline toggles.

use quick_xml::events::{BytesStart, Event};

use crate::common::Result;
use crate::common::xml::reader::{PartReader, attribute, is_w};
use crate::ooxml::docx::document::{Block, Document};
use crate::ooxml::docx::paragraph::{Paragraph, Run};
use crate::ooxml::docx::table::{Cell, Row, Table};

/// Parse a main document part into its block list.
///
/// A document without a `w:body` has no blocks.
pub(crate) fn parse_document(part: &str, xml: &str) -> Result<Document> {
    let mut parser = DocumentParser {
        reader: PartReader::new(part, xml),
    };
    let blocks = parser.parse()?;
    Ok(Document::from_blocks(blocks))
}

struct DocumentParser<'a> {
    reader: PartReader<'a>,
}

impl<'a> DocumentParser<'a> {
    fn parse(&mut self) -> Result<Vec<Block>> {
        let mut blocks = Vec::new();

        loop {
            match self.reader.next_event()? {
                Event::Start(e) if is_w(e.name().as_ref(), b"body") => {
                    self.parse_body(self.reader.depth(), &mut blocks)?;
                    break;
                },
                Event::Eof => return Ok(blocks),
                _ => {},
            }
        }

        // Only the first body is read, but the rest must still be well-formed.
        self.reader.finish()?;
        Ok(blocks)
    }

    fn parse_body(&mut self, body_depth: usize, blocks: &mut Vec<Block>) -> Result<()> {
        loop {
            let event = self.reader.next_event()?;
            let depth = self.reader.depth();
            match event {
                Event::Start(e) if depth == body_depth + 1 => match e.name().as_ref() {
                    name if is_w(name, b"p") => {
                        blocks.push(Block::Paragraph(self.parse_paragraph(depth)?));
                    },
                    name if is_w(name, b"tbl") => {
                        let table = self.parse_table(depth)?;
                        if !table.is_empty() {
                            blocks.push(Block::Table(table));
                        }
                    },
                    _ => {},
                },
                Event::Empty(e) if depth == body_depth + 1 && is_w(e.name().as_ref(), b"p") => {
                    blocks.push(Block::Paragraph(Paragraph::new()));
                },
                Event::End(_) if depth == body_depth => return Ok(()),
                Event::Eof => return Ok(()),
                _ => {},
            }
        }
    }

    /// Parse a paragraph whose start tag was just read at `para_depth`.
    fn parse_paragraph(&mut self, para_depth: usize) -> Result<Paragraph> {
        let mut paragraph = Paragraph::new();
        // The run being filled and its depth.
        let mut run: Option<(Run, usize)> = None;
        let mut properties_depth: Option<usize> = None;
        let mut text_depth: Option<usize> = None;

        loop {
            let event = self.reader.next_event()?;
            let depth = self.reader.depth();
            match &event {
                Event::Start(e) | Event::Empty(e) => {
                    let empty = matches!(event, Event::Empty(_));
                    let name = e.name();
                    let name = name.as_ref();
                    if run.is_none() {
                        if !empty && is_w(name, b"r") {
                            run = Some((Run::default(), depth));
                        }
                    } else if let Some((current, run_depth)) = run.as_mut() {
                        if let Some(props) = properties_depth {
                            if depth == props + 1 {
                                apply_property(current, name, e);
                            }
                        } else if depth == *run_depth + 1 && is_w(name, b"rPr") {
                            if !empty {
                                properties_depth = Some(depth);
                            }
                        } else if is_w(name, b"t") {
                            if !empty && text_depth.is_none() {
                                text_depth = Some(depth);
                            }
                        } else if is_w(name, b"br") || is_w(name, b"cr") {
                            current.set_line_break();
                        }
                    }
                },
                Event::End(_) => {
                    if depth == para_depth {
                        return Ok(paragraph);
                    }
                    if text_depth == Some(depth) {
                        text_depth = None;
                    } else if properties_depth == Some(depth) {
                        properties_depth = None;
                    } else if run.as_ref().is_some_and(|(_, run_depth)| *run_depth == depth) {
                        if let Some((finished, _)) = run.take() {
                            paragraph.push_run(finished);
                        }
                    }
                },
                Event::Eof => return Ok(paragraph),
                _ => {
                    if text_depth.is_some() {
                        if let (Some(text), Some((current, _))) =
                            (self.reader.text_of(&event), run.as_mut())
                        {
                            current.push_text(&text);
                        }
                    }
                },
            }
        }
    }

    /// Parse a table whose start tag was just read at `table_depth`.
    fn parse_table(&mut self, table_depth: usize) -> Result<Table> {
        let mut table = Table::new();
        let mut row: Option<Row> = None;
        let mut cell: Option<Cell> = None;

        loop {
            let event = self.reader.next_event()?;
            let depth = self.reader.depth();
            match event {
                Event::Start(e) => {
                    let name = e.name();
                    let name = name.as_ref();
                    if depth == table_depth + 1 && is_w(name, b"tr") {
                        row = Some(Row::new());
                    } else if depth == table_depth + 2 && row.is_some() && is_w(name, b"tc") {
                        cell = Some(Cell::new());
                    } else if is_w(name, b"p") {
                        let paragraph = self.parse_paragraph(depth)?;
                        if let Some(cell) = cell.as_mut() {
                            cell.push_paragraph(paragraph);
                        }
                    }
                },
                Event::Empty(e) => {
                    let name = e.name();
                    let name = name.as_ref();
                    if depth == table_depth + 2 && is_w(name, b"tc") {
                        if let Some(row) = row.as_mut() {
                            row.push_cell(Cell::new());
                        }
                    } else if is_w(name, b"p") {
                        if let Some(cell) = cell.as_mut() {
                            cell.push_paragraph(Paragraph::new());
                        }
                    }
                },
                Event::End(_) => {
                    if depth == table_depth {
                        return Ok(table);
                    } else if depth == table_depth + 1 {
                        if let Some(finished) = row.take() {
                            table.push_row(finished);
                        }
                    } else if depth == table_depth + 2 {
                        if let (Some(finished), Some(row)) = (cell.take(), row.as_mut()) {
                            row.push_cell(finished);
                        }
                    }
                },
                Event::Eof => return Ok(table),
                _ => {},
            }
        }
    }
}

/// Apply a run property element found inside `w:rPr`.
fn apply_property(run: &mut Run, name: &[u8], e: &BytesStart<'_>) {
    if is_w(name, b"b") {
        run.set_bold(toggle_value(e));
    } else if is_w(name, b"i") {
        run.set_italic(toggle_value(e));
    } else if is_w(name, b"u") {
        let off = val_attribute(e).is_some_and(|v| v == "none");
        run.set_underline(!off);
    }
}

/// Read an on/off property: a bare element is on, `0`/`false`/`off` are off.
fn toggle_value(e: &BytesStart<'_>) -> bool {
    match val_attribute(e) {
        None => true,
        Some(v) => !matches!(v.as_str(), "0" | "false" | "off"),
    }
}

fn val_attribute(e: &BytesStart<'_>) -> Option<String> {
    attribute(e, b"w:val").or_else(|| attribute(e, b"val"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_body(body: &str) -> Document {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        );
        parse_document("word/document.xml", &xml).unwrap()
    }

    fn only_paragraph(doc: &Document) -> &Paragraph {
        match doc.blocks() {
            [Block::Paragraph(p)] => p,
            other => panic!("expected one paragraph, got {:?}", other),
        }
    }

    #[test]
    fn test_run_properties() {
        let doc = parse_body(
            r#"<w:p><w:r><w:rPr><w:b/><w:i w:val="0"/><w:u w:val="single"/></w:rPr><w:t>x</w:t></w:r><w:r><w:rPr><w:b w:val="false"/><w:u w:val="none"/></w:rPr><w:t>y</w:t></w:r></w:p>"#,
        );
        let runs = only_paragraph(&doc).runs();
        assert_eq!(runs.len(), 2);
        assert!(runs[0].bold() && !runs[0].italic() && runs[0].underline());
        assert!(!runs[1].bold() && !runs[1].underline());
    }

    #[test]
    fn test_text_preserves_whitespace_and_entities() {
        let doc = parse_body(
            r#"<w:p><w:r><w:t xml:space="preserve">  a &amp; b </w:t><w:t>c</w:t></w:r></w:p>"#,
        );
        assert_eq!(only_paragraph(&doc).runs()[0].text(), "  a & b c");
    }

    #[test]
    fn test_breaks_and_skipped_text() {
        let doc = parse_body(
            r#"<w:p><w:pPr><w:rPr><w:b/></w:rPr></w:pPr><w:r><w:t>a</w:t><w:br/></w:r><w:r><w:delText>gone</w:delText><w:cr/></w:r></w:p>"#,
        );
        let runs = only_paragraph(&doc).runs();
        assert_eq!(runs.len(), 2);
        assert!(!runs[0].bold());
        assert!(runs[0].line_break());
        assert_eq!(runs[1].text(), "");
        assert!(runs[1].line_break());
    }

    #[test]
    fn test_runs_inside_hyperlinks_and_math_runs() {
        let doc = parse_body(
            r#"<w:p><w:hyperlink><w:r><w:t>link</w:t></w:r></w:hyperlink><m:oMath xmlns:m="m"><m:r><m:t>x</m:t></m:r></m:oMath></w:p>"#,
        );
        let runs = only_paragraph(&doc).runs();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text(), "link");
    }

    #[test]
    fn test_only_direct_body_children_are_blocks() {
        let doc = parse_body(
            r#"<w:p/><w:sdt><w:sdtContent><w:p><w:r><w:t>hidden</w:t></w:r></w:p></w:sdtContent></w:sdt><w:p></w:p><w:sectPr/>"#,
        );
        assert_eq!(doc.blocks().len(), 2);
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.text(), "\n");
    }

    #[test]
    fn test_table_structure() {
        let doc = parse_body(
            r#"<w:tbl><w:tblPr/><w:tr><w:tc><w:p><w:r><w:t>A1</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:tc></w:tr></w:tbl></w:tc><w:tc/></w:tr><w:tr><w:trPr/></w:tr></w:tbl>"#,
        );
        let table = match doc.blocks() {
            [Block::Table(t)] => t,
            other => panic!("expected one table, got {:?}", other),
        };
        assert_eq!(table.row_count(), 1);
        let cells = table.rows()[0].cells();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].text(), "A1\ninner");
        assert!(cells[1].paragraphs().is_empty());
    }

    #[test]
    fn test_empty_tables_are_not_blocks() {
        let doc = parse_body(r#"<w:tbl><w:tr/></w:tbl><w:tbl/>"#);
        assert!(doc.blocks().is_empty());
        assert_eq!(doc.table_count(), 0);
    }

    #[test]
    fn test_missing_body() {
        let doc = parse_document("word/document.xml", "<w:document xmlns:w=\"w\"/>").unwrap();
        assert!(doc.blocks().is_empty());
    }

    #[test]
    fn test_malformed_document() {
        let err = parse_document("word/document.xml", "<w:document><w:body><w:p></w:body>")
            .unwrap_err();
        assert!(matches!(err, crate::common::Error::MalformedXml { .. }));
    }
}
