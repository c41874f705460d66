/// Document - the parsed body of a Word document and its HTML conversion.
use crate::common::{Error, Result};
use crate::html::writer::HtmlWriter;
use crate::html::{HtmlOptions, ToHtml};
use crate::ooxml::docx::paragraph::Paragraph;
use crate::ooxml::docx::parser::parse_document;
use crate::ooxml::docx::table::Table;
use crate::ooxml::opc::constants::part_name;
use soapberry_zip::office::{ArchiveOptions, ArchiveReader};

/// A top-level element of the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A `<w:p>` directly inside the body
    Paragraph(Paragraph),
    /// A `<w:tbl>` directly inside the body with at least one non-empty row
    Table(Table),
}

/// A Word document body.
///
/// Holds the body's paragraphs and tables in document order. Other body
/// children (section properties, content controls, bookmarks) are not kept.
///
/// # Examples
///
/// ```rust,no_run
/// use longan::ooxml::docx::Document;
///
/// let bytes = std::fs::read("document.docx")?;
/// let doc = Document::from_bytes(&bytes)?;
///
/// println!("{} paragraphs, {} tables", doc.paragraph_count(), doc.table_count());
/// println!("{}", doc.text());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub(crate) fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parse the main document part of a word-processing package.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(bytes, ArchiveOptions::default())
    }

    /// Parse the main document part, reading the container with `archive_options`.
    pub fn from_bytes_with_options(bytes: &[u8], archive_options: ArchiveOptions) -> Result<Self> {
        let archive = ArchiveReader::with_options(bytes, archive_options)?;
        Self::from_archive(&archive)
    }

    /// Parse the main document part of an opened package.
    pub fn from_archive(archive: &ArchiveReader<'_>) -> Result<Self> {
        let xml = archive
            .read_string(part_name::WORD_DOCUMENT)?
            .ok_or_else(|| Error::MissingPart(part_name::WORD_DOCUMENT.to_string()))?;
        let document = parse_document(part_name::WORD_DOCUMENT, &xml)?;
        log::debug!(
            "parsed {}: {} paragraphs, {} tables",
            part_name::WORD_DOCUMENT,
            document.paragraph_count(),
            document.table_count()
        );
        Ok(document)
    }

    /// The body's paragraphs and tables in document order.
    #[inline]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate over the top-level paragraphs.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::Table(_) => None,
        })
    }

    /// Iterate over the top-level tables.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Table(t) => Some(t),
            Block::Paragraph(_) => None,
        })
    }

    /// Get the number of top-level paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs().count()
    }

    /// Get the number of top-level tables.
    pub fn table_count(&self) -> usize {
        self.tables().count()
    }

    /// Whether the body has nothing to render.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get all text content from the document.
    ///
    /// Paragraphs are separated by newlines; table cells by tabs.
    pub fn text(&self) -> String {
        let mut lines = Vec::with_capacity(self.blocks.len());
        for block in &self.blocks {
            match block {
                Block::Paragraph(p) => lines.push(p.text()),
                Block::Table(t) => {
                    for row in t.rows() {
                        let cells: Vec<String> = row.cells().iter().map(|c| c.text()).collect();
                        lines.push(cells.join("\t"));
                    }
                },
            }
        }
        lines.join("\n")
    }
}

impl ToHtml for Document {
    fn to_html_with_options(&self, options: &HtmlOptions) -> String {
        let mut writer = HtmlWriter::new(options);
        writer.write_document(self);
        writer.finish()
    }
}

/// Result of converting a word-processing package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHtml {
    /// HTML fragment; never empty
    pub html: String,
}

/// Convert a word-processing package to an HTML fragment.
///
/// # Examples
///
/// ```rust,no_run
/// let bytes = std::fs::read("report.docx")?;
/// let preview = longan::convert_word_to_html(&bytes)?;
/// assert!(!preview.html.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert_word_to_html(bytes: &[u8]) -> Result<DocumentHtml> {
    convert_word_to_html_with_options(bytes, &HtmlOptions::default())
}

/// Convert a word-processing package to an HTML fragment with custom options.
///
/// The container is read with the default [`ArchiveOptions`]. To accept a
/// package whose central directory does not end where its end record says,
/// read it with [`Document::from_bytes_with_options`] and render the result
/// with [`ToHtml::to_html_with_options`].
pub fn convert_word_to_html_with_options(
    bytes: &[u8],
    options: &HtmlOptions,
) -> Result<DocumentHtml> {
    let document = Document::from_bytes(bytes)?;
    Ok(DocumentHtml {
        html: document.to_html_with_options(options),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{build_package, docx, shorten_directory};

    #[test]
    fn test_bold_hello() {
        let bytes = docx(r#"<w:p><w:r><w:rPr><w:b/></w:rPr><w:t>Hello</w:t></w:r></w:p>"#);
        let result = convert_word_to_html(&bytes).unwrap();
        assert_eq!(
            result.html,
            r#"<p class="mb-2 text-sm text-slate-800"><strong>Hello</strong></p>"#
        );
        assert_eq!(result.html.matches("<p").count(), 1);
        assert!(!result.html.contains("<table"));
    }

    #[test]
    fn test_empty_paragraphs_become_nbsp() {
        let bytes = docx("<w:p/><w:p><w:r/></w:p><w:p><w:pPr/></w:p>");
        let html = convert_word_to_html_with_options(&bytes, &HtmlOptions::plain())
            .unwrap()
            .html;
        assert_eq!(html, "<p>&nbsp;</p><p>&nbsp;</p><p>&nbsp;</p>");
    }

    #[test]
    fn test_empty_body_placeholder() {
        let bytes = docx("<w:sectPr/>");
        let html = convert_word_to_html(&bytes).unwrap().html;
        assert_eq!(
            html,
            r#"<p class="text-sm text-slate-600">(Document contained no visible text)</p>"#
        );
    }

    #[test]
    fn test_nesting_order_and_escaping() {
        let bytes = docx(
            r#"<w:p><w:r><w:rPr><w:u w:val="single"/><w:i/><w:b/></w:rPr><w:t>a&lt;b</w:t><w:br/></w:r><w:r><w:t xml:space="preserve"> "q" </w:t></w:r></w:p>"#,
        );
        let html = convert_word_to_html_with_options(&bytes, &HtmlOptions::plain())
            .unwrap()
            .html;
        assert_eq!(
            html,
            r#"<p><strong><em><span style="text-decoration: underline;">a&lt;b</span></em></strong><br/> &quot;q&quot; </p>"#
        );
    }

    #[test]
    fn test_table_rendering() {
        let bytes = docx(
            r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>A1</w:t></w:r></w:p></w:tc><w:tc><w:tcPr/></w:tc></w:tr></w:tbl>"#,
        );
        let html = convert_word_to_html(&bytes).unwrap().html;
        assert_eq!(
            html,
            concat!(
                r#"<table class="mb-4 w-full border-collapse border border-slate-300 text-left"><tbody><tr>"#,
                r#"<td class="border border-slate-300 px-2 py-1 align-top"><p class="m-0 text-sm text-slate-800">A1</p></td>"#,
                r#"<td class="border border-slate-300 px-2 py-1 align-top">&nbsp;</td>"#,
                "</tr></tbody></table>"
            )
        );
    }

    #[test]
    fn test_lenient_directory_end_through_document() {
        let bytes = shorten_directory(docx("<w:p><w:r><w:t>kept</w:t></w:r></w:p>"));
        let err = convert_word_to_html(&bytes).unwrap_err();
        assert!(matches!(err, Error::CorruptCentralDirectory(_)));

        let lenient = ArchiveOptions::new().with_strict_directory_end(false);
        let document = Document::from_bytes_with_options(&bytes, lenient).unwrap();
        assert_eq!(
            document.to_html_with_options(&HtmlOptions::plain()),
            "<p>kept</p>"
        );
    }

    #[test]
    fn test_missing_document_part() {
        let bytes = build_package(&[("word/styles.xml", "<w:styles/>")]);
        let err = convert_word_to_html(&bytes).unwrap_err();
        assert!(matches!(err, Error::MissingPart(ref p) if p == "word/document.xml"));
    }

    #[test]
    fn test_flipped_directory_signature_is_not_a_zip() {
        let mut bytes = docx("<w:p/>");
        let eocd = bytes.len() - 22;
        bytes[eocd] ^= 0xFF;
        assert!(matches!(convert_word_to_html(&bytes), Err(Error::NotAZip)));
    }

    #[test]
    fn test_document_model() {
        let bytes = docx(
            r#"<w:p><w:r><w:t>Title</w:t></w:r></w:p><w:tbl><w:tr><w:tc><w:p><w:r><w:t>a</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>b</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
        );
        let doc = Document::from_bytes(&bytes).unwrap();
        assert_eq!(doc.paragraph_count(), 1);
        assert_eq!(doc.table_count(), 1);
        assert_eq!(doc.text(), "Title\na\tb");
    }
}
