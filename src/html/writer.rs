/// Low-level HTML writer shared by the document and worksheet renderers.
use crate::common::xml::escape_html;
use crate::html::config::HtmlOptions;
use crate::ooxml::docx::{Block, Document, Paragraph, Run, Table};
use crate::ooxml::xlsx::SheetGrid;

const NBSP: &str = "&nbsp;";
const UNDERLINE_OPEN: &str = r#"<span style="text-decoration: underline;">"#;

/// Writer for HTML fragments.
///
/// Appends markup to a single buffer. Text from the package always goes
/// through [`escape_html`]; class values come from [`HtmlOptions`] and are
/// escaped as attribute values.
pub(crate) struct HtmlWriter<'o> {
    /// The output buffer
    buffer: String,
    /// Current options
    options: &'o HtmlOptions,
}

impl<'o> HtmlWriter<'o> {
    /// Create a new writer with the given options.
    pub fn new(options: &'o HtmlOptions) -> Self {
        Self {
            buffer: String::with_capacity(4096),
            options,
        }
    }

    /// Write a whole document body, or the placeholder when it has no blocks.
    pub fn write_document(&mut self, document: &Document) {
        if document.is_empty() {
            let options = self.options;
            self.open_tag("p", &options.placeholder_class);
            self.push_escaped(&options.empty_document_text);
            self.buffer.push_str("</p>");
            return;
        }

        for block in document.blocks() {
            match block {
                Block::Paragraph(p) => self.write_paragraph(p, false),
                Block::Table(t) => self.write_table(t),
            }
        }
    }

    /// Write a paragraph. Compact paragraphs are the ones inside table cells.
    pub fn write_paragraph(&mut self, para: &Paragraph, compact: bool) {
        let options = self.options;
        let class = if compact {
            &options.compact_paragraph_class
        } else {
            &options.paragraph_class
        };
        self.open_tag("p", class);
        if para.has_content() {
            for run in para.runs() {
                self.write_run(run);
            }
        } else {
            self.buffer.push_str(NBSP);
        }
        self.buffer.push_str("</p>");
    }

    /// Write a run with formatting.
    ///
    /// Bold is outermost, then italic, then underline. A break follows the
    /// run's text.
    pub fn write_run(&mut self, run: &Run) {
        let text = run.text();
        if !text.is_empty() {
            if run.bold() {
                self.buffer.push_str("<strong>");
            }
            if run.italic() {
                self.buffer.push_str("<em>");
            }
            if run.underline() {
                self.buffer.push_str(UNDERLINE_OPEN);
            }
            self.push_escaped(text);
            if run.underline() {
                self.buffer.push_str("</span>");
            }
            if run.italic() {
                self.buffer.push_str("</em>");
            }
            if run.bold() {
                self.buffer.push_str("</strong>");
            }
        }
        if run.line_break() {
            self.buffer.push_str("<br/>");
        }
    }

    /// Write a document table. Tables without rows write nothing.
    pub fn write_table(&mut self, table: &Table) {
        if table.is_empty() {
            return;
        }

        let options = self.options;
        self.open_tag("table", &options.table_class);
        self.buffer.push_str("<tbody>");
        for row in table.rows() {
            self.buffer.push_str("<tr>");
            for cell in row.cells() {
                self.open_tag("td", &options.table_cell_class);
                if cell.paragraphs().is_empty() {
                    self.buffer.push_str(NBSP);
                } else {
                    for para in cell.paragraphs() {
                        self.write_paragraph(para, true);
                    }
                }
                self.buffer.push_str("</td>");
            }
            self.buffer.push_str("</tr>");
        }
        self.buffer.push_str("</tbody></table>");
    }

    /// Write a worksheet grid as one table, with an optional caption.
    pub fn write_sheet(&mut self, grid: &SheetGrid, caption: Option<&str>) {
        let options = self.options;
        self.open_tag("table", &options.sheet_table_class);
        if let Some(caption) = caption {
            self.open_tag("caption", &options.sheet_caption_class);
            self.push_escaped(caption);
            self.buffer.push_str("</caption>");
        }
        self.buffer.push_str("<tbody>");
        for row in grid.rows() {
            self.buffer.push_str("<tr>");
            for value in row {
                self.open_tag("td", &options.sheet_cell_class);
                self.push_escaped(value);
                self.buffer.push_str("</td>");
            }
            self.buffer.push_str("</tr>");
        }
        self.buffer.push_str("</tbody></table>");
    }

    /// Get the final HTML output.
    pub fn finish(self) -> String {
        self.buffer
    }

    fn open_tag(&mut self, tag: &str, class: &str) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        if !class.is_empty() {
            self.buffer.push_str(" class=\"");
            self.push_escaped(class);
            self.buffer.push('"');
        }
        self.buffer.push('>');
    }

    fn push_escaped(&mut self, text: &str) {
        self.buffer.push_str(&escape_html(text));
    }
}
