/// Word (.docx) document support.
///
/// Reads the main document part of a word-processing package into a small
/// model (paragraphs with formatted runs, and tables of paragraphs) and
/// renders it as an HTML fragment.
///
/// # Architecture
///
/// - `Document`: the body's paragraphs and tables in document order
/// - `Paragraph`: a paragraph with runs
/// - `Run`: a text run with bold/italic/underline and a trailing break
/// - `Table`: a table with rows and cells
///
/// # Example
///
/// ```rust,no_run
/// use longan::html::ToHtml;
/// use longan::ooxml::docx::Document;
///
/// let bytes = std::fs::read("document.docx")?;
/// let doc = Document::from_bytes(&bytes)?;
///
/// for para in doc.paragraphs() {
///     for run in para.runs() {
///         println!("  Run: {} (bold: {})", run.text(), run.bold());
///     }
/// }
/// println!("{}", doc.to_html());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub mod document;
pub mod paragraph;
mod parser;
pub mod table;

pub use document::{
    Block, Document, DocumentHtml, convert_word_to_html, convert_word_to_html_with_options,
};
pub use paragraph::{Paragraph, Run};
pub use table::{Cell, Row, Table};
