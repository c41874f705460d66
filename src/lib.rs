//! Longan - HTML previews of Office Open XML packages
//!
//! This library turns the bytes of a ZIP-based Office package into an HTML
//! fragment suitable for a sandboxed preview pane. It works entirely in
//! memory on a caller-supplied buffer: no file system, no network.
//!
//! # Features
//!
//! - **Word (.docx)**: paragraphs with bold/italic/underline runs and line
//!   breaks, plus tables
//! - **Excel (.xlsx)**: the first worksheet as a table captioned with its name
//! - **Typed errors**: a closed [`Error`] set; well-formed but empty packages
//!   produce placeholder content, never an error
//! - **Async entry points**: conversions on tokio's blocking pool
//!
//! # Example - Converting a DOCX file
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("document.docx")?;
//! let preview = longan::convert_word_to_html(&bytes)?;
//! println!("{}", preview.html);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Converting an XLSX file
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("budget.xlsx")?;
//! let preview = longan::convert_sheet_to_html(&bytes)?;
//! println!("{}: {}", preview.sheet_name, preview.html);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Choosing the converter from a download
//!
//! ```no_run
//! use longan::{PackageKind, preview};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("report.docx")?;
//! if let Some(kind) = PackageKind::from_file_name("report.docx?version=2", None) {
//!     let preview = preview::convert(&bytes, kind)?;
//!     println!("{}", preview.html());
//! }
//! # Ok(())
//! # }
//! ```

/// Common types shared by both converters
///
/// Errors, package kind detection, and the XML reading helpers.
pub mod common;

/// HTML fragment generation
pub mod html;

/// OOXML (Office Open XML) package converters
///
/// This module provides the Word and Excel converters and the packaging
/// pieces they share.
pub mod ooxml;

/// Converter dispatch and async entry points
pub mod preview;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export the container reader
pub use soapberry_zip::office::{ArchiveOptions, ArchiveReader};

// Re-export commonly used types for convenience
pub use common::{Error, PackageKind, Result, detect_package_kind, detect_package_kind_from_bytes};
pub use html::{HtmlOptions, ToHtml};
pub use ooxml::docx::{
    Document, DocumentHtml, convert_word_to_html, convert_word_to_html_with_options,
};
pub use ooxml::xlsx::{
    SheetGrid, SheetHtml, SharedStringTable, Worksheet, column_index, convert_sheet_to_html,
    convert_sheet_to_html_with_options, parse_cell_reference,
};
pub use preview::{
    Preview, convert_sheet_to_html_async, convert_word_to_html_async,
};

// Conversion results are handed across threads by the async entry points.
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<Document>();
    assert_send_sync::<Worksheet>();
    assert_send_sync::<Preview>();
};
