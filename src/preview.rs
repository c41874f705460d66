//! Preview dispatch.
//!
//! Picks the converter for a package kind and runs it, either on the calling
//! thread or on tokio's blocking pool. Conversions share no state, so any
//! number can run at once, and dropping an async call's future only discards
//! its result.

use crate::common::{PackageKind, Result};
use crate::html::HtmlOptions;
use crate::ooxml::docx::{DocumentHtml, convert_word_to_html_with_options};
use crate::ooxml::xlsx::{SheetHtml, convert_sheet_to_html_with_options};

/// Output of either converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// A word-processing package rendered as paragraphs and tables
    Document(DocumentHtml),
    /// The first worksheet of a spreadsheet package rendered as a table
    Sheet(SheetHtml),
}

impl Preview {
    /// The HTML fragment, whichever converter produced it.
    pub fn html(&self) -> &str {
        match self {
            Preview::Document(doc) => &doc.html,
            Preview::Sheet(sheet) => &sheet.html,
        }
    }

    /// The kind of package the preview was made from.
    pub fn kind(&self) -> PackageKind {
        match self {
            Preview::Document(_) => PackageKind::WordProcessing,
            Preview::Sheet(_) => PackageKind::Spreadsheet,
        }
    }

    /// Consume the preview, returning its HTML fragment.
    pub fn into_html(self) -> String {
        match self {
            Preview::Document(doc) => doc.html,
            Preview::Sheet(sheet) => sheet.html,
        }
    }
}

/// Convert `bytes` with the converter for `kind`.
pub fn convert(bytes: &[u8], kind: PackageKind) -> Result<Preview> {
    convert_with_options(bytes, kind, &HtmlOptions::default())
}

/// Convert `bytes` with the converter for `kind` and custom options.
pub fn convert_with_options(bytes: &[u8], kind: PackageKind, options: &HtmlOptions) -> Result<Preview> {
    log::debug!("converting {} byte {} package", bytes.len(), kind);
    match kind {
        PackageKind::WordProcessing => {
            convert_word_to_html_with_options(bytes, options).map(Preview::Document)
        },
        PackageKind::Spreadsheet => {
            convert_sheet_to_html_with_options(bytes, options).map(Preview::Sheet)
        },
    }
}

/// Convert a word-processing package on the blocking thread pool.
///
/// Must be called from within a tokio runtime.
pub async fn convert_word_to_html_async(bytes: Vec<u8>) -> Result<DocumentHtml> {
    tokio::task::spawn_blocking(move || crate::convert_word_to_html(&bytes)).await?
}

/// Convert the first worksheet of a spreadsheet package on the blocking thread pool.
///
/// Must be called from within a tokio runtime.
pub async fn convert_sheet_to_html_async(bytes: Vec<u8>) -> Result<SheetHtml> {
    tokio::task::spawn_blocking(move || crate::convert_sheet_to_html(&bytes)).await?
}

/// Convert `bytes` with the converter for `kind` on the blocking thread pool.
pub async fn convert_async(bytes: Vec<u8>, kind: PackageKind, options: HtmlOptions) -> Result<Preview> {
    tokio::task::spawn_blocking(move || convert_with_options(&bytes, kind, &options)).await?
}
