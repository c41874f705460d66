//! Unified error types for Longan.
//!
//! Every conversion returns this closed set of failures. Errors are plain
//! values: one failed conversion never affects another.
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The buffer has no ZIP end of central directory record
    #[error("Not a ZIP-based Office package")]
    NotAZip,

    /// A central directory record is damaged
    #[error("Corrupt central directory: {0}")]
    CorruptCentralDirectory(String),

    /// A local file header is damaged
    #[error("Corrupt local file header: {0}")]
    CorruptLocalHeader(String),

    /// Entry compressed with a method other than stored or deflate
    #[error("Unsupported compression method: {0}")]
    UnsupportedCompression(u16),

    /// A deflate stream failed to inflate
    #[error("Decompression failed: {0}")]
    Decompression(String),

    /// An expected package part is absent
    #[error("Missing part: {0}")]
    MissingPart(String),

    /// The worksheet relationship cannot be resolved
    #[error("Missing relationship: {0}")]
    MissingRelationship(String),

    /// The workbook declares no sheets
    #[error("Workbook contains no worksheets")]
    NoWorksheets,

    /// A required part is not well-formed XML
    #[error("Malformed XML in {part}: {message}")]
    MalformedXml { part: String, message: String },

    /// The background task running a conversion did not complete
    #[error("Conversion task failed: {0}")]
    Runtime(String),
}

impl Error {
    /// Whether the failure came from the environment rather than the input.
    ///
    /// Input errors are deterministic; callers should fall back to offering a
    /// download. Transient failures may instead be reported as "preview not
    /// supported here".
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Runtime(_))
    }

    pub(crate) fn malformed(part: &str, message: impl std::fmt::Display) -> Self {
        Error::MalformedXml {
            part: part.to_string(),
            message: message.to_string(),
        }
    }
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_runtime_is_transient() {
        assert!(Error::Runtime("cancelled".into()).is_transient());
        assert!(!Error::NotAZip.is_transient());
        assert!(!Error::malformed("xl/workbook.xml", "bad").is_transient());
    }

    #[test]
    fn test_malformed_message_names_part() {
        let err = Error::malformed("word/document.xml", "unexpected end");
        assert_eq!(
            err.to_string(),
            "Malformed XML in word/document.xml: unexpected end"
        );
    }
}
