use thiserror::Error as ThisError;

/// The reason a ZIP operation failed.
///
/// Every variant describes malformed or unsupported input; reading is a pure
/// function of the archive bytes, so retrying cannot change the outcome.
#[derive(ThisError, Debug)]
pub enum ErrorKind {
    /// No end-of-central-directory record in the trailing region of the buffer
    #[error("not a ZIP archive: end of central directory record not found")]
    NotAZip,

    /// A central directory record is missing its signature or runs out of bounds
    #[error("corrupt central directory: {0}")]
    CorruptCentralDirectory(String),

    /// A local file header is missing its signature or runs out of bounds
    #[error("corrupt local file header: {0}")]
    CorruptLocalHeader(String),

    /// Compression method other than stored (0) or deflate (8)
    #[error("unsupported compression method: {0}")]
    UnsupportedCompression(u16),

    /// The deflate stream of an entry could not be inflated
    #[error("failed to inflate {name}: {source}")]
    Decompression {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Error returned by all fallible archive operations.
#[derive(ThisError, Debug)]
#[error(transparent)]
pub struct Error(#[from] ErrorKind);

impl Error {
    /// The kind of failure.
    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Consume the error and return its kind.
    #[inline]
    pub fn into_kind(self) -> ErrorKind {
        self.0
    }
}
