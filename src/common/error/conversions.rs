//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from the
//! container reader's error type to the unified Error type.

use super::types::Error;
use soapberry_zip::ErrorKind;

impl From<soapberry_zip::Error> for Error {
    fn from(err: soapberry_zip::Error) -> Self {
        match err.into_kind() {
            ErrorKind::NotAZip => Error::NotAZip,
            ErrorKind::CorruptCentralDirectory(s) => Error::CorruptCentralDirectory(s),
            ErrorKind::CorruptLocalHeader(s) => Error::CorruptLocalHeader(s),
            ErrorKind::UnsupportedCompression(method) => Error::UnsupportedCompression(method),
            ErrorKind::Decompression { name, source } => {
                Error::Decompression(format!("{}: {}", name, source))
            },
        }
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Runtime(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_kinds_map_one_to_one() {
        let err: Error = soapberry_zip::Error::from(ErrorKind::NotAZip).into();
        assert!(matches!(err, Error::NotAZip));

        let err: Error = soapberry_zip::Error::from(ErrorKind::UnsupportedCompression(14)).into();
        assert!(matches!(err, Error::UnsupportedCompression(14)));

        let err: Error =
            soapberry_zip::Error::from(ErrorKind::CorruptLocalHeader("a.xml".into())).into();
        assert!(matches!(err, Error::CorruptLocalHeader(ref s) if s == "a.xml"));
    }
}
