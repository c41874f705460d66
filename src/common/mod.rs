//! Common types and utilities shared by the word-processing and spreadsheet converters.

// Submodule declarations
pub mod detection;
pub mod error;
pub mod xml;

// Re-exports for convenience
pub use detection::{PackageKind, detect_package_kind, detect_package_kind_from_bytes};
pub use error::{Error, Result};
