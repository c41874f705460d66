//! Package kind detection.
//!
//! Decides which converter applies to a download, either from its name and
//! content type before it is opened, or from the parts inside the archive.

pub mod functions;
pub mod types;

pub use functions::{detect_package_kind, detect_package_kind_from_bytes};
pub use types::PackageKind;
