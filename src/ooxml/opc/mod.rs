/// Open Packaging Conventions (OPC) support.
///
/// The converters only need the pieces of OPC that lead from a workbook to
/// its worksheet: well-known part names, relationship parsing, and resolving
/// a relationship target to a ZIP entry name.
pub mod constants;
pub mod packuri;
pub mod rel;

// Re-export commonly used types
pub use packuri::PackURI;
pub use rel::{Relationship, Relationships};
