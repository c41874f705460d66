//! Office Open XML (OOXML) format implementation.
//!
//! Converts the two OOXML package kinds the preview supports: Word (.docx)
//! and Excel (.xlsx). Both read parts out of a [`soapberry_zip`] archive,
//! parse them with a streaming XML reader, and build a small model that the
//! [`crate::html`] writer turns into a fragment.
//!
//! # Architecture
//!
//! 1. **OPC Layer** (`opc`): well-known part names, relationships, and pack URIs
//! 2. **Format-Specific Modules**:
//!    - `docx`: Word documents
//!    - `xlsx`: Excel spreadsheets (first worksheet only)
//!
//! # Example: Working with Word Documents
//!
//! ```rust,no_run
//! use longan::ooxml::docx::Document;
//!
//! let bytes = std::fs::read("document.docx")?;
//! let doc = Document::from_bytes(&bytes)?;
//! println!("Document contains {} paragraphs", doc.paragraph_count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
pub mod docx;
pub mod opc;
pub mod xlsx;

// Re-export commonly used types from OPC layer
pub use opc::{PackURI, Relationship, Relationships};
