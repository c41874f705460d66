//! In-memory ZIP archive reader for Office document packages.
//!
//! This crate reads the ZIP containers that carry OOXML (.docx, .xlsx)
//! packages. It supports the two compression methods those packages use,
//! stored and raw deflate, and works entirely on a caller-supplied buffer.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use soapberry_zip::office::ArchiveReader;
//!
//! let data = std::fs::read("document.docx")?;
//! let archive = ArchiveReader::new(&data)?;
//! let content = archive.read("word/document.xml")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![forbid(unsafe_code)]

mod archive;
mod errors;
pub mod headers;
mod locator;
pub mod office;

pub use archive::{ArchiveOptions, CompressionMethod, Entry};
pub use errors::{Error, ErrorKind};
pub use locator::find_end_of_central_directory;
