//! High-level ZIP archive API for Office document packages.
//!
//! # Reading Archives
//!
//! ```rust,no_run
//! use soapberry_zip::office::ArchiveReader;
//!
//! let data = std::fs::read("document.docx")?;
//! let archive = ArchiveReader::new(&data)?;
//!
//! if let Some(content) = archive.read_string("word/document.xml")? {
//!     println!("{} bytes of document XML", content.len());
//! }
//!
//! for name in archive.file_names() {
//!     println!("{}", name);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashMap;
use std::io::Read;

use flate2::read::DeflateDecoder;

use crate::archive::build_index;
use crate::headers::{LocalFileHeader, LOCAL_FILE_HEADER_SIGNATURE};
use crate::{CompressionMethod, Entry, Error, ErrorKind};

pub use crate::archive::ArchiveOptions;

// Upper bound for pre-allocating inflate output from an untrusted size field.
const MAX_PREALLOCATION: usize = 64 * 1024 * 1024;

/// ZIP archive reader over an in-memory buffer.
///
/// The central directory is parsed once, in [`ArchiveReader::new`]; entry
/// payloads are located and decompressed only when read. The reader is
/// immutable after construction, so it can be shared across threads.
pub struct ArchiveReader<'data> {
    data: &'data [u8],
    index: HashMap<String, Entry>,
}

impl<'data> ArchiveReader<'data> {
    /// Parse the central directory of `data` with default options.
    ///
    /// Fails with [`ErrorKind::NotAZip`] when no end of central directory
    /// record is found, and with [`ErrorKind::CorruptCentralDirectory`] when
    /// the directory cannot be walked.
    pub fn new(data: &'data [u8]) -> Result<Self, Error> {
        Self::with_options(data, ArchiveOptions::default())
    }

    /// Parse the central directory of `data`.
    pub fn with_options(data: &'data [u8], options: ArchiveOptions) -> Result<Self, Error> {
        let index = build_index(data, &options)?;
        Ok(Self { data, index })
    }

    /// Number of entries in the archive.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Check if an entry exists. The name must match exactly.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get the directory metadata for an entry.
    #[inline]
    pub fn entry(&self, name: &str) -> Option<&Entry> {
        self.index.get(name)
    }

    /// Iterate over all entry names, in no particular order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(|s| s.as_str())
    }

    /// Read and decompress an entry.
    ///
    /// Returns `Ok(None)` when the archive has no entry with this name. The
    /// returned bytes never alias the archive buffer.
    pub fn read(&self, name: &str) -> Result<Option<Vec<u8>>, Error> {
        match self.index.get(name) {
            Some(entry) => self.read_entry(entry).map(Some),
            None => Ok(None),
        }
    }

    /// Read an entry and decode it as UTF-8.
    ///
    /// Invalid sequences are replaced with U+FFFD rather than failing.
    pub fn read_string(&self, name: &str) -> Result<Option<String>, Error> {
        Ok(self.read(name)?.map(|bytes| match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
        }))
    }

    /// Read and decompress multiple entries in parallel.
    ///
    /// Returns a vector of (name, result) pairs in the same order as input.
    ///
    /// # Example
    /// ```rust,no_run
    /// use soapberry_zip::office::ArchiveReader;
    ///
    /// let data = std::fs::read("workbook.xlsx")?;
    /// let archive = ArchiveReader::new(&data)?;
    ///
    /// let parts = ["xl/workbook.xml", "xl/sharedStrings.xml"];
    /// for (name, result) in archive.read_many_parallel(&parts) {
    ///     match result {
    ///         Ok(Some(bytes)) => println!("{}: {} bytes", name, bytes.len()),
    ///         Ok(None) => println!("{}: absent", name),
    ///         Err(e) => eprintln!("{}: error: {}", name, e),
    ///     }
    /// }
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_many_parallel<'a, S: AsRef<str> + Sync>(
        &self,
        names: &'a [S],
    ) -> Vec<(&'a S, Result<Option<Vec<u8>>, Error>)> {
        use rayon::prelude::*;

        names
            .par_iter()
            .map(|name| (name, self.read(name.as_ref())))
            .collect()
    }

    fn read_entry(&self, entry: &Entry) -> Result<Vec<u8>, Error> {
        let header_offset = entry.local_header_offset() as usize;
        let header = LocalFileHeader::parse(self.data, header_offset).ok_or_else(|| {
            Error::from(ErrorKind::CorruptLocalHeader(format!(
                "header of {} at offset {} is truncated",
                entry.name(),
                header_offset
            )))
        })?;

        if header.signature != LOCAL_FILE_HEADER_SIGNATURE {
            return Err(ErrorKind::CorruptLocalHeader(format!(
                "header of {} at offset {} has signature {:#010x}",
                entry.name(),
                header_offset,
                header.signature
            ))
            .into());
        }

        let start = header.data_offset(header_offset);
        let end = start + entry.compressed_size() as usize;
        let payload = self.data.get(start..end).ok_or_else(|| {
            Error::from(ErrorKind::CorruptLocalHeader(format!(
                "payload of {} ({} bytes at offset {}) runs past the archive",
                entry.name(),
                entry.compressed_size(),
                start
            )))
        })?;

        match entry.compression_method() {
            CompressionMethod::Stored => Ok(payload.to_vec()),
            CompressionMethod::Deflate => inflate(entry, payload),
            CompressionMethod::Other(id) => Err(ErrorKind::UnsupportedCompression(id).into()),
        }
    }
}

fn inflate(entry: &Entry, payload: &[u8]) -> Result<Vec<u8>, Error> {
    let expected = entry.uncompressed_size() as usize;
    let mut decompressed = Vec::with_capacity(expected.min(MAX_PREALLOCATION));

    DeflateDecoder::new(payload)
        .read_to_end(&mut decompressed)
        .map_err(|source| {
            Error::from(ErrorKind::Decompression {
                name: entry.name().to_string(),
                source,
            })
        })?;

    if decompressed.len() != expected {
        log::warn!(
            "{} inflated to {} bytes, directory declares {}",
            entry.name(),
            decompressed.len(),
            expected
        );
    }

    Ok(decompressed)
}

impl std::fmt::Debug for ArchiveReader<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArchiveReader")
            .field("file_count", &self.index.len())
            .finish()
    }
}

// Ensure ArchiveReader is Send + Sync for parallel iteration
const _: () = {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ArchiveReader<'static>>();
};
