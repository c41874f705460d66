//! Central directory indexing.
//!
//! The index is built eagerly from the central directory and never mutated
//! afterwards. Lookups are exact: no path-separator or case normalization.

use std::collections::HashMap;

use crate::headers::{
    CentralDirectoryHeader, CENTRAL_DIRECTORY_HEADER_SIZE, CENTRAL_DIRECTORY_SIGNATURE,
};
use crate::locator::find_end_of_central_directory;
use crate::{Error, ErrorKind};

/// Compression method of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompressionMethod {
    /// Method 0, no compression
    Stored,
    /// Method 8, raw deflate
    Deflate,
    /// Any other method code
    Other(u16),
}

impl CompressionMethod {
    /// Map a method code from a ZIP header.
    #[inline]
    pub fn from_id(id: u16) -> Self {
        match id {
            0 => Self::Stored,
            8 => Self::Deflate,
            other => Self::Other(other),
        }
    }

    /// The method code as stored in ZIP headers.
    #[inline]
    pub fn as_id(self) -> u16 {
        match self {
            Self::Stored => 0,
            Self::Deflate => 8,
            Self::Other(id) => id,
        }
    }
}

/// One named record of an archive, as listed in the central directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    compression_method: CompressionMethod,
    compressed_size: u32,
    uncompressed_size: u32,
    local_header_offset: u32,
}

impl Entry {
    /// Entry path, unique within its archive.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn compression_method(&self) -> CompressionMethod {
        self.compression_method
    }

    #[inline]
    pub fn compressed_size(&self) -> u32 {
        self.compressed_size
    }

    #[inline]
    pub fn uncompressed_size(&self) -> u32 {
        self.uncompressed_size
    }

    /// Offset of the entry's local file header from the start of the archive.
    #[inline]
    pub fn local_header_offset(&self) -> u32 {
        self.local_header_offset
    }
}

/// Options controlling how strictly the central directory is validated.
///
/// # Example
///
/// ```rust
/// use soapberry_zip::office::ArchiveOptions;
///
/// let options = ArchiveOptions::new().with_strict_directory_end(false);
/// assert!(!options.strict_directory_end);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveOptions {
    /// Require the central directory walk to end exactly where the end of
    /// central directory record says it does.
    pub strict_directory_end: bool,
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            strict_directory_end: true,
        }
    }
}

impl ArchiveOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a walk ending away from the recorded directory end is an error.
    ///
    /// When disabled, the mismatch is only logged.
    #[inline]
    pub fn with_strict_directory_end(mut self, strict: bool) -> Self {
        self.strict_directory_end = strict;
        self
    }
}

fn corrupt_directory(message: String) -> Error {
    Error::from(ErrorKind::CorruptCentralDirectory(message))
}

/// Walk the central directory and build the name-keyed entry index.
///
/// Later records with a duplicate name replace earlier ones.
pub(crate) fn build_index(
    data: &[u8],
    options: &ArchiveOptions,
) -> Result<HashMap<String, Entry>, Error> {
    let (_, eocd) = find_end_of_central_directory(data)?;

    if eocd.directory_end() > data.len() as u64 {
        return Err(corrupt_directory(format!(
            "directory at offset {} with size {} exceeds archive length {}",
            eocd.directory_offset,
            eocd.directory_size,
            data.len()
        )));
    }

    let mut index = HashMap::with_capacity(usize::from(eocd.total_entries));
    let mut cursor = eocd.directory_offset as usize;

    for position in 0..eocd.total_entries {
        let header = CentralDirectoryHeader::parse(data, cursor).ok_or_else(|| {
            corrupt_directory(format!("record {} at offset {} is truncated", position, cursor))
        })?;

        if header.signature != CENTRAL_DIRECTORY_SIGNATURE {
            return Err(corrupt_directory(format!(
                "record {} at offset {} has signature {:#010x}",
                position, cursor, header.signature
            )));
        }

        let name_start = cursor + CENTRAL_DIRECTORY_HEADER_SIZE;
        let name_bytes = data
            .get(name_start..name_start + usize::from(header.file_name_length))
            .ok_or_else(|| {
                corrupt_directory(format!("name of record {} runs past the archive", position))
            })?;
        let name = String::from_utf8_lossy(name_bytes).into_owned();

        log::trace!(
            "indexed {} (method {}, {} -> {} bytes)",
            name,
            header.compression_method,
            header.compressed_size,
            header.uncompressed_size
        );

        index.insert(
            name.clone(),
            Entry {
                name,
                compression_method: CompressionMethod::from_id(header.compression_method),
                compressed_size: header.compressed_size,
                uncompressed_size: header.uncompressed_size,
                local_header_offset: header.local_header_offset,
            },
        );

        cursor += header.record_size();
    }

    if cursor as u64 != eocd.directory_end() {
        if options.strict_directory_end {
            return Err(corrupt_directory(format!(
                "walk ended at offset {} but directory ends at {}",
                cursor,
                eocd.directory_end()
            )));
        }
        log::warn!(
            "central directory walk ended at offset {} instead of {}",
            cursor,
            eocd.directory_end()
        );
    }

    log::debug!("indexed {} archive entries", index.len());
    Ok(index)
}
