//! Fixed-layout ZIP records.
//!
//! Only the fields needed to locate and inflate entries are decoded. All
//! multi-byte integers are little-endian; every read is bounds-checked and
//! yields `None` when the record would run past the end of the buffer.

/// End of central directory record signature (`PK\x05\x06`)
pub const EOCD_SIGNATURE: u32 = 0x0605_4b50;
/// Central directory file header signature (`PK\x01\x02`)
pub const CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0201_4b50;
/// Local file header signature (`PK\x03\x04`)
pub const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x0403_4b50;

/// Size of the end of central directory record without its comment
pub const EOCD_SIZE: usize = 22;
/// Size of a central directory record without its variable-length fields
pub const CENTRAL_DIRECTORY_HEADER_SIZE: usize = 46;
/// Size of a local file header without its variable-length fields
pub const LOCAL_FILE_HEADER_SIZE: usize = 30;
/// Largest possible archive comment
pub const MAX_COMMENT_SIZE: usize = u16::MAX as usize;

#[inline]
pub(crate) fn read_u16(data: &[u8], offset: usize) -> Option<u16> {
    let end = offset.checked_add(2)?;
    let bytes = data.get(offset..end)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

#[inline]
pub(crate) fn read_u32(data: &[u8], offset: usize) -> Option<u32> {
    let end = offset.checked_add(4)?;
    let bytes = data.get(offset..end)?;
    Some(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// The fields of the end of central directory record used to walk the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfCentralDirectory {
    /// Total number of entries in the central directory
    pub total_entries: u16,
    /// Size of the central directory in bytes
    pub directory_size: u32,
    /// Offset of the first central directory record from the start of the archive
    pub directory_offset: u32,
}

impl EndOfCentralDirectory {
    /// Decode the record starting at `offset`. The signature is assumed checked.
    pub fn parse(data: &[u8], offset: usize) -> Option<Self> {
        Some(Self {
            total_entries: read_u16(data, offset + 10)?,
            directory_size: read_u32(data, offset + 12)?,
            directory_offset: read_u32(data, offset + 16)?,
        })
    }

    /// Offset one past the last central directory byte.
    #[inline]
    pub fn directory_end(&self) -> u64 {
        u64::from(self.directory_offset) + u64::from(self.directory_size)
    }
}

/// One central directory file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CentralDirectoryHeader {
    pub signature: u32,
    pub compression_method: u16,
    pub compressed_size: u32,
    pub uncompressed_size: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
    pub file_comment_length: u16,
    pub local_header_offset: u32,
}

impl CentralDirectoryHeader {
    /// Decode the fixed part of the record starting at `offset`.
    pub fn parse(data: &[u8], offset: usize) -> Option<Self> {
        Some(Self {
            signature: read_u32(data, offset)?,
            compression_method: read_u16(data, offset + 10)?,
            compressed_size: read_u32(data, offset + 20)?,
            uncompressed_size: read_u32(data, offset + 24)?,
            file_name_length: read_u16(data, offset + 28)?,
            extra_field_length: read_u16(data, offset + 30)?,
            file_comment_length: read_u16(data, offset + 32)?,
            local_header_offset: read_u32(data, offset + 42)?,
        })
    }

    /// Full size of this record including name, extra field, and comment.
    #[inline]
    pub fn record_size(&self) -> usize {
        CENTRAL_DIRECTORY_HEADER_SIZE
            + usize::from(self.file_name_length)
            + usize::from(self.extra_field_length)
            + usize::from(self.file_comment_length)
    }
}

/// The local file header fields needed to find an entry's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalFileHeader {
    pub signature: u32,
    pub file_name_length: u16,
    pub extra_field_length: u16,
}

impl LocalFileHeader {
    /// Decode the fixed part of the header starting at `offset`.
    pub fn parse(data: &[u8], offset: usize) -> Option<Self> {
        Some(Self {
            signature: read_u32(data, offset)?,
            file_name_length: read_u16(data, offset + 26)?,
            extra_field_length: read_u16(data, offset + 28)?,
        })
    }

    /// Offset of the payload for a header that starts at `header_offset`.
    #[inline]
    pub fn data_offset(&self, header_offset: usize) -> usize {
        header_offset
            + LOCAL_FILE_HEADER_SIZE
            + usize::from(self.file_name_length)
            + usize::from(self.extra_field_length)
    }
}
