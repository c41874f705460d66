use crate::headers::{read_u32, EndOfCentralDirectory, EOCD_SIGNATURE, EOCD_SIZE, MAX_COMMENT_SIZE};
use crate::{Error, ErrorKind};

/// Find the end of central directory record.
///
/// Scans backward from the last position a record could start. The record is
/// followed by a comment of at most 64KB, so the scan stops after
/// `MAX_COMMENT_SIZE + EOCD_SIZE` bytes from the end of the buffer.
///
/// Returns the record's offset together with its decoded fields.
pub fn find_end_of_central_directory(data: &[u8]) -> Result<(usize, EndOfCentralDirectory), Error> {
    if data.len() < EOCD_SIZE {
        return Err(ErrorKind::NotAZip.into());
    }

    let last = data.len() - EOCD_SIZE;
    let first = last.saturating_sub(MAX_COMMENT_SIZE);

    for position in (first..=last).rev() {
        if read_u32(data, position) == Some(EOCD_SIGNATURE) {
            let record = EndOfCentralDirectory::parse(data, position)
                .ok_or_else(|| Error::from(ErrorKind::NotAZip))?;
            return Ok((position, record));
        }
    }

    Err(ErrorKind::NotAZip.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_eocd(comment: &[u8]) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&EOCD_SIGNATURE.to_le_bytes());
        data.extend_from_slice(&[0u8; 16]);
        data.extend_from_slice(&(comment.len() as u16).to_le_bytes());
        data.extend_from_slice(comment);
        data
    }

    #[test]
    fn test_finds_record_at_end() {
        let data = empty_eocd(b"");
        let (offset, record) = find_end_of_central_directory(&data).unwrap();
        assert_eq!(offset, 0);
        assert_eq!(record.total_entries, 0);
    }

    #[test]
    fn test_finds_record_before_comment() {
        let mut data = vec![0xAA; 10];
        data.extend(empty_eocd(b"archive comment"));
        let (offset, _) = find_end_of_central_directory(&data).unwrap();
        assert_eq!(offset, 10);
    }

    #[test]
    fn test_short_buffer_is_not_a_zip() {
        let err = find_end_of_central_directory(b"PK\x05\x06").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::NotAZip));
    }

    #[test]
    fn test_signature_outside_comment_window_is_ignored() {
        let mut data = empty_eocd(b"");
        data.extend(vec![0u8; MAX_COMMENT_SIZE + 1]);
        let err = find_end_of_central_directory(&data).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::NotAZip));
    }
}
