//! Package kind detection from archive contents.

use super::types::PackageKind;
use crate::common::Result;
use crate::ooxml::opc::constants::part_name;
use soapberry_zip::office::ArchiveReader;

/// Detect the package kind from the main parts an opened archive contains.
///
/// Returns `None` when neither a main document nor a workbook part is present.
pub fn detect_package_kind(archive: &ArchiveReader<'_>) -> Option<PackageKind> {
    if archive.contains(part_name::WORD_DOCUMENT) {
        Some(PackageKind::WordProcessing)
    } else if archive.contains(part_name::WORKBOOK) {
        Some(PackageKind::Spreadsheet)
    } else {
        None
    }
}

/// Open `bytes` as a ZIP package and detect its kind.
///
/// Fails with the container reader's errors when `bytes` is not a readable archive.
pub fn detect_package_kind_from_bytes(bytes: &[u8]) -> Result<Option<PackageKind>> {
    let archive = ArchiveReader::new(bytes)?;
    let kind = detect_package_kind(&archive);
    log::debug!("detected package kind {:?} from {} entries", kind, archive.len());
    Ok(kind)
}
